use crate::data_source::MessagesDataSource;
use crate::index_path::IndexPath;
use crate::message::{Message, Sender};

/// In-memory data source holding one message per section.
#[derive(Clone, Debug)]
pub struct Conversation {
    current_sender: Sender,
    messages: Vec<Message>,
}

impl Conversation {
    pub fn new(current_sender: Sender) -> Self {
        Self {
            current_sender,
            messages: Vec::new(),
        }
    }

    pub fn with_messages(current_sender: Sender, messages: Vec<Message>) -> Self {
        Self {
            current_sender,
            messages,
        }
    }

    pub fn push(&mut self, message: Message) -> IndexPath {
        self.messages.push(message);
        IndexPath::new(self.messages.len() - 1, 0)
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }
}

impl MessagesDataSource for Conversation {
    fn current_sender(&self) -> &Sender {
        &self.current_sender
    }

    fn number_of_sections(&self) -> usize {
        self.messages.len()
    }

    fn message_for_item(&self, index_path: IndexPath) -> Option<&Message> {
        if index_path.item != 0 {
            return None;
        }
        self.messages.get(index_path.section)
    }
}
