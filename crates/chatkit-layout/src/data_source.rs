//! Contracts the app implements to feed messages and per-message styling
//! into the layout.

use chatkit_graphics::{Color, Font};
use smallvec::SmallVec;

use crate::index_path::IndexPath;
use crate::message::{Message, Sender};

/// Supplies messages to the layout.
///
/// By default every message lives in its own section, so a conversation of
/// `n` messages has `n` sections of one item each.
pub trait MessagesDataSource {
    /// The participant using the app. Their messages are laid out as outgoing.
    fn current_sender(&self) -> &Sender;

    fn number_of_sections(&self) -> usize;

    fn number_of_items(&self, section: usize) -> usize {
        let _ = section;
        1
    }

    /// Returns the message shown at `index_path`, if any.
    fn message_for_item(&self, index_path: IndexPath) -> Option<&Message>;

    fn is_from_current_sender(&self, message: &Message) -> bool {
        message.sender.id == self.current_sender().id
    }
}

/// Kinds of content a message label can detect and style.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum DetectorType {
    Address,
    Date,
    PhoneNumber,
    Url,
    TransitInformation,
    Mention,
    Hashtag,
    /// A custom pattern, stored as its source text.
    Custom(String),
}

/// Most labels enable a handful of detectors at most.
pub type DetectorSet = SmallVec<[DetectorType; 4]>;

/// Styling applied to detected ranges of a label.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TextAttributes {
    pub foreground: Option<Color>,
    pub font: Option<Font>,
    pub underline: bool,
}

/// Per-message styling choices, read while configuring cells.
pub trait MessagesDisplayDelegate {
    fn enabled_detectors(&self, message: &Message, index_path: IndexPath) -> DetectorSet {
        let _ = (message, index_path);
        DetectorSet::new()
    }

    fn detector_attributes(
        &self,
        detector: &DetectorType,
        message: &Message,
        index_path: IndexPath,
    ) -> TextAttributes {
        let _ = (detector, message, index_path);
        TextAttributes::default()
    }

    fn text_color(&self, message: &Message, index_path: IndexPath) -> Color {
        let _ = (message, index_path);
        Color::BLACK
    }
}
