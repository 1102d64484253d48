//! Message model as seen by the layout.
//!
//! Messages are owned by the app's message store; calculators only borrow
//! them for the duration of a layout call.

use chatkit_graphics::{Color, Font, Size};

/// The participant a message was sent by.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Sender {
    pub id: String,
    pub display_name: String,
}

impl Sender {
    pub fn new(id: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            display_name: display_name.into(),
        }
    }
}

/// Native geometry of an image that is already resident in memory.
#[derive(Clone, Debug, PartialEq)]
pub struct ImageInfo {
    pub size: Size,
    /// Where the image came from. Never fetched by this crate.
    pub url: Option<String>,
}

impl ImageInfo {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            size: Size::new(width, height),
            url: None,
        }
    }

    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }
}

/// Media shown by an attachment message.
///
/// The placeholder is always present and must have a non-zero size; the
/// resolved `image` replaces it once loaded.
#[derive(Clone, Debug, PartialEq)]
pub struct MediaItem {
    pub placeholder_image: ImageInfo,
    pub image: Option<ImageInfo>,
}

impl MediaItem {
    pub fn new(placeholder_image: ImageInfo) -> Self {
        Self {
            placeholder_image,
            image: None,
        }
    }

    pub fn with_image(mut self, image: ImageInfo) -> Self {
        self.image = Some(image);
        self
    }

    /// The image a cell should display right now.
    pub fn displayed_image(&self) -> &ImageInfo {
        self.image.as_ref().unwrap_or(&self.placeholder_image)
    }
}

/// Text that carries its own optional styling.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StyledText {
    pub text: String,
    pub font: Option<Font>,
    pub color: Option<Color>,
}

impl StyledText {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            font: None,
            color: None,
        }
    }

    pub fn with_font(mut self, font: Font) -> Self {
        self.font = Some(font);
        self
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct LocationItem {
    pub latitude: f64,
    pub longitude: f64,
    pub size: Size,
}

#[derive(Clone, Debug, PartialEq)]
pub struct AudioItem {
    pub url: String,
    pub duration_secs: f32,
    pub size: Size,
}

/// What a message contains. Calculators are chosen by kind.
#[derive(Clone, Debug, PartialEq)]
pub enum MessageKind {
    Text(String),
    Emoji(String),
    Location(LocationItem),
    Audio(AudioItem),
    /// A media item with a caption laid out underneath it.
    Attachment { caption: String, item: MediaItem },
    /// A centred, non-conversational status row.
    System(StyledText),
    Custom,
}

impl MessageKind {
    pub fn name(&self) -> &'static str {
        match self {
            MessageKind::Text(_) => "text",
            MessageKind::Emoji(_) => "emoji",
            MessageKind::Location(_) => "location",
            MessageKind::Audio(_) => "audio",
            MessageKind::Attachment { .. } => "attachment",
            MessageKind::System(_) => "system",
            MessageKind::Custom => "custom",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Message {
    pub id: String,
    pub sender: Sender,
    pub sent_at: String,
    pub kind: MessageKind,
}

impl Message {
    pub fn new(id: impl Into<String>, sender: Sender, kind: MessageKind) -> Self {
        Self {
            id: id.into(),
            sender,
            sent_at: String::new(),
            kind,
        }
    }

    pub fn attachment(
        id: impl Into<String>,
        sender: Sender,
        caption: impl Into<String>,
        item: MediaItem,
    ) -> Self {
        Self::new(
            id,
            sender,
            MessageKind::Attachment {
                caption: caption.into(),
                item,
            },
        )
    }

    pub fn system(id: impl Into<String>, sender: Sender, text: StyledText) -> Self {
        Self::new(id, sender, MessageKind::System(text))
    }

    pub fn with_sent_at(mut self, sent_at: impl Into<String>) -> Self {
        self.sent_at = sent_at.into();
        self
    }
}
