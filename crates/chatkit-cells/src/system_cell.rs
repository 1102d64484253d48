use chatkit_graphics::{Color, Size};
use chatkit_layout::{LayoutError, Message, MessageKind, StyledText};

use crate::caption_label::TextAlignment;

/// Content of a status row: one centred grey label filling the cell.
#[derive(Clone, Debug, PartialEq)]
pub struct SystemCellModel {
    pub text: Option<StyledText>,
    pub text_color: Color,
    pub alignment: TextAlignment,
    /// `None` means unlimited.
    pub max_lines: Option<usize>,
    pub label_frame: Size,
}

impl Default for SystemCellModel {
    fn default() -> Self {
        Self {
            text: None,
            text_color: Color::GRAY,
            alignment: TextAlignment::Center,
            max_lines: None,
            label_frame: Size::ZERO,
        }
    }
}

impl SystemCellModel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn configure(&mut self, message: &Message) -> Result<(), LayoutError> {
        let MessageKind::System(text) = &message.kind else {
            let err = LayoutError::unhandled_kind("SystemCellModel", "system", &message.kind);
            log::warn!("{err}");
            return Err(err);
        };
        self.text = Some(text.clone());
        Ok(())
    }

    /// The label always fills the cell's content bounds.
    pub fn layout(&mut self, bounds: Size) {
        self.label_frame = bounds;
    }

    /// Colour the label draws with: the styled text's own colour wins.
    pub fn effective_text_color(&self) -> Color {
        self.text
            .as_ref()
            .and_then(|text| text.color)
            .unwrap_or(self.text_color)
    }

    pub fn prepare_for_reuse(&mut self) {
        self.text = None;
    }
}
