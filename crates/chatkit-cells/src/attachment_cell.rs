use chatkit_graphics::Size;
use chatkit_layout::{
    AttachmentSizeCalculator, ImageInfo, IndexPath, LayoutAttributes, LayoutError, Message,
    MessageKind, MessagesDisplayDelegate, MessagesLayoutAttributes,
};

use crate::caption_label::CaptionLabel;

/// Content of an attachment cell: the media on top, the caption below.
///
/// The view layer calls [`apply`](Self::apply) with the attributes from the
/// layout pass, then [`configure`](Self::configure) with the message.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AttachmentCellModel {
    pub caption: CaptionLabel,
    pub image: Option<ImageInfo>,
    /// Height-to-width multiplier for the image view's aspect constraint.
    pub image_aspect_ratio: Option<f32>,
}

impl AttachmentCellModel {
    /// The image view never gets narrower than the calculator's floor.
    pub const MIN_IMAGE_WIDTH: f32 = AttachmentSizeCalculator::MIN_IMAGE_WIDTH;

    pub fn new() -> Self {
        Self::default()
    }

    /// Takes the caption insets and font resolved by the size calculator.
    /// Attributes of any other type are ignored.
    pub fn apply(&mut self, attributes: &dyn LayoutAttributes) {
        let Some(attributes) = attributes
            .as_any()
            .downcast_ref::<MessagesLayoutAttributes>()
        else {
            return;
        };
        self.caption.insets = attributes.message_label_insets;
        self.caption.font = attributes.message_label_font.clone();
    }

    pub fn configure(
        &mut self,
        message: &Message,
        index_path: IndexPath,
        display_delegate: Option<&dyn MessagesDisplayDelegate>,
    ) -> Result<(), LayoutError> {
        let Some(display_delegate) = display_delegate else {
            log::warn!("attachment cell at {index_path} configured without a display delegate");
            return Err(LayoutError::MissingDisplayDelegate);
        };

        let MessageKind::Attachment { caption, item } = &message.kind else {
            return Ok(());
        };

        let enabled_detectors = display_delegate.enabled_detectors(message, index_path);
        self.caption.detector_attributes = enabled_detectors
            .iter()
            .map(|detector| {
                let attributes =
                    display_delegate.detector_attributes(detector, message, index_path);
                (detector.clone(), attributes)
            })
            .collect();
        self.caption.enabled_detectors = enabled_detectors;
        self.caption.text_color = display_delegate.text_color(message, index_path);
        self.caption.text = Some(caption.clone());

        let image = item.displayed_image();
        self.image_aspect_ratio = image.size.height_ratio();
        self.image = Some(image.clone());
        Ok(())
    }

    /// Image view size once the cell is laid out at `width`.
    pub fn image_size(&self, width: f32) -> Option<Size> {
        let ratio = self.image_aspect_ratio?;
        let width = width.max(Self::MIN_IMAGE_WIDTH);
        Some(Size::new(width, width * ratio))
    }

    pub fn prepare_for_reuse(&mut self) {
        self.image = None;
        self.image_aspect_ratio = None;
        self.caption.clear();
    }
}
