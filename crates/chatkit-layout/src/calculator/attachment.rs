use chatkit_graphics::{EdgeInsets, Font, Size};

use super::{BaseMetrics, SizeCalculator};
use crate::attributes::{LayoutAttributes, MessagesLayoutAttributes};
use crate::error::LayoutError;
use crate::layout::MessagesLayout;
use crate::message::{Message, MessageKind};

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct AttachmentCalculatorConfig {
    pub metrics: BaseMetrics,
    pub incoming_label_insets: EdgeInsets,
    pub outgoing_label_insets: EdgeInsets,
    pub label_font: Font,
    /// Narrowest width an attachment image is shown at.
    pub min_image_width: f32,
}

impl Default for AttachmentCalculatorConfig {
    fn default() -> Self {
        Self {
            metrics: BaseMetrics::default(),
            incoming_label_insets: EdgeInsets::new(7.0, 18.0, 9.0, 14.0),
            outgoing_label_insets: EdgeInsets::new(7.0, 14.0, 9.0, 18.0),
            label_font: Font::body(),
            min_image_width: AttachmentSizeCalculator::MIN_IMAGE_WIDTH,
        }
    }
}

impl AttachmentCalculatorConfig {
    pub fn with_metrics(mut self, metrics: BaseMetrics) -> Self {
        self.metrics = metrics;
        self
    }

    pub fn with_label_insets(mut self, incoming: EdgeInsets, outgoing: EdgeInsets) -> Self {
        self.incoming_label_insets = incoming;
        self.outgoing_label_insets = outgoing;
        self
    }

    pub fn with_label_font(mut self, label_font: Font) -> Self {
        self.label_font = label_font;
        self
    }
}

/// Sizes attachment messages: a media item with its caption laid out
/// underneath, both spanning the full container width.
#[derive(Clone, Debug, Default)]
pub struct AttachmentSizeCalculator {
    config: AttachmentCalculatorConfig,
}

impl AttachmentSizeCalculator {
    pub const MIN_IMAGE_WIDTH: f32 = 250.0;

    const NAME: &'static str = "AttachmentSizeCalculator";

    pub fn new(config: AttachmentCalculatorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AttachmentCalculatorConfig {
        &self.config
    }

    /// Caption insets for the message's sender direction.
    pub fn message_label_insets(
        &self,
        layout: &MessagesLayout<'_>,
        message: &Message,
    ) -> EdgeInsets {
        if layout.is_from_current_sender(message) {
            self.config.outgoing_label_insets
        } else {
            self.config.incoming_label_insets
        }
    }

    /// Fitting size of a caption at `max_width` with unbounded height, as
    /// reported by the measurer that also backs the rendering label.
    pub fn label_size(&self, layout: &MessagesLayout<'_>, text: &str, max_width: f32) -> Size {
        layout
            .text_measurer()
            .measure(text, &self.config.label_font, max_width)
            .size()
    }
}

impl SizeCalculator for AttachmentSizeCalculator {
    fn metrics(&self) -> &BaseMetrics {
        &self.config.metrics
    }

    fn message_container_max_width(&self, layout: &MessagesLayout<'_>, message: &Message) -> f32 {
        let max_width = self.metrics().container_max_width(layout, message);
        let label_insets = self.message_label_insets(layout, message);
        (max_width - label_insets.horizontal()).max(0.0)
    }

    fn message_container_size(
        &self,
        layout: &MessagesLayout<'_>,
        message: &Message,
    ) -> Result<Size, LayoutError> {
        let MessageKind::Attachment { caption, item } = &message.kind else {
            let err = LayoutError::unhandled_kind(Self::NAME, "attachment", &message.kind);
            log::warn!("{err}");
            return Err(err);
        };

        let max_width = self.message_container_max_width(layout, message);
        let label_insets = self.message_label_insets(layout, message);

        let placeholder = item.placeholder_image.size;
        let image_size = placeholder
            .aspect_fit(self.config.min_image_width, max_width)
            .ok_or(LayoutError::InvalidPlaceholder {
                width: placeholder.width,
                height: placeholder.height,
            })?;

        let caption_width = (image_size.width - label_insets.horizontal()).max(0.0);
        let mut label_size = self.label_size(layout, caption, caption_width);
        // Padding is fixed, so an empty caption still gets it.
        label_size.height += label_insets.vertical();

        let size = Size::new(image_size.width, label_size.height + image_size.height);
        log::trace!("attachment {} container size: {:?}", message.id, size);
        Ok(size)
    }

    fn configure(
        &self,
        layout: &MessagesLayout<'_>,
        attributes: &mut dyn LayoutAttributes,
    ) -> Result<(), LayoutError> {
        self.metrics().configure(layout, attributes)?;
        let Some(attributes) = attributes
            .as_any_mut()
            .downcast_mut::<MessagesLayoutAttributes>()
        else {
            return Ok(());
        };

        let message = layout.message_for_item(attributes.index_path)?;
        attributes.message_label_insets = self.message_label_insets(layout, message);
        attributes.message_label_font = Some(self.config.label_font.clone());
        Ok(())
    }
}
