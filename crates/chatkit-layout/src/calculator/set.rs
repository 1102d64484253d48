use chatkit_graphics::Size;

use super::{AttachmentSizeCalculator, SizeCalculator, SystemSizeCalculator};
use crate::attributes::{LayoutAttributes, MessagesLayoutAttributes};
use crate::error::LayoutError;
use crate::index_path::IndexPath;
use crate::layout::MessagesLayout;
use crate::message::MessageKind;

/// Picks the calculator for a message by its kind.
///
/// Kinds without a dedicated calculator go to the optional fallback; with
/// no fallback they size to `Size::ZERO` and the layout skips them.
#[derive(Default)]
pub struct CalculatorSet {
    attachment: AttachmentSizeCalculator,
    system: SystemSizeCalculator,
    fallback: Option<Box<dyn SizeCalculator>>,
}

impl CalculatorSet {
    pub fn new(attachment: AttachmentSizeCalculator, system: SystemSizeCalculator) -> Self {
        Self {
            attachment,
            system,
            fallback: None,
        }
    }

    pub fn with_fallback(mut self, fallback: impl SizeCalculator + 'static) -> Self {
        self.fallback = Some(Box::new(fallback));
        self
    }

    pub fn attachment(&self) -> &AttachmentSizeCalculator {
        &self.attachment
    }

    pub fn system(&self) -> &SystemSizeCalculator {
        &self.system
    }

    pub fn calculator_for(&self, kind: &MessageKind) -> Option<&dyn SizeCalculator> {
        match kind {
            MessageKind::Attachment { .. } => Some(&self.attachment),
            MessageKind::System(_) | MessageKind::Custom => Some(&self.system),
            _ => self.fallback.as_deref(),
        }
    }

    pub fn size_for_item(
        &self,
        layout: &MessagesLayout<'_>,
        index_path: IndexPath,
    ) -> Result<Size, LayoutError> {
        let message = layout.message_for_item(index_path)?;
        if matches!(message.kind, MessageKind::Custom) {
            // Custom rows are a bare container spanning the row.
            return self.system.message_container_size(layout, message);
        }

        match self.calculator_for(&message.kind) {
            Some(calculator) => calculator.size_for_item(layout, index_path),
            None => {
                log::debug!(
                    "no calculator for {} message at {index_path}",
                    message.kind.name()
                );
                Ok(Size::ZERO)
            }
        }
    }

    /// Attributes other than `MessagesLayoutAttributes` belong to rows
    /// without a message and are left alone.
    pub fn configure(
        &self,
        layout: &MessagesLayout<'_>,
        attributes: &mut dyn LayoutAttributes,
    ) -> Result<(), LayoutError> {
        if attributes
            .as_any()
            .downcast_ref::<MessagesLayoutAttributes>()
            .is_none()
        {
            return Ok(());
        }

        let message = layout.message_for_item(attributes.index_path())?;
        match self.calculator_for(&message.kind) {
            Some(calculator) => calculator.configure(layout, attributes),
            None => Ok(()),
        }
    }
}
