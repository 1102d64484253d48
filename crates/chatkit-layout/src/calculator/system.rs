use chatkit_graphics::Size;

use super::{BaseMetrics, SizeCalculator};
use crate::error::LayoutError;
use crate::index_path::IndexPath;
use crate::layout::MessagesLayout;
use crate::message::{Message, MessageKind};

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SystemCalculatorConfig {
    pub metrics: BaseMetrics,
    pub row_height: f32,
}

impl Default for SystemCalculatorConfig {
    fn default() -> Self {
        Self {
            metrics: BaseMetrics::default(),
            row_height: SystemSizeCalculator::ROW_HEIGHT,
        }
    }
}

/// Sizes status rows as fixed-height strips spanning the whole viewport.
///
/// Status text is single-line and centred, so it is never measured: every
/// row is `ROW_HEIGHT` tall no matter how long the text is. `Custom`
/// messages reuse the same geometry through `message_container_size`.
#[derive(Clone, Debug, Default)]
pub struct SystemSizeCalculator {
    config: SystemCalculatorConfig,
}

impl SystemSizeCalculator {
    pub const ROW_HEIGHT: f32 = 44.0;

    pub fn new(config: SystemCalculatorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SystemCalculatorConfig {
        &self.config
    }

    fn row_size(&self, layout: &MessagesLayout<'_>) -> Option<Size> {
        let viewport = layout.viewport()?;
        let inset = layout.section_inset().left
            + layout.section_inset().right
            + viewport.content_inset.left
            + viewport.content_inset.right;
        Some(Size::new((viewport.width - inset).max(0.0), self.config.row_height))
    }
}

impl SizeCalculator for SystemSizeCalculator {
    fn metrics(&self) -> &BaseMetrics {
        &self.config.metrics
    }

    fn size_for_item(
        &self,
        layout: &MessagesLayout<'_>,
        index_path: IndexPath,
    ) -> Result<Size, LayoutError> {
        let Some(row) = self.row_size(layout) else {
            log::debug!("layout not attached, skipping system row {index_path}");
            return Ok(Size::ZERO);
        };

        let message = layout.message_for_item(index_path)?;
        if !matches!(message.kind, MessageKind::System(_)) {
            log::debug!(
                "system calculator declined {} message at {index_path}",
                message.kind.name()
            );
            return Ok(Size::ZERO);
        }
        Ok(row)
    }

    fn message_container_size(
        &self,
        layout: &MessagesLayout<'_>,
        message: &Message,
    ) -> Result<Size, LayoutError> {
        let Some(row) = self.row_size(layout) else {
            return Ok(Size::ZERO);
        };
        if !matches!(message.kind, MessageKind::Custom) {
            log::debug!(
                "system calculator declined {} container for {}",
                message.kind.name(),
                message.id
            );
            return Ok(Size::ZERO);
        }
        Ok(row)
    }
}
