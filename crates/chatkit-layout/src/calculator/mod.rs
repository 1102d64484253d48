//! Size calculators.
//!
//! Each calculator implements [`SizeCalculator`] for one family of message
//! kinds. The trait's provided methods are the generic sizing rules; a
//! calculator overrides only what its kind lays out differently.

mod attachment;
mod set;
mod system;

pub use attachment::*;
pub use set::*;
pub use system::*;

use chatkit_graphics::{EdgeInsets, Size};

use crate::attributes::{LayoutAttributes, MessagesLayoutAttributes};
use crate::error::LayoutError;
use crate::index_path::IndexPath;
use crate::layout::MessagesLayout;
use crate::message::Message;

/// Chrome shared by every message cell: avatar, padding around the
/// message container, and the labels above and below it.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct BaseMetrics {
    pub avatar_size: Size,
    pub incoming_container_padding: EdgeInsets,
    pub outgoing_container_padding: EdgeInsets,
    pub top_label_height: f32,
    pub bottom_label_height: f32,
}

impl Default for BaseMetrics {
    fn default() -> Self {
        Self {
            avatar_size: Size::new(30.0, 30.0),
            incoming_container_padding: EdgeInsets::new(0.0, 4.0, 0.0, 30.0),
            outgoing_container_padding: EdgeInsets::new(0.0, 30.0, 0.0, 4.0),
            top_label_height: 0.0,
            bottom_label_height: 0.0,
        }
    }
}

impl BaseMetrics {
    pub fn with_avatar_size(mut self, avatar_size: Size) -> Self {
        self.avatar_size = avatar_size;
        self
    }

    pub fn with_container_padding(mut self, incoming: EdgeInsets, outgoing: EdgeInsets) -> Self {
        self.incoming_container_padding = incoming;
        self.outgoing_container_padding = outgoing;
        self
    }

    pub fn with_label_heights(mut self, top: f32, bottom: f32) -> Self {
        self.top_label_height = top;
        self.bottom_label_height = bottom;
        self
    }

    pub fn container_padding(&self, layout: &MessagesLayout<'_>, message: &Message) -> EdgeInsets {
        if layout.is_from_current_sender(message) {
            self.outgoing_container_padding
        } else {
            self.incoming_container_padding
        }
    }

    /// Generic max width for a message container: the item width minus the
    /// avatar and the container padding, never negative.
    pub fn container_max_width(&self, layout: &MessagesLayout<'_>, message: &Message) -> f32 {
        let padding = self.container_padding(layout, message);
        (layout.item_width() - self.avatar_size.width - padding.horizontal()).max(0.0)
    }

    /// Full cell size around an already computed container.
    pub fn cell_size(
        &self,
        layout: &MessagesLayout<'_>,
        message: &Message,
        container: Size,
    ) -> Size {
        let padding = self.container_padding(layout, message);
        let content_height = container.height
            + padding.vertical()
            + self.top_label_height
            + self.bottom_label_height;
        Size::new(layout.item_width(), content_height.max(self.avatar_size.height))
    }

    /// Stores the shared chrome on message attributes. Other attribute
    /// types are left untouched.
    pub fn configure(
        &self,
        layout: &MessagesLayout<'_>,
        attributes: &mut dyn LayoutAttributes,
    ) -> Result<(), LayoutError> {
        let Some(attributes) = attributes
            .as_any_mut()
            .downcast_mut::<MessagesLayoutAttributes>()
        else {
            return Ok(());
        };
        let message = layout.message_for_item(attributes.index_path)?;
        attributes.avatar_size = self.avatar_size;
        attributes.message_container_padding = self.container_padding(layout, message);
        attributes.top_label_height = self.top_label_height;
        attributes.bottom_label_height = self.bottom_label_height;
        Ok(())
    }
}

/// What a layout pass calls per visible or soon-to-be-visible item.
///
/// Every method is a pure function of its arguments and the calculator's
/// configuration; calling it twice with the same inputs gives identical
/// results.
pub trait SizeCalculator {
    fn metrics(&self) -> &BaseMetrics;

    fn size_for_item(
        &self,
        layout: &MessagesLayout<'_>,
        index_path: IndexPath,
    ) -> Result<Size, LayoutError> {
        let message = layout.message_for_item(index_path)?;
        let container = self.message_container_size(layout, message)?;
        Ok(self.metrics().cell_size(layout, message, container))
    }

    fn message_container_max_width(&self, layout: &MessagesLayout<'_>, message: &Message) -> f32 {
        self.metrics().container_max_width(layout, message)
    }

    fn message_container_size(
        &self,
        layout: &MessagesLayout<'_>,
        message: &Message,
    ) -> Result<Size, LayoutError>;

    fn configure(
        &self,
        layout: &MessagesLayout<'_>,
        attributes: &mut dyn LayoutAttributes,
    ) -> Result<(), LayoutError> {
        self.metrics().configure(layout, attributes)
    }
}

#[cfg(test)]
#[path = "tests/calculator_tests.rs"]
mod tests;
