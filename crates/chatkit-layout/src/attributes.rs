//! Per-cell layout attributes.
//!
//! The layout creates attributes empty, a calculator fills them during
//! `configure`, and the cell reads them once while applying its layout.

use std::any::Any;

use chatkit_graphics::{EdgeInsets, Font, Size};

use crate::index_path::IndexPath;

pub trait LayoutAttributes: Any {
    fn index_path(&self) -> IndexPath;

    fn size(&self) -> Size;

    fn set_size(&mut self, size: Size);

    fn as_any(&self) -> &dyn Any;

    fn as_any_mut(&mut self) -> &mut dyn Any;
}

/// Attributes for message cells, carrying everything the cell would
/// otherwise re-derive at draw time.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MessagesLayoutAttributes {
    pub index_path: IndexPath,
    pub size: Size,
    pub avatar_size: Size,
    pub message_container_padding: EdgeInsets,
    pub top_label_height: f32,
    pub bottom_label_height: f32,
    pub message_label_insets: EdgeInsets,
    pub message_label_font: Option<Font>,
}

impl MessagesLayoutAttributes {
    pub fn new(index_path: IndexPath) -> Self {
        Self {
            index_path,
            ..Self::default()
        }
    }

    /// Clears everything a previous configure pass stored and retargets the
    /// attributes at `index_path`.
    pub fn prepare_for_reuse(&mut self, index_path: IndexPath) {
        *self = Self::new(index_path);
    }
}

impl LayoutAttributes for MessagesLayoutAttributes {
    fn index_path(&self) -> IndexPath {
        self.index_path
    }

    fn size(&self) -> Size {
        self.size
    }

    fn set_size(&mut self, size: Size) {
        self.size = size;
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

/// Attributes for rows that are not messages (headers, typing indicators).
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PlainLayoutAttributes {
    pub index_path: IndexPath,
    pub size: Size,
}

impl PlainLayoutAttributes {
    pub fn new(index_path: IndexPath) -> Self {
        Self {
            index_path,
            size: Size::ZERO,
        }
    }
}

impl LayoutAttributes for PlainLayoutAttributes {
    fn index_path(&self) -> IndexPath {
        self.index_path
    }

    fn size(&self) -> Size {
        self.size
    }

    fn set_size(&mut self, size: Size) {
        self.size = size;
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}
