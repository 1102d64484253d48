//! The layout collaborator the calculators read geometry and messages from.

use chatkit_graphics::EdgeInsets;

use crate::data_source::MessagesDataSource;
use crate::error::LayoutError;
use crate::index_path::IndexPath;
use crate::message::Message;
use crate::text_measure::TextMeasurer;

/// Geometry of the scrolling view the layout is attached to.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ViewportGeometry {
    pub width: f32,
    pub content_inset: EdgeInsets,
}

impl ViewportGeometry {
    pub fn new(width: f32) -> Self {
        Self {
            width,
            content_inset: EdgeInsets::ZERO,
        }
    }

    pub fn with_content_inset(mut self, content_inset: EdgeInsets) -> Self {
        self.content_inset = content_inset;
        self
    }
}

/// The geometry every computed size depends on. Sizes computed under one
/// geometry are stale under any other.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct LayoutGeometry {
    pub viewport: Option<ViewportGeometry>,
    pub section_inset: EdgeInsets,
}

/// Borrowed view of everything a layout pass hands to a calculator.
///
/// A layout without a viewport has not been attached to a view yet;
/// calculators treat that as "nothing to size" rather than an error.
#[derive(Clone, Copy)]
pub struct MessagesLayout<'a> {
    viewport: Option<ViewportGeometry>,
    section_inset: EdgeInsets,
    data_source: &'a dyn MessagesDataSource,
    text_measurer: &'a dyn TextMeasurer,
}

impl<'a> MessagesLayout<'a> {
    pub const DEFAULT_SECTION_INSET: EdgeInsets = EdgeInsets::new(4.0, 8.0, 4.0, 8.0);

    pub fn new(
        data_source: &'a dyn MessagesDataSource,
        text_measurer: &'a dyn TextMeasurer,
    ) -> Self {
        Self {
            viewport: None,
            section_inset: Self::DEFAULT_SECTION_INSET,
            data_source,
            text_measurer,
        }
    }

    pub fn with_viewport(mut self, viewport: ViewportGeometry) -> Self {
        self.viewport = Some(viewport);
        self
    }

    pub fn with_section_inset(mut self, section_inset: EdgeInsets) -> Self {
        self.section_inset = section_inset;
        self
    }

    pub fn viewport(&self) -> Option<ViewportGeometry> {
        self.viewport
    }

    pub fn viewport_width(&self) -> Option<f32> {
        self.viewport.map(|viewport| viewport.width)
    }

    pub fn geometry(&self) -> LayoutGeometry {
        LayoutGeometry {
            viewport: self.viewport,
            section_inset: self.section_inset,
        }
    }

    pub fn section_inset(&self) -> EdgeInsets {
        self.section_inset
    }

    pub fn data_source(&self) -> &'a dyn MessagesDataSource {
        self.data_source
    }

    pub fn text_measurer(&self) -> &'a dyn TextMeasurer {
        self.text_measurer
    }

    /// Horizontal space left for an item after section and content insets.
    /// Zero while detached.
    pub fn item_width(&self) -> f32 {
        let Some(viewport) = self.viewport else {
            return 0.0;
        };
        let inset = self.section_inset.horizontal() + viewport.content_inset.horizontal();
        (viewport.width - inset).max(0.0)
    }

    pub fn message_for_item(&self, index_path: IndexPath) -> Result<&'a Message, LayoutError> {
        self.data_source
            .message_for_item(index_path)
            .ok_or(LayoutError::MissingMessage { index_path })
    }

    pub fn is_from_current_sender(&self, message: &Message) -> bool {
        self.data_source.is_from_current_sender(message)
    }

    /// Every index path the data source currently reports, in order.
    pub fn index_paths(&self) -> impl Iterator<Item = IndexPath> + 'a {
        let data_source = self.data_source;
        (0..data_source.number_of_sections()).flat_map(move |section| {
            (0..data_source.number_of_items(section)).map(move |item| IndexPath::new(section, item))
        })
    }
}
