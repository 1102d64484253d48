//! Layout-side cache of computed item sizes.
//!
//! Calculators never cache; the layout keeps their results here between
//! passes and drops them when content or layout geometry changes.

use chatkit_graphics::Size;
use indexmap::IndexMap;

use crate::calculator::CalculatorSet;
use crate::error::LayoutError;
use crate::index_path::IndexPath;
use crate::layout::{LayoutGeometry, MessagesLayout};

#[derive(Clone, Debug, Default)]
pub struct SizeCache {
    sizes: IndexMap<IndexPath, Size>,
    /// Geometry the cached sizes were computed for.
    geometry: Option<LayoutGeometry>,
}

impl SizeCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.sizes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sizes.is_empty()
    }

    pub fn get(&self, index_path: IndexPath) -> Option<Size> {
        self.sizes.get(&index_path).copied()
    }

    /// Returns the cached size for `index_path`, computing it on a miss.
    /// Errors are returned as-is and never cached.
    pub fn size_for_item(
        &mut self,
        calculators: &CalculatorSet,
        layout: &MessagesLayout<'_>,
        index_path: IndexPath,
    ) -> Result<Size, LayoutError> {
        self.invalidate_for_geometry(layout.geometry());
        if let Some(size) = self.sizes.get(&index_path) {
            return Ok(*size);
        }

        let size = calculators.size_for_item(layout, index_path)?;
        self.sizes.insert(index_path, size);
        Ok(size)
    }

    /// Sizes every item the data source reports and returns the total
    /// content height, including section insets.
    pub fn prepare(
        &mut self,
        calculators: &CalculatorSet,
        layout: &MessagesLayout<'_>,
    ) -> Result<f32, LayoutError> {
        let section_inset = layout.section_inset().vertical();
        let mut sections = 0usize;
        let mut height = 0.0;
        let mut last_section = None;
        for index_path in layout.index_paths() {
            if last_section != Some(index_path.section) {
                last_section = Some(index_path.section);
                sections += 1;
            }
            height += self.size_for_item(calculators, layout, index_path)?.height;
        }
        Ok(height + sections as f32 * section_inset)
    }

    pub fn invalidate(&mut self, index_path: IndexPath) {
        self.sizes.shift_remove(&index_path);
    }

    pub fn invalidate_section(&mut self, section: usize) {
        self.sizes.retain(|index_path, _| index_path.section != section);
    }

    pub fn invalidate_all(&mut self) {
        if !self.sizes.is_empty() {
            log::debug!("dropping {} cached item sizes", self.sizes.len());
        }
        self.sizes.clear();
    }

    /// Drops every cached size if the viewport width, content inset or
    /// section inset changed since they were computed.
    pub fn invalidate_for_geometry(&mut self, geometry: LayoutGeometry) {
        if self.geometry != Some(geometry) {
            self.invalidate_all();
            self.geometry = Some(geometry);
        }
    }
}
