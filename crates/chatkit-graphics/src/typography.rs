//! Typography data structures (font weights, fonts)

/// Font weight (100-900)
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FontWeight(pub u16);

impl FontWeight {
    pub const LIGHT: FontWeight = FontWeight(300);
    pub const NORMAL: FontWeight = FontWeight(400);
    pub const MEDIUM: FontWeight = FontWeight(500);
    pub const SEMI_BOLD: FontWeight = FontWeight(600);
    pub const BOLD: FontWeight = FontWeight(700);
}

impl Default for FontWeight {
    fn default() -> Self {
        Self::NORMAL
    }
}

/// A resolved font: data only, no glyph access.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Font {
    pub family: Option<String>,
    pub size: f32,
    pub weight: FontWeight,
    /// Explicit line height; derived from `size` when absent.
    pub line_height: Option<f32>,
}

impl Font {
    /// Body text size used for message labels.
    pub const BODY_SIZE: f32 = 17.0;

    /// Line spacing applied when no explicit line height is set.
    const DEFAULT_LINE_SPACING: f32 = 1.2;

    pub fn system(size: f32) -> Self {
        Self {
            family: None,
            size,
            weight: FontWeight::NORMAL,
            line_height: None,
        }
    }

    pub fn body() -> Self {
        Self::system(Self::BODY_SIZE)
    }

    pub fn with_weight(mut self, weight: FontWeight) -> Self {
        self.weight = weight;
        self
    }

    pub fn with_line_height(mut self, line_height: f32) -> Self {
        self.line_height = Some(line_height);
        self
    }

    pub fn line_height(&self) -> f32 {
        self.line_height.unwrap_or(self.size * Self::DEFAULT_LINE_SPACING)
    }
}

impl Default for Font {
    fn default() -> Self {
        Self::body()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn line_height_defaults_to_spacing_multiple() {
        assert!((Font::system(10.0).line_height() - 12.0).abs() < 1e-4);
        assert_eq!(Font::body().with_line_height(22.0).line_height(), 22.0);
    }
}
