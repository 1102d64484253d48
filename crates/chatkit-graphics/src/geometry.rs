//! Geometric primitives: Size and EdgeInsets

#[derive(Clone, Copy, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub const ZERO: Size = Size {
        width: 0.0,
        height: 0.0,
    };

    pub fn is_zero(&self) -> bool {
        self.width == 0.0 && self.height == 0.0
    }

    /// Returns true if both dimensions are finite and strictly positive.
    pub fn is_proper(&self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }

    /// Width divided by height, or `None` for degenerate sizes.
    pub fn aspect_ratio(&self) -> Option<f32> {
        self.is_proper().then(|| self.width / self.height)
    }

    /// Height divided by width, the multiplier a view uses to tie its
    /// height to its width.
    pub fn height_ratio(&self) -> Option<f32> {
        self.is_proper().then(|| self.height / self.width)
    }

    /// Fits this size horizontally into `[min_width, max_width]` and derives
    /// the height from the native aspect ratio.
    ///
    /// The floor applies first and the ceiling wins when the two conflict,
    /// so the result never exceeds `max_width`. Returns `None` when this
    /// size has no usable aspect ratio.
    pub fn aspect_fit(&self, min_width: f32, max_width: f32) -> Option<Size> {
        let ratio = self.aspect_ratio()?;
        let width = self.width.max(min_width).min(max_width).max(0.0);
        Some(Size::new(width, width / ratio))
    }
}

/// Padding values for each edge of a rectangle.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EdgeInsets {
    pub top: f32,
    pub left: f32,
    pub bottom: f32,
    pub right: f32,
}

impl EdgeInsets {
    pub const ZERO: EdgeInsets = EdgeInsets {
        top: 0.0,
        left: 0.0,
        bottom: 0.0,
        right: 0.0,
    };

    /// Creates insets in top, left, bottom, right order.
    pub const fn new(top: f32, left: f32, bottom: f32, right: f32) -> Self {
        Self {
            top,
            left,
            bottom,
            right,
        }
    }

    pub fn uniform(all: f32) -> Self {
        Self::new(all, all, all, all)
    }

    pub fn symmetric(horizontal: f32, vertical: f32) -> Self {
        Self::new(vertical, horizontal, vertical, horizontal)
    }

    pub fn is_zero(&self) -> bool {
        self.left == 0.0 && self.top == 0.0 && self.right == 0.0 && self.bottom == 0.0
    }

    pub fn horizontal(&self) -> f32 {
        self.left + self.right
    }

    pub fn vertical(&self) -> f32 {
        self.top + self.bottom
    }

    /// Mirrors the insets left to right.
    pub fn flipped(&self) -> Self {
        Self::new(self.top, self.right, self.bottom, self.left)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn aspect_fit_caps_wide_images_at_max_width() {
        let fitted = Size::new(1000.0, 500.0).aspect_fit(250.0, 268.0);
        assert_eq!(fitted, Some(Size::new(268.0, 134.0)));
    }

    #[test]
    fn aspect_fit_raises_small_images_to_floor() {
        let fitted = Size::new(100.0, 200.0).aspect_fit(250.0, 400.0);
        assert_eq!(fitted, Some(Size::new(250.0, 500.0)));
    }

    #[test]
    fn aspect_fit_keeps_native_width_inside_range() {
        let fitted = Size::new(300.0, 300.0).aspect_fit(250.0, 400.0);
        assert_eq!(fitted, Some(Size::new(300.0, 300.0)));
    }

    #[test]
    fn aspect_fit_ceiling_wins_over_floor() {
        let fitted = Size::new(1000.0, 1000.0).aspect_fit(250.0, 200.0);
        assert_eq!(fitted, Some(Size::new(200.0, 200.0)));
    }

    #[test]
    fn degenerate_sizes_have_no_aspect_ratio() {
        assert_eq!(Size::ZERO.aspect_ratio(), None);
        assert_eq!(Size::new(10.0, 0.0).aspect_fit(250.0, 300.0), None);
        assert_eq!(Size::new(f32::NAN, 10.0).height_ratio(), None);
    }

    #[test]
    fn insets_sum_per_axis() {
        let insets = EdgeInsets::new(7.0, 14.0, 9.0, 18.0);
        assert_eq!(insets.horizontal(), 32.0);
        assert_eq!(insets.vertical(), 16.0);
        assert_eq!(insets.flipped(), EdgeInsets::new(7.0, 18.0, 9.0, 14.0));
    }
}
