//! Pure geometry and style data for chatkit
//!
//! This crate contains the size, inset, color and font types that the
//! layout calculators and cell models exchange. Nothing in here knows
//! about messages.

mod color;
mod geometry;
mod typography;

pub use color::*;
pub use geometry::*;
pub use typography::*;

pub mod prelude {
    pub use crate::color::Color;
    pub use crate::geometry::{EdgeInsets, Size};
    pub use crate::typography::{Font, FontWeight};
}
