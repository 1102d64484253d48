//! Cell content models for chatkit
//!
//! Cells never size themselves. They take the layout attributes a size
//! calculator filled in, plus the display delegate's styling, and expose
//! what the view layer should draw.

mod attachment_cell;
mod caption_label;
mod system_cell;

pub use attachment_cell::*;
pub use caption_label::*;
pub use system_cell::*;
