//! Message size calculators & layout contracts for chatkit
//!
//! A layout pass asks a [`SizeCalculator`] for the size of every item before
//! anything is drawn. Each calculator handles one family of message kinds;
//! [`CalculatorSet`] picks the right one for a message and [`SizeCache`]
//! lets the layout keep the results between passes.

mod attributes;
mod cache;
mod calculator;
mod conversation;
mod data_source;
mod error;
mod index_path;
mod layout;
mod message;
mod text_measure;

pub use attributes::*;
pub use cache::*;
pub use calculator::*;
pub use conversation::*;
pub use data_source::*;
pub use error::*;
pub use index_path::*;
pub use layout::*;
pub use message::*;
pub use text_measure::*;

pub use chatkit_graphics::{Color, EdgeInsets, Font, FontWeight, Size};

pub mod prelude {
    pub use crate::attributes::{LayoutAttributes, MessagesLayoutAttributes};
    pub use crate::cache::SizeCache;
    pub use crate::calculator::{
        AttachmentSizeCalculator, CalculatorSet, SizeCalculator, SystemSizeCalculator,
    };
    pub use crate::data_source::{MessagesDataSource, MessagesDisplayDelegate};
    pub use crate::error::LayoutError;
    pub use crate::index_path::IndexPath;
    pub use crate::layout::{LayoutGeometry, MessagesLayout, ViewportGeometry};
    pub use crate::message::{Message, MessageKind, Sender};
    pub use crate::text_measure::{MonospacedTextMeasurer, TextMeasurer};
}
