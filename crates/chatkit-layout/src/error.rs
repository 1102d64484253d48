use thiserror::Error;

use crate::index_path::IndexPath;
use crate::message::MessageKind;

/// Contract violations raised while sizing or configuring a message.
///
/// These point at miswired data sources or calculators and are never
/// retried. Graceful absence (no viewport yet, a kind the calculator does
/// not handle) is reported as `Size::ZERO` instead.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LayoutError {
    #[error("{component} received unhandled message kind `{found}`, expected `{expected}`")]
    UnhandledKind {
        component: &'static str,
        expected: &'static str,
        found: &'static str,
    },
    #[error("data source has no message at {index_path}")]
    MissingMessage { index_path: IndexPath },
    #[error("messages display delegate has not been set")]
    MissingDisplayDelegate,
    #[error("placeholder image must have a non-zero size, got {width}x{height}")]
    InvalidPlaceholder { width: f32, height: f32 },
}

impl LayoutError {
    pub fn unhandled_kind(
        component: &'static str,
        expected: &'static str,
        found: &MessageKind,
    ) -> Self {
        LayoutError::UnhandledKind {
            component,
            expected,
            found: found.name(),
        }
    }
}
