//! The uniform submission outcome.

use serde::{Deserialize, Serialize};

/// Terminal outcome of a mint submission.
///
/// Every submission path resolves to one of these - chain rejections,
/// local guard rejections, and transport errors all normalize to the same
/// shape so the interface has exactly one thing to display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionResult {
    pub success: bool,
    pub message: String,
}

impl TransactionResult {
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
        }
    }
}
