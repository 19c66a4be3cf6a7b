//! Todo Models
//!
//! Data structures matching the persisted document.

use serde::{Deserialize, Serialize};

/// A single todo entry. The persisted document is a JSON array of these,
/// array order = display order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TodoRecord {
    pub id: String,
    pub text: String,
    pub completed: bool,
}
