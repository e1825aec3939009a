//! Messaging directory entries.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// A messaging-platform user as seen in the workspace directory.
///
/// The display name is chosen by the user and may change; the user id is the
/// platform's stable identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Getters)]
pub struct DirectoryEntry {
    display_name: String,
    user_id: String,
}

impl DirectoryEntry {
    /// Create a directory entry.
    pub fn new(display_name: impl Into<String>, user_id: impl Into<String>) -> Self {
        Self {
            display_name: display_name.into(),
            user_id: user_id.into(),
        }
    }
}
