//! Acceptance record
//!
//! The simulated outcome for one user: the single item they took from their
//! candidate list.

use super::recommendation::{ItemId, UserId};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Acceptance {
    pub user_id: UserId,
    pub item_id: ItemId,
}

impl Acceptance {
    pub fn new(user_id: UserId, item_id: ItemId) -> Self {
        Self { user_id, item_id }
    }
}
