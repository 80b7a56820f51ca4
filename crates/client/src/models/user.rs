//! Session user model.

use serde::{Deserialize, Serialize};

use frostbox_core::UserId;

/// The signed-in user as cached on this device.
///
/// The account itself is owned by the remote auth service; this record is
/// a local copy kept under the `user` storage key so the client knows
/// which `user_id` to scope gateway reads by. It is written at sign-in
/// and cleared at sign-out, never updated incrementally.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub user_id: UserId,
    pub username: String,
    pub email: String,
}
