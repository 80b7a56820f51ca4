//! Locally owned domain types.
//!
//! These types live on the device, not in the remote inventory service:
//! the cached session user and the shopping list.

pub mod shopping;
pub mod user;

pub use shopping::{NewShoppingItem, ShoppingListItem};
pub use user::User;
