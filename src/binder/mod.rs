//! Binders: slot addressing and owned-copy highlighting.
//!
//! - `BinderLayout` / `SlotAddress`: global slot number <-> page/row/column
//! - `owned_flags`, `page_owned_flags`, `missing_copies`: which displayed
//!   copies the collection actually owns

pub mod layout;
pub mod ownership;

pub use layout::{BinderLayout, SlotAddress};
pub use ownership::{missing_copies, owned_flags, page_owned_flags};
