//! Copy-limit policy: how many copies of a card a deck may hold.
//!
//! - `limit`: `CopyLimit`, `FormatLimit`, `compute_limit`
//! - `validate`: pure quantity checks (`validate_add`, `validate_new_card`,
//!   `validate_set`, `parse_quantity`)
//! - `engine`: `CopyLimitPolicy`, the entry point used by request handlers

pub mod engine;
pub mod limit;
pub mod validate;

pub use engine::{AddCardOutcome, CopyLimitPolicy};
pub use limit::{compute_limit, CopyLimit, FormatLimit};
pub use validate::{check_quantity, parse_quantity, validate_add, validate_new_card, validate_set};
