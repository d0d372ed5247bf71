//! Format rules and the format rule table.
//!
//! ## Key Types
//!
//! - `FormatCategory`: Constructed, Eternal, Casual, Limited
//! - `FormatRule`: display name, category, singleton flag
//! - `FormatTable`: immutable key -> rule lookup with built-in defaults

pub mod rule;
pub mod table;

pub use rule::{FormatCategory, FormatRule};
pub use table::FormatTable;
