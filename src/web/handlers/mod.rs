// src/web/handlers/mod.rs
//
// Request handlers organized by feature.

pub mod categories;
pub mod items;
pub mod listing;

pub use categories::*;
pub use items::*;
pub use listing::*;
