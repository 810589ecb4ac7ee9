// src/model/mod.rs
//! The normalized domain model — what callers receive, never wire shapes.

mod block;
mod page;
mod property_value;

pub use block::*;
pub use page::*;
pub use property_value::*;
