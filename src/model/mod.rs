//! Pure data structures: the raw wire DTOs and the canonical [`Product`].

pub mod product;
pub mod raw;

pub use product::*;
pub use raw::*;
