//! Page orchestration: fetch → normalize → rank → publish.

pub mod page;
pub mod state;

pub use page::*;
pub use state::*;
