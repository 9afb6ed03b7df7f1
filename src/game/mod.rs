//! The boundary used by a presentation layer: every action returns a snapshot

mod core;
mod snapshot;

pub use core::Game;
pub use snapshot::{Snapshot, TokenClass, TokenView};
