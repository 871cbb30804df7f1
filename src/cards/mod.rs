//! Token model.
//!
//! ## Key Types
//!
//! - `PairId`: Identifier shared by both tokens of a pair
//! - `PairIdAllocator`: Explicit monotonic id source
//! - `Token`: A board piece with face-up / matched / seen flags

pub mod token;

pub use token::{PairId, PairIdAllocator, Token};
