//! Ready-to-play game wrappers built on the engine.

pub mod concentration;

pub use concentration::{Session, TokenView};
