//! Configuration input/output

pub mod native;

pub use native::*;
