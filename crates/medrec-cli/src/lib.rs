//! Library side of the `medrec` binary.

pub mod logging;
pub mod pipeline;
pub mod types;
