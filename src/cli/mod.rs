//! Terminal presentation for the `lqo` binary.

pub mod render;
