//! Easing function library and its curve registry

pub mod functions;
pub mod registry;

pub use registry::*;
