//! Template parser & substitution engine

pub mod expression;
pub mod parser;
pub mod placeholder;
pub mod substitute;

pub use parser::*;
pub use placeholder::*;
pub use substitute::*;
