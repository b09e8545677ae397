//! Program entities and the symbol-resolution environment for lunet.
//!
//! The type-checker and the evaluator both walk the syntax tree carrying an
//! [`env::Env`] snapshot; every name they meet is resolved against it.

pub mod def;
pub mod env;
pub mod error;
