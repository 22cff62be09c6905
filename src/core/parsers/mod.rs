//! Source parsers.
//!
//! - `js`: JavaScript module parser (uses swc for AST generation)

pub mod js;
