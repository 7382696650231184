//! Implements the pedotransfer functions

mod catalog;
mod inputs;
mod method;
pub mod pidgeon1972;
pub use crate::ptf::catalog::*;
pub use crate::ptf::inputs::*;
pub use crate::ptf::method::*;
