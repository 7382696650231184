//! Implements the elementwise evaluation kernel with broadcasting

mod broadcast;
mod estimate;
mod operand;
pub use crate::numeric::broadcast::*;
pub use crate::numeric::estimate::*;
pub use crate::numeric::operand::*;
