//! Makes available the commonly used functionality
//!
//! You may write `use ptfkit::prelude::*` in your code and obtain
//! access to the models and their input and output types.

pub use crate::numeric::{Estimate, Operand};
pub use crate::ptf::pidgeon1972;
pub use crate::ptf::{catalog, ClayOm, Method, ModelInfo, Property, SiltClayOm};
pub use crate::PtfError;
