//! Pedotransfer functions (PTFs) for soil-water properties
//!
//! PTFs are empirical regression equations estimating hard-to-measure soil
//! properties from easily measured ones. This crate evaluates published PTFs
//! elementwise over scalars or arrays of any dimension (with broadcasting),
//! optionally writing the results into a caller-supplied buffer.
//!
//! Available models:
//!
//! * [ptf::pidgeon1972] -- field capacity, permanent wilting point, available
//!   water capacity, and easily available water capacity of Ugandan ferrallitic soils
//!
//! # Examples
//!
//! ```
//! use ndarray::{array, Array1};
//! use ptfkit::prelude::*;
//!
//! fn main() -> Result<(), PtfError> {
//!     let inputs = SiltClayOm {
//!         silt: array![10.0, 20.0, 30.0],
//!         clay: array![50.0, 40.0, 30.0],
//!         organic_matter: 2.5,
//!     };
//!     let mut fc = Array1::<f64>::zeros(3);
//!     let mut pwp = Array1::<f64>::zeros(3);
//!     pidgeon1972::field_capacity_into(&inputs, &mut fc)?;
//!     pidgeon1972::permanent_wilting_point_into(&inputs, &mut pwp)?;
//!     for (a, b) in fc.iter().zip(pwp.iter()) {
//!         assert!(b < a);
//!     }
//!     Ok(())
//! }
//! ```

mod errors;
pub mod numeric;
pub mod prelude;
pub mod ptf;
pub use crate::errors::*;
