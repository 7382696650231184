//! Implements Pidgeon (1972) pedotransfer functions for ferrallitic soils of Uganda
//!
//! Estimates the field capacity (FC), the permanent wilting point (PWP), the available
//! water capacity (AWC), and the easily available water capacity (EAWC).
//!
//! Territory: Uganda (non-alluvial ferrallitic soils with a kaolinitic/illitic clay fraction).
//!
//! # Reference
//!
//! * Pidgeon JD (1972) The measurement and prediction of available water capacity of
//!   ferrallitic soils in Uganda. Journal of Soil Science, 23(4), 431-441,
//!   <https://doi.org/10.1111/j.1365-2389.1972.tb01674.x>
//!
//! # Examples
//!
//! ```
//! use ndarray::array;
//! use ptfkit::prelude::*;
//!
//! fn main() -> Result<(), PtfError> {
//!     // single sample
//!     let fc = pidgeon1972::field_capacity(&SiltClayOm {
//!         silt: 30.0,
//!         clay: 40.0,
//!         organic_matter: 2.0,
//!     })?;
//!     assert!(fc.scalar().is_some());
//!
//!     // several samples sharing the same organic matter content
//!     let awc = pidgeon1972::available_water_capacity(
//!         &ClayOm {
//!             clay: array![20.0, 40.0, 60.0],
//!             organic_matter: 2.0,
//!         },
//!         "overnight_shaking",
//!     )?;
//!     assert_eq!(awc.shape(), &[3]);
//!     Ok(())
//! }
//! ```

use super::{ClayOm, EquationInfo, Method, ModelInfo, Property, SiltClayOm};
use crate::numeric::{eval2, eval2_into, eval3, eval3_into, Estimate, Operand};
use crate::PtfError;
use ndarray::{ArrayBase, DataMut, Dimension};
use serde::{Deserialize, Serialize};

// TODO: check the eq. (6)-(8) coefficients against the regression table of the paper
// (the eq. (4) and (5) coefficients match the values quoted in PTF reviews)

/// Variables of the equations with silt, clay, and organic matter
const SILT_CLAY_OM: &[&str] = &["silt", "clay", "organic_matter"];

/// Variables of the equations with clay and organic matter
const CLAY_OM: &[&str] = &["clay", "organic_matter"];

/// Coefficients of eq. (4): intercept, silt, clay, organic matter
const FC: [f64; 4] = [7.38, 0.16, 0.30, 1.5];

/// Coefficients of eq. (5): intercept, silt, clay, organic matter
const PWP: [f64; 4] = [-0.04, 0.10, 0.24, 1.05];

/// Coefficients of eq. (6): intercept, clay, organic matter
const AWC_USD: [f64; 3] = [52.4, 0.61, 12.7];

/// Coefficients of eq. (7): intercept, silt, clay, organic matter
const EAWC: [f64; 4] = [38.9, 0.14, 0.16, 6.3];

/// Coefficients of eq. (8): intercept, clay, organic matter
const AWC_ONS: [f64; 3] = [64.3, 0.41, 9.6];

/// Calculates field capacity (w/w %) with eq. (4)
#[inline]
fn fc(silt: f64, clay: f64, organic_matter: f64) -> f64 {
    FC[0] + FC[1] * silt + FC[2] * clay + FC[3] * organic_matter
}

/// Calculates permanent wilting point (w/w %) with eq. (5)
#[inline]
fn pwp(silt: f64, clay: f64, organic_matter: f64) -> f64 {
    PWP[0] + PWP[1] * silt + PWP[2] * clay + PWP[3] * organic_matter
}

/// Calculates available water capacity (mm/m) with eq. (6); clay by ultrasonic dispersion
#[inline]
fn awc_usd(clay: f64, organic_matter: f64) -> f64 {
    AWC_USD[0] + AWC_USD[1] * clay + AWC_USD[2] * organic_matter
}

/// Calculates easily available water capacity (mm/m) with eq. (7)
#[inline]
fn eawc(silt: f64, clay: f64, organic_matter: f64) -> f64 {
    EAWC[0] + EAWC[1] * silt + EAWC[2] * clay + EAWC[3] * organic_matter
}

/// Calculates available water capacity (mm/m) with eq. (8); clay by overnight shaking
#[inline]
fn awc_ons(clay: f64, organic_matter: f64) -> f64 {
    AWC_ONS[0] + AWC_ONS[1] * clay + AWC_ONS[2] * organic_matter
}

/// Returns the AWC equation corresponding to the particle-size method
fn awc_equation(method: Method) -> fn(f64, f64) -> f64 {
    match method {
        Method::UltrasonicDispersion => awc_usd,
        Method::OvernightShaking => awc_ons,
    }
}

/// Calculates field capacity (w/w %)
///
/// Equation (4). Uses particle-size method 2 (silt, clay) and organic matter.
///
/// # Input
///
/// * `silt` -- silt content (2-20 μm) (%)
/// * `clay` -- clay content (<2 μm) (%)
/// * `organic_matter` -- organic matter content (%)
pub fn field_capacity<S, C, O>(inputs: &SiltClayOm<S, C, O>) -> Result<Estimate, PtfError>
where
    S: Operand,
    C: Operand,
    O: Operand,
{
    eval3(&inputs.silt, &inputs.clay, &inputs.organic_matter, fc)
}

/// Calculates field capacity (w/w %) into `out` and returns `out`
///
/// See [field_capacity].
pub fn field_capacity_into<'o, S, C, O, T, D>(
    inputs: &SiltClayOm<S, C, O>,
    out: &'o mut ArrayBase<T, D>,
) -> Result<&'o mut ArrayBase<T, D>, PtfError>
where
    S: Operand,
    C: Operand,
    O: Operand,
    T: DataMut<Elem = f64>,
    D: Dimension,
{
    eval3_into(&inputs.silt, &inputs.clay, &inputs.organic_matter, out, fc)
}

/// Calculates permanent wilting point (w/w %)
///
/// Equation (5). Uses particle-size method 2 (silt, clay) and organic matter.
///
/// # Input
///
/// * `silt` -- silt content (2-20 μm) (%)
/// * `clay` -- clay content (<2 μm) (%)
/// * `organic_matter` -- organic matter content (%)
pub fn permanent_wilting_point<S, C, O>(inputs: &SiltClayOm<S, C, O>) -> Result<Estimate, PtfError>
where
    S: Operand,
    C: Operand,
    O: Operand,
{
    eval3(&inputs.silt, &inputs.clay, &inputs.organic_matter, pwp)
}

/// Calculates permanent wilting point (w/w %) into `out` and returns `out`
///
/// See [permanent_wilting_point].
pub fn permanent_wilting_point_into<'o, S, C, O, T, D>(
    inputs: &SiltClayOm<S, C, O>,
    out: &'o mut ArrayBase<T, D>,
) -> Result<&'o mut ArrayBase<T, D>, PtfError>
where
    S: Operand,
    C: Operand,
    O: Operand,
    T: DataMut<Elem = f64>,
    D: Dimension,
{
    eval3_into(&inputs.silt, &inputs.clay, &inputs.organic_matter, out, pwp)
}

/// Calculates available water capacity (mm/m)
///
/// * Equation (6). Uses particle-size method 1 (ultrasonic dispersion) and organic matter.
/// * Equation (8). Uses particle-size method 2 (overnight shaking) and organic matter.
///
/// # Input
///
/// * `clay` -- clay content (<2 μm) (%)
/// * `organic_matter` -- organic matter content (%)
/// * `method` -- particle-size method: a [Method] or one of its names
///   (`"ultrasonic_dispersion"` or `"overnight_shaking"`)
///
/// An unknown method name yields [PtfError::InvalidArgument] before any evaluation.
pub fn available_water_capacity<C, O, M>(inputs: &ClayOm<C, O>, method: M) -> Result<Estimate, PtfError>
where
    C: Operand,
    O: Operand,
    M: TryInto<Method>,
    PtfError: From<M::Error>,
{
    let method = method.try_into()?;
    eval2(&inputs.clay, &inputs.organic_matter, awc_equation(method))
}

/// Calculates available water capacity (mm/m) into `out` and returns `out`
///
/// See [available_water_capacity].
pub fn available_water_capacity_into<'o, C, O, M, T, D>(
    inputs: &ClayOm<C, O>,
    method: M,
    out: &'o mut ArrayBase<T, D>,
) -> Result<&'o mut ArrayBase<T, D>, PtfError>
where
    C: Operand,
    O: Operand,
    M: TryInto<Method>,
    PtfError: From<M::Error>,
    T: DataMut<Elem = f64>,
    D: Dimension,
{
    let method = method.try_into()?;
    eval2_into(&inputs.clay, &inputs.organic_matter, out, awc_equation(method))
}

/// Calculates easily available water capacity (mm/m)
///
/// Equation (7). Uses particle-size method 2 (silt, clay) and organic matter.
pub fn easily_available_water_capacity<S, C, O>(inputs: &SiltClayOm<S, C, O>) -> Result<Estimate, PtfError>
where
    S: Operand,
    C: Operand,
    O: Operand,
{
    eval3(&inputs.silt, &inputs.clay, &inputs.organic_matter, eawc)
}

/// Calculates easily available water capacity (mm/m) into `out` and returns `out`
///
/// See [easily_available_water_capacity].
pub fn easily_available_water_capacity_into<'o, S, C, O, T, D>(
    inputs: &SiltClayOm<S, C, O>,
    out: &'o mut ArrayBase<T, D>,
) -> Result<&'o mut ArrayBase<T, D>, PtfError>
where
    S: Operand,
    C: Operand,
    O: Operand,
    T: DataMut<Elem = f64>,
    D: Dimension,
{
    eval3_into(&inputs.silt, &inputs.clay, &inputs.organic_matter, out, eawc)
}

/// Holds all Pidgeon (1972) estimates for a single soil sample
#[derive(Clone, Copy, Debug, PartialEq, Deserialize, Serialize)]
pub struct WaterEstimates {
    /// Field capacity (w/w %)
    pub field_capacity: f64,

    /// Permanent wilting point (w/w %)
    pub permanent_wilting_point: f64,

    /// Available water capacity (mm/m)
    pub available_water_capacity: f64,

    /// Easily available water capacity (mm/m)
    pub easily_available_water_capacity: f64,

    /// Particle-size method used for the available water capacity
    pub method: Method,
}

/// Calculates all estimates for a single soil sample
pub fn estimate_all<M>(silt: f64, clay: f64, organic_matter: f64, method: M) -> Result<WaterEstimates, PtfError>
where
    M: TryInto<Method>,
    PtfError: From<M::Error>,
{
    let method = method.try_into()?;
    Ok(WaterEstimates {
        field_capacity: fc(silt, clay, organic_matter),
        permanent_wilting_point: pwp(silt, clay, organic_matter),
        available_water_capacity: awc_equation(method)(clay, organic_matter),
        easily_available_water_capacity: eawc(silt, clay, organic_matter),
        method,
    })
}

/// Returns the reference information of this model
pub fn info() -> ModelInfo {
    ModelInfo {
        key: "pidgeon1972",
        title: "Pidgeon, 1972 - Uganda, ferrallitic soils (FC, PWP, AWC, EAWC)",
        reference: "Pidgeon JD (1972) The measurement and prediction of available water capacity of \
                    ferrallitic soils in Uganda. Journal of Soil Science, 23(4), 431-441",
        doi: "10.1111/j.1365-2389.1972.tb01674.x",
        territory: "Uganda (non-alluvial ferrallitic soils with kaolinitic/illitic clay fraction)",
        equations: vec![
            EquationInfo::new(Property::FieldCapacity, 4, None, &FC, SILT_CLAY_OM),
            EquationInfo::new(Property::PermanentWiltingPoint, 5, None, &PWP, SILT_CLAY_OM),
            EquationInfo::new(
                Property::AvailableWaterCapacity,
                6,
                Some(Method::UltrasonicDispersion),
                &AWC_USD,
                CLAY_OM,
            ),
            EquationInfo::new(Property::EasilyAvailableWaterCapacity, 7, None, &EAWC, SILT_CLAY_OM),
            EquationInfo::new(
                Property::AvailableWaterCapacity,
                8,
                Some(Method::OvernightShaking),
                &AWC_ONS,
                CLAY_OM,
            ),
        ],
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
