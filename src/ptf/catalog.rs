use super::{pidgeon1972, Method};
use serde::Serialize;
use std::fmt;

/// Defines the estimated soil-water properties
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Property {
    /// Field capacity (FC): water content at drainage equilibrium
    FieldCapacity,

    /// Permanent wilting point (PWP): water content below which plants cannot extract water
    PermanentWiltingPoint,

    /// Available water capacity (AWC): water held between FC and PWP
    AvailableWaterCapacity,

    /// Easily available water capacity (EAWC): readily extractable part of AWC
    EasilyAvailableWaterCapacity,
}

impl Property {
    /// Returns the abbreviation
    pub fn symbol(&self) -> &'static str {
        match self {
            Property::FieldCapacity => "FC",
            Property::PermanentWiltingPoint => "PWP",
            Property::AvailableWaterCapacity => "AWC",
            Property::EasilyAvailableWaterCapacity => "EAWC",
        }
    }

    /// Returns the unit of the estimated values
    pub fn unit(&self) -> &'static str {
        match self {
            Property::FieldCapacity | Property::PermanentWiltingPoint => "w/w %",
            Property::AvailableWaterCapacity | Property::EasilyAvailableWaterCapacity => "mm/m",
        }
    }
}

/// Describes one regression equation of a model
///
/// The equations are linear in the inputs:
///
/// ```text
/// y = c₀ + c₁ x₁ + c₂ x₂ + …
/// ```
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct EquationInfo {
    /// Estimated property
    pub property: Property,

    /// Equation number in the reference
    pub equation: u32,

    /// Particle-size method, if the equation depends on it
    pub method: Option<Method>,

    /// Intercept followed by one coefficient per variable
    pub coefficients: &'static [f64],

    /// Input variables (percent)
    pub variables: &'static [&'static str],
}

impl EquationInfo {
    /// Allocates a new instance
    ///
    /// `coefficients` holds the intercept followed by one coefficient per variable.
    pub fn new(
        property: Property,
        equation: u32,
        method: Option<Method>,
        coefficients: &'static [f64],
        variables: &'static [&'static str],
    ) -> Self {
        EquationInfo {
            property,
            equation,
            method,
            coefficients,
            variables,
        }
    }

    /// Returns the right-hand side of the equation as text
    pub fn expression(&self) -> String {
        let mut text = match self.coefficients.first() {
            Some(intercept) => format!("{}", intercept),
            None => String::new(),
        };
        for (c, x) in self.coefficients.iter().skip(1).zip(self.variables) {
            if *c < 0.0 {
                text.push_str(&format!(" - {} {}", -c, x));
            } else {
                text.push_str(&format!(" + {} {}", c, x));
            }
        }
        text
    }

    /// Evaluates the equation; `values` follows the order of `variables`
    pub fn evaluate(&self, values: &[f64]) -> f64 {
        let intercept = self.coefficients.first().copied().unwrap_or(0.0);
        self.coefficients
            .iter()
            .skip(1)
            .zip(values)
            .fold(intercept, |sum, (c, x)| sum + c * x)
    }
}

/// Describes a pedotransfer model
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ModelInfo {
    /// Short identifier (author and year)
    pub key: &'static str,

    /// Author, year, territory, and estimated properties
    pub title: &'static str,

    /// Bibliographic reference
    pub reference: &'static str,

    /// Digital object identifier of the reference
    pub doi: &'static str,

    /// Region and soils used to calibrate the model
    pub territory: &'static str,

    /// Regression equations, in the order of the reference
    pub equations: Vec<EquationInfo>,
}

impl fmt::Display for ModelInfo {
    /// Prints a plain-text summary of the model
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.title)?;
        writeln!(f, "{}", "=".repeat(self.title.chars().count()))?;
        writeln!(f, "Reference: {}", self.reference)?;
        writeln!(f, "DOI: https://doi.org/{}", self.doi)?;
        writeln!(f, "Territory: {}", self.territory)?;
        for eq in &self.equations {
            write!(
                f,
                "({}) {} = {} [{}]",
                eq.equation,
                eq.property.symbol(),
                eq.expression(),
                eq.property.unit()
            )?;
            if let Some(method) = eq.method {
                write!(f, " ({})", method)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Returns the description of all available models
pub fn catalog() -> Vec<ModelInfo> {
    vec![pidgeon1972::info()]
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
