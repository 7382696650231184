use crate::PtfError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Defines the particle-size analysis method used to measure clay
///
/// The available water capacity equations depend on how the soil was dispersed
/// before the particle-size analysis.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case", try_from = "String")]
pub enum Method {
    /// Particle-size method 1: ultrasonic dispersion
    UltrasonicDispersion,

    /// Particle-size method 2: overnight shaking
    OvernightShaking,
}

impl Method {
    /// Holds the accepted method names
    pub const NAMES: &'static [&'static str] = &["ultrasonic_dispersion", "overnight_shaking"];

    /// Returns the canonical name
    pub fn name(&self) -> &'static str {
        match self {
            Method::UltrasonicDispersion => Method::NAMES[0],
            Method::OvernightShaking => Method::NAMES[1],
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Method {
    type Err = PtfError;
    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name {
            "ultrasonic_dispersion" => Ok(Method::UltrasonicDispersion),
            "overnight_shaking" => Ok(Method::OvernightShaking),
            _ => Err(PtfError::InvalidArgument {
                given: name.to_string(),
                accepted: Method::NAMES,
            }),
        }
    }
}

impl TryFrom<&str> for Method {
    type Error = PtfError;
    fn try_from(name: &str) -> Result<Self, Self::Error> {
        name.parse()
    }
}

impl TryFrom<&String> for Method {
    type Error = PtfError;
    fn try_from(name: &String) -> Result<Self, Self::Error> {
        name.parse()
    }
}

impl TryFrom<String> for Method {
    type Error = PtfError;
    fn try_from(name: String) -> Result<Self, Self::Error> {
        name.parse()
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
