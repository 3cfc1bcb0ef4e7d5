use crate::ItuError;
use std::{fmt, str::FromStr};

/// Antenna polarization, used by rain attenuation (P.838).
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Polarization {
    Horizontal,
    Vertical,
    Circular,
}

/// Hydrometeor phase, used by refractivity and cloud models (P.453).
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Hydrometeor {
    Water,
    Ice,
}

impl Polarization {
    pub fn as_str(self) -> &'static str {
        match self {
            Polarization::Horizontal => "horizontal",
            Polarization::Vertical => "vertical",
            Polarization::Circular => "circular",
        }
    }
}

impl Hydrometeor {
    pub fn as_str(self) -> &'static str {
        match self {
            Hydrometeor::Water => "water",
            Hydrometeor::Ice => "ice",
        }
    }
}

impl fmt::Display for Polarization {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Hydrometeor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Polarization {
    type Err = ItuError;

    fn from_str(s: &str) -> Result<Self, ItuError> {
        match s.trim().to_lowercase().as_str() {
            "horizontal" | "h" => Ok(Polarization::Horizontal),
            "vertical" | "v" => Ok(Polarization::Vertical),
            "circular" | "c" => Ok(Polarization::Circular),
            _ => Err(ItuError::Parse(s.to_owned())),
        }
    }
}

impl FromStr for Hydrometeor {
    type Err = ItuError;

    fn from_str(s: &str) -> Result<Self, ItuError> {
        match s.trim().to_lowercase().as_str() {
            "water" => Ok(Hydrometeor::Water),
            "ice" => Ok(Hydrometeor::Ice),
            _ => Err(ItuError::Parse(s.to_owned())),
        }
    }
}
