mod normalize;
mod quantity;

pub use {
    normalize::{attach_unit, normalize_context, to_si, InputContext, NormalizedInputs},
    quantity::{Magnitude, Quantity, Value},
};

use crate::ItuError;
use std::{f64::consts::PI, fmt, str::FromStr};

/// Physical dimension of a [`Unit`].
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dimension {
    Frequency,
    Angle,
    Temperature,
    Pressure,
}

impl Dimension {
    /// The unit all model formulas expect for this dimension.
    pub fn canonical(self) -> Unit {
        match self {
            Dimension::Frequency => Unit::Hz,
            Dimension::Angle => Unit::Degree,
            Dimension::Temperature => Unit::Kelvin,
            Dimension::Pressure => Unit::Kilopascal,
        }
    }
}

/// Units accepted on input.
///
/// With the `serde` feature a unit (de)serializes as its symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Unit {
    Hz,
    KHz,
    MHz,
    GHz,
    THz,
    Degree,
    Radian,
    Arcminute,
    Arcsecond,
    Kelvin,
    Celsius,
    Fahrenheit,
    Pascal,
    Hectopascal,
    Kilopascal,
    Megapascal,
    Bar,
    Millibar,
    Atmosphere,
    Torr,
}

impl Unit {
    pub fn dimension(self) -> Dimension {
        match self {
            Unit::Hz | Unit::KHz | Unit::MHz | Unit::GHz | Unit::THz => Dimension::Frequency,
            Unit::Degree | Unit::Radian | Unit::Arcminute | Unit::Arcsecond => Dimension::Angle,
            Unit::Kelvin | Unit::Celsius | Unit::Fahrenheit => Dimension::Temperature,
            Unit::Pascal
            | Unit::Hectopascal
            | Unit::Kilopascal
            | Unit::Megapascal
            | Unit::Bar
            | Unit::Millibar
            | Unit::Atmosphere
            | Unit::Torr => Dimension::Pressure,
        }
    }

    /// Short ASCII symbol, also accepted by `FromStr`.
    pub fn symbol(self) -> &'static str {
        match self {
            Unit::Hz => "Hz",
            Unit::KHz => "kHz",
            Unit::MHz => "MHz",
            Unit::GHz => "GHz",
            Unit::THz => "THz",
            Unit::Degree => "deg",
            Unit::Radian => "rad",
            Unit::Arcminute => "arcmin",
            Unit::Arcsecond => "arcsec",
            Unit::Kelvin => "K",
            Unit::Celsius => "degC",
            Unit::Fahrenheit => "degF",
            Unit::Pascal => "Pa",
            Unit::Hectopascal => "hPa",
            Unit::Kilopascal => "kPa",
            Unit::Megapascal => "MPa",
            Unit::Bar => "bar",
            Unit::Millibar => "mbar",
            Unit::Atmosphere => "atm",
            Unit::Torr => "Torr",
        }
    }

    /// `(scale, offset)` such that `canonical = value * scale + offset`.
    fn affine(self) -> (f64, f64) {
        match self {
            Unit::Hz => (1.0, 0.0),
            Unit::KHz => (1e3, 0.0),
            Unit::MHz => (1e6, 0.0),
            Unit::GHz => (1e9, 0.0),
            Unit::THz => (1e12, 0.0),
            Unit::Degree => (1.0, 0.0),
            Unit::Radian => (180.0 / PI, 0.0),
            Unit::Arcminute => (1.0 / 60.0, 0.0),
            Unit::Arcsecond => (1.0 / 3600.0, 0.0),
            Unit::Kelvin => (1.0, 0.0),
            Unit::Celsius => (1.0, 273.15),
            Unit::Fahrenheit => (5.0 / 9.0, 459.67 * 5.0 / 9.0),
            Unit::Pascal => (1e-3, 0.0),
            Unit::Hectopascal => (0.1, 0.0),
            Unit::Kilopascal => (1.0, 0.0),
            Unit::Megapascal => (1e3, 0.0),
            Unit::Bar => (100.0, 0.0),
            Unit::Millibar => (0.1, 0.0),
            Unit::Atmosphere => (101.325, 0.0),
            Unit::Torr => (101.325 / 760.0, 0.0),
        }
    }

    /// Converts a single value from `self` to `to`.
    ///
    /// Callers must check that both units share a dimension.
    pub(crate) fn convert(self, value: f64, to: Unit) -> f64 {
        if self == to {
            return value;
        }
        let (scale, offset) = self.affine();
        let (to_scale, to_offset) = to.affine();
        (value * scale + offset - to_offset) / to_scale
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for Unit {
    type Err = ItuError;

    /// Parses a unit symbol or name.
    ///
    /// Symbols are case-sensitive (`mHz` is not `MHz`). Spelled out
    /// names and unprefixed symbols also match in any case.
    fn from_str(s: &str) -> Result<Self, ItuError> {
        let s = s.trim();
        let unit = match s {
            "Hz" => Unit::Hz,
            "kHz" => Unit::KHz,
            "MHz" => Unit::MHz,
            "GHz" => Unit::GHz,
            "THz" => Unit::THz,
            "deg" | "°" => Unit::Degree,
            "rad" => Unit::Radian,
            "arcmin" => Unit::Arcminute,
            "arcsec" => Unit::Arcsecond,
            "K" => Unit::Kelvin,
            "degC" | "°C" | "℃" => Unit::Celsius,
            "degF" | "°F" | "℉" => Unit::Fahrenheit,
            "Pa" => Unit::Pascal,
            "hPa" => Unit::Hectopascal,
            "kPa" => Unit::Kilopascal,
            "MPa" => Unit::Megapascal,
            "bar" => Unit::Bar,
            "mbar" => Unit::Millibar,
            "atm" => Unit::Atmosphere,
            "Torr" => Unit::Torr,
            other => match other.to_lowercase().as_str() {
                "hz" | "hertz" => Unit::Hz,
                "kilohertz" => Unit::KHz,
                "megahertz" => Unit::MHz,
                "gigahertz" => Unit::GHz,
                "terahertz" => Unit::THz,
                "deg" | "degs" | "degree" | "degrees" => Unit::Degree,
                "rad" | "rads" | "radian" | "radians" => Unit::Radian,
                "arcmin" | "arcminute" | "arcminutes" => Unit::Arcminute,
                "arcsec" | "arcsecond" | "arcseconds" => Unit::Arcsecond,
                "k" | "kelvin" => Unit::Kelvin,
                "degc" | "celsius" => Unit::Celsius,
                "degf" | "fahrenheit" => Unit::Fahrenheit,
                "pa" | "pascal" | "pascals" => Unit::Pascal,
                "hectopascal" | "hectopascals" => Unit::Hectopascal,
                "kilopascal" | "kilopascals" => Unit::Kilopascal,
                "megapascal" | "megapascals" => Unit::Megapascal,
                "bar" | "bars" => Unit::Bar,
                "millibar" | "millibars" => Unit::Millibar,
                "atm" | "atmosphere" | "atmospheres" => Unit::Atmosphere,
                "torr" => Unit::Torr,
                _ => return Err(ItuError::UnknownUnit(s.to_owned())),
            },
        };
        Ok(unit)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Unit {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.symbol())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Unit {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = <String as serde::Deserialize>::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
