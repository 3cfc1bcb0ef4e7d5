use super::Unit;
use crate::ItuError;
use std::{fmt, slice, str::FromStr};

/// A plain number or array of numbers.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
#[derive(Debug, Clone, PartialEq)]
pub enum Magnitude {
    Scalar(f64),
    Array(Vec<f64>),
}

impl Magnitude {
    /// Applies `f` to every element.
    pub fn map(&self, f: impl Fn(f64) -> f64) -> Self {
        match self {
            Magnitude::Scalar(v) => Magnitude::Scalar(f(*v)),
            Magnitude::Array(vs) => Magnitude::Array(vs.iter().copied().map(f).collect()),
        }
    }

    pub fn as_scalar(&self) -> Option<f64> {
        match self {
            Magnitude::Scalar(v) => Some(*v),
            Magnitude::Array(_) => None,
        }
    }

    /// All elements, a scalar being a one element slice.
    pub fn as_slice(&self) -> &[f64] {
        match self {
            Magnitude::Scalar(v) => slice::from_ref(v),
            Magnitude::Array(vs) => vs,
        }
    }

    pub fn is_finite(&self) -> bool {
        self.as_slice().iter().all(|v| v.is_finite())
    }
}

impl From<f64> for Magnitude {
    fn from(v: f64) -> Self {
        Magnitude::Scalar(v)
    }
}

impl From<Vec<f64>> for Magnitude {
    fn from(vs: Vec<f64>) -> Self {
        Magnitude::Array(vs)
    }
}

impl From<&[f64]> for Magnitude {
    fn from(vs: &[f64]) -> Self {
        Magnitude::Array(vs.to_vec())
    }
}

impl fmt::Display for Magnitude {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Magnitude::Scalar(v) => write!(f, "{v}"),
            Magnitude::Array(vs) => {
                f.write_str("[")?;
                for (i, v) in vs.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{v}")?;
                }
                f.write_str("]")
            }
        }
    }
}

impl FromStr for Magnitude {
    type Err = ItuError;

    /// Parses `"1.5"` as a scalar, and `"1,2,3"` or `"[1, 2, 3]"` as an
    /// array.
    fn from_str(s: &str) -> Result<Self, ItuError> {
        let s = s.trim();
        let parse_err = || ItuError::Parse(s.to_owned());
        let (inner, bracketed) = match s.strip_prefix('[') {
            Some(rest) => (rest.strip_suffix(']').ok_or_else(parse_err)?, true),
            None => (s, false),
        };
        if !bracketed && !inner.contains(',') {
            return inner.parse().map(Magnitude::Scalar).map_err(|_| parse_err());
        }
        if inner.trim().is_empty() {
            return Ok(Magnitude::Array(Vec::new()));
        }
        inner
            .split(',')
            .map(|v| v.trim().parse::<f64>().map_err(|_| parse_err()))
            .collect::<Result<Vec<f64>, ItuError>>()
            .map(Magnitude::Array)
    }
}

/// A magnitude tagged with its unit.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct Quantity {
    magnitude: Magnitude,
    unit: Unit,
}

impl Quantity {
    pub fn new(magnitude: impl Into<Magnitude>, unit: Unit) -> Self {
        Self {
            magnitude: magnitude.into(),
            unit,
        }
    }

    pub fn magnitude(&self) -> &Magnitude {
        &self.magnitude
    }

    pub fn unit(&self) -> Unit {
        self.unit
    }

    pub fn into_magnitude(self) -> Magnitude {
        self.magnitude
    }

    /// Returns this quantity expressed in `unit`.
    ///
    /// Fails if `unit` measures a different dimension.
    pub fn to(&self, unit: Unit) -> Result<Quantity, ItuError> {
        if self.unit.dimension() != unit.dimension() {
            return Err(ItuError::Conversion {
                value: self.to_string(),
                unit,
            });
        }
        let from = self.unit;
        Ok(Quantity {
            magnitude: self.magnitude.map(|v| from.convert(v, unit)),
            unit,
        })
    }

    /// Returns this quantity in its dimension's canonical unit.
    pub fn to_canonical(&self) -> Quantity {
        let unit = self.unit.dimension().canonical();
        let from = self.unit;
        Quantity {
            magnitude: self.magnitude.map(|v| from.convert(v, unit)),
            unit,
        }
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.magnitude, self.unit)
    }
}

impl FromStr for Quantity {
    type Err = ItuError;

    /// Parses a magnitude followed by a unit, with or without a space
    /// in between: `"20 GHz"`, `"20GHz"`, `"1e9 Hz"`, `"[1, 2] kHz"`.
    fn from_str(s: &str) -> Result<Self, ItuError> {
        let s = s.trim();
        // First split point where both halves parse wins. Scanning
        // from the left keeps exponents ("1e9Hz") in the magnitude.
        for (idx, _) in s.char_indices().skip(1) {
            let (mag, unit) = s.split_at(idx);
            if let (Ok(magnitude), Ok(unit)) = (mag.parse::<Magnitude>(), unit.parse::<Unit>()) {
                return Ok(Quantity { magnitude, unit });
            }
        }
        match s.rsplit_once(char::is_whitespace) {
            Some((mag, unit)) if mag.parse::<Magnitude>().is_ok() => {
                Err(ItuError::UnknownUnit(unit.to_owned()))
            }
            _ => Err(ItuError::Parse(s.to_owned())),
        }
    }
}

/// Any input a caller may hand to the normalizer.
///
/// Bare numbers are interpreted in whatever unit the caller converts
/// them from (see [`to_si`](super::to_si)).
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Quantity(Quantity),
    Array(Vec<f64>),
    Scalar(f64),
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Scalar(v)
    }
}

impl From<Vec<f64>> for Value {
    fn from(vs: Vec<f64>) -> Self {
        Value::Array(vs)
    }
}

impl From<&[f64]> for Value {
    fn from(vs: &[f64]) -> Self {
        Value::Array(vs.to_vec())
    }
}

impl From<Quantity> for Value {
    fn from(q: Quantity) -> Self {
        Value::Quantity(q)
    }
}

impl From<Magnitude> for Value {
    fn from(m: Magnitude) -> Self {
        match m {
            Magnitude::Scalar(v) => Value::Scalar(v),
            Magnitude::Array(vs) => Value::Array(vs),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Quantity(q) => fmt::Display::fmt(q, f),
            Value::Array(vs) => fmt::Display::fmt(&Magnitude::Array(vs.clone()), f),
            Value::Scalar(v) => write!(f, "{v}"),
        }
    }
}

impl FromStr for Value {
    type Err = ItuError;

    /// Bare numbers and arrays parse as unitless values, anything else
    /// must be a [`Quantity`].
    fn from_str(s: &str) -> Result<Self, ItuError> {
        match s.parse::<Magnitude>() {
            Ok(magnitude) => Ok(magnitude.into()),
            Err(_) => s.parse::<Quantity>().map(Value::Quantity),
        }
    }
}
