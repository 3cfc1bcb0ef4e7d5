use super::{Dimension, Magnitude, Quantity, Unit, Value};
use crate::ItuError;

/// Converts `value` to the canonical unit of `source_unit`'s dimension
/// and returns the bare magnitude.
///
/// - [`Value::Quantity`] carries its own unit, which must measure the
///   same dimension as `source_unit`.
/// - [`Value::Array`] and [`Value::Scalar`] are taken to already be in
///   `source_unit`.
///
/// Non-finite numbers are rejected.
pub fn to_si(value: &Value, source_unit: Unit) -> Result<Magnitude, ItuError> {
    let canonical = source_unit.dimension().canonical();
    let quantity = match value {
        Value::Quantity(q) => q.to(canonical)?,
        Value::Array(vs) => Quantity::new(vs.as_slice(), source_unit).to(canonical)?,
        Value::Scalar(v) => Quantity::new(*v, source_unit).to(canonical)?,
    };
    if !quantity.magnitude().is_finite() {
        return Err(ItuError::Conversion {
            value: value.to_string(),
            unit: canonical,
        });
    }
    Ok(quantity.into_magnitude())
}

/// Reattaches `unit` to a computed magnitude.
///
/// With no unit the magnitude is returned as a bare value.
pub fn attach_unit(magnitude: Magnitude, unit: Option<Unit>) -> Value {
    match unit {
        None => magnitude.into(),
        Some(unit) => Value::Quantity(Quantity::new(magnitude, unit)),
    }
}

/// Physical inputs to an attenuation model, in whatever form the
/// caller has them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InputContext {
    /// Signal frequency (required, bare numbers are Hz).
    pub frequency: Option<Value>,

    /// Path elevation angle (required, bare numbers are degrees).
    pub elevation: Option<Value>,

    /// Station latitude (required, bare numbers are degrees).
    pub latitude: Option<Value>,

    /// Station longitude (required, bare numbers are degrees).
    pub longitude: Option<Value>,

    /// Surface temperature (optional, bare numbers are kelvin).
    pub temperature: Option<Value>,

    /// Surface pressure (optional, bare numbers are kPa).
    pub pressure: Option<Value>,
}

impl InputContext {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn frequency(mut self, value: impl Into<Value>) -> Self {
        self.frequency = Some(value.into());
        self
    }

    #[must_use]
    pub fn elevation(mut self, value: impl Into<Value>) -> Self {
        self.elevation = Some(value.into());
        self
    }

    #[must_use]
    pub fn latitude(mut self, value: impl Into<Value>) -> Self {
        self.latitude = Some(value.into());
        self
    }

    #[must_use]
    pub fn longitude(mut self, value: impl Into<Value>) -> Self {
        self.longitude = Some(value.into());
        self
    }

    #[must_use]
    pub fn temperature(mut self, value: impl Into<Value>) -> Self {
        self.temperature = Some(value.into());
        self
    }

    #[must_use]
    pub fn pressure(mut self, value: impl Into<Value>) -> Self {
        self.pressure = Some(value.into());
        self
    }
}

/// Model inputs as canonical magnitudes.
///
/// Optional inputs the caller did not supply are `None`, never zero.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedInputs {
    pub frequency_hz: Magnitude,
    pub elevation_deg: Magnitude,
    pub latitude_deg: Magnitude,
    pub longitude_deg: Magnitude,
    pub temperature_k: Option<Magnitude>,
    pub pressure_kpa: Option<Magnitude>,
}

/// Reduces every field of `ctx` to its canonical magnitude.
///
/// A missing required field is a conversion error.
pub fn normalize_context(ctx: InputContext) -> Result<NormalizedInputs, ItuError> {
    let InputContext {
        frequency,
        elevation,
        latitude,
        longitude,
        temperature,
        pressure,
    } = ctx;

    let hz = Dimension::Frequency.canonical();
    let deg = Dimension::Angle.canonical();
    let kelvin = Dimension::Temperature.canonical();
    let kpa = Dimension::Pressure.canonical();

    Ok(NormalizedInputs {
        frequency_hz: required("frequency", frequency, hz)?,
        elevation_deg: required("elevation", elevation, deg)?,
        latitude_deg: required("latitude", latitude, deg)?,
        longitude_deg: required("longitude", longitude, deg)?,
        temperature_k: temperature.map(|v| to_si(&v, kelvin)).transpose()?,
        pressure_kpa: pressure.map(|v| to_si(&v, kpa)).transpose()?,
    })
}

fn required(field: &str, value: Option<Value>, unit: Unit) -> Result<Magnitude, ItuError> {
    match value {
        Some(value) => to_si(&value, unit),
        None => Err(ItuError::Conversion {
            value: format!("missing {field}"),
            unit,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::{attach_unit, normalize_context, to_si, InputContext};
    use crate::{
        units::{Magnitude, Quantity, Unit, Value},
        ItuError,
    };
    use approx::assert_relative_eq;

    fn ctx() -> InputContext {
        InputContext::new()
            .frequency(Quantity::new(20.0, Unit::GHz))
            .elevation(30.0)
            .latitude(44.28)
            .longitude(-71.31)
    }

    #[test]
    fn test_to_si_quantity() {
        let q = Value::Quantity(Quantity::new(915.0, Unit::MHz));
        assert_eq!(to_si(&q, Unit::Hz), Ok(Magnitude::Scalar(915e6)));
        // The quantity's own unit wins over the source unit.
        assert_eq!(to_si(&q, Unit::GHz), Ok(Magnitude::Scalar(915e6)));
    }

    #[test]
    fn test_to_si_bare_values_use_source_unit() {
        assert_eq!(
            to_si(&Value::Scalar(1.5), Unit::GHz),
            Ok(Magnitude::Scalar(1.5e9))
        );
        assert_eq!(
            to_si(&Value::Array(vec![1.0, 2.0]), Unit::MHz),
            Ok(Magnitude::Array(vec![1e6, 2e6]))
        );
        assert_relative_eq!(
            to_si(&Value::Scalar(15.0), Unit::Celsius)
                .unwrap()
                .as_scalar()
                .unwrap(),
            288.15,
            max_relative = 1e-12
        );
    }

    #[test]
    fn test_to_si_dimension_mismatch() {
        let q = Value::Quantity(Quantity::new(20.0, Unit::GHz));
        let err = to_si(&q, Unit::Degree).unwrap_err();
        assert_eq!(
            err,
            ItuError::Conversion {
                value: "20 GHz".into(),
                unit: Unit::Degree
            }
        );
    }

    #[test]
    fn test_to_si_rejects_non_finite() {
        let err = to_si(&Value::Array(vec![1.0, f64::NAN]), Unit::Hz).unwrap_err();
        assert_eq!(
            err,
            ItuError::Conversion {
                value: "[1, NaN]".into(),
                unit: Unit::Hz
            }
        );
        assert!(to_si(&Value::Scalar(f64::INFINITY), Unit::Kelvin).is_err());
    }

    #[test]
    fn test_normalize_frequency_ghz() {
        let inputs = normalize_context(ctx()).unwrap();
        assert_relative_eq!(inputs.frequency_hz.as_scalar().unwrap(), 20e9);
        assert_eq!(inputs.elevation_deg, Magnitude::Scalar(30.0));
        assert_eq!(inputs.latitude_deg, Magnitude::Scalar(44.28));
        assert_eq!(inputs.longitude_deg, Magnitude::Scalar(-71.31));
    }

    #[test]
    fn test_normalize_optional_absent() {
        let inputs = normalize_context(ctx()).unwrap();
        assert_eq!(inputs.temperature_k, None);
        assert_eq!(inputs.pressure_kpa, None);
    }

    #[test]
    fn test_normalize_optional_present() {
        let inputs = normalize_context(
            ctx()
                .temperature(Quantity::new(15.0, Unit::Celsius))
                .pressure(Quantity::new(1.0, Unit::Atmosphere)),
        )
        .unwrap();
        assert_relative_eq!(
            inputs.temperature_k.unwrap().as_scalar().unwrap(),
            288.15,
            max_relative = 1e-12
        );
        assert_relative_eq!(
            inputs.pressure_kpa.unwrap().as_scalar().unwrap(),
            101.325,
            max_relative = 1e-12
        );
    }

    #[test]
    fn test_normalize_angles_in_radians() {
        let inputs = normalize_context(
            ctx()
                .elevation(Quantity::new(std::f64::consts::FRAC_PI_2, Unit::Radian))
                .latitude(Quantity::new(vec![0.0, 30.0], Unit::Arcminute)),
        )
        .unwrap();
        assert_relative_eq!(
            inputs.elevation_deg.as_scalar().unwrap(),
            90.0,
            max_relative = 1e-12
        );
        let lat = inputs.latitude_deg.as_slice();
        assert_eq!(lat.len(), 2);
        assert_eq!(lat[0], 0.0);
        assert_relative_eq!(lat[1], 0.5, max_relative = 1e-12);
    }

    #[test]
    fn test_normalize_missing_required() {
        let mut ctx = ctx();
        ctx.latitude = None;
        let err = normalize_context(ctx).unwrap_err();
        assert_eq!(
            err,
            ItuError::Conversion {
                value: "missing latitude".into(),
                unit: Unit::Degree
            }
        );
    }

    #[test]
    fn test_normalize_empty_context() {
        assert!(matches!(
            normalize_context(InputContext::new()),
            Err(ItuError::Conversion { unit: Unit::Hz, .. })
        ));
    }

    #[test]
    fn test_normalize_wrong_dimension() {
        let err =
            normalize_context(ctx().pressure(Quantity::new(300.0, Unit::Kelvin))).unwrap_err();
        assert_eq!(err.to_string(), "cannot convert 300 K to kPa");
    }

    #[test]
    fn test_attach_unit_none() {
        assert_eq!(attach_unit(Magnitude::Scalar(100.0), None), Value::Scalar(100.0));
        assert_eq!(
            attach_unit(Magnitude::Array(vec![1.0]), None),
            Value::Array(vec![1.0])
        );
    }

    #[test]
    fn test_attach_unit_kpa() {
        let Value::Quantity(q) = attach_unit(Magnitude::Scalar(100.0), Some(Unit::Kilopascal))
        else {
            panic!("expected a quantity");
        };
        assert_eq!(q.magnitude(), &Magnitude::Scalar(100.0));
        assert_eq!(q.unit(), Unit::Kilopascal);
        assert_eq!(q.to_string(), "100 kPa");
        let pa = q.to(Unit::Pascal).unwrap();
        assert_relative_eq!(
            pa.magnitude().as_scalar().unwrap(),
            100_000.0,
            max_relative = 1e-12
        );
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_normalized_inputs_serde() {
        let json = serde_json::to_value(normalize_context(ctx()).unwrap()).unwrap();
        let obj = json.as_object().unwrap();
        let mut keys: Vec<&str> = obj.keys().map(String::as_str).collect();
        keys.sort_unstable();
        assert_eq!(
            keys,
            [
                "elevation_deg",
                "frequency_hz",
                "latitude_deg",
                "longitude_deg",
                "pressure_kpa",
                "temperature_k"
            ]
        );
        assert_eq!(obj["frequency_hz"], serde_json::json!(20e9));
        assert_eq!(obj["temperature_k"], serde_json::Value::Null);
        assert_eq!(obj["pressure_kpa"], serde_json::Value::Null);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_value_serde_untagged() {
        assert_eq!(
            serde_json::from_str::<Value>("1.5").unwrap(),
            Value::Scalar(1.5)
        );
        assert_eq!(
            serde_json::from_str::<Value>("[1.0, 2.0]").unwrap(),
            Value::Array(vec![1.0, 2.0])
        );
        assert_eq!(
            serde_json::from_str::<Value>(r#"{"magnitude": 20.0, "unit": "GHz"}"#).unwrap(),
            Value::Quantity(Quantity::new(20.0, Unit::GHz))
        );
        assert_eq!(
            serde_json::from_str::<Value>(r#"{"magnitude": [1.0, 2.0], "unit": "deg"}"#).unwrap(),
            Value::Quantity(Quantity::new(vec![1.0, 2.0], Unit::Degree))
        );
        assert!(serde_json::from_str::<Value>(r#"{"magnitude": 1.0, "unit": "mHz"}"#).is_err());

        let value = Value::Quantity(Quantity::new(15.0, Unit::Celsius));
        let json = serde_json::to_string(&value).unwrap();
        assert_eq!(json, r#"{"magnitude":15.0,"unit":"degC"}"#);
        assert_eq!(serde_json::from_str::<Value>(&json).unwrap(), value);
    }
}
