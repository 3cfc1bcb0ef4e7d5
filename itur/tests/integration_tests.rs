use approx::assert_relative_eq;
use itur::{
    attach_unit, normalize_context, AttenuationModel, InputContext, ItuError, Magnitude,
    NormalizedInputs, Quantity, Registry, Unit, Value,
};
use std::sync::Arc;

/// Toy free-space style model: dB grows with log frequency and
/// shrinks with elevation. Only here to exercise the plumbing.
struct LogFreq;

impl AttenuationModel for LogFreq {
    fn name(&self) -> &str {
        "log-freq"
    }

    fn attenuation_db(&self, inputs: &NormalizedInputs) -> Result<Magnitude, ItuError> {
        let el = inputs
            .elevation_deg
            .as_scalar()
            .ok_or_else(|| ItuError::Parse("elevation must be scalar".into()))?;
        let sin_el = el.to_radians().sin();
        Ok(inputs.frequency_hz.map(|f| 10.0 * (f / 1e9).log10() / sin_el))
    }
}

fn registry() -> Registry {
    let registry = Registry::new();
    registry.alias("P.838", "current", "3").unwrap();
    registry.register("p838", "3", Arc::new(LogFreq)).unwrap();
    registry
}

#[test]
fn test_resolve_normalize_evaluate() {
    let registry = registry();
    let model = registry.resolve("P838", "current").unwrap();
    assert_eq!(model.name(), "log-freq");

    let inputs = normalize_context(
        InputContext::new()
            .frequency(Quantity::new(vec![1.0, 10.0], Unit::GHz))
            .elevation(Quantity::new(std::f64::consts::FRAC_PI_2, Unit::Radian))
            .latitude(44.28)
            .longitude(-71.31)
            .temperature(Quantity::new(15.0, Unit::Celsius)),
    )
    .unwrap();
    assert!(inputs.pressure_kpa.is_none());

    let db = model.attenuation_db(&inputs).unwrap();
    let db = db.as_slice();
    assert_relative_eq!(db[0], 0.0, epsilon = 1e-12);
    assert_relative_eq!(db[1], 10.0, max_relative = 1e-12);

    let Value::Quantity(out) = attach_unit(Magnitude::Scalar(db[1]), Some(Unit::Kilopascal))
    else {
        panic!("expected a quantity");
    };
    assert_eq!(out.unit(), Unit::Kilopascal);
}

#[test]
fn test_registry_shared_across_threads() {
    let registry = Arc::new(Registry::new());
    let handles: Vec<_> = (0..4)
        .map(|i| {
            let registry = Arc::clone(&registry);
            std::thread::spawn(move || {
                registry
                    .register("P.676", format!("{i}"), Arc::new(LogFreq))
                    .unwrap();
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }
    assert_eq!(registry.len(), 4);
    for i in 0..4 {
        assert!(registry.resolve("P.676", format!("{i}")).is_ok());
    }
}

#[test]
fn test_missing_latitude_surfaces_conversion_error() {
    let registry = registry();
    let result = registry.resolve("P.838", "3").and_then(|model| {
        let inputs = normalize_context(
            InputContext::new()
                .frequency(20e9)
                .elevation(30.0)
                .longitude(-71.31),
        )?;
        model.attenuation_db(&inputs)
    });
    assert!(matches!(
        result,
        Err(ItuError::Conversion {
            unit: Unit::Degree,
            ..
        })
    ));
}
