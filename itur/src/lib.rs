//! # ITU-R attenuation core
//!
//! `itur` holds the pieces every ITU-R attenuation model shares:
//!
//! - a [`Registry`] that maps a recommendation (e.g. `P.838`) and
//!   version to a model, with version aliases; and
//! - unit normalization ([`normalize_context`]) that reduces
//!   heterogeneous caller inputs to canonical SI magnitudes before any
//!   formula sees them.
//!
//! ```
//! use itur::{normalize_context, InputContext, Quantity, Unit};
//!
//! let inputs = normalize_context(
//!     InputContext::new()
//!         .frequency(Quantity::new(20.0, Unit::GHz))
//!         .elevation(30.0)
//!         .latitude(44.28)
//!         .longitude(-71.31),
//! )
//! .unwrap();
//! assert_eq!(inputs.frequency_hz.as_scalar(), Some(20e9));
//! assert_eq!(inputs.temperature_k, None);
//! ```

mod error;
mod model;
pub mod params;
pub mod registry;
pub mod units;

pub use crate::{
    error::ItuError,
    model::AttenuationModel,
    params::{Hydrometeor, Polarization},
    registry::{Recommendation, Registry, RegistryKey},
    units::{
        attach_unit, normalize_context, to_si, Dimension, InputContext, Magnitude,
        NormalizedInputs, Quantity, Unit, Value,
    },
};
