use crate::{
    units::{Magnitude, NormalizedInputs},
    ItuError,
};

/// Anything that can be bound in a [`Registry`](crate::Registry).
///
/// Implementations receive inputs already reduced to canonical SI
/// magnitudes (see [`normalize_context`](crate::normalize_context)),
/// so formulas never deal with units themselves.
pub trait AttenuationModel: Send + Sync {
    /// Short human readable name, e.g. `"P.838-3 rain"`.
    fn name(&self) -> &str;

    /// Returns attenuation in dB for `inputs`.
    ///
    /// Array inputs produce an array result.
    fn attenuation_db(&self, inputs: &NormalizedInputs) -> Result<Magnitude, ItuError>;
}
