use crate::{registry::RegistryKey, units::Unit};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ItuError {
    #[error("invalid recommendation identifier '{0}', expected 'P.<digits>' (P\\.?\\d+)")]
    InvalidIdentifier(String),

    #[error("no model registered for {0}")]
    NotFound(RegistryKey),

    #[error("cannot convert {value} to {unit}")]
    Conversion { value: String, unit: Unit },

    #[error("unknown unit '{0}'")]
    UnknownUnit(String),

    #[error("malformed quantity '{0}'")]
    Parse(String),
}
