use clap::{Parser, Subcommand};
use itur::{Unit, Value};

/// Normalize and convert inputs for ITU-R attenuation models.
///
/// Values are bare numbers in the canonical unit (Hz, deg, K, kPa) or
/// quantities such as "20 GHz", "0.5 rad", "15 degC", "[1, 2] kHz".
#[derive(Parser, Debug)]
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print model inputs as canonical SI magnitudes (JSON).
    Normalize {
        /// Signal frequency.
        #[arg(short, long)]
        frequency: Value,

        /// Path elevation angle.
        #[arg(short, long, allow_hyphen_values = true)]
        elevation: Value,

        /// Station latitude.
        #[arg(long, allow_hyphen_values = true)]
        latitude: Value,

        /// Station longitude.
        #[arg(long, allow_hyphen_values = true)]
        longitude: Value,

        /// Surface temperature.
        #[arg(short, long, allow_hyphen_values = true)]
        temperature: Option<Value>,

        /// Surface pressure.
        #[arg(short, long)]
        pressure: Option<Value>,

        /// Pretty print.
        #[arg(long, default_value_t = false)]
        pretty: bool,
    },

    /// Convert a quantity to another unit of the same dimension.
    Convert {
        /// Quantity to convert, e.g. "915 MHz".
        #[arg(allow_hyphen_values = true)]
        value: Value,

        /// Target unit, e.g. "GHz".
        #[arg(long)]
        to: Unit,
    },

    /// Print the canonical form of a recommendation identifier.
    Identifier {
        /// e.g. "p838".
        rec: String,
    },
}
