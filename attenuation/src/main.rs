mod options;

use anyhow::{bail, Error as AnyError};
use clap::Parser;
use itur::{normalize_context, InputContext, Recommendation, Unit, Value};
use log::debug;
use options::{Cli, Command as CliCmd};

fn main() -> Result<(), AnyError> {
    env_logger::init();

    let Cli { cmd } = Cli::parse();

    match cmd {
        CliCmd::Normalize {
            frequency,
            elevation,
            latitude,
            longitude,
            temperature,
            pressure,
            pretty,
        } => {
            let ctx = InputContext {
                frequency: Some(frequency),
                elevation: Some(elevation),
                latitude: Some(latitude),
                longitude: Some(longitude),
                temperature,
                pressure,
            };
            normalize(ctx, pretty)
        }
        CliCmd::Convert { value, to } => convert(&value, to),
        CliCmd::Identifier { rec } => identifier(&rec),
    }
}

fn normalize(ctx: InputContext, pretty: bool) -> Result<(), AnyError> {
    debug!("normalizing {ctx:?}");
    let inputs = normalize_context(ctx)?;
    let json = if pretty {
        serde_json::to_string_pretty(&inputs)?
    } else {
        serde_json::to_string(&inputs)?
    };
    println!("{json}");
    Ok(())
}

fn convert(value: &Value, to: Unit) -> Result<(), AnyError> {
    let Value::Quantity(quantity) = value else {
        bail!("'{value}' has no unit to convert from");
    };
    println!("{}", quantity.to(to)?);
    Ok(())
}

fn identifier(rec: &str) -> Result<(), AnyError> {
    let rec = Recommendation::parse(rec)?;
    println!("{rec}");
    Ok(())
}
