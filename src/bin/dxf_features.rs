//! Convert a DXF file into a feature table printed as JSON.
//!
//! Usage: `dxf-features <drawing.dxf> [config.json]`
//!
//! The optional configuration file holds `DxfReaderConfiguration` fields in
//! camelCase, e.g. `{"circleSegments": 36, "layers": ["Walls"]}`. Set
//! `RUST_LOG=debug` to see reader notifications.

use anyhow::{bail, Context};
use dxf_features::{DxfReader, DxfReaderConfiguration, FeatureTable};
use env_logger::Env;
use std::fs;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 || args.len() > 3 {
        bail!("usage: {} <drawing.dxf> [config.json]", args[0]);
    }

    let config = match args.get(2) {
        Some(path) => {
            let json = fs::read_to_string(path)
                .with_context(|| format!("reading configuration {}", path))?;
            serde_json::from_str::<DxfReaderConfiguration>(&json)
                .with_context(|| format!("parsing configuration {}", path))?
        }
        None => DxfReaderConfiguration::default(),
    };
    config.validate()?;

    let reader = DxfReader::from_file(&args[1])
        .with_context(|| format!("opening {}", args[1]))?
        .with_configuration(config);
    let (features, notifications) = reader.read_features_with_notifications()?;
    log::info!(
        "{} features, {} notifications",
        features.len(),
        notifications.len()
    );
    for notification in notifications.iter() {
        log::debug!("{:?}: {}", notification.notification_type, notification.message);
    }

    let table = FeatureTable::from_features(reader.configuration().shape, features);
    println!("{}", table.to_json(true)?);
    Ok(())
}
