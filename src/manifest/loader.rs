use std::path::Path;

use anyhow::{Context, Result, anyhow};
use config::{Config, Environment, File};
use log::debug;

use super::Manifest;

/// Build a [`Config`] from the given manifest files and `EXTKIT__` prefixed
/// environment variables. Later sources override earlier ones. Environment
/// values stay scalar, so a bare slot id set there remains a singleton query.
pub(super) fn build_config<P: AsRef<Path>>(paths: &[P]) -> Result<Config> {
    let mut builder = Config::builder();

    for path in paths {
        builder = builder.add_source(File::from(path.as_ref()).required(true));
    }

    builder = builder.add_source(
        Environment::with_prefix("extkit")
            .separator("__")
            .try_parsing(true),
    );

    builder
        .build()
        .context("failed to build manifest configuration")
}

/// Load a manifest by layering the given files and the environment.
pub fn load<P: AsRef<Path>>(paths: &[P]) -> Result<Manifest> {
    let config = build_config(paths)?;
    let manifest: Manifest = config
        .try_deserialize()
        .map_err(|err| anyhow!("failed to deserialize manifest: {err}"))?;
    debug!(
        "loaded manifest with {} extension declarations from {} files",
        manifest.extensions.len(),
        paths.len()
    );
    Ok(manifest)
}
