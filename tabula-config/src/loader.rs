use std::{any::type_name, fs, path::Path};

use serde::de::DeserializeOwned;
use serde_yaml::Value;
use tabula_core::{
    config::TabulaConfig,
    err::{Context, Result},
};
use tabula_logging::{debug, info};

use crate::interpolation::{
    interpolate, map_strings, DirInterpolator, EnvInterpolator, Interpolator, Origin,
};

/// Reads yaml configuration, resolving interpolations in string values
pub struct ConfigLoader {
    interpolators: Vec<Box<dyn Interpolator>>,
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigLoader {
    pub fn new() -> Self {
        Self {
            interpolators: vec![Box::new(EnvInterpolator), Box::new(DirInterpolator)],
        }
    }

    /// Loads the tabula configuration file
    pub fn load(&self, path: &Path) -> Result<TabulaConfig> {
        info!("Loading configuration from {}", path.display());
        self.load_as(path)
    }

    /// Loads any yaml document from the file into `T`
    pub fn load_as<T: DeserializeOwned>(&self, path: &Path) -> Result<T> {
        let path = path
            .canonicalize()
            .with_context(|| format!("Could not find {}", path.display()))?;
        let data =
            fs::read(&path).with_context(|| format!("Failed to read {}", path.display()))?;

        let value = self.load_data(&data, Some(&path))?;
        debug!("Deserializing {} into {}", path.display(), type_name::<T>());

        serde_yaml::from_value(value)
            .with_context(|| format!("Invalid {} in {}", type_name::<T>(), path.display()))
    }

    /// Parses the yaml and resolves its interpolations, `file` is the
    /// location `${dir}` is resolved against
    pub fn load_data(&self, data: &[u8], file: Option<&Path>) -> Result<Value> {
        let value: Value = serde_yaml::from_slice(data).context("Failed to parse yaml")?;
        let origin = Origin { file };

        map_strings(value, &|s: &str| {
            interpolate(s, &|parts: &[&str]| self.resolve(origin, parts))
        })
    }

    fn resolve(&self, origin: Origin, parts: &[&str]) -> Result<Option<String>> {
        let (prefix, args) = match parts.split_first() {
            Some(split) => split,
            None => return Ok(None),
        };

        match self.interpolators.iter().find(|i| i.prefix() == *prefix) {
            Some(i) => i
                .resolve(origin, args)
                .with_context(|| format!("Failed to resolve ${{{}}}", parts.join(":"))),
            None => Ok(None),
        }
    }
}
