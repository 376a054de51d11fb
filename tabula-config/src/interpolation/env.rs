use std::env;

use tabula_core::err::{bail, Result};
use tabula_logging::trace;

use super::{Interpolator, Origin};

/// `${env:NAME}` or `${env:NAME:default}`
pub(crate) struct EnvInterpolator;

impl Interpolator for EnvInterpolator {
    fn prefix(&self) -> &'static str {
        "env"
    }

    fn resolve(&self, _origin: Origin, args: &[&str]) -> Result<Option<String>> {
        let (name, fallback) = match args {
            [name] => (*name, None),
            [name, fallback] => (*name, Some(*fallback)),
            _ => bail!("Expected ${{env:NAME}} or ${{env:NAME:default}}"),
        };

        trace!("Reading environment variable \"{}\"", name);

        match (env::var(name), fallback) {
            (Ok(value), _) => Ok(Some(value)),
            (Err(_), Some(fallback)) => Ok(Some(fallback.to_string())),
            (Err(err), None) => bail!("Environment variable \"{}\" is not usable: {}", name, err),
        }
    }
}
