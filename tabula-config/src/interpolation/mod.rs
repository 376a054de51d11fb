use std::path::Path;

use tabula_core::err::Result;

mod dir;
mod env;
mod walk;

pub(crate) use dir::DirInterpolator;
pub(crate) use env::EnvInterpolator;
pub(crate) use walk::{interpolate, map_strings};

/// Where the configuration being interpolated was read from
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct Origin<'a> {
    pub file: Option<&'a Path>,
}

/// Resolves the `${prefix:arg:...}` expressions for a single prefix
pub(crate) trait Interpolator {
    fn prefix(&self) -> &'static str;

    /// Resolves the arguments following the prefix, `None` leaves the
    /// expression as written
    fn resolve(&self, origin: Origin, args: &[&str]) -> Result<Option<String>>;
}
