use tabula_core::err::Result;

use super::{Interpolator, Origin};

/// `${dir}`, the directory holding the config file
pub(crate) struct DirInterpolator;

impl Interpolator for DirInterpolator {
    fn prefix(&self) -> &'static str {
        "dir"
    }

    fn resolve(&self, origin: Origin, args: &[&str]) -> Result<Option<String>> {
        if !args.is_empty() {
            return Ok(None);
        }

        Ok(origin
            .file
            .and_then(|f| f.parent())
            .map(|dir| dir.to_string_lossy().to_string()))
    }
}
