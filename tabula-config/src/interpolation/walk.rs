use lazy_static::lazy_static;
use regex::{Captures, Regex};
use serde_yaml::Value;
use tabula_core::err::{Context, Result};

lazy_static! {
    /// An expression with no nested `${`
    static ref EXPRESSION: Regex = Regex::new(r"\$\{([^${}]*)\}").unwrap();
}

/// Rebuilds the yaml tree with every string value passed through `f`.
///
/// Mapping keys are left as written.
pub(crate) fn map_strings(node: Value, f: &impl Fn(&str) -> Result<String>) -> Result<Value> {
    match node {
        Value::String(s) => f(&s)
            .with_context(|| format!("Failed to interpolate \"{}\"", s))
            .map(Value::String),
        Value::Sequence(items) => items
            .into_iter()
            .map(|i| map_strings(i, f))
            .collect::<Result<Vec<_>>>()
            .map(Value::Sequence),
        Value::Mapping(entries) => entries
            .into_iter()
            .map(|(k, v)| -> Result<(Value, Value)> { Ok((k, map_strings(v, f)?)) })
            .collect::<Result<_>>()
            .map(Value::Mapping),
        other => Ok(other),
    }
}

/// Resolves the `${a:b:...}` expressions in the string, innermost first, until
/// nothing changes. Expressions `resolve` returns `None` for are kept verbatim.
pub(crate) fn interpolate(
    input: &str,
    resolve: &impl Fn(&[&str]) -> Result<Option<String>>,
) -> Result<String> {
    let mut current = input.to_string();

    loop {
        let mut failure = None;
        let next = EXPRESSION.replace_all(&current, |caps: &Captures| {
            let parts = caps[1].split(':').collect::<Vec<_>>();

            match resolve(&parts) {
                Ok(Some(value)) => value,
                Ok(None) => caps[0].to_string(),
                Err(err) => {
                    failure.get_or_insert(err);
                    caps[0].to_string()
                }
            }
        });

        if let Some(err) = failure {
            return Err(err);
        }

        if next == current {
            return Ok(current);
        }

        current = next.into_owned();
    }
}
