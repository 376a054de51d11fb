use std::io::{self, Read};

use tabula_core::err::{Context, Result};
use tabula_guardrail::classify;

use crate::args::ClassifyArgs;

/// Exit code reported for SQL the guardrail refuses
pub const UNSAFE_EXIT_CODE: i32 = 2;

/// Prints the classification of the SQL as json
pub fn run(args: &ClassifyArgs) -> Result<i32> {
    let sql = match args.sql.as_ref() {
        Some(sql) => sql.clone(),
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read SQL from stdin")?;
            buf
        }
    };

    let res = classify(&sql);
    println!("{}", serde_json::to_string_pretty(&res)?);

    Ok(if res.is_safe { 0 } else { UNSAFE_EXIT_CODE })
}
