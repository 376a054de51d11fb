mod classify;
mod synthesize;
mod view;

pub use classify::UNSAFE_EXIT_CODE;
pub use synthesize::synthesize;
pub use view::*;

use tabula_core::err::Result;

use crate::{args::Command, conf::init_conf};

/// Runs the command, returning the exit code of the process
pub fn run(command: &Command) -> Result<i32> {
    match command {
        Command::Classify(args) => classify::run(args),
        Command::Synthesize(args) => {
            let conf = init_conf(&args.config)?;
            synthesize::run(args, &conf)
        }
    }
}
