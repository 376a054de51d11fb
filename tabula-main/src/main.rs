use std::process;

use clap::Parser;
use tabula_logging::error;
use tabula_main::{args::Command, commands};

fn main() {
    if let Err(err) = tabula_logging::init_logging() {
        eprintln!("Failed to init logging: {}", err);
    }

    let command = Command::parse();

    let code = match commands::run(&command) {
        Ok(code) => code,
        Err(err) => {
            error!("{:?}", err);
            1
        }
    };

    process::exit(code)
}
