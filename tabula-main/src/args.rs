use std::path::PathBuf;

use clap::{Args, Parser};

/// Guarded SQL synthesis for interactive data browsing
#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
pub enum Command {
    /// Checks whether SQL text is a single, read-only SELECT statement
    Classify(ClassifyArgs),
    /// Prints the SQL of a view after applying its refresh payloads
    Synthesize(SynthesizeArgs),
}

#[derive(Args, Debug)]
pub struct ClassifyArgs {
    /// The SQL to classify, read from stdin when omitted
    #[clap(short, long, value_parser)]
    pub sql: Option<String>,
}

#[derive(Args, Debug)]
pub struct SynthesizeArgs {
    /// The path of the main configuration file
    #[clap(short, long, value_parser)]
    pub config: PathBuf,
    /// The path of the view definition
    #[clap(short, long, value_parser)]
    pub view: PathBuf,
    /// The id of the data source, overrides the source of the view definition
    #[clap(short, long, value_parser)]
    pub source: Option<String>,
}
