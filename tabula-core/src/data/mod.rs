mod column;
mod output;
mod table;

pub use column::*;
pub use output::*;
pub use table::*;
