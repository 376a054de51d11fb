mod capability;
pub use capability::*;
mod column_searcher;
pub use column_searcher::*;
mod executor;
pub use executor::*;
