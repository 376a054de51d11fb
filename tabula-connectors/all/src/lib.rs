mod container;
pub use container::*;
