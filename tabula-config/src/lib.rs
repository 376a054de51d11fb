//! Loads tabula's yaml configuration, resolving `${...}` interpolations in
//! string values before deserializing.

mod interpolation;
pub mod loader;

pub use loader::ConfigLoader;
