pub mod capability;
pub mod metadata;
