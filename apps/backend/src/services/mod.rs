pub mod preferences;
pub mod sessions;
