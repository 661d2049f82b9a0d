pub mod format;
pub mod id;
