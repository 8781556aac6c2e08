//! CLI command implementations

pub mod harvest;
pub mod init;
pub mod validate;
