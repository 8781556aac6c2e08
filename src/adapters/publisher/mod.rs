//! Publishing backends
//!
//! - [`traits`] - the [`Publisher`] seam
//! - [`json_file`] - writes each pair to a JSON document

pub mod json_file;
pub mod traits;

pub use json_file::JsonFilePublisher;
pub use traits::Publisher;
