//! Note storage infrastructure module

mod json_file;

pub use json_file::JsonFileStorage;
