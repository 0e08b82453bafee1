//! Transcript sink infrastructure module

mod file;

pub use file::FileSink;
