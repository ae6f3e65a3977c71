pub mod artifact_reader;
pub mod artifact_writer;
pub mod file_lock;
