pub mod batch_reader;
pub mod batcher;
pub mod error;
