// src/lib.rs
pub mod classify;
pub mod colors;
pub mod config;
pub mod error;
pub mod processor;
pub mod project;
pub mod render;
pub mod stacktrace;
pub mod timestamp;

pub use classify::{classify_line, RecordShape};
pub use colors::ColorScheme;
pub use config::ProcessorConfig;
pub use error::{LineError, ProcessingError};
pub use processor::Processor;
pub use project::{DetailBlocks, HeaderParts};
