pub mod api_types;
pub mod config;
pub mod document;
pub mod error;
pub mod outcome;
pub mod parser;

pub use config::AppConfig;
pub use document::{ContentKind, InputUnit, PASTED_TEXT_LABEL};
pub use error::ExtractError;
pub use outcome::{BatchReport, BatchResultMap, ParseOutcome, ProcessingResult};
pub use parser::DocumentParser;
