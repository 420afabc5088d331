pub mod cli;
pub mod command;
pub mod constants;
pub mod emit;
mod error;
pub mod options;
pub mod registry;
mod utils;
pub mod validators;

pub use command::output::PlugsOutput;
pub use error::{PlugsError, PlugsErrorCode, PlugsErrorSuggestion, PlugsResult};
