pub mod env;
pub mod prompt;
pub mod table;
