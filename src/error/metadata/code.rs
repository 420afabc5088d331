use std::collections::HashMap;
use std::fmt::{self, Display};

use serde::Serialize;
use strum::IntoEnumIterator;
use strum_macros::{EnumIter, EnumString};

/// `PlugsErrorCode` contains the error codes associated with specific errors.
#[derive(
    Debug, Copy, Clone, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize, EnumString, EnumIter,
)]
pub enum PlugsErrorCode {
    E001,
    E002,
    E003,
    E004,
    E005,
}

impl Display for PlugsErrorCode {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{:?}", &self)
    }
}

impl PlugsErrorCode {
    // builds a Map of every possible code and its explanation, so we can
    // access from the `explain` function
    fn explanations() -> HashMap<PlugsErrorCode, &'static str> {
        HashMap::from([
            (PlugsErrorCode::E001, include_str!("./codes/E001.md")),
            (PlugsErrorCode::E002, include_str!("./codes/E002.md")),
            (PlugsErrorCode::E003, include_str!("./codes/E003.md")),
            (PlugsErrorCode::E004, include_str!("./codes/E004.md")),
            (PlugsErrorCode::E005, include_str!("./codes/E005.md")),
        ])
    }

    /// For a given error code, returns a markdown string with a given error's
    /// explanation. Explanations are in ./codes
    pub fn explain(&self) -> String {
        match Self::explanations().get(self) {
            Some(explanation) => format!("**{}**\n\n{}\n\n", &self, explanation.trim()),
            None => "Explanation not available".to_string(),
        }
    }

    pub fn all() -> Vec<PlugsErrorCode> {
        PlugsErrorCode::iter().collect()
    }
}
