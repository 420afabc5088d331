use clap::Parser;
use serde::Serialize;

use crate::{PlugsErrorCode, PlugsOutput, PlugsResult};

#[derive(Debug, Serialize, Parser)]
pub struct Explain {
    /// The full error code. For example, E001
    #[arg(value_name = "CODE")]
    code: PlugsErrorCode,
}

impl Explain {
    pub fn run(&self) -> PlugsResult<PlugsOutput> {
        Ok(PlugsOutput::ErrorExplanation(self.code.explain()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_explains_a_code() {
        let explain = Explain::try_parse_from(["explain", "E001"]).unwrap();
        let output = explain.run().unwrap();
        assert!(matches!(
            output,
            PlugsOutput::ErrorExplanation(explanation) if explanation.starts_with("**E001**")
        ));
    }

    #[test]
    fn it_rejects_unknown_codes() {
        assert!(Explain::try_parse_from(["explain", "E999"]).is_err());
    }
}
