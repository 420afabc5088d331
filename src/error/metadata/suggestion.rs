use std::fmt::{self, Display};

use camino::Utf8PathBuf;
use plugs_std::Style;

/// `PlugsErrorSuggestion` contains possible suggestions for remedying specific errors.
#[derive(Clone, Debug)]
pub enum PlugsErrorSuggestion {
    SubmitIssue,
    PassEveryAnswerAsFlag,
    ProvideChecksummedAddress,
    ProvideLimits,
    ExplainCardinality,
    CheckNewTokenFlags,
    CheckOutputDir,
    FixOrRemoveFile(Utf8PathBuf),
    ListChains,
    ListTokens,
}

impl Display for PlugsErrorSuggestion {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        use PlugsErrorSuggestion::*;
        let suggestion = match self {
            SubmitIssue => {
                "This error was unexpected! Please submit an issue with any relevant details about what you were trying to do.".to_string()
            }
            PassEveryAnswerAsFlag => format!(
                "If you are not running in an interactive terminal, pass every answer as a flag. See {} for the full list.",
                Style::Command.paint("plugs setup --help")
            ),
            ProvideChecksummedAddress => {
                "Addresses are 40 hex characters, optionally prefixed with 0x. Mixed-case addresses must carry a valid EIP-55 checksum; an all-lowercase address is always accepted.".to_string()
            }
            ProvideLimits => format!(
                "Limits are plain decimal numbers, passed as {} once per selected token.",
                Style::Command.paint("--limit TOKEN=SENDING:RECEIVING")
            ),
            ExplainCardinality => format!(
                "Run {} for the chain and token counts each project type allows.",
                Style::Command.paint("plugs explain E001")
            ),
            CheckNewTokenFlags => format!(
                "Check the values passed to the {} flags.",
                Style::Command.paint("--new-token-*")
            ),
            CheckOutputDir => format!(
                "Make sure {} points at the root of your deployment repository.",
                Style::Command.paint("--output-dir")
            ),
            FixOrRemoveFile(path) => format!(
                "Fix the syntax of {} or remove it to start from the built-in tables.",
                Style::Path.paint(path.as_str())
            ),
            ListChains => format!(
                "Run {} to list the chains available on each network.",
                Style::Command.paint("plugs chains")
            ),
            ListTokens => format!(
                "Run {} to list the registered tokens.",
                Style::Command.paint("plugs tokens")
            ),
        };
        write!(formatter, "{}", &suggestion)
    }
}
