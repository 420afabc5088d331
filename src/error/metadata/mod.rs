mod code;
mod suggestion;

pub use code::PlugsErrorCode;
pub use suggestion::PlugsErrorSuggestion;

use plugs_std::PlugsStdError;
use serde::Serialize;

use crate::registry::RegistryError;
use crate::validators::ValidationError;

/// Metadata contains extra information about specific errors.
/// Currently this includes an optional error `Code`
/// and an optional `Suggestion`.
#[derive(Default, Serialize, Debug)]
pub struct PlugsErrorMetadata {
    // skip serializing for now until we can appropriately strip color codes
    #[serde(skip_serializing)]
    pub suggestion: Option<PlugsErrorSuggestion>,
    pub code: Option<PlugsErrorCode>,

    // anyhow's debug implementation prints the error cause, most of the time we want this
    // but sometimes the cause is already included in the error message itself
    #[serde(skip_serializing)]
    pub skip_printing_cause: bool,
}

/// `Metadata` structs can be created from an `anyhow::Error`.
/// This works by downcasting the errors to their underlying types
/// and creating `Suggestion`s and `Code`s where applicable.
impl From<&mut anyhow::Error> for PlugsErrorMetadata {
    fn from(error: &mut anyhow::Error) -> Self {
        if let Some(validation_error) = error.downcast_ref::<ValidationError>() {
            let suggestion = match validation_error {
                ValidationError::Address { .. } => PlugsErrorSuggestion::ProvideChecksummedAddress,
                ValidationError::Limit { .. } => PlugsErrorSuggestion::ProvideLimits,
                ValidationError::VaultChains { .. }
                | ValidationError::ControllerChains { .. }
                | ValidationError::Tokens { .. } => PlugsErrorSuggestion::ExplainCardinality,
                ValidationError::Symbol { .. } | ValidationError::Decimals { .. } => {
                    PlugsErrorSuggestion::CheckNewTokenFlags
                }
            };
            return PlugsErrorMetadata {
                suggestion: Some(suggestion),
                code: Some(PlugsErrorCode::E001),
                skip_printing_cause: true,
            };
        }

        if error.downcast_ref::<dialoguer::Error>().is_some() {
            return PlugsErrorMetadata {
                suggestion: Some(PlugsErrorSuggestion::PassEveryAnswerAsFlag),
                code: Some(PlugsErrorCode::E002),
                skip_printing_cause: false,
            };
        }

        if let Some(std_error) = error.downcast_ref::<PlugsStdError>() {
            let (suggestion, code) = match std_error {
                PlugsStdError::AdhocError(_) => {
                    (Some(PlugsErrorSuggestion::SubmitIssue), Some(PlugsErrorCode::E003))
                }
                PlugsStdError::EmptyFile { .. } | PlugsStdError::PathIsDirectory { .. } => (
                    Some(PlugsErrorSuggestion::CheckOutputDir),
                    Some(PlugsErrorCode::E003),
                ),
            };
            return PlugsErrorMetadata {
                suggestion,
                code,
                skip_printing_cause: false,
            };
        }

        if let Some(registry_error) = error.downcast_ref::<RegistryError>() {
            let (suggestion, code) = match registry_error {
                RegistryError::Malformed { path, .. } => (
                    Some(PlugsErrorSuggestion::FixOrRemoveFile(path.clone())),
                    PlugsErrorCode::E004,
                ),
                RegistryError::UnknownToken { .. } => {
                    (Some(PlugsErrorSuggestion::ListTokens), PlugsErrorCode::E005)
                }
                RegistryError::ChainNotOnNetwork { .. } => {
                    (Some(PlugsErrorSuggestion::ListChains), PlugsErrorCode::E005)
                }
                RegistryError::DuplicateToken { .. } => {
                    (Some(PlugsErrorSuggestion::ListTokens), PlugsErrorCode::E005)
                }
                RegistryError::MissingRpcKey { .. } => {
                    (Some(PlugsErrorSuggestion::SubmitIssue), PlugsErrorCode::E005)
                }
            };
            return PlugsErrorMetadata {
                suggestion,
                code: Some(code),
                skip_printing_cause: false,
            };
        }

        if error.downcast_ref::<serde_json::Error>().is_some()
            || error.downcast_ref::<dotenvy::Error>().is_some()
        {
            return PlugsErrorMetadata {
                suggestion: None,
                code: Some(PlugsErrorCode::E004),
                skip_printing_cause: false,
            };
        }

        PlugsErrorMetadata::default()
    }
}

#[cfg(test)]
mod tests {
    use anyhow::anyhow;
    use camino::Utf8PathBuf;
    use rstest::rstest;

    use super::*;
    use crate::options::ProjectType;
    use crate::registry::Network;

    fn code_of(error: impl Into<anyhow::Error>) -> Option<PlugsErrorCode> {
        let mut error = error.into();
        PlugsErrorMetadata::from(&mut error).code
    }

    #[test]
    fn validation_errors_are_e001() {
        let error = ValidationError::Tokens {
            project_type: ProjectType::SuperToken,
            rule: "exactly one",
            found: 2,
        };
        assert_eq!(code_of(error), Some(PlugsErrorCode::E001));
    }

    #[rstest]
    #[case(RegistryError::UnknownToken { token: "NOPE".to_string() }, PlugsErrorCode::E005)]
    #[case(
        RegistryError::ChainNotOnNetwork { chain: "SEPOLIA".to_string(), network: Network::Mainnet },
        PlugsErrorCode::E005
    )]
    fn registry_errors_have_codes(#[case] error: RegistryError, #[case] expected: PlugsErrorCode) {
        assert_eq!(code_of(error), Some(expected));
    }

    #[test]
    fn malformed_files_are_e004() {
        let source = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let error = RegistryError::Malformed {
            path: Utf8PathBuf::from("src/enums/registry.json"),
            source,
        };
        assert_eq!(code_of(error), Some(PlugsErrorCode::E004));
    }

    #[test]
    fn file_system_errors_are_e003() {
        let error = PlugsStdError::PathIsDirectory {
            path: Utf8PathBuf::from("."),
        };
        assert_eq!(code_of(error), Some(PlugsErrorCode::E003));
    }

    #[test]
    fn other_errors_have_no_metadata() {
        assert_eq!(code_of(anyhow!("boom")), None);
    }
}
