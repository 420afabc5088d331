use std::fmt::{self, Debug, Display};
use std::io;

use calm_io::{stderrln, stdoutln};
use camino::Utf8PathBuf;
use comfy_table::Cell;
use plugs_std::{Emoji, Style};
use serde::Serialize;
use serde_json::{Value, json};
use termimad::MadSkin;

use crate::constants::ProjectConstants;
use crate::registry::{ChainInfo, TokenEntry};
use crate::utils::table;
use crate::{PlugsError, PlugsResult};

/// PlugsOutput defines all of the different types of data that are printed
/// to `stdout`. Every one of plugs' commands should return `PlugsResult<PlugsOutput>`.
/// If the command needs to output some type of data, it should be structured
/// in this enum, and its print logic should be handled in `PlugsOutput::get_stdout`.
///
/// Not all commands will output machine readable information, and those should
/// return `Ok(PlugsOutput::EmptySuccess)`. If a new command is added and it needs to
/// return something that is not described well in this enum, it should be added.
#[derive(Clone, PartialEq, Debug)]
pub enum PlugsOutput {
    SetupComplete {
        project_name: String,
        artifacts: Vec<Utf8PathBuf>,
        dry_run: bool,
        constants: ProjectConstants,
    },
    ChainList(Vec<ChainInfo>),
    TokenList(Vec<TokenEntry>),
    ErrorExplanation(String),
    EmptySuccess,
}

impl PlugsOutput {
    pub fn get_stdout(&self) -> PlugsResult<Option<String>> {
        Ok(match self {
            PlugsOutput::SetupComplete {
                artifacts,
                dry_run,
                constants,
                ..
            } => {
                if *dry_run {
                    Some(constants.to_json()?)
                } else {
                    Some(
                        artifacts
                            .iter()
                            .map(|artifact| artifact.to_string())
                            .collect::<Vec<_>>()
                            .join("\n"),
                    )
                }
            }
            PlugsOutput::ChainList(chains) => {
                let mut table = table::get_table();
                table.set_header(vec!["Slug", "Chain", "Network", "RPC key"]);
                for chain in chains {
                    table.add_row(vec![
                        Cell::new(chain.slug),
                        Cell::new(chain.key),
                        Cell::new(chain.network),
                        Cell::new(chain.rpc_key.as_deref().unwrap_or("-")),
                    ]);
                }
                Some(table.to_string())
            }
            PlugsOutput::TokenList(tokens) => {
                let mut table = table::get_table();
                table.set_header(vec!["Key", "Symbol", "Decimals", "Name"]);
                for token in tokens {
                    table.add_row(vec![
                        Cell::new(&token.key),
                        Cell::new(&token.symbol),
                        Cell::new(token.decimals),
                        Cell::new(token.name.as_deref().unwrap_or("")),
                    ]);
                }
                Some(table.to_string())
            }
            PlugsOutput::ErrorExplanation(explanation) => {
                // underline bolded md
                let mut skin = MadSkin::default();
                skin.bold.add_attr(termimad::crossterm::style::Attribute::Underlined);
                Some(skin.term_text(explanation).to_string())
            }
            PlugsOutput::EmptySuccess => None,
        })
    }

    /// Progress that belongs on stderr, printed before the stdout payload.
    fn get_stderr(&self) -> Option<String> {
        match self {
            PlugsOutput::SetupComplete {
                project_name,
                dry_run: true,
                ..
            } => Some(format!(
                "{}Dry run for {}, nothing was written. The project constants would be:",
                Emoji::Memo,
                Style::Heading.paint(project_name)
            )),
            PlugsOutput::SetupComplete {
                project_name,
                artifacts,
                dry_run: false,
                ..
            } => Some(format!(
                "{}Configured {} ({} files written):",
                Emoji::Rocket,
                Style::Heading.paint(project_name),
                artifacts.len()
            )),
            PlugsOutput::TokenList(tokens) if tokens.is_empty() => {
                Some("No tokens are registered.".to_string())
            }
            _ => None,
        }
    }

    pub fn get_internal_data_json(&self) -> Value {
        match self {
            PlugsOutput::SetupComplete {
                project_name,
                artifacts,
                dry_run,
                constants,
            } => json!({
                "project_name": project_name,
                "artifacts": artifacts,
                "dry_run": dry_run,
                "constants": constants,
            }),
            PlugsOutput::ChainList(chains) => json!({ "chains": chains }),
            PlugsOutput::TokenList(tokens) => json!({ "tokens": tokens }),
            PlugsOutput::ErrorExplanation(explanation) => json!({ "explanation": explanation }),
            PlugsOutput::EmptySuccess => json!(null),
        }
    }

    pub fn get_json_version(&self) -> JsonVersion {
        JsonVersion::default()
    }

    pub fn print(&self) -> PlugsResult<()> {
        if let Some(stderr) = self.get_stderr() {
            stderrln!("{}", stderr)?;
        }
        if let Some(stdout) = self.get_stdout()? {
            stdoutln!("{}", stdout)?;
        }
        Ok(())
    }

    pub fn print_json(&self) -> io::Result<()> {
        JsonOutput::from(self.clone()).print()
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct JsonOutput {
    json_version: JsonVersion,
    data: JsonData,
    error: Value,
}

impl JsonOutput {
    pub fn success(data: Value, error: Value, json_version: JsonVersion) -> JsonOutput {
        JsonOutput {
            json_version,
            data: JsonData::success(data),
            error,
        }
    }

    pub fn failure(data: Value, error: Value, json_version: JsonVersion) -> JsonOutput {
        JsonOutput {
            json_version,
            data: JsonData::failure(data),
            error,
        }
    }

    pub fn print(&self) -> io::Result<()> {
        stdoutln!("{}", self)
    }
}

impl Display for JsonOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", json!(self))
    }
}

impl From<PlugsError> for JsonOutput {
    fn from(error: PlugsError) -> Self {
        let error_json = error.get_internal_error_json();
        JsonOutput::failure(json!(null), error_json, JsonVersion::default())
    }
}

impl From<PlugsOutput> for JsonOutput {
    fn from(output: PlugsOutput) -> Self {
        let data = output.get_internal_data_json();
        JsonOutput::success(data, json!(null), output.get_json_version())
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct JsonData {
    #[serde(flatten)]
    inner: Value,
    success: bool,
}

impl JsonData {
    pub(crate) fn success(inner: Value) -> JsonData {
        JsonData {
            inner,
            success: true,
        }
    }

    pub(crate) fn failure(inner: Value) -> JsonData {
        JsonData {
            inner,
            success: false,
        }
    }
}

#[derive(Debug, Clone, Serialize, Default)]
pub enum JsonVersion {
    #[serde(rename = "1")]
    #[default]
    One,
}
