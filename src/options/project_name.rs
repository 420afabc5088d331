use std::fmt;
use std::str::FromStr;

use clap::Parser;
use plugs_std::warnln;
use serde::{Deserialize, Serialize};

use crate::PlugsResult;
use crate::utils::prompt::Prompter;
use crate::validators::validate_project_name;

#[derive(Debug, Clone, Default, Serialize, Parser)]
pub struct ProjectNameOpt {
    /// Name of the project, used for the generated constants file and `.env`
    #[arg(long = "project-name")]
    project_name: Option<ProjectName>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProjectName(String);

impl ProjectName {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for ProjectName {
    type Err = String;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let input = input.trim();
        if validate_project_name(input) {
            Ok(ProjectName(input.to_string()))
        } else {
            Err(format!(
                "Invalid project name '{input}': use only letters, digits, '_' and '-'."
            ))
        }
    }
}

impl fmt::Display for ProjectName {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl ProjectNameOpt {
    pub fn get_project_name(&self) -> Option<ProjectName> {
        self.project_name.clone()
    }

    /// PROMPT UX:
    /// =========
    ///
    /// ? Enter project name (without spaces, use underscore instead of spaces, eg: socket_testnet)
    pub fn prompt_project_name(&self, prompter: &mut dyn Prompter) -> PlugsResult<ProjectName> {
        loop {
            let input = prompter.input(
                "Enter project name (without spaces, use underscore instead of spaces, eg: socket_testnet)",
                None,
            )?;
            match input.parse::<ProjectName>() {
                Ok(name) => return Ok(name),
                Err(err) => warnln!("{}", err),
            }
        }
    }

    pub fn get_or_prompt_project_name(
        &self,
        prompter: &mut dyn Prompter,
    ) -> PlugsResult<ProjectName> {
        if let Some(name) = self.get_project_name() {
            return Ok(name);
        }
        self.prompt_project_name(prompter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::prompt::{Answer, ScriptedPrompter};

    #[test]
    fn test_parse_errors_when_input_includes_spaces() {
        let result: Result<ProjectName, _> = "socket testnet".parse();
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_errors_when_input_is_empty() {
        let result: Result<ProjectName, _> = "  ".parse();
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_ok_when_input_uses_underscores() {
        let result: Result<ProjectName, _> = "socket_testnet".parse();
        assert_eq!(result.unwrap().as_str(), "socket_testnet");
    }

    #[test]
    fn test_prompt_asks_again_after_an_invalid_name() {
        let instance = ProjectNameOpt { project_name: None };
        let mut prompter = ScriptedPrompter::new([
            Answer::input("socket testnet"),
            Answer::input("socket_testnet"),
        ]);

        let result = instance.get_or_prompt_project_name(&mut prompter).unwrap();

        assert_eq!(result.as_str(), "socket_testnet");
        assert_eq!(prompter.asked.len(), 2);
    }

    #[test]
    fn test_get_project_name_with_preset_value() {
        let instance = ProjectNameOpt {
            project_name: "blast".parse::<ProjectName>().ok(),
        };
        let mut prompter = ScriptedPrompter::default();

        let result = instance.get_or_prompt_project_name(&mut prompter).unwrap();

        assert_eq!(result.as_str(), "blast");
        assert!(prompter.asked.is_empty());
    }
}
