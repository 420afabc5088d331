use std::fmt::{self, Display};
use std::str::FromStr;

use clap::{Parser, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::PlugsResult;
use crate::utils::prompt::Prompter;

#[derive(Debug, Clone, Default, Serialize, Parser)]
pub struct ProjectTypeOpt {
    /// Whether to bridge an existing token or deploy a new one across chains
    #[arg(long = "project-type", value_enum)]
    pub project_type: Option<ProjectType>,
}

impl ProjectTypeOpt {
    pub fn get_project_type(&self) -> Option<ProjectType> {
        self.project_type
    }

    /// PROMPT UX:
    /// =========
    ///
    /// ? Select project type
    /// > SuperBridge
    ///   SuperToken
    pub fn prompt_project_type(&self, prompter: &mut dyn Prompter) -> PlugsResult<ProjectType> {
        let project_types = <ProjectType as ValueEnum>::value_variants();
        let items: Vec<String> = project_types.iter().map(ToString::to_string).collect();
        let selection = prompter.select("Select project type", &items, 0)?;
        Ok(project_types[selection])
    }

    pub fn get_or_prompt_project_type(
        &self,
        prompter: &mut dyn Prompter,
    ) -> PlugsResult<ProjectType> {
        if let Some(project_type) = self.get_project_type() {
            return Ok(project_type);
        }
        self.prompt_project_type(prompter)
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ProjectType {
    #[value(name = "superbridge")]
    SuperBridge,
    #[value(name = "supertoken")]
    SuperToken,
}

impl ProjectType {
    /// The directory the project's constants module is generated into.
    pub const fn constants_dir(&self) -> &'static str {
        match self {
            ProjectType::SuperBridge => "superbridge",
            ProjectType::SuperToken => "supertoken",
        }
    }
}

impl Display for ProjectType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let readable = match self {
            ProjectType::SuperBridge => "SuperBridge",
            ProjectType::SuperToken => "SuperToken",
        };
        write!(f, "{}", readable)
    }
}

impl FromStr for ProjectType {
    type Err = String;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        <ProjectType as ValueEnum>::from_str(input.trim(), true)
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;
    use crate::utils::prompt::{Answer, ScriptedPrompter};

    #[rstest]
    #[case("superbridge", Some(ProjectType::SuperBridge))]
    #[case("SUPERTOKEN", Some(ProjectType::SuperToken))]
    #[case("SuperToken", Some(ProjectType::SuperToken))]
    #[case("supercoin", None)]
    #[case("", None)]
    fn it_parses_project_types(#[case] input: &str, #[case] expected: Option<ProjectType>) {
        assert_eq!(input.parse::<ProjectType>().ok(), expected);
    }

    #[test]
    fn it_uses_the_preset_project_type() {
        let opt = ProjectTypeOpt {
            project_type: Some(ProjectType::SuperBridge),
        };
        let mut prompter = ScriptedPrompter::default();
        let project_type = opt.get_or_prompt_project_type(&mut prompter).unwrap();
        assert_eq!(project_type, ProjectType::SuperBridge);
        assert!(prompter.asked.is_empty());
    }

    #[test]
    fn it_prompts_for_a_missing_project_type() {
        let opt = ProjectTypeOpt::default();
        let mut prompter = ScriptedPrompter::new([Answer::pick(&["SuperToken"])]);
        let project_type = opt.get_or_prompt_project_type(&mut prompter).unwrap();
        assert_eq!(project_type, ProjectType::SuperToken);
        assert_eq!(prompter.asked, ["Select project type"]);
    }

    #[test]
    fn it_names_the_constants_directory() {
        assert_eq!(ProjectType::SuperBridge.constants_dir(), "superbridge");
        assert_eq!(ProjectType::SuperToken.constants_dir(), "supertoken");
    }
}
