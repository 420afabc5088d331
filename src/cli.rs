use std::process::ExitCode;

use camino::Utf8PathBuf;
use clap::builder::{PossibleValuesParser, TypedValueParser};
use clap::{Parser, Subcommand, ValueEnum};
use timber::{LEVELS, Level};

use crate::command::output::JsonOutput;
use crate::command;
use crate::utils::env::{PlugsEnv, PlugsEnvKey};
use crate::{PlugsError, PlugsOutput, PlugsResult};

#[derive(Debug, Parser)]
#[command(
    name = "plugs",
    version,
    about = "
Plugs - SuperBridge and SuperToken deployment configuration

Generate the configuration for a new project by running:

    $ plugs setup

Every question can be answered up front with a flag, so a run can be
scripted end to end:

    $ plugs setup --project-type supertoken --project-name my_token ...

List the chains and tokens plugs knows about with:

    $ plugs chains
    $ plugs tokens
"
)]
pub struct Plugs {
    #[command(subcommand)]
    pub command: Command,

    /// Specify plugs' log level
    #[arg(
        long = "log",
        short = 'l',
        global = true,
        ignore_case = true,
        value_parser = PossibleValuesParser::new(LEVELS).try_map(|level| level.parse::<Level>())
    )]
    log_level: Option<Level>,

    /// Specify plugs' output type
    #[arg(long = "format", global = true, value_enum, default_value = "plain")]
    format: FormatType,

    /// Root of the deployment repository the generated files are written to.
    /// Falls back to $PLUGS_OUTPUT_DIR, then the current directory.
    #[arg(long = "output-dir", global = true)]
    output_dir: Option<Utf8PathBuf>,

    #[arg(skip)]
    env_store: PlugsEnv,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum FormatType {
    Plain,
    Json,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Generate the deployment configuration of a SuperBridge or SuperToken project
    Setup(command::Setup),

    /// List the chains plugs can deploy to
    Chains(command::Chains),

    /// List the registered tokens
    Tokens(command::Tokens),

    /// Explain error codes
    Explain(command::Explain),
}

impl Plugs {
    pub fn run_from_args() -> ExitCode {
        Plugs::parse().run_and_print()
    }

    fn run_and_print(&self) -> ExitCode {
        timber::init(self.log_level());
        tracing::trace!(command_structure = ?self);

        match self.run() {
            Ok(output) => match self.print_output(&output) {
                Ok(()) => ExitCode::SUCCESS,
                Err(error) => {
                    tracing::debug!(?error);
                    ExitCode::FAILURE
                }
            },
            Err(error) => {
                tracing::debug!(?error);
                let printed = match self.format {
                    FormatType::Plain => error.print(),
                    FormatType::Json => JsonOutput::from(error).print(),
                };
                if let Err(io_error) = printed {
                    tracing::debug!(?io_error);
                }
                ExitCode::FAILURE
            }
        }
    }

    pub fn run(&self) -> PlugsResult<PlugsOutput> {
        let output_dir = self.output_dir()?;
        tracing::debug!(%output_dir);
        match &self.command {
            Command::Setup(command) => command.run(&output_dir),
            Command::Chains(command) => command.run(&output_dir),
            Command::Tokens(command) => command.run(&output_dir),
            Command::Explain(command) => command.run(),
        }
    }

    fn print_output(&self, output: &PlugsOutput) -> PlugsResult<()> {
        match self.format {
            FormatType::Plain => output.print(),
            FormatType::Json => output.print_json().map_err(PlugsError::from),
        }
    }

    /// `--log`, then $PLUGS_LOG. Unparseable env values are ignored.
    fn log_level(&self) -> Option<Level> {
        self.log_level.or_else(|| {
            self.env_store
                .get(PlugsEnvKey::Log)
                .ok()
                .flatten()
                .and_then(|level| level.parse().ok())
        })
    }

    pub(crate) fn output_dir(&self) -> PlugsResult<Utf8PathBuf> {
        if let Some(output_dir) = &self.output_dir {
            return Ok(output_dir.clone());
        }
        Ok(self
            .env_store
            .get(PlugsEnvKey::OutputDir)?
            .map(Utf8PathBuf::from)
            .unwrap_or_else(|| Utf8PathBuf::from(".")))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[test]
    fn the_output_dir_flag_wins_over_the_environment() {
        let mut plugs = Plugs::try_parse_from(["plugs", "tokens", "--output-dir", "deploy"]).unwrap();
        plugs.env_store.insert(PlugsEnvKey::OutputDir, "elsewhere");
        assert_eq!(plugs.output_dir().unwrap(), Utf8PathBuf::from("deploy"));
    }

    #[test]
    fn the_output_dir_falls_back_to_the_environment() {
        let mut plugs = Plugs::try_parse_from(["plugs", "tokens"]).unwrap();
        assert_eq!(plugs.output_dir().unwrap(), Utf8PathBuf::from("."));
        plugs.env_store.insert(PlugsEnvKey::OutputDir, "elsewhere");
        assert_eq!(plugs.output_dir().unwrap(), Utf8PathBuf::from("elsewhere"));
    }

    #[rstest]
    #[case(&["plugs", "-l", "DEBUG", "tokens"], Some(Level::DEBUG))]
    #[case(&["plugs", "chains", "--log", "warn"], Some(Level::WARN))]
    #[case(&["plugs", "chains"], None)]
    fn it_parses_log_levels(#[case] args: &[&str], #[case] expected: Option<Level>) {
        let plugs = Plugs::try_parse_from(args.iter().copied()).unwrap();
        assert_eq!(plugs.log_level(), expected);
    }

    #[test]
    fn the_log_level_falls_back_to_the_environment() {
        let mut plugs = Plugs::try_parse_from(["plugs", "tokens"]).unwrap();
        plugs.env_store.insert(PlugsEnvKey::Log, "trace");
        assert_eq!(plugs.log_level(), Some(Level::TRACE));
    }

    #[test]
    fn it_rejects_unknown_log_levels() {
        assert!(Plugs::try_parse_from(["plugs", "-l", "loud", "tokens"]).is_err());
    }

    #[test]
    fn the_cli_is_well_formed() {
        use clap::CommandFactory;
        Plugs::command().debug_assert();
    }
}
