mod config;
mod helpers;
mod states;
mod transitions;


use camino::Utf8Path;
use clap::Parser;
use serde::Serialize;

use crate::command::setup::states::{SetupCompleted, Welcome};
use crate::emit::{Emit, FsEmitter};
use crate::options::{
    ChainsOpt, HookOpt, LimitsOpt, NetworkOpt, NewTokenOpt, OwnerOpt, ProjectNameOpt,
    ProjectTypeOpt, TokensOpt,
};
use crate::registry::Registry;
use crate::utils::prompt::{Prompter, TermPrompter};
use crate::{PlugsOutput, PlugsResult};

#[derive(Debug, Clone, Default, Serialize, Parser)]
pub struct Setup {
    #[clap(flatten)]
    project_type: ProjectTypeOpt,

    #[clap(flatten)]
    project_name: ProjectNameOpt,

    #[clap(flatten)]
    owner: OwnerOpt,

    #[clap(flatten)]
    hook: HookOpt,

    #[clap(flatten)]
    network: NetworkOpt,

    #[clap(flatten)]
    new_token: NewTokenOpt,

    #[clap(flatten)]
    chains: ChainsOpt,

    #[clap(flatten)]
    tokens: TokensOpt,

    #[clap(flatten)]
    limits: LimitsOpt,

    /// Print the project constants instead of writing any file
    #[arg(long = "dry-run")]
    dry_run: bool,
}

impl Setup {
    pub fn run(&self, output_dir: &Utf8Path) -> PlugsResult<PlugsOutput> {
        let registry = Registry::load(output_dir)?;
        let mut prompter = TermPrompter::new();
        let mut emitter = FsEmitter::new(output_dir, self.dry_run);

        let completed = self.run_pipeline(&mut prompter, &mut emitter, registry)?;

        Ok(PlugsOutput::SetupComplete {
            project_name: completed.config.project_name.to_string(),
            artifacts: emitter.into_artifacts(),
            dry_run: self.dry_run,
            constants: completed.constants,
        })
    }

    fn run_pipeline(
        &self,
        prompter: &mut dyn Prompter,
        emitter: &mut dyn Emit,
        registry: Registry,
    ) -> PlugsResult<SetupCompleted> {
        Welcome::new(registry)
            .describe_project(
                prompter,
                &self.project_type,
                &self.project_name,
                &self.owner,
                &self.hook,
                &self.network,
            )?
            .define_new_token(prompter, &self.new_token)?
            .select_chains(prompter, &self.chains)?
            .update_enums(emitter)?
            .select_tokens(prompter, &self.tokens)?
            .build_env_file(emitter)?
            .collect_limits(prompter, &self.limits)?
            .assemble_constants()
            .generate_files(emitter)
    }
}
