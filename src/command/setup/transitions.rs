use crate::PlugsResult;
use crate::command::setup::config::ProjectConfig;
use crate::command::setup::helpers::{
    display_chain_summary, display_new_chains, display_new_token, display_token_limits,
    display_welcome_message,
};
use crate::command::setup::states::*;
use crate::constants::assemble;
use crate::emit::Emit;
use crate::options::{
    ChainsOpt, HookOpt, LimitsOpt, NetworkOpt, NewTokenOpt, OwnerOpt, ProjectNameOpt,
    ProjectTypeOpt, TokensOpt,
};
use crate::registry::{Registry, Token};
use crate::utils::prompt::Prompter;

/// PROMPT UX:
/// =========
///
/// ==> Welcome! This command generates the configuration to deploy a SuperBridge or SuperToken.
///
/// ? Select project type
/// ? Enter project name (without spaces, use underscore instead of spaces, eg: socket_testnet)
/// ? Enter owner Address (Owner will be the deployer initially to configure roles)
/// ? Select Hook type (Recommended: Limit Hook)
/// ? Is the deployment for mainnet? (y/N)
impl Welcome {
    pub fn new(registry: Registry) -> Self {
        Welcome { registry }
    }

    pub fn describe_project(
        self,
        prompter: &mut dyn Prompter,
        project_type: &ProjectTypeOpt,
        project_name: &ProjectNameOpt,
        owner: &OwnerOpt,
        hook: &HookOpt,
        network: &NetworkOpt,
    ) -> PlugsResult<ProjectDescribed> {
        display_welcome_message();

        let project_type = project_type.get_or_prompt_project_type(prompter)?;
        let project_name = project_name.get_or_prompt_project_name(prompter)?;
        let owner = owner.get_or_prompt_owner(prompter)?;
        let hook_type = hook.get_or_prompt_hook(prompter)?;
        let network = network.get_or_prompt_network(prompter)?;
        tracing::debug!(%project_type, %project_name, %owner, %hook_type, %network);

        Ok(ProjectDescribed {
            registry: self.registry,
            project_type,
            project_name,
            owner,
            hook_type,
            network,
        })
    }
}

/// PROMPT UX:
/// =========
///
/// ? Want to add a new token? (select yes if you have an already deployed token) (y/N)
/// ? Enter token name
/// ? Enter token symbol
/// ? Enter token decimals
/// ? Select chain where token is deployed
/// ? Enter token address
impl ProjectDescribed {
    pub fn define_new_token(
        self,
        prompter: &mut dyn Prompter,
        options: &NewTokenOpt,
    ) -> PlugsResult<ProjectConfigured> {
        let new_token = options.get_or_prompt_new_token(prompter, &self.registry, self.network)?;
        if let Some(new_token) = &new_token {
            display_new_token(new_token);
        }
        Ok(ProjectConfigured {
            registry: self.registry,
            config: ProjectConfig {
                project_type: self.project_type,
                project_name: self.project_name,
                owner: self.owner,
                hook_type: self.hook_type,
                network: self.network,
                new_token,
            },
        })
    }
}

/// PROMPT UX:
/// =========
///
/// ? Select vault chains (check README for more info)
/// ? Select controller chains (check README for more info)
impl ProjectConfigured {
    pub fn select_chains(
        self,
        prompter: &mut dyn Prompter,
        options: &ChainsOpt,
    ) -> PlugsResult<ChainsSelected> {
        let selection = options.get_or_prompt_chains(
            prompter,
            &self.registry,
            self.config.project_type,
            self.config.network,
        )?;
        display_chain_summary(&selection);
        Ok(ChainsSelected {
            registry: self.registry,
            config: self.config,
            selection,
        })
    }
}

impl ChainsSelected {
    /// Registers the project, the new token and RPC keys for chains that have none.
    pub fn update_enums(mut self, emitter: &mut dyn Emit) -> PlugsResult<EnumsUpdated> {
        let all_chains = self.selection.all_chains();
        let new_chains = self.registry.chains_without_rpc_key(&all_chains);
        emitter.update_enums(
            &mut self.registry,
            &self.config.project_name,
            self.config.new_token.as_ref(),
            &new_chains,
        )?;
        display_new_chains(&self.registry, &new_chains);
        Ok(EnumsUpdated {
            registry: self.registry,
            config: self.config,
            selection: self.selection,
            all_chains,
        })
    }
}

/// PROMPT UX:
/// =========
///
/// ? Select tokens to connect
/// [ ] Moon
/// [ ] USDC
/// ...
impl EnumsUpdated {
    pub fn select_tokens(
        self,
        prompter: &mut dyn Prompter,
        options: &TokensOpt,
    ) -> PlugsResult<TokensSelected> {
        let tokens =
            options.get_or_prompt_tokens(prompter, &self.registry, self.config.project_type)?;
        Ok(TokensSelected {
            registry: self.registry,
            config: self.config,
            selection: self.selection,
            all_chains: self.all_chains,
            tokens,
        })
    }
}

impl TokensSelected {
    pub fn build_env_file(self, emitter: &mut dyn Emit) -> PlugsResult<EnvFileBuilt> {
        emitter.build_env_file(
            &self.registry,
            &self.config.project_name,
            self.config.project_type,
            &self.config.owner,
            &self.tokens,
            &self.all_chains,
        )?;
        Ok(EnvFileBuilt {
            registry: self.registry,
            config: self.config,
            selection: self.selection,
            tokens: self.tokens,
        })
    }
}

/// PROMPT UX:
/// =========
///
/// ? Enter sending limit for LOOKS
/// ? Enter receiving limit for LOOKS
impl EnvFileBuilt {
    pub fn collect_limits(
        self,
        prompter: &mut dyn Prompter,
        options: &LimitsOpt,
    ) -> PlugsResult<LimitsCollected> {
        let token_limits = options.get_or_prompt_limits(prompter, &self.registry, &self.tokens)?;
        display_token_limits(&token_limits);
        Ok(LimitsCollected {
            registry: self.registry,
            config: self.config,
            selection: self.selection,
            token_limits,
        })
    }
}

impl LimitsCollected {
    pub fn assemble_constants(self) -> ConstantsAssembled {
        let constants = assemble(&self.selection, &self.token_limits, self.config.hook_type);
        ConstantsAssembled {
            registry: self.registry,
            config: self.config,
            constants,
        }
    }
}

impl ConstantsAssembled {
    /// Writes the constants module and, for a new token, its deployed address.
    pub fn generate_files(self, emitter: &mut dyn Emit) -> PlugsResult<SetupCompleted> {
        emitter.generate_constants_file(
            &self.registry,
            self.config.project_type,
            &self.config.project_name,
            &self.constants,
        )?;
        if let Some(new_token) = &self.config.new_token {
            emitter.generate_token_addresses_file(
                &self.registry,
                new_token.chain_slug,
                &Token::new(new_token.symbol.clone()),
                &new_token.address,
            )?;
        }
        Ok(SetupCompleted {
            config: self.config,
            constants: self.constants,
        })
    }
}
