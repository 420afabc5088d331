use crate::command::setup::config::ProjectConfig;
use crate::constants::{ChainSelection, ProjectConstants, TokenLimit};
use crate::options::{EvmAddress, Hooks, ProjectName, ProjectType};
use crate::registry::{ChainSlug, Network, Registry, Token};

#[derive(Debug)]
pub struct Welcome {
    pub registry: Registry,
}

#[derive(Debug)]
pub struct ProjectDescribed {
    pub registry: Registry,
    pub project_type: ProjectType,
    pub project_name: ProjectName,
    pub owner: EvmAddress,
    pub hook_type: Hooks,
    pub network: Network,
}

#[derive(Debug)]
pub struct ProjectConfigured {
    pub registry: Registry,
    pub config: ProjectConfig,
}

#[derive(Debug)]
pub struct ChainsSelected {
    pub registry: Registry,
    pub config: ProjectConfig,
    pub selection: ChainSelection,
}

#[derive(Debug)]
pub struct EnumsUpdated {
    pub registry: Registry,
    pub config: ProjectConfig,
    pub selection: ChainSelection,
    pub all_chains: Vec<ChainSlug>,
}

#[derive(Debug)]
pub struct TokensSelected {
    pub registry: Registry,
    pub config: ProjectConfig,
    pub selection: ChainSelection,
    pub all_chains: Vec<ChainSlug>,
    pub tokens: Vec<Token>,
}

#[derive(Debug)]
pub struct EnvFileBuilt {
    pub registry: Registry,
    pub config: ProjectConfig,
    pub selection: ChainSelection,
    pub tokens: Vec<Token>,
}

#[derive(Debug)]
pub struct LimitsCollected {
    pub registry: Registry,
    pub config: ProjectConfig,
    pub selection: ChainSelection,
    pub token_limits: Vec<TokenLimit>,
}

#[derive(Debug)]
pub struct ConstantsAssembled {
    pub registry: Registry,
    pub config: ProjectConfig,
    pub constants: ProjectConstants,
}

#[derive(Debug)]
pub struct SetupCompleted {
    pub config: ProjectConfig,
    pub constants: ProjectConstants,
}
