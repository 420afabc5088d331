//! The project constants consumed by the deployment scripts, and how they
//! are assembled from the answers to `plugs setup`.

mod assemble;

use std::collections::BTreeMap;

use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::options::Hooks;
use crate::registry::{ChainSlug, Token};

pub use assemble::assemble;

#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeploymentMode {
    Prod,
    Dev,
    Surge,
}

impl DeploymentMode {
    pub const fn member(&self) -> &'static str {
        match self {
            DeploymentMode::Prod => "PROD",
            DeploymentMode::Dev => "DEV",
            DeploymentMode::Surge => "SURGE",
        }
    }
}

/// How a bridge moves messages between two chains.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum IntegrationType {
    #[serde(rename = "FAST")]
    Fast,
    #[serde(rename = "OPTIMISTIC")]
    Optimistic,
    #[serde(rename = "NATIVE_BRIDGE")]
    Native,
}

impl IntegrationType {
    pub const fn member(&self) -> &'static str {
        match self {
            IntegrationType::Fast => "fast",
            IntegrationType::Optimistic => "optimistic",
            IntegrationType::Native => "native",
        }
    }
}

/// Limits are kept as the decimal strings the operator entered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LimitInfo {
    pub sending_limit: String,
    pub receiving_limit: String,
}

impl LimitInfo {
    pub fn new(sending_limit: impl Into<String>, receiving_limit: impl Into<String>) -> Self {
        Self {
            sending_limit: sending_limit.into(),
            receiving_limit: receiving_limit.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TokenLimit {
    pub token: Token,
    pub limits: LimitInfo,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChainSelection {
    pub vault_chains: Vec<ChainSlug>,
    pub controller_chains: Vec<ChainSlug>,
}

impl ChainSelection {
    /// Vault chains followed by controller chains, without duplicates.
    pub fn all_chains(&self) -> Vec<ChainSlug> {
        self.vault_chains
            .iter()
            .chain(&self.controller_chains)
            .copied()
            .unique()
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HookConfig {
    pub hook_type: Hooks,
    pub limits_and_pool_id: BTreeMap<ChainSlug, BTreeMap<IntegrationType, LimitInfo>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenConstants {
    pub vault_chains: Vec<ChainSlug>,
    pub controller_chains: Vec<ChainSlug>,
    pub hook: HookConfig,
}

/// deployment mode → token → constants
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProjectConstants(BTreeMap<DeploymentMode, BTreeMap<Token, TokenConstants>>);

impl ProjectConstants {
    /// Constants holding an empty production mode, the one mode `assemble` fills.
    pub fn new_prod() -> Self {
        ProjectConstants(BTreeMap::from([(DeploymentMode::Prod, BTreeMap::new())]))
    }

    pub fn modes(&self) -> impl Iterator<Item = (&DeploymentMode, &BTreeMap<Token, TokenConstants>)> {
        self.0.iter()
    }

    pub fn get(&self, mode: DeploymentMode, token: &Token) -> Option<&TokenConstants> {
        self.0.get(&mode).and_then(|tokens| tokens.get(token))
    }

    pub(crate) fn insert(&mut self, mode: DeploymentMode, token: Token, constants: TokenConstants) {
        self.0.entry(mode).or_default().insert(token, constants);
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
