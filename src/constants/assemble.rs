use std::collections::BTreeMap;

use super::{
    ChainSelection, DeploymentMode, HookConfig, IntegrationType, ProjectConstants, TokenConstants,
    TokenLimit,
};
use crate::options::Hooks;

/// Builds the constants for every selected token: each token gets its limits
/// on every chain of the selection under the `fast` integration, all nested
/// under the production deployment mode.
pub fn assemble(
    selection: &ChainSelection,
    token_limits: &[TokenLimit],
    hook_type: Hooks,
) -> ProjectConstants {
    let all_chains = selection.all_chains();
    let mut constants = ProjectConstants::new_prod();

    for TokenLimit { token, limits } in token_limits {
        let limits_and_pool_id = all_chains
            .iter()
            .map(|chain| (*chain, BTreeMap::from([(IntegrationType::Fast, limits.clone())])))
            .collect();
        tracing::debug!(%token, chains = all_chains.len(), "assembled limits");
        constants.insert(
            DeploymentMode::Prod,
            token.clone(),
            TokenConstants {
                vault_chains: selection.vault_chains.clone(),
                controller_chains: selection.controller_chains.clone(),
                hook: HookConfig {
                    hook_type,
                    limits_and_pool_id,
                },
            },
        );
    }
    constants
}
