use clap::Parser;
use itertools::Itertools;
use plugs_std::warnln;
use serde::Serialize;

use super::ProjectType;
use crate::PlugsResult;
use crate::constants::ChainSelection;
use crate::registry::{ChainSlug, Network, Registry};
use crate::utils::prompt::Prompter;
use crate::validators::{ValidationError, check_controller_chains, check_vault_chains};

#[derive(Debug, Clone, Default, Serialize, Parser)]
pub struct ChainsOpt {
    /// Comma separated chains holding the original token in a vault, as slugs or keys
    #[arg(long = "vault-chains", value_delimiter = ',', num_args = 0..)]
    vault_chains: Option<Vec<ChainSlug>>,

    /// Comma separated chains where the token is minted and burnt, as slugs or keys
    #[arg(long = "controller-chains", value_delimiter = ',', num_args = 0..)]
    controller_chains: Option<Vec<ChainSlug>>,
}

impl ChainsOpt {
    /// PROMPT UX:
    /// =========
    ///
    /// ? Select vault chains (check README for more info)
    /// [ ] MAINNET
    /// [ ] OPTIMISM
    /// ...
    /// ? Select controller chains (check README for more info)
    /// [ ] MAINNET
    /// ...
    pub fn get_or_prompt_chains(
        &self,
        prompter: &mut dyn Prompter,
        registry: &Registry,
        project_type: ProjectType,
        network: Network,
    ) -> PlugsResult<ChainSelection> {
        let vault_chains = get_or_prompt_chain_list(
            prompter,
            registry,
            network,
            self.vault_chains.as_deref(),
            "Select vault chains (check README for more info)",
            |chains| check_vault_chains(project_type, chains),
        )?;
        let controller_chains = get_or_prompt_chain_list(
            prompter,
            registry,
            network,
            self.controller_chains.as_deref(),
            "Select controller chains (check README for more info)",
            |chains| check_controller_chains(project_type, chains),
        )?;
        Ok(ChainSelection {
            vault_chains,
            controller_chains,
        })
    }
}

fn get_or_prompt_chain_list(
    prompter: &mut dyn Prompter,
    registry: &Registry,
    network: Network,
    preset: Option<&[ChainSlug]>,
    prompt: &str,
    check: impl Fn(&[ChainSlug]) -> Result<(), ValidationError>,
) -> PlugsResult<Vec<ChainSlug>> {
    if let Some(preset) = preset {
        let chains: Vec<ChainSlug> = preset.iter().copied().unique().collect();
        for chain in &chains {
            registry.ensure_on_network(*chain, network)?;
        }
        check(&chains)?;
        return Ok(chains);
    }

    let options = registry.chains(network);
    let items: Vec<String> = options.iter().map(ChainSlug::display_name).collect();
    loop {
        let selection = prompter.multi_select(prompt, &items)?;
        let chains: Vec<ChainSlug> = selection.into_iter().map(|index| options[index]).collect();
        match check(&chains) {
            Ok(()) => return Ok(chains),
            Err(err) => warnln!("{}", err),
        }
    }
}
