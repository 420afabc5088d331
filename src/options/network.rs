use clap::Parser;
use serde::Serialize;

use crate::PlugsResult;
use crate::registry::Network;
use crate::utils::prompt::Prompter;

#[derive(Debug, Clone, Default, Serialize, Parser)]
pub struct NetworkOpt {
    /// Deploy to mainnet or testnet chains
    #[arg(long = "network", value_enum)]
    network: Option<Network>,
}

impl NetworkOpt {
    pub fn get_network(&self) -> Option<Network> {
        self.network
    }

    /// PROMPT UX:
    /// =========
    ///
    /// ? Is the deployment for mainnet? (y/N)
    pub fn get_or_prompt_network(&self, prompter: &mut dyn Prompter) -> PlugsResult<Network> {
        if let Some(network) = self.get_network() {
            return Ok(network);
        }
        let is_mainnet = prompter.confirm("Is the deployment for mainnet?", false)?;
        Ok(Network::from_is_mainnet(is_mainnet))
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;
    use crate::utils::prompt::{Answer, ScriptedPrompter};

    #[rstest]
    #[case(true, Network::Mainnet)]
    #[case(false, Network::Testnet)]
    fn it_maps_the_mainnet_answer(#[case] answer: bool, #[case] expected: Network) {
        let mut prompter = ScriptedPrompter::new([Answer::Confirm(answer)]);
        let network = NetworkOpt::default().get_or_prompt_network(&mut prompter).unwrap();
        assert_eq!(network, expected);
    }
}
