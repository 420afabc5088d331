use camino::Utf8Path;
use clap::Parser;
use serde::Serialize;

use crate::registry::{Network, Registry};
use crate::{PlugsOutput, PlugsResult};

#[derive(Debug, Serialize, Parser)]
pub struct Chains {
    /// Only list chains of this network
    #[arg(long = "network", value_enum)]
    network: Option<Network>,
}

impl Chains {
    pub fn run(&self, output_dir: &Utf8Path) -> PlugsResult<PlugsOutput> {
        let registry = Registry::load(output_dir)?;
        Ok(PlugsOutput::ChainList(registry.chain_infos(self.network)))
    }
}

#[cfg(test)]
mod tests {
    use camino::Utf8PathBuf;
    use speculoos::prelude::*;
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn it_lists_chains_of_one_network() {
        let dir = TempDir::new().unwrap();
        let root = Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).unwrap();
        let chains = Chains::try_parse_from(["chains", "--network", "testnet"]).unwrap();

        let PlugsOutput::ChainList(chains) = chains.run(&root).unwrap() else {
            panic!("expected a chain list");
        };

        assert_that(&chains).is_not_empty();
        assert!(chains.iter().all(|chain| chain.network == Network::Testnet));
    }
}
