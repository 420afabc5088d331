use std::fmt::{self, Display};
use std::str::FromStr;

use clap::ValueEnum;
use heck::ToShoutySnakeCase;
use serde::{Deserialize, Serialize};

/// Numeric identifier of a chain a plug can be deployed to.
#[derive(
    Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct ChainSlug(u32);

impl ChainSlug {
    pub const MAINNET: ChainSlug = ChainSlug(1);
    pub const OPTIMISM: ChainSlug = ChainSlug(10);
    pub const BSC: ChainSlug = ChainSlug(56);
    pub const GNOSIS: ChainSlug = ChainSlug(100);
    pub const POLYGON_MAINNET: ChainSlug = ChainSlug(137);
    pub const ZKSYNCERA: ChainSlug = ChainSlug(324);
    pub const POLYGON_ZKEVM: ChainSlug = ChainSlug(1101);
    pub const MANTLE: ChainSlug = ChainSlug(5000);
    pub const BASE: ChainSlug = ChainSlug(8453);
    pub const MODE: ChainSlug = ChainSlug(34443);
    pub const ARBITRUM: ChainSlug = ChainSlug(42161);
    pub const AVALANCHE: ChainSlug = ChainSlug(43114);
    pub const LINEA: ChainSlug = ChainSlug(59144);
    pub const BLAST: ChainSlug = ChainSlug(81457);
    pub const SCROLL: ChainSlug = ChainSlug(534352);

    pub const BSC_TESTNET: ChainSlug = ChainSlug(97);
    pub const POLYGON_AMOY: ChainSlug = ChainSlug(80002);
    pub const BASE_SEPOLIA: ChainSlug = ChainSlug(84532);
    pub const ARBITRUM_SEPOLIA: ChainSlug = ChainSlug(421614);
    pub const SEPOLIA: ChainSlug = ChainSlug(11155111);
    pub const OPTIMISM_SEPOLIA: ChainSlug = ChainSlug(11155420);
    pub const BLAST_SEPOLIA: ChainSlug = ChainSlug(168587773);

    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    pub const fn id(&self) -> u32 {
        self.0
    }

    /// The enum member name of a known chain, e.g. `MAINNET`.
    pub fn key(&self) -> Option<&'static str> {
        builtin_chain(*self).map(|chain| chain.key)
    }

    /// The key if known, the bare numeric slug otherwise.
    pub fn display_name(&self) -> String {
        self.key()
            .map(str::to_string)
            .unwrap_or_else(|| self.0.to_string())
    }
}

impl Display for ChainSlug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ChainSlug {
    type Err = String;

    /// Accepts either a numeric slug (`81457`) or a known key (`BLAST`, `blast`).
    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let input = input.trim();
        if let Ok(id) = input.parse::<u32>() {
            return Ok(ChainSlug(id));
        }
        let wanted = input.to_shouty_snake_case();
        BUILTIN_CHAINS
            .iter()
            .find(|chain| chain.key == wanted)
            .map(|chain| chain.slug)
            .ok_or_else(|| format!("Unknown chain '{input}'. Run `plugs chains` to list known chains."))
    }
}

/// Which family of chains a deployment targets.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Network {
    Mainnet,
    Testnet,
}

impl Network {
    pub const fn from_is_mainnet(is_mainnet: bool) -> Self {
        if is_mainnet {
            Network::Mainnet
        } else {
            Network::Testnet
        }
    }

    pub const fn is_mainnet(&self) -> bool {
        matches!(self, Network::Mainnet)
    }
}

impl Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let readable = match self {
            Network::Mainnet => "mainnet",
            Network::Testnet => "testnet",
        };
        write!(f, "{readable}")
    }
}

#[derive(Debug)]
pub(crate) struct BuiltinChain {
    pub(crate) slug: ChainSlug,
    pub(crate) key: &'static str,
    pub(crate) network: Network,
    pub(crate) rpc_key: Option<&'static str>,
}

const fn chain(
    slug: ChainSlug,
    key: &'static str,
    network: Network,
    rpc_key: Option<&'static str>,
) -> BuiltinChain {
    BuiltinChain {
        slug,
        key,
        network,
        rpc_key,
    }
}

use Network::{Mainnet, Testnet};

/// Chains known to the deployment toolchain. Chains without an RPC key get
/// one generated the first time a project selects them.
pub(crate) const BUILTIN_CHAINS: &[BuiltinChain] = &[
    chain(ChainSlug::MAINNET, "MAINNET", Mainnet, Some("MAINNET_RPC")),
    chain(ChainSlug::OPTIMISM, "OPTIMISM", Mainnet, Some("OPTIMISM_RPC")),
    chain(ChainSlug::BSC, "BSC", Mainnet, Some("BSC_RPC")),
    chain(ChainSlug::GNOSIS, "GNOSIS", Mainnet, None),
    chain(ChainSlug::POLYGON_MAINNET, "POLYGON_MAINNET", Mainnet, Some("POLYGON_RPC")),
    chain(ChainSlug::ZKSYNCERA, "ZKSYNCERA", Mainnet, None),
    chain(ChainSlug::POLYGON_ZKEVM, "POLYGON_ZKEVM", Mainnet, None),
    chain(ChainSlug::MANTLE, "MANTLE", Mainnet, None),
    chain(ChainSlug::BASE, "BASE", Mainnet, Some("BASE_RPC")),
    chain(ChainSlug::MODE, "MODE", Mainnet, None),
    chain(ChainSlug::ARBITRUM, "ARBITRUM", Mainnet, Some("ARBITRUM_RPC")),
    chain(ChainSlug::AVALANCHE, "AVALANCHE", Mainnet, None),
    chain(ChainSlug::LINEA, "LINEA", Mainnet, None),
    chain(ChainSlug::BLAST, "BLAST", Mainnet, None),
    chain(ChainSlug::SCROLL, "SCROLL", Mainnet, None),
    chain(ChainSlug::BSC_TESTNET, "BSC_TESTNET", Testnet, None),
    chain(ChainSlug::POLYGON_AMOY, "POLYGON_AMOY", Testnet, None),
    chain(ChainSlug::BASE_SEPOLIA, "BASE_SEPOLIA", Testnet, None),
    chain(ChainSlug::ARBITRUM_SEPOLIA, "ARBITRUM_SEPOLIA", Testnet, Some("ARBITRUM_SEPOLIA_RPC")),
    chain(ChainSlug::SEPOLIA, "SEPOLIA", Testnet, Some("SEPOLIA_RPC")),
    chain(ChainSlug::OPTIMISM_SEPOLIA, "OPTIMISM_SEPOLIA", Testnet, Some("OPTIMISM_SEPOLIA_RPC")),
    chain(ChainSlug::BLAST_SEPOLIA, "BLAST_SEPOLIA", Testnet, None),
];

pub(crate) fn builtin_chain(slug: ChainSlug) -> Option<&'static BuiltinChain> {
    BUILTIN_CHAINS.iter().find(|chain| chain.slug == slug)
}

/// The env key a freshly added chain's RPC url is read from.
pub(crate) fn generated_rpc_key(slug: ChainSlug) -> String {
    format!("{}_RPC", slug.display_name().to_shouty_snake_case())
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("1", ChainSlug::MAINNET)]
    #[case("81457", ChainSlug::BLAST)]
    #[case("BLAST", ChainSlug::BLAST)]
    #[case("blast", ChainSlug::BLAST)]
    #[case("arbitrum_sepolia", ChainSlug::ARBITRUM_SEPOLIA)]
    #[case(" MAINNET ", ChainSlug::MAINNET)]
    fn it_parses_chain_slugs(#[case] input: &str, #[case] expected: ChainSlug) {
        assert_eq!(input.parse::<ChainSlug>(), Ok(expected));
    }

    #[test]
    fn it_rejects_unknown_chain_names() {
        assert!("not-a-chain".parse::<ChainSlug>().is_err());
    }

    #[test]
    fn it_keeps_unknown_numeric_slugs() {
        let slug: ChainSlug = "999999".parse().unwrap();
        assert_eq!(slug.key(), None);
        assert_eq!(slug.display_name(), "999999");
    }

    #[test]
    fn builtin_chains_are_unique() {
        for (index, chain) in BUILTIN_CHAINS.iter().enumerate() {
            assert!(
                BUILTIN_CHAINS[index + 1..]
                    .iter()
                    .all(|other| other.slug != chain.slug && other.key != chain.key),
                "{} is listed twice",
                chain.key
            );
        }
    }

    #[test]
    fn it_generates_rpc_keys_from_chain_keys() {
        assert_eq!(generated_rpc_key(ChainSlug::BLAST), "BLAST_RPC");
        assert_eq!(generated_rpc_key(ChainSlug::new(42)), "42_RPC");
    }
}
