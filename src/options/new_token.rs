use clap::Parser;
use plugs_std::warnln;
use serde::{Deserialize, Serialize};

use super::address::{EvmAddress, prompt_address};
use crate::PlugsResult;
use crate::registry::{ChainSlug, Network, Registry, RegistryError, TokenEntry};
use crate::utils::prompt::Prompter;
use crate::validators::{MAX_DECIMALS, check_decimals, check_symbol};

/// A token that is already deployed on one chain and is added to the registry by this run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTokenInfo {
    pub name: String,
    pub symbol: String,
    pub decimals: u8,
    pub chain_slug: ChainSlug,
    pub address: EvmAddress,
}

impl NewTokenInfo {
    /// The token enumeration entry; the symbol doubles as the enum key.
    pub fn registry_entry(&self) -> TokenEntry {
        TokenEntry {
            key: self.symbol.clone(),
            symbol: self.symbol.clone(),
            decimals: self.decimals,
            name: Some(self.name.clone()),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Parser)]
pub struct NewTokenOpt {
    /// Add an already deployed token that is not registered yet
    #[arg(long = "new-token")]
    new_token: Option<bool>,

    /// Name of the new token
    #[arg(long = "new-token-name")]
    name: Option<String>,

    /// Symbol of the new token, also used as its enum key
    #[arg(long = "new-token-symbol")]
    symbol: Option<String>,

    /// Decimals of the new token
    #[arg(long = "new-token-decimals")]
    decimals: Option<u8>,

    /// Chain the new token is deployed on, as a slug or key
    #[arg(long = "new-token-chain")]
    chain: Option<ChainSlug>,

    /// Address of the new token on that chain
    #[arg(long = "new-token-address")]
    address: Option<EvmAddress>,
}

impl NewTokenOpt {
    fn has_details(&self) -> bool {
        self.name.is_some()
            || self.symbol.is_some()
            || self.decimals.is_some()
            || self.chain.is_some()
            || self.address.is_some()
    }

    /// PROMPT UX:
    /// =========
    ///
    /// ? Want to add a new token? (select yes if you have an already deployed token) (y/N)
    ///
    /// Passing any `--new-token-*` flag implies yes.
    pub fn get_or_prompt_wants_new_token(&self, prompter: &mut dyn Prompter) -> PlugsResult<bool> {
        if let Some(new_token) = self.new_token {
            return Ok(new_token);
        }
        if self.has_details() {
            return Ok(true);
        }
        prompter.confirm(
            "Want to add a new token? (select yes if you have an already deployed token)",
            false,
        )
    }

    /// PROMPT UX:
    /// =========
    ///
    /// ? Enter token name
    /// ? Enter token symbol
    /// ? Enter token decimals
    /// ? Select chain where token is deployed
    /// ? Enter token address
    pub fn get_or_prompt_new_token_info(
        &self,
        prompter: &mut dyn Prompter,
        registry: &Registry,
        network: Network,
    ) -> PlugsResult<NewTokenInfo> {
        let name = match &self.name {
            Some(name) => name.trim().to_string(),
            None => loop {
                let name = prompter.input("Enter token name", None)?;
                if !name.trim().is_empty() {
                    break name.trim().to_string();
                }
                warnln!("The token name cannot be empty.");
            },
        };

        let symbol = match &self.symbol {
            Some(symbol) => {
                let symbol = symbol.trim();
                ensure_new_symbol(symbol, registry)?;
                symbol.to_string()
            }
            None => loop {
                let input = prompter.input("Enter token symbol", None)?;
                let symbol = input.trim();
                match ensure_new_symbol(symbol, registry) {
                    Ok(()) => break symbol.to_string(),
                    Err(err) => warnln!("{}", err.message()),
                }
            },
        };

        let decimals = match self.decimals {
            Some(decimals) => {
                check_decimals(decimals)?;
                decimals
            }
            None => loop {
                let input = prompter.input("Enter token decimals", Some("18"))?;
                match input.trim().parse::<u8>() {
                    Ok(decimals) if check_decimals(decimals).is_ok() => break decimals,
                    _ => warnln!("Enter a whole number between 0 and {}.", MAX_DECIMALS),
                }
            },
        };

        let chains = registry.chains(network);
        let chain_slug = match self.chain {
            Some(chain) => {
                registry.ensure_on_network(chain, network)?;
                chain
            }
            None => {
                let items: Vec<String> = chains.iter().map(ChainSlug::display_name).collect();
                let selection =
                    prompter.select("Select chain where token is deployed", &items, 0)?;
                chains[selection]
            }
        };

        let address = match &self.address {
            Some(address) => address.clone(),
            None => prompt_address(prompter, "Enter token address")?,
        };

        Ok(NewTokenInfo {
            name,
            symbol,
            decimals,
            chain_slug,
            address,
        })
    }

    pub fn get_or_prompt_new_token(
        &self,
        prompter: &mut dyn Prompter,
        registry: &Registry,
        network: Network,
    ) -> PlugsResult<Option<NewTokenInfo>> {
        if !self.get_or_prompt_wants_new_token(prompter)? {
            if self.has_details() {
                warnln!("Ignoring the --new-token-* flags since --new-token is false.");
            }
            return Ok(None);
        }
        self.get_or_prompt_new_token_info(prompter, registry, network)
            .map(Some)
    }
}

fn ensure_new_symbol(symbol: &str, registry: &Registry) -> PlugsResult<()> {
    check_symbol(symbol)?;
    if registry.contains_token(symbol) {
        return Err(RegistryError::DuplicateToken {
            symbol: symbol.to_string(),
        }
        .into());
    }
    Ok(())
}
