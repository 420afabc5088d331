//! The chain and token enumerations consumed by the deployment toolchain.
//!
//! A [`Registry`] starts out from the built-in tables, picks up whatever earlier
//! runs persisted to [`REGISTRY_PATH`], and is extended in place as a run adds
//! projects, tokens and chains. Only the extension is written back to disk.

mod chains;
mod tokens;

use std::collections::BTreeMap;

use camino::{Utf8Path, Utf8PathBuf};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use plugs_std::Fs;

pub use chains::{ChainSlug, Network};
pub use tokens::{Token, TokenEntry};

use crate::PlugsResult;

/// Where the registry extension lives, relative to the output directory.
pub const REGISTRY_PATH: &str = "src/enums/registry.json";

#[derive(Error, Debug)]
pub enum RegistryError {
    #[error("'{token}' is not a registered token.")]
    UnknownToken { token: String },

    #[error("{chain} is not a {network} chain.")]
    ChainNotOnNetwork { chain: String, network: Network },

    #[error("{chain} has no RPC key.")]
    MissingRpcKey { chain: String },

    #[error("A different token is already registered as '{symbol}'.")]
    DuplicateToken { symbol: String },

    #[error("Could not parse \"{path}\".")]
    Malformed {
        path: Utf8PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Everything added on top of the built-in tables.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistryExtension {
    #[serde(default)]
    pub projects: Vec<String>,
    #[serde(default)]
    pub tokens: Vec<TokenEntry>,
    #[serde(default)]
    pub rpc_keys: BTreeMap<ChainSlug, String>,
}

/// One row of `plugs chains`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChainInfo {
    pub slug: ChainSlug,
    pub key: &'static str,
    pub network: Network,
    pub rpc_key: Option<String>,
}

#[derive(Debug, Clone)]
pub struct Registry {
    tokens: Vec<TokenEntry>,
    rpc_keys: BTreeMap<ChainSlug, String>,
    projects: Vec<String>,
    extension: RegistryExtension,
}

impl Registry {
    /// The tables shipped with plugs, without any persisted extension.
    pub fn builtin() -> Self {
        let rpc_keys = chains::BUILTIN_CHAINS
            .iter()
            .filter_map(|chain| chain.rpc_key.map(|key| (chain.slug, key.to_string())))
            .collect();
        Self {
            tokens: tokens::builtin_entries(),
            rpc_keys,
            projects: Vec::new(),
            extension: RegistryExtension::default(),
        }
    }

    /// The built-in tables merged with the extension persisted under `root`, if any.
    pub fn load(root: &Utf8Path) -> PlugsResult<Self> {
        let mut registry = Self::builtin();
        let path = root.join(REGISTRY_PATH);
        if let Some(contents) = Fs::read_existing_file(&path)? {
            let extension: RegistryExtension =
                serde_json::from_str(&contents).map_err(|source| RegistryError::Malformed {
                    path: path.clone(),
                    source,
                })?;
            tracing::debug!(?extension, "loaded registry extension from {}", path);
            registry.merge(&extension);
            registry.extension = extension;
        }
        Ok(registry)
    }

    fn merge(&mut self, extension: &RegistryExtension) {
        for project in &extension.projects {
            if !self.projects.contains(project) {
                self.projects.push(project.clone());
            }
        }
        for token in &extension.tokens {
            if !self.contains_token(&token.symbol) {
                self.tokens.push(token.clone());
            }
        }
        for (slug, key) in &extension.rpc_keys {
            self.rpc_keys.entry(*slug).or_insert_with(|| key.clone());
        }
    }

    /// Every known chain on the given network, in registry order.
    pub fn chains(&self, network: Network) -> Vec<ChainSlug> {
        chains::BUILTIN_CHAINS
            .iter()
            .filter(|chain| chain.network == network)
            .map(|chain| chain.slug)
            .collect()
    }

    /// Every known chain with its RPC key, optionally limited to one network.
    pub fn chain_infos(&self, network: Option<Network>) -> Vec<ChainInfo> {
        chains::BUILTIN_CHAINS
            .iter()
            .filter(|chain| network.is_none_or(|network| chain.network == network))
            .filter_map(|chain| {
                Some(ChainInfo {
                    slug: chain.slug,
                    key: self.chain_key(chain.slug)?,
                    network: chain.network,
                    rpc_key: self.rpc_key(chain.slug).map(str::to_string),
                })
            })
            .collect()
    }

    pub fn network_of(&self, slug: ChainSlug) -> Option<Network> {
        chains::builtin_chain(slug).map(|chain| chain.network)
    }

    /// Errors unless `slug` is a known chain of `network`.
    pub fn ensure_on_network(&self, slug: ChainSlug, network: Network) -> Result<(), RegistryError> {
        if self.network_of(slug) == Some(network) {
            Ok(())
        } else {
            Err(RegistryError::ChainNotOnNetwork {
                chain: slug.display_name(),
                network,
            })
        }
    }

    pub fn rpc_key(&self, slug: ChainSlug) -> Option<&str> {
        self.rpc_keys.get(&slug).map(String::as_str)
    }

    /// The chains out of `chains` that have no RPC key yet.
    pub fn chains_without_rpc_key(&self, chains: &[ChainSlug]) -> Vec<ChainSlug> {
        chains
            .iter()
            .filter(|slug| self.rpc_key(**slug).is_none())
            .copied()
            .collect()
    }

    pub fn tokens(&self) -> &[TokenEntry] {
        &self.tokens
    }

    pub fn find_token(&self, input: &str) -> Option<&TokenEntry> {
        self.tokens.iter().find(|entry| entry.matches(input))
    }

    /// Resolves a token by symbol or enum key.
    pub fn resolve_token(&self, input: &str) -> Result<Token, RegistryError> {
        self.find_token(input)
            .map(TokenEntry::token)
            .ok_or_else(|| RegistryError::UnknownToken {
                token: input.to_string(),
            })
    }

    pub fn token_key(&self, token: &Token) -> Option<&str> {
        self.find_token(token.as_str()).map(|entry| entry.key.as_str())
    }

    pub fn decimals(&self, token: &Token) -> Option<u8> {
        self.find_token(token.as_str()).map(|entry| entry.decimals)
    }

    pub fn contains_token(&self, symbol: &str) -> bool {
        self.find_token(symbol).is_some()
    }

    pub fn projects(&self) -> &[String] {
        &self.projects
    }

    /// Registers a project name; returns false if it was already known.
    pub fn extend_project(&mut self, name: &str) -> bool {
        if self.projects.iter().any(|project| project == name) {
            return false;
        }
        self.projects.push(name.to_string());
        self.extension.projects.push(name.to_string());
        true
    }

    /// Registers a token; returns false if the identical token was already known.
    pub fn extend_token(&mut self, entry: TokenEntry) -> Result<bool, RegistryError> {
        let existing = self
            .find_token(&entry.symbol)
            .or_else(|| self.find_token(&entry.key));
        match existing {
            Some(existing) if existing.symbol == entry.symbol && existing.key == entry.key => {
                Ok(false)
            }
            Some(_) => Err(RegistryError::DuplicateToken {
                symbol: entry.symbol,
            }),
            None => {
                self.tokens.push(entry.clone());
                self.extension.tokens.push(entry);
                Ok(true)
            }
        }
    }

    /// Makes sure `slug` has an RPC key, generating one if needed, and returns it.
    pub fn extend_chain(&mut self, slug: ChainSlug) -> String {
        if let Some(key) = self.rpc_key(slug) {
            return key.to_string();
        }
        let key = chains::generated_rpc_key(slug);
        self.rpc_keys.insert(slug, key.clone());
        self.extension.rpc_keys.insert(slug, key.clone());
        key
    }

    pub fn extension(&self) -> &RegistryExtension {
        &self.extension
    }

    /// The enum member name of a chain, if it is a known one.
    pub fn chain_key(&self, slug: ChainSlug) -> Option<&'static str> {
        slug.key()
    }

    /// Writes the extension to [`REGISTRY_PATH`] below `root`.
    pub fn persist(&self, root: &Utf8Path) -> PlugsResult<Utf8PathBuf> {
        let path = root.join(REGISTRY_PATH);
        Fs::write_file(&path, self.to_json()?)?;
        Ok(path)
    }

    /// The extension serialized the way it is persisted.
    pub fn to_json(&self) -> PlugsResult<String> {
        let mut json = serde_json::to_string_pretty(&self.extension)?;
        json.push('\n');
        Ok(json)
    }
}
