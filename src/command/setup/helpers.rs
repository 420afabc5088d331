use itertools::Itertools;
use plugs_std::{Emoji, Style, infoln, successln};

use crate::constants::{ChainSelection, TokenLimit};
use crate::options::NewTokenInfo;
use crate::registry::{ChainSlug, Registry};

pub fn display_welcome_message() {
    infoln!(
        "Welcome! This command generates the configuration to deploy a {} or {}.",
        Style::Heading.paint("SuperBridge"),
        Style::Heading.paint("SuperToken")
    );
    infoln!(
        "Run `{}` to pass answers as flags instead.",
        Style::Command.paint("plugs setup --help")
    );
}

fn chain_names(chains: &[ChainSlug]) -> String {
    if chains.is_empty() {
        return "none".to_string();
    }
    chains
        .iter()
        .map(|chain| Style::Chain.paint(chain.display_name()))
        .join(", ")
}

pub fn display_chain_summary(selection: &ChainSelection) {
    eprintln!(
        "{}Vault chains: {}",
        Emoji::Bridge,
        chain_names(&selection.vault_chains)
    );
    eprintln!(
        "{}Controller chains: {}",
        Emoji::Chain,
        chain_names(&selection.controller_chains)
    );
}

pub fn display_new_chains(registry: &Registry, new_chains: &[ChainSlug]) {
    for chain in new_chains {
        if let Some(rpc_key) = registry.rpc_key(*chain) {
            infoln!(
                "{} is new, fill in {} in {} before deploying.",
                Style::Chain.paint(chain.display_name()),
                Style::Command.paint(rpc_key),
                Style::Path.paint(".env")
            );
        }
    }
}

pub fn display_new_token(new_token: &NewTokenInfo) {
    successln!(
        "New token {} ({} decimals) at {} on {}",
        Style::Token.paint(&new_token.symbol),
        new_token.decimals,
        Style::Address.paint(new_token.address.as_str()),
        Style::Chain.paint(new_token.chain_slug.display_name())
    );
}

pub fn display_token_limits(token_limits: &[TokenLimit]) {
    for TokenLimit { token, limits } in token_limits {
        eprintln!(
            "{}{}: sending {}, receiving {}",
            Emoji::Note,
            Style::Token.paint(token.as_str()),
            Style::Limit.paint(&limits.sending_limit),
            Style::Limit.paint(&limits.receiving_limit)
        );
    }
}
