use std::collections::BTreeMap;

use crate::PlugsResult;
use crate::options::EvmAddress;
use crate::registry::ChainSlug;

pub const TOKEN_ADDRESSES_PATH: &str = "src/enums/existing-token-addresses.json";

/// chain → token key → address
pub(crate) type TokenAddresses = BTreeMap<ChainSlug, BTreeMap<String, String>>;

/// Adds one address to the table serialized in `existing`, keeping every earlier entry.
pub(crate) fn merge_token_address(
    existing: Option<&str>,
    chain_slug: ChainSlug,
    token_key: &str,
    address: &EvmAddress,
) -> PlugsResult<String> {
    let mut addresses: TokenAddresses = match existing {
        Some(contents) => serde_json::from_str(contents)?,
        None => TokenAddresses::new(),
    };
    let previous = addresses
        .entry(chain_slug)
        .or_default()
        .insert(token_key.to_string(), address.to_string());
    if let Some(previous) = previous {
        tracing::info!(%chain_slug, token_key, %previous, "replacing token address");
    }
    let mut json = serde_json::to_string_pretty(&addresses)?;
    json.push('\n');
    Ok(json)
}
