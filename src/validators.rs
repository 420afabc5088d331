//! Predicates guarding the answers collected by `plugs setup`.
//!
//! The boolean functions are what the prompts loop on. The `check_*` variants
//! return a [`ValidationError`] explaining the rule, which is shown to the
//! operator before re-asking or returned as-is when the answer came from a flag.

use std::sync::LazyLock;

use alloy_primitives::Address;
use regex::Regex;
use thiserror::Error;

use crate::options::ProjectType;
use crate::registry::{ChainSlug, Registry, Token};

static ADDRESS_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(0x)?[0-9a-fA-F]{40}$").unwrap());
static LIMIT_PATTERN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\d+(\.\d+)?$").unwrap());
static PROJECT_NAME_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_-]+$").unwrap());
static SYMBOL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9][A-Za-z0-9._-]*$").unwrap());

/// Tokens on EVM chains in practice never use more precision than this.
pub const MAX_DECIMALS: u8 = 18;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("'{address}' is not a valid address.")]
    Address { address: String },

    #[error("A {project_type} project needs {rule} vault chain, {found} selected.")]
    VaultChains {
        project_type: ProjectType,
        rule: &'static str,
        found: usize,
    },

    #[error("A {project_type} project needs {rule} controller chain, {found} selected.")]
    ControllerChains {
        project_type: ProjectType,
        rule: &'static str,
        found: usize,
    },

    #[error("A {project_type} project connects {rule} token, {found} selected.")]
    Tokens {
        project_type: ProjectType,
        rule: &'static str,
        found: usize,
    },

    #[error("'{value}' is not a valid {field} for {token}. Enter a plain number.")]
    Limit {
        token: Token,
        field: &'static str,
        value: String,
    },

    #[error("'{symbol}' is not a valid token symbol: {reason}.")]
    Symbol { symbol: String, reason: &'static str },

    #[error("{decimals} decimals is more than the supported maximum of {MAX_DECIMALS}.")]
    Decimals { decimals: u8 },
}

/// True iff `address` is a well-formed EVM address. Mixed-case input must
/// carry a valid EIP-55 checksum; all-lowercase or all-uppercase input is
/// accepted as-is.
pub fn validate_address(address: &str) -> bool {
    if !ADDRESS_PATTERN.is_match(address) {
        return false;
    }
    let hex = address.strip_prefix("0x").unwrap_or(address);
    let has_lower = hex.chars().any(|c| c.is_ascii_lowercase());
    let has_upper = hex.chars().any(|c| c.is_ascii_uppercase());
    if has_lower && has_upper {
        Address::parse_checksummed(format!("0x{hex}"), None).is_ok()
    } else {
        true
    }
}

pub fn validate_vault_chains(project_type: ProjectType, chains: &[ChainSlug]) -> bool {
    match project_type {
        ProjectType::SuperBridge => !chains.is_empty(),
        ProjectType::SuperToken => chains.len() <= 1,
    }
}

pub fn validate_controller_chains(project_type: ProjectType, chains: &[ChainSlug]) -> bool {
    match project_type {
        ProjectType::SuperBridge => chains.len() == 1,
        ProjectType::SuperToken => !chains.is_empty(),
    }
}

/// No upper bound is enforced for SuperBridge projects.
pub fn validate_tokens(project_type: ProjectType, tokens: &[Token]) -> bool {
    match project_type {
        ProjectType::SuperToken => tokens.len() == 1,
        ProjectType::SuperBridge => true,
    }
}

/// Same as [`validate_vault_chains`] for an unparsed project type; unknown types are denied.
pub fn validate_vault_chains_raw(project_type: &str, chains: &[ChainSlug]) -> bool {
    project_type
        .parse::<ProjectType>()
        .is_ok_and(|project_type| validate_vault_chains(project_type, chains))
}

/// Same as [`validate_controller_chains`] for an unparsed project type; unknown types are denied.
pub fn validate_controller_chains_raw(project_type: &str, chains: &[ChainSlug]) -> bool {
    project_type
        .parse::<ProjectType>()
        .is_ok_and(|project_type| validate_controller_chains(project_type, chains))
}

/// Same as [`validate_tokens`] for an unparsed project type; only SuperToken restricts the count.
pub fn validate_tokens_raw(project_type: &str, tokens: &[Token]) -> bool {
    match project_type.parse::<ProjectType>() {
        Ok(project_type) => validate_tokens(project_type, tokens),
        Err(_) => true,
    }
}

pub fn validate_limit(value: &str) -> bool {
    LIMIT_PATTERN.is_match(value.trim())
}

pub const fn validate_decimals(decimals: u8) -> bool {
    decimals <= MAX_DECIMALS
}

/// Project names end up in file names, so they are limited to `[A-Za-z0-9_-]`.
pub fn validate_project_name(name: &str) -> bool {
    PROJECT_NAME_PATTERN.is_match(name)
}

/// A new token symbol must be usable as an enum member and not be registered yet.
pub fn validate_symbol(symbol: &str, registry: &Registry) -> bool {
    check_symbol(symbol).is_ok() && !registry.contains_token(symbol)
}

pub fn check_address(address: &str) -> Result<(), ValidationError> {
    if validate_address(address) {
        Ok(())
    } else {
        Err(ValidationError::Address {
            address: address.to_string(),
        })
    }
}

pub fn check_vault_chains(
    project_type: ProjectType,
    chains: &[ChainSlug],
) -> Result<(), ValidationError> {
    if validate_vault_chains(project_type, chains) {
        return Ok(());
    }
    let rule = match project_type {
        ProjectType::SuperBridge => "at least one",
        ProjectType::SuperToken => "at most one",
    };
    Err(ValidationError::VaultChains {
        project_type,
        rule,
        found: chains.len(),
    })
}

pub fn check_controller_chains(
    project_type: ProjectType,
    chains: &[ChainSlug],
) -> Result<(), ValidationError> {
    if validate_controller_chains(project_type, chains) {
        return Ok(());
    }
    let rule = match project_type {
        ProjectType::SuperBridge => "exactly one",
        ProjectType::SuperToken => "at least one",
    };
    Err(ValidationError::ControllerChains {
        project_type,
        rule,
        found: chains.len(),
    })
}

pub fn check_tokens(project_type: ProjectType, tokens: &[Token]) -> Result<(), ValidationError> {
    if validate_tokens(project_type, tokens) {
        Ok(())
    } else {
        Err(ValidationError::Tokens {
            project_type,
            rule: "exactly one",
            found: tokens.len(),
        })
    }
}

pub fn check_limit(token: &Token, field: &'static str, value: &str) -> Result<(), ValidationError> {
    if validate_limit(value) {
        Ok(())
    } else {
        Err(ValidationError::Limit {
            token: token.clone(),
            field,
            value: value.to_string(),
        })
    }
}

pub fn check_symbol(symbol: &str) -> Result<(), ValidationError> {
    if SYMBOL_PATTERN.is_match(symbol) {
        Ok(())
    } else {
        Err(ValidationError::Symbol {
            symbol: symbol.to_string(),
            reason: "use letters, digits, '.', '_' or '-'",
        })
    }
}

pub const fn check_decimals(decimals: u8) -> Result<(), ValidationError> {
    if validate_decimals(decimals) {
        Ok(())
    } else {
        Err(ValidationError::Decimals { decimals })
    }
}
