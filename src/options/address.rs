use std::fmt;
use std::str::FromStr;

use clap::Parser;
use plugs_std::warnln;
use serde::{Deserialize, Serialize};

use crate::PlugsResult;
use crate::utils::prompt::Prompter;
use crate::validators::{ValidationError, check_address};

/// An EVM address as the operator typed it, checked for shape and EIP-55 checksum.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EvmAddress(String);

impl EvmAddress {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for EvmAddress {
    type Err = ValidationError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let input = input.trim();
        check_address(input)?;
        Ok(EvmAddress(input.to_string()))
    }
}

impl fmt::Display for EvmAddress {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Asks for an address until a valid one is entered.
pub(crate) fn prompt_address(prompter: &mut dyn Prompter, prompt: &str) -> PlugsResult<EvmAddress> {
    loop {
        let input = prompter.input(prompt, None)?;
        match input.parse::<EvmAddress>() {
            Ok(address) => return Ok(address),
            Err(err) => warnln!("{}", err),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Parser)]
pub struct OwnerOpt {
    /// Owner of the deployed contracts; the deployer configures roles on its behalf
    #[arg(long = "owner")]
    owner: Option<EvmAddress>,
}

impl OwnerOpt {
    pub fn get_owner(&self) -> Option<EvmAddress> {
        self.owner.clone()
    }

    /// PROMPT UX:
    /// =========
    ///
    /// ? Enter owner Address (Owner will be the deployer initially to configure roles)
    pub fn get_or_prompt_owner(&self, prompter: &mut dyn Prompter) -> PlugsResult<EvmAddress> {
        if let Some(owner) = self.get_owner() {
            return Ok(owner);
        }
        prompt_address(
            prompter,
            "Enter owner Address (Owner will be the deployer initially to configure roles)",
        )
    }
}
