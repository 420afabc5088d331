use std::fmt;
use std::str::FromStr;

use clap::Parser;
use plugs_std::warnln;
use serde::Serialize;

use crate::PlugsResult;
use crate::constants::{LimitInfo, TokenLimit};
use crate::registry::{Registry, Token};
use crate::utils::prompt::Prompter;
use crate::validators::{check_limit, validate_limit};

/// `TOKEN=SENDING:RECEIVING` as passed to `--limit`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TokenLimitArg {
    pub token: String,
    pub limits: LimitInfo,
}

impl FromStr for TokenLimitArg {
    type Err = String;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let malformed = || format!("'{input}' is not of the form TOKEN=SENDING:RECEIVING");
        let (token, limits) = input.split_once('=').ok_or_else(malformed)?;
        let (sending, receiving) = limits.split_once(':').ok_or_else(malformed)?;
        let token = token.trim();
        if token.is_empty() {
            return Err(malformed());
        }
        for limit in [sending, receiving] {
            if !validate_limit(limit) {
                return Err(format!("'{}' in '{input}' is not a valid limit", limit.trim()));
            }
        }
        Ok(TokenLimitArg {
            token: token.to_string(),
            limits: LimitInfo::new(sending.trim(), receiving.trim()),
        })
    }
}

impl fmt::Display for TokenLimitArg {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{}={}:{}",
            self.token, self.limits.sending_limit, self.limits.receiving_limit
        )
    }
}

#[derive(Debug, Clone, Default, Serialize, Parser)]
pub struct LimitsOpt {
    /// Sending and receiving limits of a token, repeat once per token
    #[arg(long = "limit", value_name = "TOKEN=SENDING:RECEIVING")]
    limits: Vec<TokenLimitArg>,
}

impl LimitsOpt {
    fn preset(&self, registry: &Registry, token: &Token) -> Option<&LimitInfo> {
        self.limits
            .iter()
            .find(|arg| {
                registry
                    .resolve_token(&arg.token)
                    .is_ok_and(|resolved| &resolved == token)
                    || arg.token == token.as_str()
            })
            .map(|arg| &arg.limits)
    }

    /// PROMPT UX:
    /// =========
    ///
    /// ? Enter sending limit for LOOKS
    /// ? Enter receiving limit for LOOKS
    pub fn get_or_prompt_limits(
        &self,
        prompter: &mut dyn Prompter,
        registry: &Registry,
        tokens: &[Token],
    ) -> PlugsResult<Vec<TokenLimit>> {
        for arg in &self.limits {
            let selected = registry
                .resolve_token(&arg.token)
                .is_ok_and(|token| tokens.contains(&token));
            if !selected {
                warnln!("Ignoring --limit {} since {} is not selected.", arg, arg.token);
            }
        }

        let mut token_limits = Vec::with_capacity(tokens.len());
        for token in tokens {
            let limits = match self.preset(registry, token) {
                Some(limits) => limits.clone(),
                None => LimitInfo::new(
                    prompt_limit(prompter, token, "sending limit")?,
                    prompt_limit(prompter, token, "receiving limit")?,
                ),
            };
            token_limits.push(TokenLimit {
                token: token.clone(),
                limits,
            });
        }
        Ok(token_limits)
    }
}

fn prompt_limit(
    prompter: &mut dyn Prompter,
    token: &Token,
    field: &'static str,
) -> PlugsResult<String> {
    loop {
        let input = prompter.input(&format!("Enter {field} for {token}"), None)?;
        match check_limit(token, field, &input) {
            Ok(()) => return Ok(input.trim().to_string()),
            Err(err) => warnln!("{}", err),
        }
    }
}
