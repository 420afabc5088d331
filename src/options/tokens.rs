use clap::Parser;
use itertools::Itertools;
use plugs_std::warnln;
use serde::Serialize;

use super::ProjectType;
use crate::PlugsResult;
use crate::registry::{Registry, Token};
use crate::utils::prompt::Prompter;
use crate::validators::check_tokens;

#[derive(Debug, Clone, Default, Serialize, Parser)]
pub struct TokensOpt {
    /// Comma separated tokens to connect, by symbol or enum key
    #[arg(long = "tokens", value_delimiter = ',', num_args = 0..)]
    tokens: Option<Vec<String>>,
}

impl TokensOpt {
    /// PROMPT UX:
    /// =========
    ///
    /// ? Select tokens to connect
    /// [ ] Moon
    /// [ ] USDC
    /// ...
    ///
    /// The registry is expected to already contain a token added by this run.
    pub fn get_or_prompt_tokens(
        &self,
        prompter: &mut dyn Prompter,
        registry: &Registry,
        project_type: ProjectType,
    ) -> PlugsResult<Vec<Token>> {
        if let Some(preset) = &self.tokens {
            let tokens: Vec<Token> = preset
                .iter()
                .map(|input| registry.resolve_token(input.trim()))
                .collect::<Result<Vec<_>, _>>()?
                .into_iter()
                .unique()
                .collect();
            check_tokens(project_type, &tokens)?;
            return Ok(tokens);
        }

        let entries = registry.tokens();
        let items: Vec<String> = entries.iter().map(|entry| entry.key.clone()).collect();
        loop {
            let selection = prompter.multi_select("Select tokens to connect", &items)?;
            let tokens: Vec<Token> = selection
                .into_iter()
                .map(|index| entries[index].token())
                .collect();
            match check_tokens(project_type, &tokens) {
                Ok(()) => return Ok(tokens),
                Err(err) => warnln!("{}", err),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use speculoos::prelude::*;

    use super::*;
    use crate::registry::TokenEntry;
    use crate::utils::prompt::{Answer, ScriptedPrompter};

    #[test]
    fn supertokens_must_pick_exactly_one_token() {
        let mut prompter = ScriptedPrompter::new([
            Answer::pick(&["USDC", "WETH"]),
            Answer::pick(&[]),
            Answer::pick(&["USDCE"]),
        ]);

        let tokens = TokensOpt::default()
            .get_or_prompt_tokens(&mut prompter, &Registry::builtin(), ProjectType::SuperToken)
            .unwrap();

        assert_eq!(tokens, vec![Token::new("USDC.e")]);
        assert_eq!(prompter.asked.len(), 3);
    }

    #[test]
    fn the_new_token_is_offered() {
        let mut registry = Registry::builtin();
        registry
            .extend_token(TokenEntry {
                key: "bLOOKS".to_string(),
                symbol: "bLOOKS".to_string(),
                decimals: 18,
                name: None,
            })
            .unwrap();
        let mut prompter = ScriptedPrompter::new([Answer::pick(&["LOOKS", "bLOOKS"])]);

        let tokens = TokensOpt::default()
            .get_or_prompt_tokens(&mut prompter, &registry, ProjectType::SuperBridge)
            .unwrap();

        assert_eq!(tokens, vec![Token::new("LOOKS"), Token::new("bLOOKS")]);
    }

    #[test]
    fn preset_tokens_resolve_keys_and_symbols() {
        let opt = TokensOpt {
            tokens: Some(vec!["USDCE".to_string(), "WETH".to_string(), "USDC.e".to_string()]),
        };
        let tokens = opt
            .get_or_prompt_tokens(
                &mut ScriptedPrompter::default(),
                &Registry::builtin(),
                ProjectType::SuperBridge,
            )
            .unwrap();
        assert_eq!(tokens, vec![Token::new("USDC.e"), Token::new("WETH")]);
    }

    #[test]
    fn preset_unknown_tokens_fail() {
        let opt = TokensOpt {
            tokens: Some(vec!["NOPE".to_string()]),
        };
        let result = opt.get_or_prompt_tokens(
            &mut ScriptedPrompter::default(),
            &Registry::builtin(),
            ProjectType::SuperBridge,
        );
        assert_that(&result).is_err();
    }
}
