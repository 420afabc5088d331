use std::fmt::{self, Display};

use clap::{Parser, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::PlugsResult;
use crate::utils::prompt::Prompter;

/// The rate limiting hook attached to every bridged token.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Hooks {
    LimitHook,
    LimitExecutionHook,
    NoHook,
}

impl Hooks {
    /// The member name of the hooks enumeration, e.g. `LIMIT_HOOK`.
    pub const fn member(&self) -> &'static str {
        match self {
            Hooks::LimitHook => "LIMIT_HOOK",
            Hooks::LimitExecutionHook => "LIMIT_EXECUTION_HOOK",
            Hooks::NoHook => "NO_HOOK",
        }
    }
}

impl Display for Hooks {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let readable = match self {
            Hooks::LimitHook => "Limit Hook",
            Hooks::LimitExecutionHook => "Limit Execution Hook",
            Hooks::NoHook => "No Hook",
        };
        write!(f, "{}", readable)
    }
}

#[derive(Debug, Clone, Default, Serialize, Parser)]
pub struct HookOpt {
    /// Hook attached to the bridge
    #[arg(long = "hook", value_enum)]
    hook: Option<Hooks>,
}

impl HookOpt {
    /// PROMPT UX:
    /// =========
    ///
    /// ? Select Hook type (Recommended: Limit Hook)
    /// > Limit Hook
    ///   Limit Execution Hook
    ///   No Hook
    pub fn get_or_prompt_hook(&self, prompter: &mut dyn Prompter) -> PlugsResult<Hooks> {
        if let Some(hook) = self.hook {
            return Ok(hook);
        }
        let hooks = <Hooks as ValueEnum>::value_variants();
        let items: Vec<String> = hooks.iter().map(ToString::to_string).collect();
        let selection = prompter.select("Select Hook type (Recommended: Limit Hook)", &items, 0)?;
        Ok(hooks[selection])
    }
}
