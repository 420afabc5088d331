use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};

/// A token identifier, i.e. the value of a member of the token enumeration
/// (`LOOKS`, `USDC.e`, ...).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Token(String);

impl Token {
    pub fn new(symbol: impl Into<String>) -> Self {
        Self(symbol.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One member of the token enumeration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenEntry {
    /// enum member name, e.g. `USDCE`
    pub key: String,
    /// enum member value, e.g. `USDC.e`
    pub symbol: String,
    pub decimals: u8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl TokenEntry {
    pub fn token(&self) -> Token {
        Token::new(self.symbol.clone())
    }

    pub(crate) fn matches(&self, input: &str) -> bool {
        self.symbol == input || self.key == input
    }
}

/// The static decimals table shipped with the toolchain: `(key, symbol, decimals)`.
pub(crate) const BUILTIN_TOKENS: &[(&str, &str, u8)] = &[
    ("Moon", "MOON", 18),
    ("USDC", "USDC", 6),
    ("USDCE", "USDC.e", 6),
    ("WETH", "WETH", 18),
    ("WBTC", "WBTC", 8),
    ("USDT", "USDT", 6),
    ("SNX", "SNX", 18),
    ("WSTETH", "WSTETH", 18),
    ("DAI", "DAI", 18),
    ("LOOKS", "LOOKS", 18),
];

pub(crate) fn builtin_entries() -> Vec<TokenEntry> {
    BUILTIN_TOKENS
        .iter()
        .map(|(key, symbol, decimals)| TokenEntry {
            key: key.to_string(),
            symbol: symbol.to_string(),
            decimals: *decimals,
            name: None,
        })
        .collect()
}
