mod address;
mod chains;
mod hook_type;
mod limits;
mod network;
mod new_token;
mod project_name;
mod project_type;
mod tokens;

pub use address::{EvmAddress, OwnerOpt};
pub use chains::ChainsOpt;
pub use hook_type::{HookOpt, Hooks};
pub use limits::{LimitsOpt, TokenLimitArg};
pub use network::NetworkOpt;
pub use new_token::{NewTokenInfo, NewTokenOpt};
pub use project_name::{ProjectName, ProjectNameOpt};
pub use project_type::{ProjectType, ProjectTypeOpt};
pub use tokens::TokensOpt;
