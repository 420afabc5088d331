use serde::Serialize;

use crate::options::{EvmAddress, Hooks, NewTokenInfo, ProjectName, ProjectType};
use crate::registry::Network;

/// The answers to the first stage of `plugs setup`, fixed for the rest of the run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectConfig {
    pub project_type: ProjectType,
    pub project_name: ProjectName,
    pub owner: EvmAddress,
    pub hook_type: Hooks,
    pub network: Network,
    pub new_token: Option<NewTokenInfo>,
}
