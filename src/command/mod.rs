mod chains;
mod explain;
pub(crate) mod output;
mod setup;
mod tokens;

pub use chains::Chains;
pub use explain::Explain;
pub use setup::Setup;
pub use tokens::Tokens;
