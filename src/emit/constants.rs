use camino::Utf8PathBuf;

use crate::constants::{HookConfig, ProjectConstants, TokenConstants};
use crate::options::{ProjectName, ProjectType};
use crate::registry::{ChainSlug, Registry, Token};

pub const CONSTANTS_DIR: &str = "script/constants/projectConstants";

const HEADER: &str = r#"import {
  ChainSlug,
  DeploymentMode,
  IntegrationTypes,
} from "@socket.tech/dl-core";
import { Hooks, ProjectConstants } from "../../../../src";
import { Tokens } from "../../../../src/enums";

export const pc: ProjectConstants = {"#;

/// `script/constants/projectConstants/<type>/<name>.ts`
pub fn constants_path(project_type: ProjectType, project_name: &ProjectName) -> Utf8PathBuf {
    Utf8PathBuf::from(CONSTANTS_DIR)
        .join(project_type.constants_dir())
        .join(format!("{project_name}.ts"))
}

/// Renders the constants as the TypeScript module read by the deployment scripts.
pub(crate) fn render_constants(constants: &ProjectConstants, registry: &Registry) -> String {
    let mut module = Module::default();
    module.lines.push(HEADER.to_string());
    for (mode, tokens) in constants.modes() {
        module.open(2, &format!("[DeploymentMode.{}]", mode.member()));
        for (token, token_constants) in tokens {
            module.open(4, &token_ref(token, registry));
            module.token(token_constants, registry);
            module.close(4);
        }
        module.close(2);
    }
    module.lines.push("};".to_string());
    let mut rendered = module.lines.join("\n");
    rendered.push('\n');
    rendered
}

#[derive(Default)]
struct Module {
    lines: Vec<String>,
}

impl Module {
    fn line(&mut self, indent: usize, text: &str) {
        self.lines.push(format!("{:indent$}{text}", ""));
    }

    fn open(&mut self, indent: usize, key: &str) {
        self.line(indent, &format!("{key}: {{"));
    }

    fn close(&mut self, indent: usize) {
        self.line(indent, "},");
    }

    fn token(&mut self, constants: &TokenConstants, registry: &Registry) {
        self.line(
            6,
            &format!("vaultChains: {},", chain_list(&constants.vault_chains, registry)),
        );
        self.line(
            6,
            &format!(
                "controllerChains: {},",
                chain_list(&constants.controller_chains, registry)
            ),
        );
        self.open(6, "hook");
        self.hook(&constants.hook, registry);
        self.close(6);
    }

    fn hook(&mut self, hook: &HookConfig, registry: &Registry) {
        self.line(8, &format!("hookType: Hooks.{},", hook.hook_type.member()));
        self.open(8, "limitsAndPoolId");
        for (chain, integrations) in &hook.limits_and_pool_id {
            self.open(10, &format!("[{}]", chain_ref(*chain, registry)));
            for (integration, limits) in integrations {
                self.open(12, &format!("[IntegrationTypes.{}]", integration.member()));
                self.line(14, &format!("sendingLimit: \"{}\",", limits.sending_limit));
                self.line(14, &format!("receivingLimit: \"{}\",", limits.receiving_limit));
                self.close(12);
            }
            self.close(10);
        }
        self.close(8);
    }
}

fn chain_ref(chain: ChainSlug, registry: &Registry) -> String {
    match registry.chain_key(chain) {
        Some(key) => format!("ChainSlug.{key}"),
        None => chain.to_string(),
    }
}

fn chain_list(chains: &[ChainSlug], registry: &Registry) -> String {
    let chains: Vec<String> = chains
        .iter()
        .map(|chain| chain_ref(*chain, registry))
        .collect();
    format!("[{}]", chains.join(", "))
}

/// `[Tokens.LOOKS]`, or `[Tokens["USDC.e"]]` for keys that are not identifiers.
fn token_ref(token: &Token, registry: &Registry) -> String {
    let key = registry.token_key(token).unwrap_or(token.as_str());
    if is_identifier(key) {
        format!("[Tokens.{key}]")
    } else {
        format!("[Tokens[{}]]", serde_json::Value::from(key))
    }
}

fn is_identifier(key: &str) -> bool {
    let mut chars = key.chars();
    chars
        .next()
        .is_some_and(|first| first.is_ascii_alphabetic() || first == '_' || first == '$')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
}
