//! Writes the artifacts of a `plugs setup` run.
//!
//! The [`Emit`] trait is what the setup pipeline talks to; [`FsEmitter`]
//! renders every artifact and writes it below an output directory, or only
//! renders it when running dry.

mod constants;
mod env;
mod token_addresses;

use camino::{Utf8Path, Utf8PathBuf};
use plugs_std::Fs;

use crate::PlugsResult;
use crate::constants::ProjectConstants;
use crate::options::{EvmAddress, NewTokenInfo, ProjectName, ProjectType};
use crate::registry::{ChainSlug, REGISTRY_PATH, Registry, RegistryError, Token};

pub use constants::{CONSTANTS_DIR, constants_path};
pub use env::ENV_PATH;
pub use token_addresses::TOKEN_ADDRESSES_PATH;

use env::EnvFile;

pub trait Emit {
    /// Extends the registry with the project, the new token and RPC keys for
    /// the new chains, then persists the registry extension.
    fn update_enums(
        &mut self,
        registry: &mut Registry,
        project_name: &ProjectName,
        new_token: Option<&NewTokenInfo>,
        new_chains: &[ChainSlug],
    ) -> PlugsResult<()>;

    /// Writes `.env` with the project's settings and one RPC key per chain.
    fn build_env_file(
        &mut self,
        registry: &Registry,
        project_name: &ProjectName,
        project_type: ProjectType,
        owner: &EvmAddress,
        tokens: &[Token],
        chains: &[ChainSlug],
    ) -> PlugsResult<()>;

    /// Writes the project's constants module.
    fn generate_constants_file(
        &mut self,
        registry: &Registry,
        project_type: ProjectType,
        project_name: &ProjectName,
        constants: &ProjectConstants,
    ) -> PlugsResult<()>;

    /// Records where an already deployed token lives.
    fn generate_token_addresses_file(
        &mut self,
        registry: &Registry,
        chain_slug: ChainSlug,
        token: &Token,
        address: &EvmAddress,
    ) -> PlugsResult<()>;
}

#[derive(Debug)]
pub struct FsEmitter {
    root: Utf8PathBuf,
    dry_run: bool,
    artifacts: Vec<Utf8PathBuf>,
}

impl FsEmitter {
    pub fn new(root: impl Into<Utf8PathBuf>, dry_run: bool) -> Self {
        Self {
            root: root.into(),
            dry_run,
            artifacts: Vec::new(),
        }
    }

    /// Paths relative to the output directory, in the order they were emitted.
    pub fn artifacts(&self) -> &[Utf8PathBuf] {
        &self.artifacts
    }

    pub fn into_artifacts(self) -> Vec<Utf8PathBuf> {
        self.artifacts
    }

    fn write(&mut self, relative: impl AsRef<Utf8Path>, contents: String) -> PlugsResult<()> {
        let relative = relative.as_ref();
        let path = self.root.join(relative);
        if self.dry_run {
            tracing::info!("dry run: not writing {} ({} bytes)", path, contents.len());
        } else {
            Fs::write_file(&path, contents)?;
            tracing::info!("wrote {}", path);
        }
        self.record(relative);
        Ok(())
    }

    fn record(&mut self, relative: &Utf8Path) {
        if !self.artifacts.iter().any(|artifact| artifact == relative) {
            self.artifacts.push(relative.to_path_buf());
        }
    }
}

impl Emit for FsEmitter {
    fn update_enums(
        &mut self,
        registry: &mut Registry,
        project_name: &ProjectName,
        new_token: Option<&NewTokenInfo>,
        new_chains: &[ChainSlug],
    ) -> PlugsResult<()> {
        registry.extend_project(project_name.as_str());
        if let Some(new_token) = new_token {
            registry.extend_token(new_token.registry_entry())?;
        }
        for chain in new_chains {
            let rpc_key = registry.extend_chain(*chain);
            tracing::debug!(%chain, rpc_key, "registered rpc key");
        }

        if self.dry_run {
            let json = registry.to_json()?;
            self.write(REGISTRY_PATH, json)
        } else {
            registry.persist(&self.root)?;
            self.record(Utf8Path::new(REGISTRY_PATH));
            Ok(())
        }
    }

    fn build_env_file(
        &mut self,
        registry: &Registry,
        project_name: &ProjectName,
        project_type: ProjectType,
        owner: &EvmAddress,
        tokens: &[Token],
        chains: &[ChainSlug],
    ) -> PlugsResult<()> {
        let rpc_keys: Vec<String> = chains
            .iter()
            .map(|chain| {
                registry
                    .rpc_key(*chain)
                    .map(str::to_string)
                    .ok_or_else(|| RegistryError::MissingRpcKey {
                        chain: chain.display_name(),
                    })
            })
            .collect::<Result<_, _>>()?;
        let existing = env::read_existing(&self.root.join(ENV_PATH))?;
        let contents = EnvFile {
            project_name,
            project_type,
            owner,
            tokens,
            rpc_keys: &rpc_keys,
        }
        .render(&existing);
        self.write(ENV_PATH, contents)
    }

    fn generate_constants_file(
        &mut self,
        registry: &Registry,
        project_type: ProjectType,
        project_name: &ProjectName,
        constants: &ProjectConstants,
    ) -> PlugsResult<()> {
        let contents = constants::render_constants(constants, registry);
        self.write(constants_path(project_type, project_name), contents)
    }

    fn generate_token_addresses_file(
        &mut self,
        registry: &Registry,
        chain_slug: ChainSlug,
        token: &Token,
        address: &EvmAddress,
    ) -> PlugsResult<()> {
        let token_key = registry
            .token_key(token)
            .ok_or_else(|| RegistryError::UnknownToken {
                token: token.to_string(),
            })?;
        let existing = Fs::read_existing_file(self.root.join(TOKEN_ADDRESSES_PATH))?;
        let contents = token_addresses::merge_token_address(
            existing.as_deref(),
            chain_slug,
            token_key,
            address,
        )?;
        self.write(TOKEN_ADDRESSES_PATH, contents)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use speculoos::prelude::*;
    use tempfile::TempDir;

    use super::*;
    use crate::constants::{ChainSelection, LimitInfo, TokenLimit, assemble};
    use crate::options::Hooks;

    const OWNER: &str = "0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed";
    const LOOKS_ADDRESS: &str = "0xfB6916095ca1df60bB79Ce92cE3Ea74c37c5d359";

    fn temp_root() -> (TempDir, Utf8PathBuf) {
        let dir = TempDir::new().unwrap();
        let root = Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).unwrap();
        (dir, root)
    }

    fn new_token() -> NewTokenInfo {
        NewTokenInfo {
            name: "Blast LooksRare Token".to_string(),
            symbol: "bLOOKS".to_string(),
            decimals: 18,
            chain_slug: ChainSlug::BLAST,
            address: LOOKS_ADDRESS.parse().unwrap(),
        }
    }

    fn emit_everything(emitter: &mut FsEmitter) {
        let mut registry = Registry::builtin();
        let project_name: ProjectName = "blast".parse().unwrap();
        let owner: EvmAddress = OWNER.parse().unwrap();
        let new_token = new_token();
        let selection = ChainSelection {
            vault_chains: vec![ChainSlug::MAINNET],
            controller_chains: vec![ChainSlug::BLAST],
        };
        let chains = selection.all_chains();
        let new_chains = registry.chains_without_rpc_key(&chains);
        let tokens = [Token::new("bLOOKS")];

        emitter
            .update_enums(&mut registry, &project_name, Some(&new_token), &new_chains)
            .unwrap();
        emitter
            .build_env_file(
                &registry,
                &project_name,
                ProjectType::SuperToken,
                &owner,
                &tokens,
                &chains,
            )
            .unwrap();
        let limits = [TokenLimit {
            token: tokens[0].clone(),
            limits: LimitInfo::new("10000000", "10000000"),
        }];
        let constants = assemble(&selection, &limits, Hooks::LimitHook);
        emitter
            .generate_constants_file(&registry, ProjectType::SuperToken, &project_name, &constants)
            .unwrap();
        emitter
            .generate_token_addresses_file(
                &registry,
                new_token.chain_slug,
                &tokens[0],
                &new_token.address,
            )
            .unwrap();
    }

    #[test]
    fn it_writes_every_artifact() {
        let (_guard, root) = temp_root();
        let mut emitter = FsEmitter::new(root.clone(), false);

        emit_everything(&mut emitter);

        assert_eq!(
            emitter.artifacts(),
            [
                Utf8PathBuf::from(REGISTRY_PATH),
                Utf8PathBuf::from(ENV_PATH),
                Utf8PathBuf::from("script/constants/projectConstants/supertoken/blast.ts"),
                Utf8PathBuf::from(TOKEN_ADDRESSES_PATH),
            ]
        );
        for artifact in emitter.artifacts() {
            assert!(root.join(artifact).is_file(), "{artifact} was not written");
        }

        let env = Fs::read_file(root.join(ENV_PATH)).unwrap();
        assert_that(&env).contains("BLAST_RPC=\n");
        assert_that(&env).contains("TOKENS=bLOOKS\n");

        let constants = Fs::read_file(root.join(constants_path(
            ProjectType::SuperToken,
            &"blast".parse().unwrap(),
        )))
        .unwrap();
        assert_that(&constants).contains("[Tokens.bLOOKS]: {");

        let registry = Registry::load(&root).unwrap();
        assert!(registry.contains_token("bLOOKS"));
        assert_eq!(registry.rpc_key(ChainSlug::BLAST), Some("BLAST_RPC"));
    }

    #[test]
    fn a_second_run_keeps_the_rpc_urls_filled_in() {
        let (_guard, root) = temp_root();
        emit_everything(&mut FsEmitter::new(root.clone(), false));
        let env_path = root.join(ENV_PATH);
        let filled = Fs::read_file(&env_path)
            .unwrap()
            .replace("MAINNET_RPC=\n", "MAINNET_RPC=https://eth.example.com\n");
        Fs::write_file(&env_path, filled).unwrap();

        let mut registry = Registry::load(&root).unwrap();
        let mut emitter = FsEmitter::new(root.clone(), false);
        emitter
            .update_enums(&mut registry, &"blast".parse().unwrap(), None, &[])
            .unwrap();
        emitter
            .build_env_file(
                &registry,
                &"blast".parse().unwrap(),
                ProjectType::SuperToken,
                &OWNER.parse().unwrap(),
                &[Token::new("bLOOKS")],
                &[ChainSlug::MAINNET, ChainSlug::BLAST],
            )
            .unwrap();

        let env = Fs::read_file(&env_path).unwrap();
        assert_that(&env).contains("MAINNET_RPC=https://eth.example.com\n");
        assert_eq!(Registry::load(&root).unwrap().projects(), ["blast".to_string()]);
    }

    #[test]
    fn a_dry_run_writes_nothing() {
        let (_guard, root) = temp_root();
        let mut emitter = FsEmitter::new(root.clone(), true);

        emit_everything(&mut emitter);

        assert_eq!(emitter.artifacts().len(), 4);
        assert_eq!(std::fs::read_dir(&root).unwrap().count(), 0);
    }

    #[test]
    fn env_files_need_an_rpc_key_for_every_chain() {
        let (_guard, root) = temp_root();
        let result = FsEmitter::new(root, true).build_env_file(
            &Registry::builtin(),
            &"blast".parse().unwrap(),
            ProjectType::SuperToken,
            &OWNER.parse().unwrap(),
            &[],
            &[ChainSlug::BLAST],
        );
        assert_that(&result).is_err();
    }
}
