use camino::Utf8Path;
use itertools::Itertools;

use crate::PlugsResult;
use crate::options::{EvmAddress, ProjectName, ProjectType};
use crate::registry::Token;

pub const ENV_PATH: &str = ".env";

pub(crate) struct EnvFile<'a> {
    pub(crate) project_name: &'a ProjectName,
    pub(crate) project_type: ProjectType,
    pub(crate) owner: &'a EvmAddress,
    pub(crate) tokens: &'a [Token],
    pub(crate) rpc_keys: &'a [String],
}

/// The key/value pairs of an existing `.env`, in file order.
pub(crate) fn read_existing(path: &Utf8Path) -> PlugsResult<Vec<(String, String)>> {
    if !path.exists() {
        return Ok(Vec::new());
    }
    let pairs = dotenvy::from_path_iter(path)?.collect::<Result<Vec<_>, _>>()?;
    tracing::debug!("read {} existing entries from {}", pairs.len(), path);
    Ok(pairs)
}

impl EnvFile<'_> {
    pub(crate) fn render(&self, existing: &[(String, String)]) -> String {
        let lookup = |key: &str| {
            existing
                .iter()
                .find(|(existing_key, _)| existing_key == key)
                .map(|(_, value)| value.as_str())
        };

        let mut managed: Vec<(String, String)> = vec![
            ("PROJECT".to_string(), self.project_name.to_string()),
            (
                "PROJECT_TYPE".to_string(),
                self.project_type.constants_dir().to_string(),
            ),
            ("OWNER_ADDRESS".to_string(), self.owner.to_string()),
            (
                "OWNER_SIGNER_KEY".to_string(),
                lookup("OWNER_SIGNER_KEY").unwrap_or_default().to_string(),
            ),
            (
                "DRY_RUN".to_string(),
                lookup("DRY_RUN").unwrap_or("false").to_string(),
            ),
            ("TOKENS".to_string(), self.tokens.iter().join(",")),
        ];
        for rpc_key in self.rpc_keys.iter().unique() {
            managed.push((
                rpc_key.clone(),
                lookup(rpc_key).unwrap_or_default().to_string(),
            ));
        }

        let unrelated = existing
            .iter()
            .filter(|(key, _)| !managed.iter().any(|(managed_key, _)| managed_key == key));

        let mut contents = String::new();
        for (key, value) in managed.iter().chain(unrelated) {
            contents.push_str(&format!("{}={}\n", key, quote(value)));
        }
        contents
    }
}

/// `.env` values only need quoting when they would not survive being read back verbatim.
fn quote(value: &str) -> String {
    let plain = value
        .chars()
        .all(|c| !c.is_whitespace() && !matches!(c, '"' | '\'' | '#' | '\\' | '$' | '`'));
    if plain {
        value.to_string()
    } else {
        let escaped = value
            .replace('\\', "\\\\")
            .replace('"', "\\\"")
            .replace('$', "\\$");
        format!("\"{escaped}\"")
    }
}

#[cfg(test)]
mod tests {
    use indoc::indoc;
    use pretty_assertions::assert_eq;

    use super::*;

    fn env_file<'a>(
        project_name: &'a ProjectName,
        owner: &'a EvmAddress,
        tokens: &'a [Token],
        rpc_keys: &'a [String],
    ) -> EnvFile<'a> {
        EnvFile {
            project_name,
            project_type: ProjectType::SuperToken,
            owner,
            tokens,
            rpc_keys,
        }
    }

    fn pairs(entries: &[(&str, &str)]) -> Vec<(String, String)> {
        entries
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect()
    }

    #[test]
    fn it_renders_a_fresh_env_file() {
        let project_name = "blast".parse().unwrap();
        let owner = "0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed".parse().unwrap();
        let tokens = [Token::new("LOOKS")];
        let rpc_keys = ["MAINNET_RPC".to_string(), "BLAST_RPC".to_string()];

        let contents = env_file(&project_name, &owner, &tokens, &rpc_keys).render(&[]);

        assert_eq!(
            contents,
            indoc! {"
                PROJECT=blast
                PROJECT_TYPE=supertoken
                OWNER_ADDRESS=0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed
                OWNER_SIGNER_KEY=
                DRY_RUN=false
                TOKENS=LOOKS
                MAINNET_RPC=
                BLAST_RPC=
            "}
        );
    }

    #[test]
    fn it_keeps_secrets_rpc_urls_and_unrelated_keys() {
        let project_name = "blast".parse().unwrap();
        let owner = "0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed".parse().unwrap();
        let tokens = [Token::new("LOOKS"), Token::new("USDC.e")];
        let rpc_keys = ["MAINNET_RPC".to_string(), "BLAST_RPC".to_string()];
        let existing = pairs(&[
            ("PROJECT", "old_project"),
            ("MAINNET_RPC", "https://eth.example.com"),
            ("OWNER_SIGNER_KEY", "0xabc"),
            ("DRY_RUN", "true"),
            ("SOCKET_SIGNER_KEY", "0xdef"),
            ("NOTE", "keep this one"),
        ]);

        let contents = env_file(&project_name, &owner, &tokens, &rpc_keys).render(&existing);

        assert_eq!(
            contents,
            indoc! {r#"
                PROJECT=blast
                PROJECT_TYPE=supertoken
                OWNER_ADDRESS=0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed
                OWNER_SIGNER_KEY=0xabc
                DRY_RUN=true
                TOKENS=LOOKS,USDC.e
                MAINNET_RPC=https://eth.example.com
                BLAST_RPC=
                SOCKET_SIGNER_KEY=0xdef
                NOTE="keep this one"
            "#}
        );
    }

    #[test]
    fn it_reads_back_what_it_writes() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = camino::Utf8PathBuf::from_path_buf(dir.path().join(".env")).unwrap();
        let project_name = "blast".parse().unwrap();
        let owner = "0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed".parse().unwrap();
        let existing = pairs(&[("NOTE", "say \"hi\" # later")]);
        let contents = env_file(&project_name, &owner, &[], &[]).render(&existing);
        std::fs::write(&path, contents).unwrap();

        let read = read_existing(&path).unwrap();

        assert!(read.contains(&("NOTE".to_string(), "say \"hi\" # later".to_string())));
        assert!(read.contains(&("PROJECT".to_string(), "blast".to_string())));
    }

    #[test]
    fn a_missing_env_file_reads_as_empty() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = camino::Utf8PathBuf::from_path_buf(dir.path().join(".env")).unwrap();
        assert!(read_existing(&path).unwrap().is_empty());
    }
}
