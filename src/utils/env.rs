use std::collections::HashMap;
use std::{env, fmt, io};

use heck::ToShoutySnakeCase;

/// PlugsEnv allows us to mock environment variables while
/// running tests. That way we can run our tests in parallel,
/// and our local development environment will not have unintended
/// side effects on our tests.
#[derive(Debug, Clone)]
pub struct PlugsEnv {
    mock_store: Option<HashMap<String, String>>,
}

impl Default for PlugsEnv {
    fn default() -> PlugsEnv {
        PlugsEnv::new()
    }
}

impl PlugsEnv {
    /// creates a new environment variable store
    pub fn new() -> PlugsEnv {
        let mock_store = if cfg!(test) {
            Some(HashMap::new())
        } else {
            None
        };

        PlugsEnv { mock_store }
    }

    /// returns the value of the environment variable if it exists
    pub fn get(&self, key: PlugsEnvKey) -> io::Result<Option<String>> {
        let key_str = key.to_string();
        tracing::trace!("Checking for ${}", &key_str);
        let result = match &self.mock_store {
            Some(mock_store) => Ok(mock_store.get(&key_str).map(|v| v.to_owned())),
            None => match env::var(&key_str) {
                Ok(data) => Ok(Some(data)),
                Err(e) => match e {
                    env::VarError::NotPresent => Ok(None),
                    env::VarError::NotUnicode(_) => Err(io::Error::new(
                        io::ErrorKind::InvalidInput,
                        format!(
                            "The value of the environment variable \"{}\" is not valid Unicode.",
                            &key_str
                        ),
                    )),
                },
            },
        }?;

        match &result {
            Some(value) => tracing::debug!("read environment variable ${} = {}", &key_str, value),
            None => tracing::trace!("could not find ${}", &key_str),
        }

        Ok(result)
    }

    /// sets a value in the mock store
    #[cfg(test)]
    pub fn insert(&mut self, key: PlugsEnvKey, value: &str) {
        if let Some(mock_store) = &mut self.mock_store {
            mock_store.insert(key.to_string(), value.into());
        }
    }
}

/// PlugsEnvKey defines all of the environment variables
/// that are respected by plugs. Each environment variable is prefixed
/// with `PLUGS_` and the suffix is the name of the key defined here,
/// converted from CamelCase to SHOUTY_SNAKE_CASE.
/// For example, `PlugsEnvKey::OutputDir.to_string()` becomes `PLUGS_OUTPUT_DIR`
#[derive(Debug, Copy, Clone)]
pub enum PlugsEnvKey {
    OutputDir,
    Log,
}

impl fmt::Display for PlugsEnvKey {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        let dbg = format!("{:?}", self).to_shouty_snake_case();
        fmt.write_str(&format!("PLUGS_{}", &dbg))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_parses_output_dir() {
        assert_eq!(&PlugsEnvKey::OutputDir.to_string(), "PLUGS_OUTPUT_DIR");
        assert_eq!(&PlugsEnvKey::Log.to_string(), "PLUGS_LOG");
    }

    #[test]
    fn it_can_set_and_read_from_mock() {
        let expected_value = "./deployments";
        let key = PlugsEnvKey::OutputDir;
        let mut env_store = PlugsEnv::new();
        env_store.insert(key, expected_value);
        let actual_value = env_store.get(key).unwrap().unwrap();
        assert_eq!(expected_value, &actual_value)
    }

    #[test]
    fn it_reads_nothing_from_an_empty_mock() {
        let env_store = PlugsEnv::new();
        assert_eq!(env_store.get(PlugsEnvKey::Log).unwrap(), None);
    }
}
