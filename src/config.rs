//! Runtime configuration
//!
//! Merged in order: defaults <- TOML file <- environment <- CLI flags.

use crate::finder::WildcardPolicy;
use anyhow::{Context, Result, bail};
use serde::Deserialize;
use std::fs;
use std::path::PathBuf;

pub const ENV_DICTIONARY: &str = "WORD_FINDER_DICTIONARY";
pub const ENV_WILDCARD_POLICY: &str = "WORD_FINDER_WILDCARD_POLICY";
pub const ENV_RESULT_LIMIT: &str = "WORD_FINDER_RESULT_LIMIT";

/// Default location of the prepared word list
pub const DEFAULT_DICTIONARY: &str = "data/turkish-words.json";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Word list produced by `build-dict`
    pub dictionary: PathBuf,
    pub wildcard_policy: WildcardPolicy,
    /// Maximum results per length group, unlimited when `None`
    pub result_limit: Option<usize>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            dictionary: PathBuf::from(DEFAULT_DICTIONARY),
            wildcard_policy: WildcardPolicy::default(),
            result_limit: None,
        }
    }
}

/// Shape of the TOML config file; every key is optional
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct FileConfig {
    dictionary: Option<PathBuf>,
    wildcard_policy: Option<String>,
    result_limit: Option<usize>,
}

/// CLI-level options passed to [`load_config`]
#[derive(Clone, Debug, Default)]
pub struct MergeOpts {
    pub config_path: Option<PathBuf>,
    pub cli_dictionary: Option<PathBuf>,
    pub cli_wildcard_policy: Option<WildcardPolicy>,
    pub cli_result_limit: Option<usize>,
}

/// Load configuration using the process environment
///
/// # Errors
///
/// Returns an error if the config file exists but cannot be read or parsed,
/// or names an unknown wildcard policy.
pub fn load_config(base: Config, opts: MergeOpts) -> Result<Config> {
    load_config_with_env(base, opts, |key| std::env::var(key).ok())
}

/// Load configuration with an explicit environment lookup
///
/// Unparseable environment values are logged and ignored.
///
/// # Errors
///
/// See [`load_config`].
pub fn load_config_with_env<F>(mut base: Config, opts: MergeOpts, env: F) -> Result<Config>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(path) = opts.config_path.as_ref() {
        if path.exists() {
            let s = fs::read_to_string(path)
                .with_context(|| format!("failed to read config {}", path.display()))?;
            let file: FileConfig = toml::from_str(&s)
                .with_context(|| format!("invalid config {}", path.display()))?;

            if let Some(dictionary) = file.dictionary {
                base.dictionary = dictionary;
            }
            if let Some(name) = file.wildcard_policy {
                let Some(policy) = WildcardPolicy::from_name(&name) else {
                    bail!("unknown wildcard policy '{name}' in {}", path.display());
                };
                base.wildcard_policy = policy;
            }
            if let Some(limit) = file.result_limit {
                base.result_limit = Some(limit);
            }
        } else {
            tracing::warn!(path = %path.display(), "config file not found, using defaults");
        }
    }

    // env vars override file
    if let Some(dictionary) = env(ENV_DICTIONARY) {
        base.dictionary = PathBuf::from(dictionary);
    }
    if let Some(name) = env(ENV_WILDCARD_POLICY) {
        match WildcardPolicy::from_name(&name) {
            Some(policy) => base.wildcard_policy = policy,
            None => tracing::warn!(value = %name, "ignoring unknown {ENV_WILDCARD_POLICY}"),
        }
    }
    if let Some(limit) = env(ENV_RESULT_LIMIT) {
        match limit.parse::<usize>() {
            Ok(v) => base.result_limit = Some(v),
            Err(_) => tracing::warn!(value = %limit, "ignoring unparseable {ENV_RESULT_LIMIT}"),
        }
    }

    // CLI overrides everything
    if let Some(dictionary) = opts.cli_dictionary {
        base.dictionary = dictionary;
    }
    if let Some(policy) = opts.cli_wildcard_policy {
        base.wildcard_policy = policy;
    }
    if let Some(limit) = opts.cli_result_limit {
        base.result_limit = Some(limit);
    }

    tracing::debug!(
        dictionary = %base.dictionary.display(),
        policy = base.wildcard_policy.name(),
        result_limit = ?base.result_limit,
        "configuration loaded"
    );

    Ok(base)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rustc_hash::FxHashMap;

    fn env_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> + use<> {
        let map: FxHashMap<String, String> = pairs
            .iter()
            .map(|&(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    fn no_env(_: &str) -> Option<String> {
        None
    }

    fn write_config(contents: &str) -> tempfile::NamedTempFile {
        let tmp = tempfile::NamedTempFile::new().expect("tempfile");
        fs::write(tmp.path(), contents).unwrap();
        tmp
    }

    #[test]
    fn defaults_without_sources() {
        let got = load_config_with_env(Config::default(), MergeOpts::default(), no_env).unwrap();
        assert_eq!(got, Config::default());
        assert_eq!(got.dictionary, PathBuf::from(DEFAULT_DICTIONARY));
        assert_eq!(got.wildcard_policy, WildcardPolicy::PerLetter);
    }

    #[test]
    fn file_overrides_defaults() {
        let tmp = write_config(
            r#"
dictionary = "words.txt"
wildcard_policy = "cumulative"
result_limit = 25
"#,
        );
        let opts = MergeOpts {
            config_path: Some(tmp.path().to_path_buf()),
            ..MergeOpts::default()
        };

        let got = load_config_with_env(Config::default(), opts, no_env).unwrap();
        assert_eq!(got.dictionary, PathBuf::from("words.txt"));
        assert_eq!(got.wildcard_policy, WildcardPolicy::Cumulative);
        assert_eq!(got.result_limit, Some(25));
    }

    #[test]
    fn merge_file_env_cli_precedence() {
        let tmp = write_config(
            r#"
dictionary = "from_file.json"
wildcard_policy = "cumulative"
result_limit = 5
"#,
        );
        let env = env_from(&[
            (ENV_DICTIONARY, "from_env.json"),
            (ENV_WILDCARD_POLICY, "per-letter"),
            (ENV_RESULT_LIMIT, "10"),
        ]);
        let opts = MergeOpts {
            config_path: Some(tmp.path().to_path_buf()),
            cli_dictionary: Some(PathBuf::from("from_cli.json")),
            cli_wildcard_policy: None,
            cli_result_limit: Some(20),
        };

        let got = load_config_with_env(Config::default(), opts, env).unwrap();
        assert_eq!(got.dictionary, PathBuf::from("from_cli.json"));
        assert_eq!(got.wildcard_policy, WildcardPolicy::PerLetter);
        assert_eq!(got.result_limit, Some(20));
    }

    #[test]
    fn bad_env_values_are_ignored() {
        let env = env_from(&[(ENV_WILDCARD_POLICY, "greedy"), (ENV_RESULT_LIMIT, "lots")]);
        let got = load_config_with_env(Config::default(), MergeOpts::default(), env).unwrap();
        assert_eq!(got, Config::default());
    }

    #[test]
    fn unknown_policy_in_file_is_an_error() {
        let tmp = write_config(r#"wildcard_policy = "greedy""#);
        let opts = MergeOpts {
            config_path: Some(tmp.path().to_path_buf()),
            ..MergeOpts::default()
        };

        let err = load_config_with_env(Config::default(), opts, no_env).unwrap_err();
        assert!(err.to_string().contains("unknown wildcard policy"));
    }

    #[test]
    fn unknown_key_in_file_is_an_error() {
        let tmp = write_config(r#"dictionery = "typo.json""#);
        let opts = MergeOpts {
            config_path: Some(tmp.path().to_path_buf()),
            ..MergeOpts::default()
        };

        assert!(load_config_with_env(Config::default(), opts, no_env).is_err());
    }

    #[test]
    fn missing_file_falls_back() {
        let dir = tempfile::tempdir().unwrap();
        let opts = MergeOpts {
            config_path: Some(dir.path().join("absent.toml")),
            ..MergeOpts::default()
        };

        let got = load_config_with_env(Config::default(), opts, no_env).unwrap();
        assert_eq!(got, Config::default());
    }
}
