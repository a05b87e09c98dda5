use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

pub const REPO_CONFIG_FILE: &str = ".repo-context.toml";

#[derive(Debug, Serialize, Deserialize, Default, Clone, PartialEq, Eq)]
pub struct Config {
    pub output: Option<String>,
    pub no_color: Option<bool>,
}

impl Config {
    pub fn merge(&mut self, other: Config) {
        if other.output.is_some() {
            self.output = other.output;
        }
        if other.no_color.is_some() {
            self.no_color = other.no_color;
        }
    }

    fn from_file(path: &Path) -> Option<Config> {
        let content = fs::read_to_string(path).ok()?;
        toml::from_str(&content).ok()
    }
}

pub fn load_config(repo_root: Option<&Path>) -> Config {
    let mut config = Config::default();

    // 1. Global config: ~/.repo-context/config.toml
    if let Some(home_dir) = dirs::home_dir() {
        let global_path = home_dir.join(".repo-context").join("config.toml");
        if let Some(global_config) = Config::from_file(&global_path) {
            config.merge(global_config);
        }
    }

    // 2. Repo config at the repository root, or the current dir outside a repo
    let base = repo_root
        .map(Path::to_path_buf)
        .or_else(|| std::env::current_dir().ok());

    if let Some(base) = base {
        if let Some(repo_config) = Config::from_file(&base.join(REPO_CONFIG_FILE)) {
            config.merge(repo_config);
        }
    }

    config
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_config_parsing() {
        let toml_str = r#"
            output = "ctx.txt"
            no_color = true
        "#;
        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(config.output.as_deref(), Some("ctx.txt"));
        assert_eq!(config.no_color, Some(true));
    }

    #[test]
    fn test_config_merge() {
        let mut c1 = Config {
            output: Some("a.txt".to_string()),
            no_color: Some(false),
        };
        let c2 = Config {
            output: Some("b.txt".to_string()),
            ..Config::default()
        };
        c1.merge(c2);
        assert_eq!(c1.output.as_deref(), Some("b.txt"));
        assert_eq!(c1.no_color, Some(false));
    }

    #[test]
    fn test_malformed_file_ignored() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(REPO_CONFIG_FILE);
        fs::write(&path, "output = [not toml").unwrap();
        assert_eq!(Config::from_file(&path), None);

        fs::write(&path, "output = \"x.txt\"").unwrap();
        assert_eq!(
            Config::from_file(&path).and_then(|c| c.output),
            Some("x.txt".to_string())
        );
    }

    #[test]
    fn test_repo_config_read_from_given_root() {
        let dir = tempdir().unwrap();
        fs::write(
            dir.path().join(REPO_CONFIG_FILE),
            "output = \"from-root.txt\"\nno_color = true\n",
        )
        .unwrap();

        let config = load_config(Some(dir.path()));
        assert_eq!(config.output.as_deref(), Some("from-root.txt"));
        assert_eq!(config.no_color, Some(true));
    }
}
