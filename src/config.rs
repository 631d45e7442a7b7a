// Fri Oct 16 2026 - Alex

use crate::path::{PathError, PathResolver};
use log::debug;
use std::ffi::OsString;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const DEFAULT_PROGRAM: &str = "strap";
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub const HOME_VAR: &str = "STRAP_HOME";
pub const LIB_DIR_VAR: &str = "STRAP_LIB_DIR";
pub const COMMANDS_DIR_VAR: &str = "STRAP_COMMANDS_DIR";
pub const PLUGINS_DIR_VAR: &str = "STRAP_PLUGINS_DIR";
pub const USER_HOME_VAR: &str = "STRAP_USER_HOME";
pub const DEBUG_VAR: &str = "STRAP_DEBUG";
pub const LOG_VAR: &str = "STRAP_LOG";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("missing installation directory: {}", .0.display())]
    MissingInstallation(PathBuf),
    #[error("could not locate the installation root")]
    Locate(#[from] PathError),
    #[error("could not determine a home directory for user data; set STRAP_USER_HOME")]
    NoHome,
}

/// Environment inputs, read once at startup.
#[derive(Debug, Clone, Default)]
pub struct EnvSnapshot {
    pub home: Option<PathBuf>,
    pub lib_dir: Option<PathBuf>,
    pub commands_dir: Option<PathBuf>,
    pub plugins_dir: Option<PathBuf>,
    pub user_home: Option<PathBuf>,
    pub debug: bool,
    pub log_filter: Option<String>,
    pub no_color: bool,
}

impl EnvSnapshot {
    pub fn capture() -> Self {
        Self::from_lookup(|key| std::env::var_os(key))
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<OsString>,
    {
        let non_empty = |key: &str| lookup(key).filter(|value| !value.is_empty());
        let path = |key: &str| non_empty(key).map(PathBuf::from);

        Self {
            home: path(HOME_VAR),
            lib_dir: path(LIB_DIR_VAR),
            commands_dir: path(COMMANDS_DIR_VAR),
            plugins_dir: path(PLUGINS_DIR_VAR),
            user_home: path(USER_HOME_VAR),
            debug: non_empty(DEBUG_VAR)
                .map(|value| is_truthy(&value.to_string_lossy()))
                .unwrap_or(false),
            log_filter: non_empty(LOG_VAR).map(|value| value.to_string_lossy().into_owned()),
            no_color: lookup("NO_COLOR").is_some(),
        }
    }
}

fn is_truthy(value: &str) -> bool {
    !matches!(value.trim().to_lowercase().as_str(), "" | "0" | "false" | "no" | "off")
}

/// Installation layout. Built once and passed by reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub program: String,
    pub version: String,
    pub root: PathBuf,
    pub lib_dir: PathBuf,
    pub commands_dir: PathBuf,
    pub plugins_dir: PathBuf,
    pub user_home: PathBuf,
}

impl Config {
    /// Layout with every directory derived from `root`.
    pub fn for_root(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        Self {
            program: DEFAULT_PROGRAM.to_string(),
            version: VERSION.to_string(),
            lib_dir: root.join("lib"),
            commands_dir: root.join("commands"),
            plugins_dir: root.join("plugins"),
            user_home: default_user_home().unwrap_or_else(|| root.join("user")),
            root,
        }
    }

    /// Self-locates from the running executable (`<root>/bin/<program>`)
    /// unless `STRAP_HOME` is set, then applies the remaining overrides.
    pub fn locate(
        executable: &Path,
        env: &EnvSnapshot,
        resolver: &PathResolver,
    ) -> Result<Self, ConfigError> {
        let root = match &env.home {
            Some(home) => match resolver.resolve_dir(home) {
                Ok(resolved) => resolved.into_path_buf(),
                Err(PathError::NotFound(_)) | Err(PathError::InvalidArgument { .. }) => {
                    return Err(ConfigError::MissingInstallation(home.clone()));
                }
                Err(e) => return Err(e.into()),
            },
            None => {
                let exe = resolver.resolve_file(executable)?.into_path_buf();
                let bin_dir = exe.parent().unwrap_or_else(|| Path::new("/"));
                bin_dir.parent().unwrap_or(bin_dir).to_path_buf()
            }
        };
        debug!("installation root: {}", root.display());

        let user_home = match &env.user_home {
            Some(dir) => dir.clone(),
            None => default_user_home().ok_or(ConfigError::NoHome)?,
        };

        let mut config = Self::for_root(root).with_user_home(user_home);
        if let Some(dir) = &env.lib_dir {
            config = config.with_lib_dir(dir.clone());
        }
        if let Some(dir) = &env.commands_dir {
            config = config.with_commands_dir(dir.clone());
        }
        if let Some(dir) = &env.plugins_dir {
            config = config.with_plugins_dir(dir.clone());
        }
        Ok(config)
    }

    pub fn with_program(mut self, program: impl Into<String>) -> Self {
        self.program = program.into();
        self
    }

    pub fn with_lib_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.lib_dir = dir.into();
        self
    }

    pub fn with_commands_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.commands_dir = dir.into();
        self
    }

    pub fn with_plugins_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.plugins_dir = dir.into();
        self
    }

    pub fn with_user_home(mut self, dir: impl Into<PathBuf>) -> Self {
        self.user_home = dir.into();
        self
    }

    pub fn user_commands_dir(&self) -> PathBuf {
        self.user_home.join("commands")
    }

    pub fn version_line(&self) -> String {
        format!("{} {}", self.program, self.version)
    }

    /// Checks root, lib, commands and plugins directories in that order.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for dir in [&self.root, &self.lib_dir, &self.commands_dir, &self.plugins_dir] {
            if !dir.is_dir() {
                return Err(ConfigError::MissingInstallation(dir.clone()));
            }
        }
        Ok(())
    }

    pub fn ensure_user_home(&self) -> io::Result<()> {
        fs::create_dir_all(&self.user_home)
    }

    /// Variables exported to handed-off commands.
    pub fn exported_env(&self) -> Vec<(String, PathBuf)> {
        vec![
            (HOME_VAR.to_string(), self.root.clone()),
            (LIB_DIR_VAR.to_string(), self.lib_dir.clone()),
            (COMMANDS_DIR_VAR.to_string(), self.commands_dir.clone()),
            (PLUGINS_DIR_VAR.to_string(), self.plugins_dir.clone()),
            (USER_HOME_VAR.to_string(), self.user_home.clone()),
        ]
    }
}

fn default_user_home() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".strap"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use tempfile::TempDir;

    fn snapshot(vars: &[(&str, &str)]) -> EnvSnapshot {
        let map: HashMap<String, OsString> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), OsString::from(v)))
            .collect();
        EnvSnapshot::from_lookup(|key| map.get(key).cloned())
    }

    fn install(root: &Path) {
        for dir in ["bin", "lib", "commands", "plugins"] {
            fs::create_dir_all(root.join(dir)).unwrap();
        }
        fs::write(root.join("bin").join("strap"), "").unwrap();
    }

    #[test]
    fn test_snapshot_reads_variables() {
        let env = snapshot(&[
            (HOME_VAR, "/opt/strap"),
            (COMMANDS_DIR_VAR, ""),
            (DEBUG_VAR, "1"),
            (LOG_VAR, "strap=trace"),
        ]);
        assert_eq!(env.home, Some(PathBuf::from("/opt/strap")));
        assert_eq!(env.commands_dir, None);
        assert!(env.debug);
        assert_eq!(env.log_filter.as_deref(), Some("strap=trace"));
        assert!(!env.no_color);
    }

    #[test]
    fn test_debug_toggle_values() {
        assert!(!snapshot(&[(DEBUG_VAR, "0")]).debug);
        assert!(!snapshot(&[(DEBUG_VAR, "false")]).debug);
        assert!(snapshot(&[(DEBUG_VAR, "yes")]).debug);
        assert!(!snapshot(&[]).debug);
    }

    #[test]
    fn test_locate_from_executable() {
        let tmp = TempDir::new().unwrap();
        let root = fs::canonicalize(tmp.path()).unwrap();
        install(&root);

        let env = snapshot(&[(USER_HOME_VAR, "/tmp/strap-user")]);
        let config =
            Config::locate(&root.join("bin").join("strap"), &env, &PathResolver::new()).unwrap();

        assert_eq!(config.root, root);
        assert_eq!(config.commands_dir, root.join("commands"));
        assert_eq!(config.user_home, PathBuf::from("/tmp/strap-user"));
        assert!(config.validate().is_ok());
    }

    #[cfg(unix)]
    #[test]
    fn test_locate_through_symlinked_executable() {
        let tmp = TempDir::new().unwrap();
        let root = fs::canonicalize(tmp.path()).unwrap();
        let install_root = root.join("install");
        install(&install_root);
        fs::create_dir(root.join("path")).unwrap();
        std::os::unix::fs::symlink(
            install_root.join("bin").join("strap"),
            root.join("path").join("strap"),
        )
        .unwrap();

        let env = snapshot(&[(USER_HOME_VAR, "/tmp/strap-user")]);
        let config =
            Config::locate(&root.join("path").join("strap"), &env, &PathResolver::new()).unwrap();
        assert_eq!(config.root, install_root);
    }

    #[test]
    fn test_locate_prefers_overrides() {
        let tmp = TempDir::new().unwrap();
        let root = fs::canonicalize(tmp.path()).unwrap();
        install(&root);
        let elsewhere = root.join("elsewhere");
        fs::create_dir(&elsewhere).unwrap();

        let env = snapshot(&[
            (HOME_VAR, root.to_str().unwrap()),
            (PLUGINS_DIR_VAR, elsewhere.to_str().unwrap()),
            (USER_HOME_VAR, "/tmp/strap-user"),
        ]);
        let config = Config::locate(Path::new("/nonexistent/strap"), &env, &PathResolver::new())
            .unwrap();

        assert_eq!(config.root, root);
        assert_eq!(config.plugins_dir, elsewhere);
        assert_eq!(config.lib_dir, root.join("lib"));
    }

    #[test]
    fn test_locate_with_missing_home() {
        let env = snapshot(&[(HOME_VAR, "/definitely/not/here"), (USER_HOME_VAR, "/tmp/u")]);
        let err = Config::locate(Path::new("/bin/sh"), &env, &PathResolver::new()).unwrap_err();
        assert!(matches!(err, ConfigError::MissingInstallation(_)));
    }

    #[test]
    fn test_validate_names_first_missing_directory() {
        let tmp = TempDir::new().unwrap();
        let root = tmp.path().to_path_buf();
        fs::create_dir(root.join("lib")).unwrap();
        fs::create_dir(root.join("plugins")).unwrap();

        let err = Config::for_root(&root).validate().unwrap_err();
        match err {
            ConfigError::MissingInstallation(dir) => assert_eq!(dir, root.join("commands")),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_ensure_user_home_is_idempotent() {
        let tmp = TempDir::new().unwrap();
        let user = tmp.path().join("data").join("strap");
        let config = Config::for_root(tmp.path()).with_user_home(&user);

        config.ensure_user_home().unwrap();
        config.ensure_user_home().unwrap();
        assert!(user.is_dir());
    }

    #[test]
    fn test_exported_env() {
        let config = Config::for_root("/opt/strap").with_user_home("/home/u/.strap");
        let env = config.exported_env();

        assert!(env.contains(&(HOME_VAR.to_string(), PathBuf::from("/opt/strap"))));
        assert!(env.contains(&(
            COMMANDS_DIR_VAR.to_string(),
            PathBuf::from("/opt/strap/commands")
        )));
        assert_eq!(config.version_line(), format!("strap {}", VERSION));
    }
}
