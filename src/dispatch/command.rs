// Fri Oct 16 2026 - Alex

use super::error::{DispatchError, DispatchResult};
use crate::config::Config;
use log::{debug, trace};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandSource {
    User,
    Core,
    Plugin(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command {
    pub name: String,
    pub path: PathBuf,
    pub source: CommandSource,
    pub exists: bool,
}

#[derive(Debug, Clone)]
pub struct CommandLayer {
    pub source: CommandSource,
    pub dir: PathBuf,
}

/// Finds commands by exact file name: user overrides first, then the core
/// commands directory, then each plugin's `commands/` in name order.
#[derive(Debug, Clone)]
pub struct CommandLocator {
    layers: Vec<CommandLayer>,
    core_dir: PathBuf,
}

impl CommandLocator {
    pub fn new(config: &Config) -> Self {
        let mut layers = vec![
            CommandLayer {
                source: CommandSource::User,
                dir: config.user_commands_dir(),
            },
            CommandLayer {
                source: CommandSource::Core,
                dir: config.commands_dir.clone(),
            },
        ];
        layers.extend(plugin_layers(&config.plugins_dir));

        Self {
            layers,
            core_dir: config.commands_dir.clone(),
        }
    }

    pub fn layers(&self) -> &[CommandLayer] {
        &self.layers
    }

    /// Never fails; `exists` is false when no layer has the command.
    pub fn lookup(&self, name: &str) -> Command {
        if is_valid_name(name) {
            for layer in &self.layers {
                let candidate = layer.dir.join(name);
                trace!("probing {}", candidate.display());
                if candidate.is_file() {
                    debug!("found command `{}' at {}", name, candidate.display());
                    return Command {
                        name: name.to_string(),
                        path: candidate,
                        source: layer.source.clone(),
                        exists: true,
                    };
                }
            }
        }

        Command {
            name: name.to_string(),
            path: self.core_dir.join(name),
            source: CommandSource::Core,
            exists: false,
        }
    }

    pub fn find(&self, name: &str) -> DispatchResult<Command> {
        let command = self.lookup(name);
        if command.exists {
            Ok(command)
        } else {
            Err(DispatchError::UnknownCommand(name.to_string()))
        }
    }
}

/// Names are single path components; no hidden files, no traversal.
pub fn is_valid_name(name: &str) -> bool {
    !name.is_empty()
        && !name.starts_with('.')
        && !name.contains('/')
        && !name.contains(std::path::MAIN_SEPARATOR)
        && !name.contains('\0')
}

fn plugin_layers(plugins_dir: &Path) -> Vec<CommandLayer> {
    let entries = match fs::read_dir(plugins_dir) {
        Ok(entries) => entries,
        Err(e) => {
            debug!("cannot list plugins in {}: {}", plugins_dir.display(), e);
            return Vec::new();
        }
    };

    let mut plugins: Vec<(String, PathBuf)> = entries
        .filter_map(Result::ok)
        .filter_map(|entry| {
            let name = entry.file_name().to_str()?.to_string();
            let dir = entry.path().join("commands");
            (!name.starts_with('.') && dir.is_dir()).then_some((name, dir))
        })
        .collect();
    plugins.sort_by(|a, b| a.0.cmp(&b.0));

    plugins
        .into_iter()
        .map(|(name, dir)| CommandLayer {
            source: CommandSource::Plugin(name),
            dir,
        })
        .collect()
}
