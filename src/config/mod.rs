use std::path::PathBuf;

use clap::Parser;
use derive_builder::Builder;
use itertools::Itertools;
use serde::Serialize;

use crate::{
    plugin::Plugin,
    theme::{resolve_theme, ThemeTokens},
};

mod config_file;
pub use config_file::{
    find_config_file, load_config_file, parse_config_file, ParsedConfigFile,
    ParsedConfigFileContent, CONFIG_FILENAME,
};

#[derive(Builder, Default, Parser)]
#[builder(default, setter(into, strip_option))]
pub struct Args {
    #[arg(long)]
    pub config_path: Option<PathBuf>,

    #[arg(long)]
    pub resolved: bool,

    #[arg(long)]
    pub strict: bool,

    #[arg(long)]
    pub init: bool,
}

impl Args {
    pub fn load_config_file_and_into_config(self, all_plugins: Vec<Plugin>) -> Config {
        let Args {
            config_path,
            resolved,
            strict,
            ..
        } = self;
        let config_file = match config_path {
            Some(config_path) => parse_config_file(config_path),
            None => load_config_file(),
        };
        Config {
            resolved,
            strict,
            all_plugins,
            config_file,
        }
    }
}

#[derive(Builder)]
#[builder(setter(strip_option, into))]
pub struct Config {
    #[builder(default)]
    pub resolved: bool,

    #[builder(default)]
    pub strict: bool,

    all_plugins: Vec<Plugin>,

    pub config_file: ParsedConfigFile,
}

impl Config {
    pub fn all_plugins(&self) -> &[Plugin] {
        &self.all_plugins
    }

    /// Configured plugins in application order, deduplicated. Handles are
    /// expected to have been validated already, an unrecognized one here
    /// is a caller bug.
    pub fn resolved_plugins(&self) -> Vec<Plugin> {
        self.config_file
            .content
            .plugins
            .iter()
            .unique()
            .map(|handle| {
                self.all_plugins
                    .iter()
                    .find(|plugin| &plugin.name == handle)
                    .unwrap_or_else(|| panic!("Unknown plugin: '{handle}'"))
                    .clone()
            })
            .collect()
    }

    /// The effective record the generator consumes: content globs as
    /// written, theme extensions merged over the default token table,
    /// plugins in application order.
    pub fn resolve(&self) -> ResolvedBuildConfig {
        ResolvedBuildConfig {
            content: self.config_file.content.content_paths.clone(),
            theme: resolve_theme(&self.config_file.content.theme_extensions),
            plugins: self
                .resolved_plugins()
                .into_iter()
                .map(|plugin| plugin.name)
                .collect(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ResolvedBuildConfig {
    pub content: Vec<String>,
    pub theme: ThemeTokens,
    pub plugins: Vec<String>,
}
