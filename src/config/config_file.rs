use std::{
    env, fs,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::theme::ThemeTokens;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParsedConfigFile {
    pub path: PathBuf,
    pub content: ParsedConfigFileContent,
}

/// The on-disk shape of `.classgen.yml`. The record is read once per
/// invocation and never mutated afterwards; anything the generator
/// derives from it goes through `Config::resolve()`.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields, default)]
pub struct ParsedConfigFileContent {
    pub content_paths: Vec<String>,
    pub theme_extensions: ThemeTokens,
    pub plugins: Vec<String>,
}

pub fn load_config_file() -> ParsedConfigFile {
    parse_config_file(find_config_file())
}

pub fn parse_config_file(config_file_path: PathBuf) -> ParsedConfigFile {
    let config_file_contents =
        fs::read_to_string(&config_file_path).expect("Couldn't read config file contents");
    let parsed = serde_yaml::from_str(&config_file_contents).expect("Couldn't parse config file");

    ParsedConfigFile {
        path: config_file_path,
        content: parsed,
    }
}

pub const CONFIG_FILENAME: &str = ".classgen.yml";

#[instrument]
pub fn find_config_file() -> PathBuf {
    find_filename_in_ancestor_directory(
        CONFIG_FILENAME,
        env::current_dir().expect("Couldn't get current directory"),
    )
    .expect("Couldn't find config file")
}

// https://codereview.stackexchange.com/a/236771
fn find_filename_in_ancestor_directory(
    filename: impl AsRef<Path>,
    starting_directory: PathBuf,
) -> Option<PathBuf> {
    let filename = filename.as_ref();
    let mut current_path = starting_directory;

    loop {
        current_path.push(filename);

        if current_path.is_file() {
            return Some(current_path);
        }

        if !(current_path.pop() && current_path.pop()) {
            return None;
        }
    }
}
