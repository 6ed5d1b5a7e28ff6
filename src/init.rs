use std::{
    fs,
    path::{Path, PathBuf},
};

use tracing::instrument;

use crate::config::CONFIG_FILENAME;

const STARTER_CONFIG: &str = r##"# classgen build configuration
#
# content-paths   globs scanned for utility-class usage
# theme-extensions   color tokens layered over the built-in defaults
# plugins   extension modules, applied in the order listed

content-paths:
  - "./templates/**/*.html"
  - "./static/js/**/*.js"
  - "./*/templates/**/*.html"

theme-extensions:
  primary:
    "50": "#eff6ff"
    "500": "#3b82f6"
    "600": "#2563eb"
    "700": "#1d4ed8"

plugins:
  - forms
  - typography
"##;

#[instrument]
pub fn write_starter_config(directory: &Path) -> PathBuf {
    let config_file_path = directory.join(CONFIG_FILENAME);
    if config_file_path.is_file() {
        panic!("Won't overwrite existing {}", config_file_path.display());
    }
    fs::write(&config_file_path, STARTER_CONFIG).expect("Couldn't write starter config file");
    config_file_path
}
