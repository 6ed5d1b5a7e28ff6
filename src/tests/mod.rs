mod config;

use crate::{builtin_plugins, Config, ConfigBuilder, ParsedConfigFile, CONFIG_FILENAME};

pub(crate) fn config_from_yaml(yaml: &str) -> Config {
    ConfigBuilder::default()
        .all_plugins(builtin_plugins())
        .config_file(ParsedConfigFile {
            path: CONFIG_FILENAME.into(),
            content: serde_yaml::from_str(yaml).unwrap(),
        })
        .build()
        .unwrap()
}
