mod color;
mod config;
mod content;
mod init;
mod plugin;
#[cfg(test)]
mod tests;
mod theme;
mod violation;

use std::process;

use tracing::debug;

pub use color::is_valid_color;
pub use config::{
    find_config_file, load_config_file, parse_config_file, Args, ArgsBuilder, Config,
    ConfigBuilder, ParsedConfigFile, ParsedConfigFileContent, ResolvedBuildConfig, CONFIG_FILENAME,
};
pub use content::check_content_pattern;
pub use init::write_starter_config;
pub use plugin::{builtin_plugins, validate_plugin_references, Plugin};
pub use theme::{resolve_theme, validate_theme_extensions, ColorScale, ThemeTokens, DEFAULT_THEME};
pub use violation::{ConfigViolation, ConfigViolationBuilder, Severity};

pub extern crate clap;
pub extern crate serde_json;
pub extern crate serde_yaml;

/// Runs every validation pass over the loaded config file. Findings come
/// back in config-file field order: content paths, then theme extensions,
/// then plugins.
pub fn run(config: &Config) -> Vec<ConfigViolation> {
    debug!(path = ?config.config_file.path, "validating config file");
    let ParsedConfigFileContent {
        content_paths,
        theme_extensions,
        plugins,
    } = &config.config_file.content;
    let mut violations = content::validate_content_paths(content_paths);
    violations.extend(theme::validate_theme_extensions(theme_extensions));
    violations.extend(plugin::validate_plugin_references(
        plugins,
        config.all_plugins(),
    ));
    violations
}

pub fn run_and_output(config: Config) {
    let violations = run(&config);
    for violation in &violations {
        violation.print();
    }
    let failed = violations
        .iter()
        .any(|violation| violation.severity == Severity::Error)
        || config.strict && !violations.is_empty();
    if failed {
        process::exit(1);
    }
    if config.resolved {
        println!(
            "{}",
            serde_json::to_string_pretty(&config.resolve())
                .expect("Couldn't serialize resolved configuration")
        );
    }
    process::exit(0);
}
