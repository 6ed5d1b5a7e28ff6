use std::{env, path::Path};

use classgen_config::{builtin_plugins, clap::Parser, run_and_output, write_starter_config, Args};
use tracing_chrome::ChromeLayerBuilder;
use tracing_subscriber::{prelude::*, EnvFilter};

fn main() {
    let _guard = if env::var("TRACE_CHROME").map_or(false, |value| !value.is_empty()) {
        let (chrome_layer, guard) = ChromeLayerBuilder::new().include_args(true).build();
        tracing_subscriber::registry().with(chrome_layer).init();
        Some(guard)
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env())
            .init();
        None
    };

    let args = Args::parse();
    if args.init {
        let config_file_path = write_starter_config(Path::new("."));
        eprintln!("Wrote {}", config_file_path.display());
        return;
    }
    run_and_output(args.load_config_file_and_into_config(builtin_plugins()));
}
