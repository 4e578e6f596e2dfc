mod app;
mod cli;
mod config;
mod consts;
mod core;
mod error;
mod output;
mod source;
mod utils;

use clap::Parser;

use app::RunOptions;
use cli::Cli;
use config::Config;

fn init_logging(debug: bool) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if debug {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.init();
}

fn main() {
    dotenv::dotenv().ok();
    let cli = Cli::parse();
    init_logging(cli.debug);

    // Load config file and merge with CLI args (CLI takes precedence)
    let config = Config::load();
    let cli = cli.with_config(&config);

    let result = RunOptions::from_cli(&cli).and_then(|options| app::run(&options));
    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
