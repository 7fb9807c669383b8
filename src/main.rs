use basket_lib::config::Cli;
use clap::Parser;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("basket=info,basket_lib=info")),
        )
        .init();

    let cli = Cli::parse();
    let result = cli.into_config().and_then(|config| basket_lib::run(&config));

    if let Err(e) = result {
        log::error!("basket failed to start: {e}");
        std::process::exit(1);
    }
}
