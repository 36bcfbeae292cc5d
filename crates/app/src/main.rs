use clap::Parser;

use storefront_app::{cli::Cli, commands, config::AppConfig};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = AppConfig::from_args(&cli.config)?;

    storefront_observability::init(config.log_format);
    tracing::debug!(?config, "starting storefront");

    let stdout = std::io::stdout();
    commands::run(&config, cli.command, &mut stdout.lock())
}
