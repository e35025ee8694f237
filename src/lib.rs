use clap::Parser as _;
use cli::{Cli, Cmd};
use eyre::WrapErr;
use storeart_core::config::Config;
use tracing::Level;

pub mod cli;
pub mod commands;

pub fn load_config(cli: &Cli) -> eyre::Result<Config> {
    let mut config = match &cli.config_string {
        Some(config_string) => Config::parse(config_string)?,
        None => {
            let config_file = cli.config_file();
            match config_file.path() {
                Some(path) if config_file.is_explicit() || path.exists() => {
                    Config::parse_file(path)?
                }
                _ => {
                    tracing::debug!(%config_file, "no configuration file, using defaults");
                    Config::default()
                }
            }
        }
    };
    cli.apply_overrides(&mut config);
    config.validate().wrap_err("invalid configuration")?;
    Ok(config)
}

pub fn run(cli: Cli) -> eyre::Result<()> {
    let cmd = cli.subcommand.unwrap_or(Cmd::All);
    if cmd == Cmd::Version {
        return commands::version();
    }

    let config = load_config(&cli)?;
    match cmd {
        Cmd::Icons => commands::generate::icons(&config),
        Cmd::Screenshots => commands::generate::screenshots(&config),
        Cmd::All => commands::generate::all(&config),
        Cmd::Plan => commands::plan(&config),
        Cmd::Config => commands::config(&config),
        Cmd::Version => commands::version(),
    }
}

fn setup_logger(level: Level) -> eyre::Result<()> {
    use tracing_subscriber::{
        filter::LevelFilter, fmt::layer, layer::SubscriberExt, util::SubscriberInitExt, Registry,
    };

    Registry::default()
        .with(LevelFilter::from(level))
        .with(
            layer()
                .with_ansi(true)
                .with_target(false)
                .without_time()
                .with_writer(std::io::stderr),
        )
        .try_init()?;
    Ok(())
}

pub fn main() -> eyre::Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();
    setup_logger(cli.log_level())?;
    run(cli)
}
