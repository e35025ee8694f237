use dirs_next as dirs;
use std::path::{Path, PathBuf};
use storeart_core::{color::Color, config::Config};
use tracing::Level;

/// Location of the configuration file.
///
/// A file passed on the command line has to exist; the default file in the user's configuration
/// directory is optional.
#[derive(Debug)]
pub struct ConfigFile {
    path: Option<PathBuf>,
    explicit: bool,
}

impl ConfigFile {
    pub fn new(explicit: Option<PathBuf>) -> Self {
        match explicit {
            Some(path) => ConfigFile {
                path: Some(path),
                explicit: true,
            },
            None => ConfigFile::default(),
        }
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn is_explicit(&self) -> bool {
        self.explicit
    }
}

impl Default for ConfigFile {
    fn default() -> Self {
        let default_path =
            dirs::config_dir().map(|dir| dir.join("storeart").join("storeart.toml"));
        ConfigFile {
            path: default_path,
            explicit: false,
        }
    }
}

impl std::fmt::Display for ConfigFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.path {
            Some(path) => write!(f, "{}", path.display()),
            None => write!(f, "<none>"),
        }
    }
}

/// Generates app store icons and screenshots from a single source image.
#[derive(clap::Parser, Debug)]
#[command(name = "storeart", disable_version_flag = true)]
pub struct Cli {
    /// Sets a custom configuration file path
    #[arg(short, long, env = "STOREART_CONFIG_FILE")]
    pub config_file: Option<PathBuf>,

    /// Sets the configuration from a string
    #[arg(long, env = "STOREART_CONFIG")]
    pub config_string: Option<String>,

    /// Overrides the source image
    #[arg(short, long, global = true)]
    pub source: Option<PathBuf>,

    /// Overrides the output directory
    #[arg(short, long, global = true)]
    pub output_dir: Option<PathBuf>,

    /// Overrides the product name used as file name prefix
    #[arg(long, global = true)]
    pub product: Option<String>,

    /// Overrides the screenshot background color (#rrggbb)
    #[arg(long, global = true)]
    pub background: Option<Color>,

    /// Generates the images of each set in parallel
    #[arg(long, global = true)]
    pub parallel: bool,

    /// Logs more details; repeat for even more
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Only logs errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    #[command(subcommand)]
    pub subcommand: Option<Cmd>,
}

#[derive(clap::Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cmd {
    /// Generates the app icons
    Icons,

    /// Generates the store screenshots
    Screenshots,

    /// Generates icons and screenshots (the default)
    All,

    /// Lists the files that would be generated without writing anything
    Plan,

    /// Prints the active configuration
    Config,

    /// Prints version information
    Version,
}

impl Cli {
    pub fn config_file(&self) -> ConfigFile {
        ConfigFile::new(self.config_file.clone())
    }

    pub fn log_level(&self) -> Level {
        match (self.quiet, self.verbose) {
            (true, _) => Level::ERROR,
            (false, 0) => Level::WARN,
            (false, 1) => Level::INFO,
            (false, 2) => Level::DEBUG,
            (false, _) => Level::TRACE,
        }
    }

    /// Applies the command-line overrides on top of the loaded configuration.
    pub fn apply_overrides(&self, config: &mut Config) {
        if let Some(source) = &self.source {
            config.source = source.clone();
            config.screenshots.source = None;
        }
        if let Some(output_dir) = &self.output_dir {
            config.output_dir = output_dir.clone();
        }
        if let Some(product) = &self.product {
            config.product = product.clone();
        }
        if let Some(background) = self.background {
            config.screenshots.background = background;
        }
        if self.parallel {
            config.parallel = true;
        }
    }
}
