use anyhow::Result;
use clap::Parser;
use mli::install::InstallOptions;
use mli::release::DEFAULT_VERSION;
use std::path::PathBuf;

/// mli - mlchain release installer
///
/// Download and install the mlchain plugin daemon CLI from its GitHub
/// releases, then verify it by running `mlchain --version`.
#[derive(Parser, Debug)]
#[command(author, version = env!("MLI_VERSION"), about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Binary directory (overrides the default ~/.local/bin; also via MLI_BIN_DIR)
    #[arg(
        long = "bin-dir",
        short = 'b',
        env = "MLI_BIN_DIR",
        value_name = "PATH",
        global = true
    )]
    pub bin_dir: Option<PathBuf>,

    /// Download host (defaults to https://github.com)
    #[arg(long = "base-url", value_name = "URL", global = true)]
    pub base_url: Option<String>,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Download, install and verify the pinned release
    Install(InstallArgs),

    /// Re-check an existing installation against the pinned version
    Verify(VerifyArgs),

    /// Print the resolved release descriptor for this host
    Show(ShowArgs),
}

#[derive(clap::Args, Debug)]
pub struct InstallArgs {
    /// Release version to install instead of the pinned default
    #[arg(long = "tag", value_name = "VERSION", default_value = DEFAULT_VERSION)]
    pub tag: String,
}

#[derive(clap::Args, Debug)]
pub struct VerifyArgs {
    /// Release version to verify against instead of the pinned default
    #[arg(long = "tag", value_name = "VERSION", default_value = DEFAULT_VERSION)]
    pub tag: String,
}

#[derive(clap::Args, Debug)]
pub struct ShowArgs {
    /// Release version to resolve instead of the pinned default
    #[arg(long = "tag", value_name = "VERSION", default_value = DEFAULT_VERSION)]
    pub tag: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();
    let runtime = mli::runtime::RealRuntime;

    match cli.command {
        Commands::Install(args) => {
            let opts = InstallOptions {
                version: args.tag,
                bin_dir: cli.bin_dir,
                base_url: cli.base_url,
            };
            mli::install::install(&runtime, &opts).await?
        }
        Commands::Verify(args) => {
            let opts = InstallOptions {
                version: args.tag,
                bin_dir: cli.bin_dir,
                base_url: cli.base_url,
            };
            mli::install::verify_installed(&runtime, &opts)?
        }
        Commands::Show(args) => {
            let opts = InstallOptions {
                version: args.tag,
                bin_dir: cli.bin_dir,
                base_url: cli.base_url,
            };
            mli::install::show(&runtime, &opts)?
        }
    }
    Ok(())
}
