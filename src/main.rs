use std::path::PathBuf;

use clap::{Parser, Subcommand};

use permsync::cli::App;
use permsync::discovery;
use permsync::engine::Session;
use permsync::logging;
use permsync::settings::paths::SETTINGS_DIR;

#[derive(Parser)]
#[command(name = "permsync")]
#[command(about = "Reconcile agent permission rules across settings tiers", version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactively edit permission scope membership across projects
    Sync {
        /// Project directories or glob patterns
        #[arg(required = true)]
        paths: Vec<String>,

        /// Override the user settings file (file or directory path)
        #[arg(long, value_name = "PATH")]
        user_settings: Option<PathBuf>,

        /// Visible rows in the rule list
        #[arg(long, default_value_t = 20)]
        viewport: usize,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _guard = logging::init_logging()?;
    tracing::info!("=== permsync starting ===");

    let cli = Cli::parse();
    match cli.command {
        Commands::Sync {
            paths,
            user_settings,
            viewport,
        } => run_sync(paths, user_settings, viewport).await,
    }
}

async fn run_sync(
    patterns: Vec<String>,
    user_settings: Option<PathBuf>,
    viewport: usize,
) -> anyhow::Result<()> {
    let projects = discovery::discover_projects(&patterns)?;
    if projects.is_empty() {
        anyhow::bail!(
            "no projects with a {} directory found in the given paths",
            SETTINGS_DIR
        );
    }

    let session = Session::load(&projects, user_settings.as_deref());
    let app = App::new(session, viewport);
    app.run().await?;

    tracing::info!("=== permsync shutting down ===");
    Ok(())
}
