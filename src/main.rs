// reelpipe - Terminal video playback and playlist manager
// A command shell over a fixed catalog; playback is simulated state only

use std::io;
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use reelpipe::{Config, Player, Shell, VideoCatalog};

#[derive(Parser)]
#[command(name = "reelpipe")]
#[command(about = "A terminal video playback and playlist manager")]
struct Args {
    /// Path to a catalog file (JSON array of {id, title, tags} records)
    #[arg(long)]
    catalog: Option<PathBuf>,

    /// Enable developer logging (stderr + debug output)
    #[arg(long)]
    dev: bool,
}

fn init_logging(dev: bool) -> Result<()> {
    // Create logs directory in project root
    let log_dir = PathBuf::from("logs");
    std::fs::create_dir_all(&log_dir)?;

    // Daily rotating file appender - the shell owns stdout, logs stay out of it
    let file_appender = tracing_appender::rolling::daily(&log_dir, "reelpipe.log");
    let (file_writer, _guard) = tracing_appender::non_blocking(file_appender);

    // Base filter: info level for general logs, debug for reelpipe
    let base_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,reelpipe=debug"));

    let subscriber = tracing_subscriber::fmt()
        .with_writer(file_writer)
        .with_target(true)
        .with_level(true)
        .with_ansi(false)
        .with_env_filter(base_filter)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    if dev {
        eprintln!("🔧 Dev mode: Debug output enabled to stderr + file");
    }

    // Prevent the guard from being dropped
    std::mem::forget(_guard);

    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();

    init_logging(args.dev)?;

    info!("🎬 reelpipe starting up");

    let config = Config::load()?;

    // Catalog precedence: --catalog flag, then config, then the embedded set.
    let catalog = match args.catalog.or(config.catalog_path) {
        Some(path) => VideoCatalog::load(&path)?,
        None => {
            debug!("No catalog configured, using the embedded one");
            VideoCatalog::builtin()?
        }
    };

    let player = Player::new(catalog);

    if config.show_banner {
        println!("🎬 reelpipe - Video Playback & Playlists");
        println!("========================================");
        println!("{}", player.number_of_videos());
        println!("Type HELP for a list of available commands or EXIT to leave.");
    }

    let mut shell = Shell::new(player);
    shell.run(io::stdin().lock(), io::stdout())?;

    println!("\n👋 Thanks for using reelpipe!");
    Ok(())
}
