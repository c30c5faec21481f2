//! CLI entry point for portal-rs

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use portal_rs::Language;

#[derive(Parser)]
#[command(name = "portal-rs")]
#[command(version)]
#[command(about = "Render a bilingual portal page from one content document", long_about = None)]
struct Cli {
    /// Set the base directory (defaults to current directory)
    #[arg(short, long, global = true)]
    cwd: Option<PathBuf>,

    /// Enable debug output
    #[arg(short, long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize a new portal
    Init {
        /// Directory to initialize (defaults to current directory)
        #[arg(default_value = ".")]
        folder: PathBuf,
    },

    /// Generate the page in every language
    #[command(alias = "g")]
    Generate {
        /// Watch for file changes
        #[arg(short, long)]
        watch: bool,
    },

    /// Render the page in one language
    #[command(alias = "r")]
    Render {
        /// Language to render (cn or en)
        #[arg(short, long)]
        lang: Option<Language>,

        /// Write to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Start a local preview server
    #[command(alias = "s")]
    Server {
        /// Port to listen on
        #[arg(short, long, default_value = "4000")]
        port: u16,

        /// IP address to bind to
        #[arg(short, long, default_value = "localhost")]
        ip: String,

        /// Open browser automatically
        #[arg(short, long)]
        open: bool,

        /// Enable static mode (no file watching)
        #[arg(long)]
        r#static: bool,
    },

    /// Remove the public folder
    Clean,

    /// List content of one section
    List {
        /// Section to list (services, team, cases, stats, links, gallery)
        #[arg(default_value = "services")]
        r#type: String,

        /// Language to resolve text in
        #[arg(short, long)]
        lang: Option<Language>,
    },

    /// Display version information
    Version,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.debug {
        "portal_rs=debug,info"
    } else {
        "portal_rs=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    // Determine base directory
    let base_dir = match cli.cwd {
        Some(dir) => dir,
        None => std::env::current_dir()?,
    };

    match cli.command {
        Commands::Init { folder } => {
            let target_dir = if folder.is_absolute() {
                folder
            } else {
                base_dir.join(folder)
            };
            tracing::info!("Initializing portal in {:?}", target_dir);
            portal_rs::commands::init::init_site(&target_dir)?;
            println!("Initialized portal in {:?}", target_dir);
        }

        Commands::Generate { watch } => {
            let portal = portal_rs::Portal::new(&base_dir)?;
            tracing::info!("Generating pages...");

            portal.generate().await?;
            println!("Generated successfully!");

            if watch {
                portal_rs::commands::generate::watch(&portal).await?;
            }
        }

        Commands::Render { lang, output } => {
            let portal = portal_rs::Portal::new(&base_dir)?;
            let lang = lang.unwrap_or(portal.config.language);
            portal_rs::commands::render::run(&portal, lang, output.as_deref()).await?;
        }

        Commands::Server {
            port,
            ip,
            open,
            r#static,
        } => {
            let portal = portal_rs::Portal::new(&base_dir)?;

            // Generate first
            tracing::info!("Generating pages...");
            portal.generate().await?;

            tracing::info!("Starting server at http://{}:{}", ip, port);
            portal_rs::server::start(&portal, &ip, port, !r#static, open).await?;
        }

        Commands::Clean => {
            let portal = portal_rs::Portal::new(&base_dir)?;
            tracing::info!("Cleaning public folder...");
            portal.clean()?;
            println!("Cleaned successfully!");
        }

        Commands::List { r#type, lang } => {
            let portal = portal_rs::Portal::new(&base_dir)?;
            let lang = lang.unwrap_or(portal.config.language);
            portal_rs::commands::list::run(&portal, &r#type, lang).await?;
        }

        Commands::Version => {
            println!("portal-rs version {}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}
