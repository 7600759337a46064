use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use colored::Colorize;
use folio::{Blog, FolioConfig, Result};
use std::io;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "folio")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Portfolio blog toolkit", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Project root holding folio.toml and the posts directory
    #[arg(long, global = true)]
    root: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a markdown file to an HTML fragment
    Render {
        /// Markdown file to render
        file: PathBuf,

        /// Print frontmatter and HTML as JSON
        #[arg(short, long)]
        json: bool,
    },

    /// List posts, newest first
    List {
        /// Maximum number of posts to show
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Render a single post by slug
    Post {
        /// Post slug
        slug: String,

        /// Print only the markdown HTML
        #[arg(short, long)]
        fragment: bool,
    },

    /// Render the recent posts fragment
    Recent {
        /// Number of posts (defaults to recent_limit from folio.toml)
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Render the GitHub projects grid
    #[cfg(feature = "github")]
    Repos {
        /// GitHub user (defaults to github_user from folio.toml)
        #[arg(short, long)]
        user: Option<String>,

        /// Number of repositories (defaults to project_limit from folio.toml)
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Generate shell completions
    Completions {
        /// Shell type (bash, zsh, fish, powershell)
        #[arg(value_enum)]
        shell: Shell,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .expect("Failed to create tokio runtime");

    if let Err(e) = runtime.block_on(run_async(cli)) {
        eprintln!("{}", format!("Error: {:#}", e).red());
        std::process::exit(1);
    }
}

async fn run_async(cli: Cli) -> Result<()> {
    let root = match cli.root {
        Some(root) => root,
        None => std::env::current_dir()?,
    };

    match cli.command {
        Commands::Render { file, json } => {
            folio::cli::render::run(&file, json)?;
        }

        Commands::Completions { shell } => {
            generate(shell, &mut Cli::command(), "folio", &mut io::stdout());
        }

        command => {
            let config = FolioConfig::load(&root)?;
            let blog = Blog::from_config(&config, &root);
            run_site_command(command, &config, &blog).await?;
        }
    }

    Ok(())
}

async fn run_site_command(command: Commands, config: &FolioConfig, blog: &Blog) -> Result<()> {
    match command {
        Commands::List { limit } => {
            folio::cli::list::run(blog, limit).await?;
        }

        Commands::Post { slug, fragment } => {
            folio::cli::post::run(blog, &slug, fragment, &config.site_title).await?;
        }

        Commands::Recent { limit } => {
            folio::cli::recent::run(blog, limit.unwrap_or(config.recent_limit)).await?;
        }

        #[cfg(feature = "github")]
        Commands::Repos { user, limit } => {
            let user = user.or_else(|| config.github_user.clone());
            folio::cli::repos::run(user.as_deref(), limit.unwrap_or(config.project_limit))
                .await?;
        }

        Commands::Render { .. } | Commands::Completions { .. } => {
            unreachable!("handled before config is loaded")
        }
    }

    Ok(())
}
