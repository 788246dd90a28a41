use clap::{Parser, Subcommand};
use portfolio_common::Category;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "portfolio-site")]
#[command(about = "Portfolio project administration", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Project store file (overrides PORTFOLIO_STORE and the config)
    #[arg(long, global = true)]
    pub store: Option<PathBuf>,

    /// Admin password (prompted when omitted)
    #[arg(long, global = true)]
    pub password: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List projects, optionally filtered by category
    List {
        /// Estrategia / Diseño / Website / Varios
        #[arg(short, long)]
        category: Option<Category>,
    },

    /// Show one project in full
    Show {
        #[arg(required = true)]
        id: String,
    },

    /// Create a project
    Add {
        /// Project JSON to read instead of prompting
        #[arg(long)]
        from: Option<PathBuf>,
    },

    /// Edit a project in place
    Edit {
        #[arg(required = true)]
        id: String,

        /// Project JSON to read instead of prompting
        #[arg(long)]
        from: Option<PathBuf>,
    },

    /// Delete a project
    Delete {
        #[arg(required = true)]
        id: String,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// Write a backup file (backup-YYYY-MM-DD.json)
    Export {
        /// Output file or directory (default: current directory)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Replace all projects with the contents of a backup file
    Import {
        #[arg(required = true)]
        input: PathBuf,
    },

    /// Show or edit settings
    Config {
        /// Default project store file
        #[arg(long)]
        set_store: Option<PathBuf>,

        /// Change the admin password
        #[arg(long)]
        set_password: bool,

        /// Show settings
        #[arg(long)]
        show: bool,
    },
}
