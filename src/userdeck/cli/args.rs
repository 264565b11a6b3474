use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "userdeck", version)]
#[command(about = "Keep a small local list of users", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Directory holding users.json and config.json
    #[arg(long, global = true, env = "USERDECK_DATA_DIR", value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    /// Verbose output (debug logging on stderr)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List users
    #[command(alias = "ls")]
    List,

    /// Create a new user
    #[command(alias = "n")]
    Create {
        /// Full name
        #[arg(long)]
        name: String,

        /// Email address, unique across all users
        #[arg(long)]
        email: String,

        /// Avatar image URL
        #[arg(long, value_name = "URL")]
        avatar_url: String,
    },

    /// Show one user
    #[command(alias = "v")]
    Show {
        /// User id or list position (e.g. 2)
        user: String,
    },

    /// Edit a user; fields left out keep their current value
    #[command(alias = "e")]
    Edit {
        /// User id or list position (e.g. 2)
        user: String,

        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        email: Option<String>,

        #[arg(long, value_name = "URL")]
        avatar_url: Option<String>,
    },

    /// Delete a user
    #[command(alias = "rm")]
    Delete {
        /// User id or list position (e.g. 2)
        user: String,
    },

    /// Get or set configuration
    Config {
        /// Configuration key (storage-key, id-strategy)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}
