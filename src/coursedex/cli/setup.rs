use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "coursedex", bin_name = "coursedex", version)]
#[command(about = "Filter and browse a course catalog from the terminal", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Catalog file: a JSON document with a top-level `courses` array
    #[arg(short, long, global = true, value_name = "FILE")]
    pub data: Option<PathBuf>,

    /// Directory holding config.json (defaults to the user config dir)
    #[arg(long, global = true, value_name = "DIR")]
    pub config_dir: Option<PathBuf>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// More log output on stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List courses matching the given filters (default)
    #[command(alias = "ls")]
    List {
        /// Case-insensitive text matched against code, title and description
        #[arg(short, long)]
        search: Option<String>,

        /// Exact department name, or `any`
        #[arg(short = 'D', long)]
        department: Option<String>,

        /// Level bucket floor such as 200 (matches 200-299), or `any`
        #[arg(short, long)]
        level: Option<String>,
    },

    /// Print the departments present in the catalog
    #[command(alias = "depts")]
    Departments,

    /// Print the configured level buckets
    Levels,

    /// Refine filters interactively, one command per line on stdin
    Browse,

    /// Get or set configuration
    Config {
        /// Configuration key (data-file, level-buckets)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}
