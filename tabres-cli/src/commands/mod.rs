use clap::Subcommand;

pub mod check;
pub mod dump;
pub mod list;

#[derive(Subcommand)]
pub enum Commands {
    /// Print a resource table as a parsed JSON tree
    Dump {
        /// Resource name (doubles as a disk path for overrides)
        #[arg(short, long)]
        name: String,

        /// Ignore loose files on disk and use the embedded table
        #[arg(long)]
        embedded_only: bool,
    },

    /// List the embedded resource names
    List,

    /// Load all well-known tables and report their status
    Check {
        /// Ignore loose files on disk and use the embedded tables
        #[arg(long)]
        embedded_only: bool,
    },
}

impl Commands {
    pub fn execute(&self) -> anyhow::Result<()> {
        match self {
            Commands::Dump {
                name,
                embedded_only,
            } => dump::execute(name, *embedded_only),
            Commands::List => list::execute(),
            Commands::Check { embedded_only } => check::execute(*embedded_only),
        }
    }
}
