use clap::Subcommand;

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Resolve a hosting platform user by login
    Login {
        /// Platform login (e.g. "octocat")
        login: String,

        /// Display name to record alongside the login
        #[arg(long)]
        name: Option<String>,
    },

    /// Resolve a commit author or committer signature
    Signature {
        /// Signature name
        #[arg(long)]
        name: Option<String>,

        /// Signature email
        #[arg(long)]
        email: Option<String>,
    },

    /// Print a cached user record
    Show {
        /// Cache key of the record
        key: String,
    },

    /// Print the account reference key for the configured platform
    ProviderKey,
}
