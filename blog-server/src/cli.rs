use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "blog-server", version, about = "Blog posts REST service")]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub(crate) command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub(crate) enum Command {
    /// Run the HTTP server (default).
    Serve,
    /// Print an access token for an existing author, signed with JWT_SECRET.
    IssueToken {
        #[arg(long)]
        author_id: String,
        /// Overrides JWT_TTL_SECONDS.
        #[arg(long)]
        ttl_seconds: Option<i64>,
    },
}
