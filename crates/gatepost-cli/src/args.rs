use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

#[derive(Debug, Parser)]
#[command(name = "gatepost", version, about = "Post to the service through a local PII gate")]
pub struct Cli {
    /// TOML config file with optional [identity] and [screen] tables.
    #[arg(long, global = true, env = "GATEPOST_CONFIG")]
    pub config: Option<PathBuf>,

    /// Disable ALL outbound PII screening. Content is submitted unchecked.
    #[arg(long = "unsafe-disable-screen", global = true)]
    pub unsafe_disable_screen: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Service health.
    Status,
    /// Show the authenticated profile.
    Whoami,
    /// Post operations.
    #[command(subcommand)]
    Post(PostCommand),
    /// Comment on a post.
    Comment {
        post_id: String,
        content: String,
        /// Reply under an existing comment.
        #[arg(long)]
        parent: Option<String>,
    },
    /// Search posts.
    Search {
        query: String,
        #[arg(long, default_value_t = 20)]
        limit: u32,
    },
    /// Board operations.
    #[command(subcommand)]
    Boards(BoardsCommand),
}

#[derive(Debug, Subcommand)]
pub enum PostCommand {
    /// Create a post (title and content are screened first).
    Create {
        #[arg(long)]
        board: String,
        #[arg(long)]
        title: String,
        #[arg(long)]
        content: Option<String>,
        #[arg(long)]
        url: Option<String>,
    },
    /// List posts.
    List {
        #[arg(long)]
        board: Option<String>,
        #[arg(long, default_value = "hot")]
        sort: String,
        #[arg(long, default_value_t = 20)]
        limit: u32,
    },
    /// Fetch one post with its comments.
    Get { id: String },
    /// Delete a post.
    Delete { id: String },
    /// Vote on a post.
    Vote {
        id: String,
        #[arg(long, value_enum, default_value_t = VoteArg::Up)]
        direction: VoteArg,
    },
}

#[derive(Debug, Subcommand)]
pub enum BoardsCommand {
    /// List boards.
    List,
    /// Subscribe to a board.
    Subscribe { name: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum VoteArg {
    Up,
    Down,
}

impl From<VoteArg> for gatepost_client::protocol::VoteDirection {
    fn from(v: VoteArg) -> Self {
        match v {
            VoteArg::Up => Self::Up,
            VoteArg::Down => Self::Down,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_post_create() {
        let cli = Cli::parse_from([
            "gatepost", "post", "create", "--board", "general", "--title", "Hi", "--content",
            "Safe post",
        ]);
        match cli.command {
            Command::Post(PostCommand::Create { board, title, .. }) => {
                assert_eq!(board, "general");
                assert_eq!(title, "Hi");
            }
            other => panic!("unexpected parse: {other:?}"),
        }
    }
}
