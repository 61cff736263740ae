//! gatepost — post to the service through a local PII gate.
//!
//! Every user-authored string (post title, post body, comment body) is
//! screened locally before any network submission; blocked content never
//! leaves the process. Identity facts and screen settings come from an
//! optional TOML config file.

mod args;
mod guard;
mod output;

use clap::Parser;
use gatepost_client::protocol::{CreateCommentRequest, CreatePostRequest, VoteDirection};
use gatepost_client::ApiClient;
use gatepost_core::config::GatepostConfig;
use gatepost_screen::ScreenEngine;
use tracing_subscriber::EnvFilter;

use crate::args::{BoardsCommand, Cli, Command, PostCommand};
use crate::guard::screen_outbound;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    run(cli)
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let mut config = match &cli.config {
        Some(path) => GatepostConfig::load(path)?,
        None => GatepostConfig::default(),
    };
    if cli.unsafe_disable_screen {
        config.screen.disable_all = true;
    }

    let engine = ScreenEngine::new(config.screen, config.identity)?;
    let client = ApiClient::from_env()?;

    match cli.command {
        Command::Status => output::print_status(&client.status()?),
        Command::Whoami => output::print_profile(&client.me()?),
        Command::Post(cmd) => run_post(cmd, &engine, &client)?,
        Command::Comment {
            post_id,
            content,
            parent,
        } => {
            screen_outbound(&engine, &[("comment", &content)])?;
            let comment = client.create_comment(
                &post_id,
                &CreateCommentRequest {
                    content,
                    parent_id: parent,
                },
            )?;
            output::print_comment(&comment);
        }
        Command::Search { query, limit } => output::print_posts(&client.search(&query, limit)?),
        Command::Boards(BoardsCommand::List) => output::print_boards(&client.list_boards()?),
        Command::Boards(BoardsCommand::Subscribe { name }) => {
            client.subscribe(&name)?;
            println!("subscribed to b/{name}");
        }
    }

    Ok(())
}

fn run_post(cmd: PostCommand, engine: &ScreenEngine, client: &ApiClient) -> anyhow::Result<()> {
    match cmd {
        PostCommand::Create {
            board,
            title,
            content,
            url,
        } => {
            let mut fields: Vec<(&str, &str)> = vec![("title", title.as_str())];
            if let Some(content) = content.as_deref() {
                fields.push(("content", content));
            }
            screen_outbound(engine, &fields)?;
            let post = client.create_post(&CreatePostRequest {
                board,
                title,
                content,
                url,
            })?;
            println!("created post {}", post.id);
        }
        PostCommand::List { board, sort, limit } => {
            output::print_posts(&client.list_posts(board.as_deref(), &sort, limit)?);
        }
        PostCommand::Get { id } => output::print_post(&client.get_post(&id)?),
        PostCommand::Delete { id } => {
            client.delete_post(&id)?;
            println!("deleted post {id}");
        }
        PostCommand::Vote { id, direction } => {
            let direction: VoteDirection = direction.into();
            client.vote(&id, direction)?;
            println!("voted {direction} on {id}");
        }
    }
    Ok(())
}
