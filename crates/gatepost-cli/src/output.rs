//! Human-readable console formatting. Thin by design.

use gatepost_client::protocol::{Board, Comment, Post, Profile, ServiceStatus};

pub fn print_status(status: &ServiceStatus) {
    let state = if status.ok { "ok" } else { "degraded" };
    match &status.message {
        Some(message) => println!("service: {state} ({message})"),
        None => println!("service: {state}"),
    }
}

pub fn print_profile(profile: &Profile) {
    println!(
        "{} (id {}, karma {}, since {})",
        profile.username,
        profile.id,
        profile.karma,
        profile.created_at.format("%Y-%m-%d")
    );
}

pub fn print_post(post: &Post) {
    println!(
        "[{}] {} — {} (score {}, {})",
        post.id,
        post.title,
        post.author,
        post.score,
        post.created_at.format("%Y-%m-%d %H:%M")
    );
    if let Some(url) = &post.url {
        println!("  link: {url}");
    }
    if let Some(content) = &post.content {
        println!("  {content}");
    }
    for comment in &post.comments {
        println!(
            "  > {} ({}, {})",
            comment.content,
            comment.author,
            comment.created_at.format("%Y-%m-%d %H:%M")
        );
    }
}

pub fn print_posts(posts: &[Post]) {
    if posts.is_empty() {
        println!("no posts");
        return;
    }
    for post in posts {
        println!(
            "[{}] b/{} {} — {} (score {})",
            post.id, post.board, post.title, post.author, post.score
        );
    }
}

pub fn print_comment(comment: &Comment) {
    println!(
        "comment [{}] on {} by {}",
        comment.id, comment.post_id, comment.author
    );
}

pub fn print_boards(boards: &[Board]) {
    if boards.is_empty() {
        println!("no boards");
        return;
    }
    for board in boards {
        match &board.title {
            Some(title) => println!("b/{} — {} ({} subscribers)", board.name, title, board.subscribers),
            None => println!("b/{} ({} subscribers)", board.name, board.subscribers),
        }
    }
}
