//! CLI smoke entry point.
//!
//! # Responsibility
//! - Drive one load/compose/search round-trip through `postboard_core` to
//!   verify crate wiring outside any UI runtime.
//! - Keep output deterministic apart from the live remote fetch.

use postboard_core::{Composer, FeedSession, RemoteClient};
use std::time::Duration;

#[tokio::main]
async fn main() {
    let log_dir = std::env::temp_dir().join("postboard-logs");
    if let Some(dir) = log_dir.to_str() {
        if let Err(err) = postboard_core::init_logging(postboard_core::default_log_level(), dir) {
            eprintln!("logging unavailable: {err}");
        }
    }

    println!("postboard_core version={}", postboard_core::core_version());

    let mut session = FeedSession::new();
    match RemoteClient::new() {
        Ok(client) => {
            if !session.load(&client).await {
                if let Some(err) = session.error() {
                    eprintln!("remote load failed: {err}");
                }
            }
        }
        Err(err) => eprintln!("remote client unavailable: {err}"),
    }

    let mut composer = Composer::with_latency(Duration::ZERO);
    composer.open();
    composer.set_title("Hello from the CLI");
    composer.set_content("A locally composed post; it disappears when this process exits.");
    if let Err(err) = composer.submit(session.local_mut()).await {
        eprintln!("compose failed: {err}");
    }

    let feed = session.view("");
    println!(
        "feed holds {} posts ({} local, {} remote)",
        feed.len(),
        session.local().len(),
        session.remote().len()
    );
    for post in feed.iter().take(5) {
        println!("- [{}] {}: {}", post.id, post.title, post.preview(60).text);
    }
}
