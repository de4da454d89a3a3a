//! todo-comments server.

use std::sync::Arc;

use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use todo_comments::config::Args;
use todo_comments::{web, Fixtures, InMemoryRecordStore};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables from .env file if present
    let _ = dotenvy::dotenv();

    let args = Args::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("todo_comments={},info", args.log_level).into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    if let Err(e) = args.validate() {
        error!("Configuration error: {}", e);
        std::process::exit(1);
    }

    let store = InMemoryRecordStore::new();
    if let Some(path) = &args.fixtures {
        let (todos, comments) = Fixtures::from_path(path)?.load_into(&store)?;
        info!(path = %path.display(), todos, comments, "seeded store");
    }

    let settings = args.settings();
    info!(
        listen = %args.listen,
        page_size = settings.page_size,
        login_url = %settings.login_url,
        "starting todo-comments"
    );

    let service = Arc::new(todo_comments::app(store).with_settings(settings));
    web::serve(service, &args.listen.to_string()).await?;
    Ok(())
}
