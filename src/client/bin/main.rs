use clap::Parser;
use serde_json::json;
use tracing::info;
use bookshelf::client::books_client::BooksClient;
use bookshelf::core::domain::Attributes;
use bookshelf::core::library::{LibraryError, LibraryResult};
use bookshelf::utils::logs::setup_tracing;

#[derive(Parser, Debug)]
struct Cli {
    #[arg(short, long, env = "BOOKS_API_URL", default_value = "http://localhost:3000")]
    base_url: String,
}

fn attributes(value: serde_json::Value) -> LibraryResult<Attributes> {
    match value {
        serde_json::Value::Object(map) => Ok(map),
        other => Err(LibraryError::validation(format!("expected a JSON object but got {}", other).as_str(), None)),
    }
}

// Walks one book through its whole lifecycle against a running catalog
#[tokio::main]
async fn main() -> Result<(), LibraryError> {
    let cli = Cli::parse();
    setup_tracing(false);
    let client = BooksClient::new(cli.base_url.as_str());

    let books = client.list_books().await?;
    info!("all books: {}", serde_json::to_string(&books)?);

    let created = client.create_book(&attributes(json!({
        "title": "The Great Gatsby",
        "author": "F. Scott Fitzgerald",
    }))?).await?;
    info!("created book: {}", serde_json::to_string(&created)?);

    let loaded = client.get_book(created.id).await?;
    info!("book {}: {}", created.id, serde_json::to_string(&loaded)?);

    let updated = client.update_book(created.id, &attributes(json!({
        "title": "The Great Gatsby (Updated)",
    }))?).await?;
    info!("updated book: {}", serde_json::to_string(&updated)?);

    client.delete_book(created.id).await?;
    info!("deleted book {}", created.id);

    let books = client.list_books().await?;
    info!("all books: {}", serde_json::to_string(&books)?);
    Ok(())
}
