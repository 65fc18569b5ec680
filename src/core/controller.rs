use std::sync::Arc;
use axum::http::StatusCode;
use axum::Json;
use serde_json::{json, Value};
use crate::books::factory::create_book_repository;
use crate::books::repository::BookRepository;
use crate::core::command::CommandError;
use crate::core::domain::Configuration;
use crate::core::repository::RepositoryStore;
use crate::gateway::events::EventPublisher;
use crate::gateway::factory::create_publisher;
use crate::gateway::GatewayPublisherVia;

// AppState is shared by every request, so the collection outlives any single handler call
#[derive(Clone)]
pub struct AppState {
    pub config: Configuration,
    pub(crate) books: Arc<dyn BookRepository>,
    pub(crate) publisher: Arc<dyn EventPublisher>,
}

impl AppState {
    pub fn new(config: Configuration, store: RepositoryStore, via: GatewayPublisherVia) -> AppState {
        let books = create_book_repository(&config, store);
        let publisher = create_publisher(via);
        AppState {
            config,
            books: Arc::from(books),
            publisher: Arc::from(publisher),
        }
    }
}

pub type ServerError = (StatusCode, Json<Value>);

fn error_body(status: StatusCode, message: &str) -> ServerError {
    (status, Json(json!({ "message": message })))
}

pub fn json_to_server_error(err: serde_json::Error) -> ServerError {
    error_body(StatusCode::BAD_REQUEST, format!("{}", err).as_str())
}

impl From<CommandError> for ServerError {
    fn from(err: CommandError) -> Self {
        match err {
            CommandError::NotFound { .. } => {
                error_body(StatusCode::NOT_FOUND, err.message())
            }
            CommandError::Runtime { .. } => {
                error_body(StatusCode::INTERNAL_SERVER_ERROR, err.message())
            }
            CommandError::Serialization { .. } => {
                error_body(StatusCode::BAD_REQUEST, err.message())
            }
            CommandError::Validation { .. } => {
                error_body(StatusCode::BAD_REQUEST, err.message())
            }
        }
    }
}
