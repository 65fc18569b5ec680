use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::books::dto::BookDto;
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};
use crate::core::domain::Attributes;

pub(crate) struct AddBookCommand {
    catalog_service: Box<dyn CatalogService>,
}

impl AddBookCommand {
    pub(crate) fn new(catalog_service: Box<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

// any JSON object is accepted, a caller supplied id is dropped by the collection
#[derive(Debug, Deserialize)]
#[serde(transparent)]
pub(crate) struct AddBookCommandRequest {
    pub(crate) attributes: Attributes,
}

impl AddBookCommandRequest {
    pub fn new(attributes: Attributes) -> Self {
        Self {
            attributes,
        }
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct AddBookCommandResponse {
    pub book: BookDto,
}

impl AddBookCommandResponse {
    pub fn new(book: BookDto) -> Self {
        Self {
            book,
        }
    }
}

#[async_trait]
impl Command<AddBookCommandRequest, AddBookCommandResponse> for AddBookCommand {
    async fn execute(&self, req: AddBookCommandRequest) -> Result<AddBookCommandResponse, CommandError> {
        self.catalog_service.add_book(&req.attributes).await
            .map_err(CommandError::from).map(AddBookCommandResponse::new)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use crate::catalog::command::add_book_cmd::{AddBookCommand, AddBookCommandRequest};
    use crate::catalog::factory;
    use crate::core::command::Command;
    use crate::core::controller::AppState;
    use crate::core::domain::Configuration;
    use crate::core::repository::RepositoryStore;
    use crate::gateway::GatewayPublisherVia;

    #[tokio::test]
    async fn test_should_run_add_book() {
        let state = AppState::new(Configuration::new("test"), RepositoryStore::Seeded, GatewayPublisherVia::Memory);
        let cmd = AddBookCommand::new(factory::create_catalog_service(&state));

        let req: AddBookCommandRequest = serde_json::from_value(
            json!({"id": 10, "title": "The Great Gatsby", "author": "F. Scott Fitzgerald"})).expect("should parse");
        let res = cmd.execute(req).await.expect("should add book");
        assert_eq!(3, res.book.id);
        assert!(!res.book.attributes.contains_key("id"));
    }

    #[tokio::test]
    async fn test_should_reject_non_object_request() {
        let res = serde_json::from_value::<AddBookCommandRequest>(json!(["title"]));
        assert!(res.is_err());
        let req = AddBookCommandRequest::new(serde_json::Map::new());
        assert!(req.attributes.is_empty());
    }
}
