use std::collections::HashMap;
use std::sync::Arc;
use async_trait::async_trait;
use tracing::info;
use crate::books::dto::BookDto;
use crate::books::repository::BookRepository;
use crate::catalog::domain::CatalogService;
use crate::core::domain::{Attributes, Configuration};
use crate::core::events::DomainEvent;
use crate::core::library::LibraryResult;
use crate::core::repository::Repository;
use crate::gateway::events::EventPublisher;

const EVENT_NAME: &str = "books";

pub(crate) struct CatalogServiceImpl {
    branch_id: String,
    book_repository: Arc<dyn BookRepository>,
    events_publisher: Arc<dyn EventPublisher>,
}

impl CatalogServiceImpl {
    pub(crate) fn new(config: &Configuration, book_repository: Arc<dyn BookRepository>,
                      events_publisher: Arc<dyn EventPublisher>) -> Self {
        Self {
            branch_id: config.branch_id.to_string(),
            book_repository,
            events_publisher,
        }
    }
}

#[async_trait]
impl CatalogService for CatalogServiceImpl {
    async fn list_books(&self) -> LibraryResult<Vec<BookDto>> {
        let books = self.book_repository.list().await?;
        Ok(books.into_iter().map(BookDto::from).collect())
    }

    async fn add_book(&self, attributes: &Attributes) -> LibraryResult<BookDto> {
        let book = BookDto::from(self.book_repository.create(attributes).await?);
        info!(id = book.id, "added book");
        self.events_publisher.publish(&DomainEvent::added(
            EVENT_NAME, self.branch_id.as_str(), book.id, &HashMap::new(), &book)?).await?;
        Ok(book)
    }

    async fn remove_book(&self, id: i64) -> LibraryResult<()> {
        let removed = self.book_repository.delete(id).await?;
        info!(id, removed, "removed book");
        if removed > 0 {
            self.events_publisher.publish(&DomainEvent::deleted(
                EVENT_NAME, self.branch_id.as_str(), id, &HashMap::new(), &removed)?).await?;
        }
        Ok(())
    }

    async fn update_book(&self, id: i64, attributes: &Attributes) -> LibraryResult<BookDto> {
        let book = BookDto::from(self.book_repository.update(id, attributes).await?);
        info!(id, new_id = book.id, "updated book");
        self.events_publisher.publish(&DomainEvent::updated(
            EVENT_NAME, self.branch_id.as_str(), id, &HashMap::new(), &book)?).await?;
        Ok(book)
    }

    async fn find_book_by_id(&self, id: i64) -> LibraryResult<BookDto> {
        self.book_repository.get(id).await.map(BookDto::from)
    }
}
