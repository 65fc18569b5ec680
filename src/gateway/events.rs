use async_trait::async_trait;
use crate::core::events::DomainEvent;
use crate::core::library::LibraryError;

#[async_trait]
pub trait EventPublisher: Sync + Send {
    async fn publish(&self, event: &DomainEvent) -> Result<(), LibraryError>;

    // events kept by the publisher, empty for publishers that forward and forget
    async fn published(&self) -> Result<Vec<DomainEvent>, LibraryError>;
}
