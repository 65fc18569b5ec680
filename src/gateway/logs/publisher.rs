use async_trait::async_trait;
use tracing::info;
use crate::core::events::DomainEvent;
use crate::core::library::LibraryError;
use crate::gateway::events::EventPublisher;

// LogPublisher writes each event as a structured log record
#[derive(Debug)]
pub struct LogPublisher {
    channel: String,
}

impl LogPublisher {
    pub(crate) fn new(channel: &str) -> Self {
        Self {
            channel: channel.to_string(),
        }
    }
}

#[async_trait]
impl EventPublisher for LogPublisher {
    async fn publish(&self, event: &DomainEvent) -> Result<(), LibraryError> {
        let json = serde_json::to_string(event)?;
        info!(channel = self.channel.as_str(), event_id = event.event_id.as_str(),
            kind = ?event.kind, key = event.key.as_str(), "{}", json);
        Ok(())
    }

    async fn published(&self) -> Result<Vec<DomainEvent>, LibraryError> {
        Ok(vec![])
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use crate::core::events::DomainEvent;
    use crate::gateway::events::EventPublisher;
    use crate::gateway::logs::publisher::LogPublisher;

    #[tokio::test]
    async fn test_should_publish_to_logs() {
        let event = DomainEvent::added("books", "test", 1, &HashMap::new(), &"data").expect("build event");
        let publisher = LogPublisher::new("test_events");
        let _ = publisher.publish(&event).await.expect("should publish");
        let events = publisher.published().await.expect("should get events");
        assert_eq!(0, events.len());
    }
}
