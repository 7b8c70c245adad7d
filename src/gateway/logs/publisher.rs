use tracing::info;
use crate::core::events::DomainEvent;
use crate::core::library::LibraryError;
use crate::gateway::events::EventPublisher;

// LogPublisher writes every domain event to the tracing log.
#[derive(Debug, Default)]
pub struct LogPublisher {
    branch_id: String,
}

impl LogPublisher {
    pub fn new(branch_id: &str) -> Self {
        Self {
            branch_id: branch_id.to_string(),
        }
    }
}

impl EventPublisher for LogPublisher {
    fn publish(&self, event: &DomainEvent) -> Result<(), LibraryError> {
        let json = serde_json::to_string(event)?;
        info!(branch = self.branch_id.as_str(), event = event.name.as_str(), key = event.key.as_str(), "{}", json);
        Ok(())
    }
}
