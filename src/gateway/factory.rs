use crate::core::domain::Configuration;
use crate::gateway::events::EventPublisher;
use crate::gateway::GatewayPublisherVia;
use crate::gateway::logs::publisher::LogPublisher;
use crate::gateway::memory::publisher::MemoryPublisher;

pub fn create_publisher(config: &Configuration) -> Box<dyn EventPublisher> {
    match config.publisher {
        GatewayPublisherVia::Logs => {
            Box::new(LogPublisher::new(config.branch_id.as_str()))
        }
        GatewayPublisherVia::Memory => {
            Box::new(MemoryPublisher::new())
        }
    }
}
