use serde::{Deserialize, Serialize};

pub mod events;
pub mod logs;
pub mod memory;
pub mod factory;

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone, Copy)]
pub enum GatewayPublisherVia {
    Logs,
    Memory,
}

impl From<String> for GatewayPublisherVia {
    fn from(s: String) -> Self {
        match s.to_lowercase().as_str() {
            "memory" => GatewayPublisherVia::Memory,
            _ => GatewayPublisherVia::Logs,
        }
    }
}
