use serde::{Deserialize, Serialize};
use crate::gateway::GatewayPublisherVia;

// Identifiable defines common traits that can be shared by stored objects
pub trait Identifiable {
    fn id(&self) -> String;
    fn version(&self) -> i64;
}

// RemovePolicy decides what removing an unknown isbn does
#[derive(Debug, PartialEq, Serialize, Deserialize, Clone, Copy)]
pub enum RemovePolicy {
    // fail with not-found
    Strict,
    // succeed without effect
    Idempotent,
}

impl From<String> for RemovePolicy {
    fn from(s: String) -> Self {
        match s.to_lowercase().as_str() {
            "idempotent" => RemovePolicy::Idempotent,
            _ => RemovePolicy::Strict,
        }
    }
}

// Configuration abstracts config options for the catalog
#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct Configuration {
    pub branch_id: String,
    pub remove_policy: RemovePolicy,
    pub publisher: GatewayPublisherVia,
    pub log_level: String,
    pub log_json: bool,
}

impl Configuration {
    pub fn new(branch_id: &str) -> Self {
        Configuration {
            branch_id: branch_id.to_string(),
            remove_policy: RemovePolicy::Strict,
            publisher: GatewayPublisherVia::Logs,
            log_level: "info".to_string(),
            log_json: false,
        }
    }

    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    // overlays values found through lookup on top of the defaults
    pub fn from_lookup<F>(lookup: F) -> Self where F: Fn(&str) -> Option<String> {
        let mut config = Configuration::new(lookup("LMS_BRANCH").as_deref().unwrap_or("main"));
        if let Some(policy) = lookup("LMS_REMOVE_POLICY") {
            config.remove_policy = RemovePolicy::from(policy);
        }
        if let Some(via) = lookup("LMS_EVENTS") {
            config.publisher = GatewayPublisherVia::from(via);
        }
        if let Some(level) = lookup("LMS_LOG_LEVEL") {
            config.log_level = level;
        }
        if let Some(json) = lookup("LMS_LOG_JSON") {
            config.log_json = matches!(json.to_lowercase().as_str(), "1" | "true" | "yes");
        }
        config
    }
}
