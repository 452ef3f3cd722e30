// src/services/metrics_manager.rs
use serde::Serialize;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

#[derive(Debug, Default, Clone, Serialize)]
pub struct MetricsData {
    pub language_usage: HashMap<String, u64>,
    pub endpoint_usage: HashMap<String, u64>,
}

#[derive(Debug, Clone, Default)]
pub struct MetricsManager {
    inner: Arc<RwLock<MetricsData>>,
}

impl MetricsManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn record_language(&self, lang: &str) {
        let mut data = self.inner.write().await;
        *data.language_usage.entry(lang.to_string()).or_insert(0) += 1;
    }

    pub async fn record_endpoint(&self, endpoint: &str) {
        let mut data = self.inner.write().await;
        *data.endpoint_usage.entry(endpoint.to_string()).or_insert(0) += 1;
    }

    pub async fn get_metrics(&self) -> MetricsData {
        self.inner.read().await.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn counters_accumulate() {
        let metrics = MetricsManager::new();
        metrics.record_language("hi").await;
        metrics.record_language("hi").await;
        metrics.record_endpoint("/chat").await;

        let data = metrics.get_metrics().await;
        assert_eq!(data.language_usage.get("hi"), Some(&2));
        assert_eq!(data.endpoint_usage.get("/chat"), Some(&1));
    }
}
