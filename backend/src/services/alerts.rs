//! Recent alerts feed service

use shared::RecentAlerts;

use crate::external::CompanionClient;

#[derive(Clone)]
pub struct AlertService {
    companion: CompanionClient,
}

impl AlertService {
    pub fn new(companion: CompanionClient) -> Self {
        Self { companion }
    }

    /// Alerts for today and yesterday. Upstream failures yield empty lists.
    pub async fn recent(&self) -> RecentAlerts {
        match self.companion.recent_alerts().await {
            Ok(feed) => {
                tracing::debug!(
                    "Recent alerts: {} today, {} yesterday",
                    feed.today.len(),
                    feed.yesterday.len()
                );
                feed
            }
            Err(e) => {
                tracing::warn!("Failed to fetch recent alerts: {}", e);
                RecentAlerts::default()
            }
        }
    }
}
