//! Notification listing and read state.

use aux_core::types::{Notification, Paginated};

use crate::client::AuxClient;
use crate::error::Result;
use crate::request::RequestSpec;
use crate::types::UnreadCount;

/// Notification endpoints of the Aux backend.
pub struct NotificationsClient<'a> {
    client: &'a AuxClient,
}

impl<'a> NotificationsClient<'a> {
    pub(crate) fn new(client: &'a AuxClient) -> Self {
        Self { client }
    }

    /// List the authenticated user's notifications.
    pub async fn list(
        &self,
        limit: Option<u32>,
        offset: Option<u32>,
        unread_only: bool,
    ) -> Result<Paginated<Notification>> {
        let mut spec = RequestSpec::get("/notifications")
            .query_opt("limit", limit)
            .query_opt("offset", offset);
        if unread_only {
            spec = spec.query("unread_only", true);
        }
        self.client.execute(spec).await
    }

    /// Mark one notification as read.
    pub async fn mark_as_read(&self, notification_id: &str) -> Result<()> {
        self.client
            .execute_unit(RequestSpec::put(format!(
                "/notifications/{}/read",
                notification_id
            )))
            .await
    }

    /// Mark every notification as read.
    pub async fn mark_all_as_read(&self) -> Result<()> {
        self.client
            .execute_unit(RequestSpec::put("/notifications/read-all"))
            .await
    }

    /// Get the unread notification count.
    pub async fn unread_count(&self) -> Result<u64> {
        let count: UnreadCount = self
            .client
            .execute(RequestSpec::get("/notifications/unread-count"))
            .await?;
        Ok(count.count)
    }
}
