use entity::{Announcement, NewAnnouncement};
use platform_api::ApiResult;
use reqwest::Method;

use crate::HrClient;

impl HrClient {
    pub async fn announcements(&self) -> ApiResult<Vec<Announcement>> {
        self.get_list("/api/announcements").await
    }

    /// Returns the API's confirmation sentence.
    pub async fn create_announcement(&self, announcement: &NewAnnouncement) -> ApiResult<String> {
        let response = self
            .send(Method::POST, "/api/announcements/create", |req| {
                req.json(announcement)
            })
            .await?;
        Self::text(response).await
    }
}
