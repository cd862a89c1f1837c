//! Company announcements: read by everyone, published by the super admin.

use entity::{Announcement, NewAnnouncement};
use hr_client::HrClient;
use platform_api::{ApiError, ApiResult};

use crate::view::ViewState;

const LOAD_FAILED: &str = "Failed to fetch announcements. Please check the API server.";
const PUBLISH_FAILED: &str = "An unexpected error occurred.";

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AnnouncementForm {
    pub title: String,
    pub content: String,
}

impl AnnouncementForm {
    pub fn validate(&self) -> ApiResult<NewAnnouncement> {
        let title = self.title.trim();
        let content = self.content.trim();
        if title.is_empty() {
            return Err(ApiError::invalid("Title is required."));
        }
        if content.is_empty() {
            return Err(ApiError::invalid("Content is required."));
        }
        Ok(NewAnnouncement {
            title: title.to_string(),
            content: content.to_string(),
        })
    }
}

#[derive(Clone, Debug, Default)]
pub struct AnnouncementBoard {
    pub announcements: Vec<Announcement>,
    pub form: AnnouncementForm,
    pub state: ViewState,
}

impl AnnouncementBoard {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn load(&mut self, client: &HrClient) {
        self.state.begin();
        match client.announcements().await {
            Ok(list) => self.announcements = list,
            Err(err) => self.state.fail(&err, LOAD_FAILED),
        }
        self.state.finish();
    }

    pub async fn publish(&mut self, client: &HrClient) {
        self.state.clear_messages();
        let body = match self.form.validate() {
            Ok(body) => body,
            Err(err) => {
                self.state.fail(&err, PUBLISH_FAILED);
                return;
            }
        };
        match client.create_announcement(&body).await {
            Ok(reply) => {
                self.form = AnnouncementForm::default();
                self.load(client).await;
                let reply = reply.trim();
                self.state.succeed(if reply.is_empty() {
                    "Announcement created successfully!"
                } else {
                    reply
                });
            }
            Err(err) => self.state.fail(&err, PUBLISH_FAILED),
        }
    }
}
