//! Profile screen shared by employees and managers.

use entity::{ProfileUpdate, Role};
use hr_client::HrClient;
use platform_api::{ApiError, ApiResult};
use platform_session::{SessionKey, SessionStore};

use crate::view::ViewState;

const LOAD_FAILED: &str = "Failed to fetch profile data.";
const SAVE_FAILED: &str = "Failed to update profile.";

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProfileForm {
    pub name: String,
    pub email: String,
    pub org: String,
    /// Never pre-filled; empty means "keep the current password".
    pub password: String,
}

#[derive(Clone, Debug)]
pub struct ProfilePage {
    id: i64,
    role: Role,
    pub form: ProfileForm,
    pub saving: bool,
    pub state: ViewState,
}

impl ProfilePage {
    pub fn new(id: i64, role: Role) -> Self {
        Self {
            id,
            role,
            form: ProfileForm::default(),
            saving: false,
            state: ViewState::default(),
        }
    }

    fn is_employee(&self) -> bool {
        self.role == Role::Employee
    }

    pub async fn load(&mut self, client: &HrClient) {
        self.state.begin();
        let fetched = if self.is_employee() {
            client
                .employee_profile(self.id)
                .await
                .map(|e| (e.name, e.email, e.org))
        } else {
            client
                .manager_profile(self.id)
                .await
                .map(|m| (m.name, m.email, m.org))
        };
        match fetched {
            Ok((name, email, org)) => {
                self.form = ProfileForm {
                    name,
                    email,
                    org: org.unwrap_or_default(),
                    password: String::new(),
                };
            }
            Err(err) => self.state.fail(&err, LOAD_FAILED),
        }
        self.state.finish();
    }

    /// Save name and optional new password. On success the session's display
    /// name follows the new name.
    pub async fn save(&mut self, client: &HrClient, store: &mut SessionStore) {
        self.state.clear_messages();
        self.saving = true;
        match self.submit(client, store).await {
            Ok(()) => {
                self.state.succeed("Profile updated successfully!");
                self.form.password.clear();
            }
            Err(err) => self.state.fail(&err, SAVE_FAILED),
        }
        self.saving = false;
    }

    async fn submit(&self, client: &HrClient, store: &mut SessionStore) -> ApiResult<()> {
        let name = self.form.name.trim();
        if name.is_empty() {
            return Err(ApiError::invalid("Name is required."));
        }
        let update = ProfileUpdate {
            name: name.to_string(),
            password: Some(self.form.password.clone()),
        };
        if self.is_employee() {
            client.update_employee_profile(self.id, &update).await?;
        } else {
            client.update_manager_profile(self.id, &update).await?;
        }
        store
            .set(SessionKey::UserName, name)
            .map_err(ApiError::internal)
    }
}
