use entity::{Identity, LoginResponse};
use platform_api::{ApiError, ApiResult};
use reqwest::Method;
use tracing::info;

use crate::HrClient;

impl HrClient {
    /// `POST /auth/login`. The API checks super admins, then managers, then
    /// employees, and reports a refused login inside a 200 body.
    pub async fn login(&self, email: &str, password: &str) -> ApiResult<Identity> {
        let response = self
            .send(Method::POST, "/auth/login", |req| {
                req.query(&[("email", email), ("password", password)])
            })
            .await?;
        let body: LoginResponse = Self::json(response).await?;
        let identity = body.into_identity().map_err(|message| ApiError::Rejected {
            status: 200,
            message: Some(message),
        })?;
        info!(id = identity.id, role = %identity.role, "logged in");
        Ok(identity)
    }

    /// `GET /api/employees/docker`: plain-text liveness probe.
    pub async fn ping(&self) -> ApiResult<String> {
        let response = self
            .send(Method::GET, "/api/employees/docker", |req| req)
            .await?;
        Self::text(response).await
    }
}
