use hr_client::HrClient;
use tracing::warn;

const UNREACHABLE: &str = "Error fetching backend!";

/// Result of probing the API.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BackendHealth {
    pub reachable: bool,
    pub message: String,
}

impl BackendHealth {
    pub async fn check(client: &HrClient) -> Self {
        match client.ping().await {
            Ok(message) => Self {
                reachable: true,
                message: message.trim().to_string(),
            },
            Err(err) => {
                warn!(base = client.base_url(), error = %err, "backend probe failed");
                Self {
                    reachable: false,
                    message: UNREACHABLE.to_string(),
                }
            }
        }
    }
}
