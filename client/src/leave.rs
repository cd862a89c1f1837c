use entity::LeaveRequest;
use platform_api::ApiResult;

use crate::HrClient;

impl HrClient {
    pub async fn leave_requests_for(&self, employee_id: i64) -> ApiResult<Vec<LeaveRequest>> {
        self.get_list(&format!("/api/leave-requests/employee/{employee_id}"))
            .await
    }
}
