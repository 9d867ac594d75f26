//! Employee Directory Endpoint

use crate::error::AppResult;
use crate::models::EmployeeOption;

use super::get_json;

/// GET /employees, the assignable-user directory for managers and leads
pub async fn list_employees(token: &str) -> AppResult<Vec<EmployeeOption>> {
    get_json("/employees", token).await
}
