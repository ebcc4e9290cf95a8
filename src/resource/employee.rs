use axum::{
    extract::{Path, State},
    http::{HeaderMap, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use std::sync::Arc;

use crate::models::{Employee, MessageResponse};
use crate::service::EmployeeService;

pub type AppState = Arc<EmployeeService>;

type HandlerError = (StatusCode, Json<serde_json::Value>);

/// Base path the employee routes are mounted under
pub const EMPLOYEES_PATH: &str = "/api/employees";

fn build_employee_location(id: i64) -> String {
    format!("{}/{}/", EMPLOYEES_PATH, id)
}

fn not_found(id: i64) -> HandlerError {
    (
        StatusCode::NOT_FOUND,
        Json(json!({ "error": format!("Employee not found with id: {}", id) })),
    )
}

pub async fn create_employee(
    State(service): State<AppState>,
    Json(mut employee): Json<Employee>,
) -> Result<Response, HandlerError> {
    // Ids are always assigned by the store
    employee.id = None;

    let created = service.save(&employee).await.map_err(|e| e.to_response())?;

    let mut headers = HeaderMap::new();
    if let Some(id) = created.id {
        headers.insert(
            "Location",
            HeaderValue::from_str(&build_employee_location(id)).map_err(|_| {
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Invalid location header" })),
                )
            })?,
        );
    }

    let mut response = Json(created).into_response();
    *response.status_mut() = StatusCode::CREATED;
    response.headers_mut().extend(headers);
    Ok(response)
}

pub async fn list_employees(
    State(service): State<AppState>,
) -> Result<Json<Vec<Employee>>, HandlerError> {
    service
        .get_all_employees()
        .await
        .map(Json)
        .map_err(|e| e.to_response())
}

pub async fn get_employee(
    State(service): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Employee>, HandlerError> {
    match service.get_employee_by_id(id).await {
        Ok(Some(employee)) => Ok(Json(employee)),
        Ok(None) => Err(not_found(id)),
        Err(e) => Err(e.to_response()),
    }
}

/// Full replacement of first name, last name and email. The path id wins
/// over any id in the body.
pub async fn update_employee(
    State(service): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<Employee>,
) -> Result<Json<Employee>, HandlerError> {
    let mut stored = match service.get_employee_by_id(id).await {
        Ok(Some(employee)) => employee,
        Ok(None) => return Err(not_found(id)),
        Err(e) => return Err(e.to_response()),
    };

    stored.apply_update(&payload);

    service
        .update_employee(&stored)
        .await
        .map(Json)
        .map_err(|e| e.to_response())
}

pub async fn delete_employee(
    State(service): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<MessageResponse>, HandlerError> {
    service
        .delete_employee(id)
        .await
        .map_err(|e| e.to_response())?;

    Ok(Json(MessageResponse {
        message: "Employee deleted successfully!".to_string(),
    }))
}
