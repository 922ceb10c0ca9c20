//! API Gateway
//!
//! Single chokepoint for all network access. Every request goes through
//! [`Api::call`], which attaches the bearer token, normalizes empty and
//! non-JSON success bodies to `{}`, and collapses all three failure classes
//! (expired session, HTTP error, transport error) into a `None` return plus
//! a transient notice. Callers only ever check `is_some()`.

use leptos::prelude::*;
use serde::Serialize;
use serde_json::Value;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{console, Headers, Request, RequestInit, Response};

use crate::config;
use crate::models::{AuthResponse, Priority, Project, Task, TaskStatus, UserRef};
use crate::notify::Notices;
use crate::session;

/// Where the client is in the session lifecycle.
///
/// `Checking` renders the authenticated shell optimistically while the stored
/// token is validated, so a reload does not flash the login screen.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuthPhase {
    Checking,
    Authed,
    Guest,
}

/// Copyable gateway handle, provided via context.
#[derive(Clone, Copy)]
pub struct Api {
    pub notices: Notices,
    pub auth: RwSignal<AuthPhase>,
    pub current_user: RwSignal<Option<UserRef>>,
}

pub fn use_api() -> Api {
    expect_context::<Api>()
}

// ========================
// Request Payloads
// ========================

#[derive(Serialize)]
pub struct LoginArgs<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

#[derive(Serialize)]
pub struct RegisterArgs<'a> {
    pub username: &'a str,
    pub email: &'a str,
    pub password: &'a str,
}

#[derive(Serialize)]
pub struct CreateProjectArgs<'a> {
    pub name: &'a str,
    pub description: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AddMemberArgs<'a> {
    pub user_id: i64,
    pub role: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTaskArgs<'a> {
    pub title: &'a str,
    pub description: &'a str,
    pub project_id: i64,
    pub assigned_to_user_id: Option<i64>,
    pub priority: Priority,
    pub due_date: Option<&'a str>,
    pub status: TaskStatus,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTaskArgs<'a> {
    pub title: &'a str,
    pub description: &'a str,
    pub priority: Priority,
    pub due_date: Option<&'a str>,
    pub assigned_to_user_id: Option<i64>,
}

#[derive(Serialize)]
pub struct StatusArgs {
    pub status: TaskStatus,
}

// ========================
// Response Normalization
// ========================

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum StatusClass {
    Ok,
    AuthExpired,
    Failed,
}

fn classify_status(status: u16) -> StatusClass {
    match status {
        401 => StatusClass::AuthExpired,
        200..=299 => StatusClass::Ok,
        _ => StatusClass::Failed,
    }
}

/// Normalizes a successful response body: `{}` for 204/empty/non-JSON
/// (the API sends bodiless 2xx for several mutations), parsed JSON
/// otherwise. `None` means the body claimed to be JSON but was not.
fn normalize_success(status: u16, content_type: Option<&str>, body: &str) -> Option<Value> {
    if status == 204 || body.is_empty() {
        return Some(Value::Object(Default::default()));
    }
    match content_type {
        Some(ct) if ct.contains("application/json") => serde_json::from_str(body).ok(),
        _ => Some(Value::Object(Default::default())),
    }
}

impl Api {
    /// Clears the session everywhere and drops the UI back to the auth view.
    pub fn expire_session(&self) {
        session::clear();
        self.current_user.set(None);
        self.auth.set(AuthPhase::Guest);
    }

    /// Core gateway call. Returns the normalized JSON body, or `None` after
    /// surfacing the failure as a notice (and, for 401, tearing the session
    /// down). No error escapes this boundary.
    pub async fn call(&self, endpoint: &str, method: &str, body: Option<String>) -> Option<Value> {
        match perform_request(endpoint, method, body, session::token().as_deref()).await {
            Err(err) => {
                console::error_2(&JsValue::from_str("API call failed:"), &err);
                self.notices.error("API call failed: network error");
                None
            }
            Ok(raw) => match classify_status(raw.status) {
                StatusClass::AuthExpired => {
                    self.expire_session();
                    self.notices.error("Session expired. Please login again.");
                    None
                }
                StatusClass::Failed => {
                    self.notices
                        .error(format!("API call failed: HTTP error! status: {}", raw.status));
                    None
                }
                StatusClass::Ok => {
                    let value =
                        normalize_success(raw.status, raw.content_type.as_deref(), &raw.body);
                    if value.is_none() {
                        self.notices.error("API call failed: invalid JSON response");
                    }
                    value
                }
            },
        }
    }

    fn decode<T: serde::de::DeserializeOwned>(&self, value: Value) -> Option<T> {
        match serde_json::from_value(value) {
            Ok(decoded) => Some(decoded),
            Err(err) => {
                console::error_1(&JsValue::from_str(&format!(
                    "unexpected response shape: {err}"
                )));
                self.notices.error("API call failed: unexpected response shape");
                None
            }
        }
    }

    // ========================
    // Auth (no bearer, no 401 teardown: a 401 here is just bad credentials)
    // ========================

    pub async fn login(&self, args: &LoginArgs<'_>) -> Option<AuthResponse> {
        self.auth_request("/auth/login", args, "Login failed").await
    }

    pub async fn register(&self, args: &RegisterArgs<'_>) -> Option<AuthResponse> {
        self.auth_request("/auth/register", args, "Registration failed")
            .await
    }

    async fn auth_request<A: Serialize>(
        &self,
        endpoint: &str,
        args: &A,
        failure: &str,
    ) -> Option<AuthResponse> {
        let body = serde_json::to_string(args).ok();
        match perform_request(endpoint, "POST", body, None).await {
            Err(_) => {
                self.notices.error(format!("{failure}: network error"));
                None
            }
            Ok(raw) if !(200..300).contains(&raw.status) => {
                let detail = if raw.body.is_empty() {
                    failure.to_string()
                } else {
                    raw.body
                };
                self.notices.error(format!("{failure}: {detail}"));
                None
            }
            Ok(raw) => match serde_json::from_str(&raw.body) {
                Ok(auth) => Some(auth),
                Err(_) => {
                    self.notices.error(format!("{failure}: unexpected response"));
                    None
                }
            },
        }
    }

    // ========================
    // Typed Endpoint Wrappers
    // ========================

    pub async fn fetch_me(&self) -> Option<UserRef> {
        let value = self.call("/users/me", "GET", None).await?;
        self.decode(value)
    }

    pub async fn fetch_users(&self) -> Option<Vec<UserRef>> {
        let value = self.call("/users", "GET", None).await?;
        self.decode(value)
    }

    pub async fn fetch_projects(&self) -> Option<Vec<Project>> {
        let value = self.call("/projects", "GET", None).await?;
        self.decode(value)
    }

    pub async fn fetch_project(&self, project_id: i64) -> Option<Project> {
        let value = self
            .call(&format!("/projects/{project_id}"), "GET", None)
            .await?;
        self.decode(value)
    }

    pub async fn create_project(&self, args: &CreateProjectArgs<'_>) -> Option<Value> {
        self.call("/projects", "POST", serde_json::to_string(args).ok())
            .await
    }

    pub async fn add_member(&self, project_id: i64, args: &AddMemberArgs<'_>) -> Option<Value> {
        self.call(
            &format!("/projects/{project_id}/members"),
            "POST",
            serde_json::to_string(args).ok(),
        )
        .await
    }

    pub async fn fetch_tasks(&self) -> Option<Vec<Task>> {
        let value = self.call("/tasks", "GET", None).await?;
        self.decode(value)
    }

    pub async fn create_task(&self, args: &CreateTaskArgs<'_>) -> Option<Value> {
        self.call("/tasks", "POST", serde_json::to_string(args).ok())
            .await
    }

    pub async fn update_task(&self, task_id: i64, args: &UpdateTaskArgs<'_>) -> Option<Value> {
        self.call(
            &format!("/tasks/{task_id}"),
            "PUT",
            serde_json::to_string(args).ok(),
        )
        .await
    }

    pub async fn update_task_status(&self, task_id: i64, status: TaskStatus) -> Option<Value> {
        self.call(
            &format!("/tasks/{task_id}/status"),
            "PUT",
            serde_json::to_string(&StatusArgs { status }).ok(),
        )
        .await
    }

    pub async fn delete_task(&self, task_id: i64) -> Option<Value> {
        self.call(&format!("/tasks/{task_id}"), "DELETE", None).await
    }
}

// ========================
// Transport
// ========================

struct RawResponse {
    status: u16,
    content_type: Option<String>,
    body: String,
}

async fn perform_request(
    endpoint: &str,
    method: &str,
    body: Option<String>,
    token: Option<&str>,
) -> Result<RawResponse, JsValue> {
    let headers = Headers::new()?;
    headers.set("Content-Type", "application/json")?;
    if let Some(token) = token {
        headers.set("Authorization", &format!("Bearer {token}"))?;
    }

    let init = RequestInit::new();
    init.set_method(method);
    init.set_headers(headers.as_ref());
    if let Some(body) = body {
        init.set_body(&JsValue::from_str(&body));
    }

    let url = format!("{}{}", config::api_base_url(), endpoint);
    let request = Request::new_with_str_and_init(&url, &init)?;
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let response: Response = JsFuture::from(window.fetch_with_request(&request))
        .await?
        .dyn_into()?;

    let status = response.status();
    let content_type = response.headers().get("content-type").ok().flatten();
    let body = JsFuture::from(response.text()?)
        .await?
        .as_string()
        .unwrap_or_default();

    Ok(RawResponse {
        status,
        content_type,
        body,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn no_content_normalizes_to_empty_object() {
        assert_eq!(normalize_success(204, None, ""), Some(json!({})));
        assert_eq!(
            normalize_success(204, Some("application/json"), ""),
            Some(json!({}))
        );
    }

    #[test]
    fn empty_body_normalizes_to_empty_object() {
        assert_eq!(
            normalize_success(200, Some("application/json"), ""),
            Some(json!({}))
        );
    }

    #[test]
    fn non_json_content_type_coerces_to_empty_object() {
        assert_eq!(
            normalize_success(200, Some("text/plain"), "ok"),
            Some(json!({}))
        );
        assert_eq!(normalize_success(200, None, "ok"), Some(json!({})));
    }

    #[test]
    fn json_body_is_parsed() {
        assert_eq!(
            normalize_success(200, Some("application/json; charset=utf-8"), r#"[{"id":1}]"#),
            Some(json!([{ "id": 1 }]))
        );
    }

    #[test]
    fn malformed_json_is_a_failure() {
        assert_eq!(normalize_success(200, Some("application/json"), "{oops"), None);
    }

    #[test]
    fn unauthorized_is_classified_regardless_of_anything_else() {
        assert_eq!(classify_status(401), StatusClass::AuthExpired);
        assert_eq!(classify_status(200), StatusClass::Ok);
        assert_eq!(classify_status(204), StatusClass::Ok);
        assert_eq!(classify_status(404), StatusClass::Failed);
        assert_eq!(classify_status(500), StatusClass::Failed);
    }

    #[test]
    fn status_update_body_shape() {
        let body = serde_json::to_string(&StatusArgs {
            status: TaskStatus::InProgress,
        })
        .unwrap();
        assert_eq!(body, r#"{"status":"InProgress"}"#);
    }

    #[test]
    fn task_update_serializes_camel_case() {
        let body = serde_json::to_value(&UpdateTaskArgs {
            title: "T",
            description: "",
            priority: Priority::High,
            due_date: None,
            assigned_to_user_id: Some(4),
        })
        .unwrap();
        assert_eq!(
            body,
            json!({
                "title": "T",
                "description": "",
                "priority": "High",
                "dueDate": null,
                "assignedToUserId": 4
            })
        );
    }

    #[test]
    fn create_task_serializes_camel_case() {
        let body = serde_json::to_value(&CreateTaskArgs {
            title: "T",
            description: "d",
            project_id: 2,
            assigned_to_user_id: None,
            priority: Priority::Low,
            due_date: Some("2026-09-01T12:00"),
            status: TaskStatus::ToDo,
        })
        .unwrap();
        assert_eq!(body["projectId"], 2);
        assert_eq!(body["status"], "ToDo");
        assert_eq!(body["dueDate"], "2026-09-01T12:00");
        assert_eq!(body["assignedToUserId"], Value::Null);
    }
}
