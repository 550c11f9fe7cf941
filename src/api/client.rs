//! HTTP API Client
//!
//! Functions for communicating with the Cura REST API, plus the domain
//! types they carry: the draft post being composed, its category set, and
//! the active post-list filter.

use gloo_net::http::Request;

use crate::api::error::{ApiError, ApiResult, ValidationError};
use crate::state::session::SessionUser;

/// Default API base URL
pub const DEFAULT_API_BASE: &str = "http://localhost:8080/api/v1";

/// Get the API base URL from local storage or use default
pub fn get_api_base() -> String {
    let url = if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            if let Ok(Some(url)) = storage.get_item("cura_api_url") {
                url
            } else {
                DEFAULT_API_BASE.to_string()
            }
        } else {
            DEFAULT_API_BASE.to_string()
        }
    } else {
        DEFAULT_API_BASE.to_string()
    };
    // Normalize: remove trailing slash
    url.trim_end_matches('/').to_string()
}

// ============ Domain Types ============

/// An unsaved community post being composed in the dialog
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DraftPost {
    pub title: String,
    pub content: String,
    pub category: PostCategory,
    /// Free-text, comma-separated tag list
    pub tags: String,
}

impl DraftPost {
    /// Check the required fields. Emptiness is judged post-trim; the stored
    /// values themselves are not modified.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.title.trim().is_empty() {
            return Err(ValidationError::EmptyTitle);
        }
        if self.content.trim().is_empty() {
            return Err(ValidationError::EmptyContent);
        }
        Ok(())
    }

    /// Multipart text fields in submission order, values exactly as typed
    pub fn field_entries(&self) -> [(&'static str, &str); 4] {
        [
            ("title", &self.title),
            ("content", &self.content),
            ("category", self.category.as_str()),
            ("tags", &self.tags),
        ]
    }
}

/// Fixed category set for community posts
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PostCategory {
    #[default]
    Articles,
    CaseStudies,
    Research,
}

impl PostCategory {
    /// Every category, in display order
    pub const ALL: [PostCategory; 3] = [
        PostCategory::Articles,
        PostCategory::CaseStudies,
        PostCategory::Research,
    ];

    /// Display label, which is also the wire value
    pub fn as_str(&self) -> &'static str {
        match self {
            PostCategory::Articles => "Articles",
            PostCategory::CaseStudies => "Case Studies",
            PostCategory::Research => "Research",
        }
    }

    /// Parse a select-box value back into a category
    pub fn from_str_opt(value: &str) -> Option<PostCategory> {
        PostCategory::ALL.iter().copied().find(|c| c.as_str() == value)
    }
}

/// Active filter selection for the post list
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PostFilter {
    pub category: Option<PostCategory>,
    pub specialty: Option<String>,
}

// ============ Response Types ============

/// Envelope returned by write endpoints
#[derive(Debug, Clone, serde::Deserialize)]
pub struct StatusResponse {
    pub status: String,
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, serde::Deserialize)]
pub struct LoginResponse {
    pub status: String,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub user: Option<SessionUser>,
}

#[derive(Debug, Clone, serde::Deserialize)]
pub struct DashboardResponse {
    pub stats: StatSummary,
    pub appointments: Vec<Appointment>,
    pub connections: Vec<ConnectedUser>,
}

#[derive(Debug, Clone, serde::Deserialize)]
pub struct StatSummary {
    pub upcoming_appointments: u32,
    pub unread_messages: u32,
    pub connections: u32,
    pub health_talks: u32,
}

#[derive(Debug, Clone, serde::Deserialize)]
pub struct Appointment {
    /// Name of the other party: the doctor for patients, the patient for doctors
    pub counterpart: String,
    #[serde(default)]
    pub specialty: Option<String>,
    /// Epoch milliseconds
    pub scheduled_at: i64,
}

#[derive(Debug, Clone, serde::Deserialize)]
pub struct ConnectedUser {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub specialty: Option<String>,
}

#[derive(Debug, serde::Deserialize)]
pub struct HealthPostListResponse {
    pub posts: Vec<HealthPost>,
}

#[derive(Debug, Clone, serde::Deserialize)]
pub struct HealthPost {
    pub title: String,
    pub content: String,
    pub category: String,
    #[serde(default)]
    pub tags: Vec<String>,
    pub author: String,
    #[serde(default)]
    pub specialty: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    /// Epoch milliseconds
    pub created_at: i64,
}

#[derive(Debug, serde::Deserialize)]
pub struct SpecialtyListResponse {
    pub specialties: Vec<Specialty>,
}

#[derive(Debug, Clone, PartialEq, serde::Deserialize)]
pub struct Specialty {
    pub name: String,
}

#[derive(Debug, serde::Deserialize)]
pub struct ConversationResponse {
    pub messages: Vec<ChatMessage>,
}

#[derive(Debug, Clone, serde::Deserialize)]
pub struct ChatMessage {
    pub sender_id: u32,
    pub content: String,
    /// Epoch milliseconds
    pub sent_at: i64,
}

// ============ API Functions ============

/// Sign in with email and password
pub async fn login(email: &str, password: &str) -> ApiResult<(String, SessionUser)> {
    #[derive(serde::Serialize)]
    struct LoginRequest {
        email: String,
        password: String,
    }

    let api_base = get_api_base();

    let response = Request::post(&format!("{}/auth/login", api_base))
        .json(&LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        })
        .map_err(|e| ApiError::Network(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    let ok = response.ok();
    let body: LoginResponse = match response.json().await {
        Ok(body) => body,
        Err(_) => return Err(ApiError::Server { message: None }),
    };

    if !ok || body.status != "success" {
        return Err(ApiError::Server { message: body.message });
    }

    match (body.token, body.user) {
        (Some(token), Some(user)) => Ok((token, user)),
        _ => Err(ApiError::Server { message: None }),
    }
}

/// Fetch the signed-in user's dashboard: stats, appointments, connections
pub async fn fetch_dashboard(token: &str) -> ApiResult<DashboardResponse> {
    let api_base = get_api_base();

    let response = Request::get(&format!("{}/dashboard", api_base))
        .header("Authorization", &format!("Bearer {}", token))
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    if !response.ok() {
        return Err(server_error(response).await);
    }

    response
        .json()
        .await
        .map_err(|e| ApiError::Parse(e.to_string()))
}

/// Fetch community posts matching the filter and optional search term
pub async fn fetch_health_posts(
    filter: &PostFilter,
    search: Option<&str>,
) -> ApiResult<Vec<HealthPost>> {
    let api_base = get_api_base();
    let url = format!(
        "{}/health-talks{}",
        api_base,
        post_list_query(filter, search)
    );

    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    if !response.ok() {
        return Err(server_error(response).await);
    }

    let result: HealthPostListResponse = response
        .json()
        .await
        .map_err(|e| ApiError::Parse(e.to_string()))?;

    Ok(result.posts)
}

/// Fetch the specialty filter options
pub async fn fetch_specialties() -> ApiResult<Vec<Specialty>> {
    let api_base = get_api_base();

    let response = Request::get(&format!("{}/specialties", api_base))
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    if !response.ok() {
        return Err(server_error(response).await);
    }

    let result: SpecialtyListResponse = response
        .json()
        .await
        .map_err(|e| ApiError::Parse(e.to_string()))?;

    Ok(result.specialties)
}

/// Submit a new community post as a multipart upload.
///
/// Text fields go out exactly as typed; the optional image travels under
/// the `image` key. The browser supplies the multipart boundary, so no
/// explicit Content-Type header is set.
pub async fn create_health_post(
    draft: &DraftPost,
    image: Option<&web_sys::File>,
    token: &str,
) -> ApiResult<()> {
    let api_base = get_api_base();

    let form = web_sys::FormData::new().map_err(js_error)?;
    for (key, value) in draft.field_entries() {
        form.append_with_str(key, value).map_err(js_error)?;
    }
    if let Some(file) = image {
        form.append_with_blob_and_filename("image", file, &file.name())
            .map_err(js_error)?;
    }

    let response = Request::post(&format!("{}/health-talks", api_base))
        .header("Authorization", &format!("Bearer {}", token))
        .body(form)
        .map_err(|e| ApiError::Network(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    let ok = response.ok();
    let body: StatusResponse = response.json().await.unwrap_or(StatusResponse {
        status: "error".to_string(),
        message: None,
    });

    classify_envelope(ok, body)
}

/// Load the conversation with one user.
///
/// A 404 means no conversation exists yet and maps to an empty list; both
/// the message gate probe and the conversation view rely on that.
pub async fn fetch_conversation(user_id: u32, token: &str) -> ApiResult<Vec<ChatMessage>> {
    let api_base = get_api_base();

    let response = Request::get(&format!("{}/message/{}", api_base, user_id))
        .header("Authorization", &format!("Bearer {}", token))
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    if response.status() == 404 {
        return Ok(Vec::new());
    }

    if !response.ok() {
        return Err(server_error(response).await);
    }

    let result: ConversationResponse = response
        .json()
        .await
        .map_err(|e| ApiError::Parse(e.to_string()))?;

    Ok(result.messages)
}

/// Send one chat message to a recipient
pub async fn send_message(recipient_id: u32, content: &str, token: &str) -> ApiResult<()> {
    #[derive(serde::Serialize)]
    struct SendMessageRequest {
        recipient_id: u32,
        content: String,
    }

    let api_base = get_api_base();

    let response = Request::post(&format!("{}/message", api_base))
        .header("Authorization", &format!("Bearer {}", token))
        .json(&SendMessageRequest {
            recipient_id,
            content: content.to_string(),
        })
        .map_err(|e| ApiError::Network(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    let ok = response.ok();
    let body: StatusResponse = response.json().await.unwrap_or(StatusResponse {
        status: "error".to_string(),
        message: None,
    });

    classify_envelope(ok, body)
}

// ============ Helpers ============

/// Apply the write-endpoint success rule: HTTP success AND a body whose
/// status field is `"success"`. Anything else is a server failure carrying
/// the body's message when present.
fn classify_envelope(http_ok: bool, body: StatusResponse) -> ApiResult<()> {
    if http_ok && body.status == "success" {
        Ok(())
    } else {
        Err(ApiError::Server {
            message: body.message,
        })
    }
}

/// Build the post-list query string; absent filters are omitted
fn post_list_query(filter: &PostFilter, search: Option<&str>) -> String {
    let mut params: Vec<String> = Vec::new();

    if let Some(category) = filter.category {
        params.push(format!(
            "category={}",
            urlencoding::encode(category.as_str())
        ));
    }
    if let Some(specialty) = filter.specialty.as_deref() {
        params.push(format!("specialty={}", urlencoding::encode(specialty)));
    }
    if let Some(search) = search {
        let search = search.trim();
        if !search.is_empty() {
            params.push(format!("search={}", urlencoding::encode(search)));
        }
    }

    if params.is_empty() {
        String::new()
    } else {
        format!("?{}", params.join("&"))
    }
}

/// Read the failure envelope from a non-success response
async fn server_error(response: gloo_net::http::Response) -> ApiError {
    let body: StatusResponse = response.json().await.unwrap_or(StatusResponse {
        status: "error".to_string(),
        message: None,
    });
    ApiError::Server {
        message: body.message,
    }
}

/// Map a raw JS exception into a client error
fn js_error(err: wasm_bindgen::JsValue) -> ApiError {
    ApiError::Network(format!("{:?}", err))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_requires_title_and_content() {
        let draft = DraftPost::default();
        assert_eq!(draft.validate(), Err(ValidationError::EmptyTitle));

        let draft = DraftPost {
            title: "Hello".to_string(),
            ..Default::default()
        };
        assert_eq!(draft.validate(), Err(ValidationError::EmptyContent));

        let draft = DraftPost {
            title: "Hello".to_string(),
            content: "World".to_string(),
            ..Default::default()
        };
        assert_eq!(draft.validate(), Ok(()));
    }

    #[test]
    fn test_validate_judges_emptiness_post_trim() {
        let draft = DraftPost {
            title: "   ".to_string(),
            content: "body".to_string(),
            ..Default::default()
        };
        assert_eq!(draft.validate(), Err(ValidationError::EmptyTitle));

        let draft = DraftPost {
            title: "title".to_string(),
            content: "\n\t ".to_string(),
            ..Default::default()
        };
        assert_eq!(draft.validate(), Err(ValidationError::EmptyContent));
    }

    #[test]
    fn test_field_entries_order_and_default_category() {
        let draft = DraftPost {
            title: "Hello".to_string(),
            content: "World".to_string(),
            ..Default::default()
        };
        let entries = draft.field_entries();
        assert_eq!(entries[0], ("title", "Hello"));
        assert_eq!(entries[1], ("content", "World"));
        assert_eq!(entries[2], ("category", "Articles"));
        assert_eq!(entries[3], ("tags", ""));
    }

    #[test]
    fn test_field_entries_keep_values_untrimmed() {
        let draft = DraftPost {
            title: "  Hello  ".to_string(),
            content: "World".to_string(),
            ..Default::default()
        };
        assert_eq!(draft.field_entries()[0], ("title", "  Hello  "));
    }

    #[test]
    fn test_category_labels_round_trip() {
        for category in PostCategory::ALL {
            assert_eq!(PostCategory::from_str_opt(category.as_str()), Some(category));
        }
        assert_eq!(PostCategory::from_str_opt("Podcasts"), None);
        assert_eq!(PostCategory::default(), PostCategory::Articles);
    }

    #[test]
    fn test_envelope_requires_both_http_and_body_success() {
        let success = StatusResponse {
            status: "success".to_string(),
            message: None,
        };
        assert_eq!(classify_envelope(true, success.clone()), Ok(()));
        assert!(classify_envelope(false, success).is_err());

        let failure = StatusResponse {
            status: "error".to_string(),
            message: None,
        };
        assert!(classify_envelope(true, failure).is_err());
    }

    #[test]
    fn test_envelope_failure_carries_server_message() {
        let body = StatusResponse {
            status: "error".to_string(),
            message: Some("Title already taken".to_string()),
        };
        assert_eq!(
            classify_envelope(true, body),
            Err(ApiError::Server {
                message: Some("Title already taken".to_string())
            })
        );
    }

    #[test]
    fn test_post_list_query_encodes_and_omits() {
        let filter = PostFilter {
            category: Some(PostCategory::CaseStudies),
            specialty: Some("Internal Medicine".to_string()),
        };
        assert_eq!(
            post_list_query(&filter, None),
            "?category=Case%20Studies&specialty=Internal%20Medicine"
        );

        assert_eq!(post_list_query(&PostFilter::default(), None), "");
        assert_eq!(post_list_query(&PostFilter::default(), Some("  ")), "");
        assert_eq!(
            post_list_query(&PostFilter::default(), Some("knee pain")),
            "?search=knee%20pain"
        );
    }
}
