//! In-process mock of the ReportMitra backend
//!
//! Serves the subset of the REST API the client uses on an ephemeral port.
//! Knobs on `MockState` let tests force expired tokens, failing refreshes,
//! slow or failing reactions, broken storage, classifier verdicts and an
//! unverified identity.

use axum::{
    body::Bytes,
    extract::{Multipart, Path, Query, State},
    http::{header, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post, put},
    Json, Router,
};
use serde::Deserialize;
use serde_json::{json, Value};
use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::sync::Notify;

use crate::api::ApiClient;
use crate::config::ApiConfig;
use crate::storage::{MemoryTokenStore, TokenStore};

pub const EMAIL: &str = "asha@example.com";
pub const PASSWORD: &str = "correct-horse";
pub const OTP: &str = "123456";
pub const TAKEN_EMAIL: &str = "taken@example.com";
pub const TRACKING_ID: &str = "RM-0011";
pub const INITIAL_ACCESS: &str = "access-0";
pub const INITIAL_REFRESH: &str = "refresh-0";
/// The one Aadhaar number the mock registry knows
pub const AADHAAR_NUMBER: &str = "123456789012";

/// Report ids per community page. Page 2 repeats id 2 to exercise dedup.
pub const FEED_PAGES: &[&[i64]] = &[&[1, 2], &[2, 3], &[4]];

/// Host the mock puts in pagination links, unreachable from tests
const INTERNAL_HOST: &str = "http://backend.internal:8000";

/// One recorded upload to the storage endpoint
#[derive(Debug, Clone)]
pub struct StoredObject {
    pub content_type: Option<String>,
    pub authorization: Option<String>,
    pub bytes: Vec<u8>,
}

pub struct MockState {
    addr: SocketAddr,
    /// Access token the backend currently accepts
    pub access_token: Mutex<String>,
    pub refresh_token: Mutex<String>,
    pub refresh_calls: AtomicUsize,
    pub refresh_fails: AtomicBool,
    pub rotate_refresh: AtomicBool,
    /// Reject every bearer token, even freshly refreshed ones
    pub reject_all: AtomicBool,
    pub garbage_user: AtomicBool,
    pub reactions_fail: AtomicBool,
    pub reaction_gate: Mutex<Option<Arc<Notify>>>,
    pub reaction_calls: AtomicUsize,
    reactions: Mutex<HashMap<i64, (i64, i64, bool, bool)>>,
    pub report_forms: Mutex<Vec<HashMap<String, String>>>,
    pub presign_requests: Mutex<Vec<Value>>,
    pub objects: Mutex<HashMap<String, StoredObject>>,
    pub storage_fails: AtomicBool,
    comments: Mutex<HashMap<i64, Vec<Value>>>,
    pub feed_requests: AtomicUsize,
    pub tracked_ids: Mutex<Vec<String>>,
    pub aadhaar_verified: AtomicBool,
    /// Classifier answers `is_valid: false`
    pub ml_rejects: AtomicBool,
    pub ml_reason: Mutex<Option<String>>,
    /// Classifier answers 503
    pub ml_fails: AtomicBool,
    pub ml_requests: Mutex<Vec<Value>>,
}

impl MockState {
    fn new(addr: SocketAddr) -> Self {
        Self {
            addr,
            access_token: Mutex::new(INITIAL_ACCESS.to_string()),
            refresh_token: Mutex::new(INITIAL_REFRESH.to_string()),
            refresh_calls: AtomicUsize::new(0),
            refresh_fails: AtomicBool::new(false),
            rotate_refresh: AtomicBool::new(false),
            reject_all: AtomicBool::new(false),
            garbage_user: AtomicBool::new(false),
            reactions_fail: AtomicBool::new(false),
            reaction_gate: Mutex::new(None),
            reaction_calls: AtomicUsize::new(0),
            reactions: Mutex::new(HashMap::new()),
            report_forms: Mutex::new(Vec::new()),
            presign_requests: Mutex::new(Vec::new()),
            objects: Mutex::new(HashMap::new()),
            storage_fails: AtomicBool::new(false),
            comments: Mutex::new(HashMap::new()),
            feed_requests: AtomicUsize::new(0),
            tracked_ids: Mutex::new(Vec::new()),
            aadhaar_verified: AtomicBool::new(true),
            ml_rejects: AtomicBool::new(false),
            ml_reason: Mutex::new(None),
            ml_fails: AtomicBool::new(false),
            ml_requests: Mutex::new(Vec::new()),
        }
    }

    fn current_access(&self) -> String {
        self.access_token.lock().unwrap().clone()
    }

    fn current_refresh(&self) -> String {
        self.refresh_token.lock().unwrap().clone()
    }

    fn is_authorized(&self, headers: &HeaderMap) -> bool {
        if self.reject_all.load(Ordering::SeqCst) {
            return false;
        }
        bearer(headers).is_some_and(|token| token == self.current_access())
    }

    fn reaction(&self, report_id: i64) -> (i64, i64, bool, bool) {
        *self
            .reactions
            .lock()
            .unwrap()
            .entry(report_id)
            .or_insert((3, 1, false, false))
    }
}

/// Running mock backend
pub struct MockBackend {
    pub state: Arc<MockState>,
    pub addr: SocketAddr,
}

impl MockBackend {
    pub async fn start() -> Self {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind mock backend");
        let addr = listener.local_addr().expect("Mock backend has no address");
        let state = Arc::new(MockState::new(addr));

        let app = router(state.clone());
        tokio::spawn(async move {
            axum::serve(listener, app).await.expect("Mock backend failed");
        });

        Self { state, addr }
    }

    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    pub fn api_config(&self) -> ApiConfig {
        ApiConfig {
            base_url: self.base_url(),
            timeout_seconds: 5,
            ..ApiConfig::default()
        }
    }

    pub fn client(&self, tokens: Arc<dyn TokenStore>) -> Arc<ApiClient> {
        Arc::new(ApiClient::new(&self.api_config(), tokens).expect("Failed to build client"))
    }

    /// Client with no stored session
    pub fn anonymous_client(&self) -> (Arc<ApiClient>, Arc<dyn TokenStore>) {
        let tokens = MemoryTokenStore::boxed();
        (self.client(tokens.clone()), tokens)
    }

    /// Client holding tokens the backend accepts
    pub fn signed_in_client(&self) -> (Arc<ApiClient>, Arc<dyn TokenStore>) {
        let tokens: Arc<dyn TokenStore> = Arc::new(MemoryTokenStore::with_tokens(
            self.state.current_access(),
            self.state.current_refresh(),
        ));
        (self.client(tokens.clone()), tokens)
    }

    /// Client whose access token has expired but whose refresh token is good
    pub fn expired_client(&self) -> (Arc<ApiClient>, Arc<dyn TokenStore>) {
        let tokens: Arc<dyn TokenStore> = Arc::new(MemoryTokenStore::with_tokens(
            "access-expired",
            self.state.current_refresh(),
        ));
        (self.client(tokens.clone()), tokens)
    }

    /// Park reaction requests until the returned handle is notified
    pub fn hold_reactions(&self) -> Arc<Notify> {
        let gate = Arc::new(Notify::new());
        *self.state.reaction_gate.lock().unwrap() = Some(gate.clone());
        gate
    }

    pub fn refresh_calls(&self) -> usize {
        self.state.refresh_calls.load(Ordering::SeqCst)
    }
}

/// Report as the backend serializes it
pub fn report_json(id: i64, status: &str) -> Value {
    json!({
        "id": id,
        "user": 7,
        "issue_title": format!("Issue {}", id),
        "location": "MG Road",
        "issue_description": "Streetlight out for a week",
        "image_url": null,
        "issue_date": "2024-05-01T09:30:00Z",
        "status": status,
        "updated_at": "2024-05-03T12:00:00Z",
        "tracking_id": format!("RM-{:04}", id),
        "department": "Electricity",
        "user_name": "Asha Rao",
        "likes_count": 3,
        "dislikes_count": 1,
        "comments_count": 0,
        "is_liked": false,
        "is_disliked": false
    })
}

fn user_json() -> Value {
    json!({
        "id": 7,
        "email": EMAIL,
        "username": "asha",
        "first_name": "Asha",
        "last_name": "Rao",
        "is_email_verified": true,
        "auth_method": "password",
        "date_joined": "2024-01-10T08:00:00Z"
    })
}

fn bearer(headers: &HeaderMap) -> Option<String> {
    headers
        .get(header::AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(str::to_string)
}

fn unauthorized() -> Response {
    (
        StatusCode::UNAUTHORIZED,
        Json(json!({ "detail": "Given token not valid for any token type" })),
    )
        .into_response()
}

fn router(state: Arc<MockState>) -> Router {
    Router::new()
        .route("/api/users/login/", post(login))
        .route("/api/users/register/", post(register))
        .route("/api/users/request-otp/", post(request_otp))
        .route("/api/users/verify-otp/", post(verify_otp))
        .route("/api/users/token/refresh/", post(refresh))
        .route("/api/users/me/", get(current_user))
        .route("/api/profile/me/", get(profile))
        .route("/api/aadhaar/verify/", post(verify_aadhaar))
        .route("/api/ml/predict/", post(predict))
        .route("/api/blockchain/reports/{tracking_id}/status/", get(blockchain_status))
        .route("/api/reports/", post(create_report))
        .route("/api/reports/history/", get(history))
        .route("/api/reports/community/resolved/", get(community))
        .route("/api/reports/s3/presign/", post(presign))
        .route("/api/reports/{id}/like/", post(like))
        .route("/api/reports/{id}/dislike/", post(dislike))
        .route(
            "/api/reports/{id}/comments/",
            get(list_comments).post(create_comment),
        )
        .route("/api/reports/{id}/presign-get/", get(presign_get))
        .route("/track/detail/{tracking_id}/", get(track))
        .route("/storage/{*key}", put(store_object))
        .with_state(state)
}

// ============================================================================
// Accounts
// ============================================================================

#[derive(Deserialize)]
struct Credentials {
    email: String,
    password: String,
}

async fn login(State(state): State<Arc<MockState>>, Json(body): Json<Credentials>) -> Response {
    if body.password != PASSWORD {
        return (
            StatusCode::UNAUTHORIZED,
            Json(json!({ "detail": "Invalid credentials" })),
        )
            .into_response();
    }
    let mut user = user_json();
    user["email"] = json!(body.email);
    Json(json!({
        "access": state.current_access(),
        "refresh": state.current_refresh(),
        "user": user
    }))
    .into_response()
}

async fn register(State(state): State<Arc<MockState>>, Json(body): Json<Value>) -> Response {
    if body["email"] == TAKEN_EMAIL {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": "Email already registered" })),
        )
            .into_response();
    }
    let mut user = user_json();
    user["email"] = body["email"].clone();
    user["first_name"] = body.get("first_name").cloned().unwrap_or(Value::Null);
    user["last_name"] = body.get("last_name").cloned().unwrap_or(Value::Null);
    (
        StatusCode::CREATED,
        Json(json!({
            "message": "Registration successful",
            "user": user,
            "tokens": { "access": state.current_access(), "refresh": state.current_refresh() }
        })),
    )
        .into_response()
}

async fn request_otp(Json(_body): Json<Value>) -> Json<Value> {
    Json(json!({ "message": "OTP sent to your email", "expires_in": "10 minutes" }))
}

async fn verify_otp(State(state): State<Arc<MockState>>, Json(body): Json<Value>) -> Response {
    if body["otp"] != OTP {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": "Invalid or expired OTP" })),
        )
            .into_response();
    }
    // No user in this shape: the client has to fetch /users/me/
    Json(json!({
        "message": "Login successful",
        "tokens": { "access": state.current_access(), "refresh": state.current_refresh() }
    }))
    .into_response()
}

async fn refresh(State(state): State<Arc<MockState>>, Json(body): Json<Value>) -> Response {
    let calls = state.refresh_calls.fetch_add(1, Ordering::SeqCst) + 1;
    tokio::time::sleep(Duration::from_millis(50)).await;

    let rejected = body["refresh"] != state.current_refresh();
    if state.refresh_fails.load(Ordering::SeqCst) || rejected {
        return (
            StatusCode::UNAUTHORIZED,
            Json(json!({ "detail": "Token is invalid or expired" })),
        )
            .into_response();
    }

    let access = format!("access-{}", calls);
    *state.access_token.lock().unwrap() = access.clone();
    if state.rotate_refresh.load(Ordering::SeqCst) {
        let rotated = format!("refresh-{}", calls);
        *state.refresh_token.lock().unwrap() = rotated.clone();
        return Json(json!({ "access": access, "refresh": rotated })).into_response();
    }
    Json(json!({ "access": access })).into_response()
}

async fn current_user(State(state): State<Arc<MockState>>, headers: HeaderMap) -> Response {
    if state.garbage_user.load(Ordering::SeqCst) {
        return (StatusCode::OK, "<html>definitely not json</html>").into_response();
    }
    if !state.is_authorized(&headers) {
        return unauthorized();
    }
    Json(user_json()).into_response()
}

async fn profile(State(state): State<Arc<MockState>>, headers: HeaderMap) -> Response {
    if !state.is_authorized(&headers) {
        return unauthorized();
    }
    let verified = state.aadhaar_verified.load(Ordering::SeqCst);
    let aadhaar = if verified { aadhaar_json() } else { Value::Null };
    Json(json!({
        "id": 7,
        "is_aadhaar_verified": verified,
        "created_at": "2024-01-10T08:00:00Z",
        "updated_at": "2024-02-01T08:00:00Z",
        "aadhaar": aadhaar
    }))
    .into_response()
}

fn aadhaar_json() -> Value {
    json!({
        "aadhaar_number": AADHAAR_NUMBER,
        "full_name": "Asha Rao",
        "first_name": "Asha",
        "last_name": "Rao",
        "date_of_birth": "1990-04-12",
        "gender": "F",
        "created_at": "2024-01-10T08:00:00Z"
    })
}

async fn verify_aadhaar(
    State(state): State<Arc<MockState>>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Response {
    if !state.is_authorized(&headers) {
        return unauthorized();
    }
    // The registry answers 200 either way
    if body["aadhaar_number"] != AADHAAR_NUMBER {
        return Json(json!({ "verified": false, "error": "Aadhaar number not found" }))
            .into_response();
    }
    state.aadhaar_verified.store(true, Ordering::SeqCst);
    Json(json!({
        "verified": true,
        "aadhaar_number": AADHAAR_NUMBER,
        "aadhaar": aadhaar_json(),
        "profile": {
            "is_aadhaar_verified": true,
            "created_at": "2024-01-10T08:00:00Z",
            "updated_at": "2024-05-04T10:00:00Z"
        }
    }))
    .into_response()
}

// ============================================================================
// Reports
// ============================================================================

async fn create_report(
    State(state): State<Arc<MockState>>,
    headers: HeaderMap,
    mut multipart: Multipart,
) -> Response {
    if !state.is_authorized(&headers) {
        return unauthorized();
    }

    let mut fields = HashMap::new();
    while let Ok(Some(field)) = multipart.next_field().await {
        let name = field.name().unwrap_or_default().to_string();
        let value = field.text().await.unwrap_or_default();
        fields.insert(name, value);
    }

    let mut report = report_json(99, "pending");
    report["issue_title"] = json!(fields.get("issue_title"));
    report["location"] = json!(fields.get("location"));
    report["issue_description"] = json!(fields.get("issue_description"));
    report["image_url"] = json!(fields.get("image_url"));
    state.report_forms.lock().unwrap().push(fields);

    (StatusCode::CREATED, Json(report)).into_response()
}

async fn predict(
    State(state): State<Arc<MockState>>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Response {
    if !state.is_authorized(&headers) {
        return unauthorized();
    }
    state.ml_requests.lock().unwrap().push(body);
    if state.ml_fails.load(Ordering::SeqCst) {
        return (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(json!({ "error": "Model not loaded" })),
        )
            .into_response();
    }

    let is_valid = !state.ml_rejects.load(Ordering::SeqCst);
    let reason = state.ml_reason.lock().unwrap().clone();
    Json(json!({
        "department": "Roads",
        "confidence": 0.87,
        "is_valid": is_valid,
        "method": "fusion",
        "reason": reason,
        "image_result": { "department": "Roads", "confidence": 0.91 },
        "text_result": { "department": "Roads", "confidence": 0.74, "intent": "complaint" }
    }))
    .into_response()
}

async fn blockchain_status(
    State(state): State<Arc<MockState>>,
    headers: HeaderMap,
    Path(tracking_id): Path<String>,
) -> Response {
    if !state.is_authorized(&headers) {
        return unauthorized();
    }
    if tracking_id != TRACKING_ID {
        return (StatusCode::NOT_FOUND, Json(json!({ "error": "Report not found" })))
            .into_response();
    }
    Json(json!({
        "tracking_id": tracking_id,
        "blockchain_verified": true,
        "sla_escalated": false,
        "latest_tx_hash": "0x5f2c",
        "events": [
            {
                "event_type": "REPORT_CREATED",
                "tx_hash": "0x11ab",
                "block_number": 4_180_233,
                "timestamp": "2024-05-01T09:30:05Z",
                "status": "confirmed",
                "explorer_url": "https://explorer.example.com/tx/0x11ab"
            },
            { "event_type": "STATUS_UPDATED", "tx_hash": "0x5f2c", "status": "pending" }
        ],
        "evidence": [{
            "file_name": "completed-11.jpg",
            "file_path": "reports/completed-11.jpg",
            "file_url": "https://storage.example.com/reports/completed-11.jpg",
            "file_hash": "e3b0c44298fc1c14",
            "tx_hash": "0x5f2c",
            "verified": true,
            "block_timestamp": 1_714_730_400,
            "created_at": "2024-05-03T12:00:00Z"
        }],
        "sla_status": { "within_sla": true, "days_elapsed": 2, "days_remaining": 5 }
    }))
    .into_response()
}

async fn track(
    State(state): State<Arc<MockState>>,
    Path(tracking_id): Path<String>,
) -> Response {
    state.tracked_ids.lock().unwrap().push(tracking_id.clone());
    if tracking_id != TRACKING_ID {
        return (StatusCode::NOT_FOUND, Json(json!({ "detail": "Not found." })))
            .into_response();
    }
    let mut report = report_json(11, "resolved");
    report["completion_url"] = json!("reports/completed-11.jpg");
    Json(report).into_response()
}

async fn history(State(state): State<Arc<MockState>>, headers: HeaderMap) -> Response {
    if !state.is_authorized(&headers) {
        return unauthorized();
    }
    Json(json!([report_json(5, "pending"), report_json(1, "resolved")])).into_response()
}

async fn community(
    State(state): State<Arc<MockState>>,
    headers: HeaderMap,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    // Anonymous browsing is allowed; a stale token is not
    if bearer(&headers).is_some() && !state.is_authorized(&headers) {
        return unauthorized();
    }
    state.feed_requests.fetch_add(1, Ordering::SeqCst);

    let page: usize = params
        .get("page")
        .and_then(|p| p.parse().ok())
        .unwrap_or(1);
    let Some(ids) = FEED_PAGES.get(page.saturating_sub(1)) else {
        return (StatusCode::NOT_FOUND, Json(json!({ "detail": "Invalid page." })))
            .into_response();
    };

    let link = |page: usize| {
        format!(
            "{}/api/reports/community/resolved/?page={}",
            INTERNAL_HOST, page
        )
    };
    let next = (page < FEED_PAGES.len()).then(|| link(page + 1));
    let previous = (page > 1).then(|| link(page - 1));

    let results: Vec<Value> = ids.iter().map(|id| report_json(*id, "resolved")).collect();
    Json(json!({ "results": results, "next": next, "previous": previous })).into_response()
}

async fn presign_get(Path(id): Path<i64>) -> Json<Value> {
    Json(json!({
        "image_url": format!("https://storage.example.com/reports/{}.jpg?sig=abc", id),
        "completion_url": null
    }))
}

// ============================================================================
// Reactions and comments
// ============================================================================

async fn like(
    State(state): State<Arc<MockState>>,
    headers: HeaderMap,
    Path(id): Path<i64>,
) -> Response {
    react(state, headers, id, true).await
}

async fn dislike(
    State(state): State<Arc<MockState>>,
    headers: HeaderMap,
    Path(id): Path<i64>,
) -> Response {
    react(state, headers, id, false).await
}

async fn react(state: Arc<MockState>, headers: HeaderMap, id: i64, is_like: bool) -> Response {
    if !state.is_authorized(&headers) {
        return unauthorized();
    }
    state.reaction_calls.fetch_add(1, Ordering::SeqCst);

    let gate = state.reaction_gate.lock().unwrap().clone();
    if let Some(gate) = gate {
        gate.notified().await;
    }

    if state.reactions_fail.load(Ordering::SeqCst) {
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "detail": "Reaction could not be saved" })),
        )
            .into_response();
    }

    let (mut likes, mut dislikes, mut liked, mut disliked) = state.reaction(id);
    if is_like {
        if liked {
            likes -= 1;
            liked = false;
        } else {
            likes += 1;
            liked = true;
            if disliked {
                dislikes -= 1;
                disliked = false;
            }
        }
    } else if disliked {
        dislikes -= 1;
        disliked = false;
    } else {
        dislikes += 1;
        disliked = true;
        if liked {
            likes -= 1;
            liked = false;
        }
    }
    state
        .reactions
        .lock()
        .unwrap()
        .insert(id, (likes, dislikes, liked, disliked));

    Json(json!({
        "likes_count": likes,
        "dislikes_count": dislikes,
        "liked": liked,
        "disliked": disliked
    }))
    .into_response()
}

async fn list_comments(
    State(state): State<Arc<MockState>>,
    Path(id): Path<i64>,
) -> Json<Value> {
    let comments = state
        .comments
        .lock()
        .unwrap()
        .get(&id)
        .cloned()
        .unwrap_or_default();
    Json(Value::Array(comments))
}

async fn create_comment(
    State(state): State<Arc<MockState>>,
    headers: HeaderMap,
    Path(id): Path<i64>,
    Json(body): Json<Value>,
) -> Response {
    if !state.is_authorized(&headers) {
        return unauthorized();
    }
    let text = body["text"].as_str().unwrap_or_default().to_string();
    if text.trim().is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({ "text": ["This field may not be blank."] })),
        )
            .into_response();
    }

    let mut comments = state.comments.lock().unwrap();
    let thread = comments.entry(id).or_default();
    let comment = json!({
        "id": thread.len() as i64 + 1,
        "user_name": "Asha Rao",
        "text": text,
        "created_at": "2024-05-04T10:00:00Z"
    });
    thread.push(comment.clone());
    (StatusCode::CREATED, Json(comment)).into_response()
}

// ============================================================================
// Uploads
// ============================================================================

async fn presign(
    State(state): State<Arc<MockState>>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Response {
    if !state.is_authorized(&headers) {
        return unauthorized();
    }
    let file_name = body["fileName"].as_str().unwrap_or_default().to_string();
    state.presign_requests.lock().unwrap().push(body);

    let key = format!("reports/{}", file_name);
    Json(json!({
        "url": format!("http://{}/storage/{}?X-Amz-Signature=test", state.addr, key),
        "key": key
    }))
    .into_response()
}

async fn store_object(
    State(state): State<Arc<MockState>>,
    headers: HeaderMap,
    Path(key): Path<String>,
    body: Bytes,
) -> Response {
    if state.storage_fails.load(Ordering::SeqCst) {
        return (StatusCode::FORBIDDEN, "<Error><Code>AccessDenied</Code></Error>")
            .into_response();
    }
    let header_value = |name: header::HeaderName| {
        headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string)
    };
    let object = StoredObject {
        content_type: header_value(header::CONTENT_TYPE),
        authorization: header_value(header::AUTHORIZATION),
        bytes: body.to_vec(),
    };
    state.objects.lock().unwrap().insert(key, object);
    StatusCode::OK.into_response()
}
