//! Backend endpoint paths
//!
//! Paths are relative to the API root (`<base_url><api_prefix>`) unless noted.

pub const LOGIN: &str = "/users/login/";
pub const REGISTER: &str = "/users/register/";
pub const CURRENT_USER: &str = "/users/me/";
pub const REQUEST_OTP: &str = "/users/request-otp/";
pub const VERIFY_OTP: &str = "/users/verify-otp/";
pub const TOKEN_REFRESH: &str = "/users/token/refresh/";

pub const REPORTS: &str = "/reports/";
pub const COMMUNITY_RESOLVED: &str = "/reports/community/resolved/";
pub const USER_HISTORY: &str = "/reports/history/";
pub const PRESIGN_UPLOAD: &str = "/reports/s3/presign/";

pub const PROFILE: &str = "/profile/me/";
pub const VERIFY_AADHAAR: &str = "/aadhaar/verify/";

pub const ML_PREDICT: &str = "/ml/predict/";

/// Relative to the server root, not the API root
pub fn tracking_detail(tracking_id: &str) -> String {
    format!("/track/detail/{}/", urlencoding::encode(tracking_id))
}

pub fn blockchain_status(tracking_id: &str) -> String {
    format!("/blockchain/reports/{}/status/", urlencoding::encode(tracking_id))
}

pub fn like(report_id: i64) -> String {
    format!("/reports/{}/like/", report_id)
}

pub fn dislike(report_id: i64) -> String {
    format!("/reports/{}/dislike/", report_id)
}

pub fn comments(report_id: i64) -> String {
    format!("/reports/{}/comments/", report_id)
}

pub fn presign_get(report_id: i64) -> String {
    format!("/reports/{}/presign-get/", report_id)
}
