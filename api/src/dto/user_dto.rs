use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Clone, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    #[serde(rename = "userName")]
    #[validate(length(min = 1, max = 100))]
    pub username: String,
    #[validate(length(min = 1, max = 128))]
    pub password: String,
}

#[derive(Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RenewTokenRequest {
    #[validate(length(min = 1, max = 4096))]
    pub access_token: String,
    #[validate(length(min = 1, max = 128))]
    pub refresh_token: String,
}
