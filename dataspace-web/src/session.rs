use dataspace_common::credentials::StaticCredentials;

const DEFAULT_BASE_URL: &str = "http://localhost:8512";
const DEFAULT_USER_EMAIL: &str = "demo@example.com";

/// Who is signed in and where the API lives, shared through context.
#[derive(Debug, Clone)]
pub struct Session {
    pub base_url: String,
    pub user_email: String,
    pub credentials: StaticCredentials,
}

impl Session {
    /// Values baked in at build time (`DATASPACE_BASE_URL`,
    /// `DATASPACE_USER_EMAIL`, `DATASPACE_TOKEN`).
    pub fn from_build_env() -> Self {
        Self {
            base_url: option_env!("DATASPACE_BASE_URL")
                .unwrap_or(DEFAULT_BASE_URL)
                .trim_end_matches('/')
                .to_string(),
            user_email: option_env!("DATASPACE_USER_EMAIL")
                .unwrap_or(DEFAULT_USER_EMAIL)
                .to_string(),
            credentials: StaticCredentials::new(option_env!("DATASPACE_TOKEN").unwrap_or("")),
        }
    }
}
