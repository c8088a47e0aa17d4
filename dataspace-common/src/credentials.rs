use std::fmt;

/// Source of the bearer token attached to every API call.
///
/// Implementations are asked once per request and must answer synchronously.
pub trait CredentialProvider {
    fn token(&self) -> String;

    fn authorization_header(&self) -> String {
        format!("Bearer {}", self.token())
    }
}

impl<T: CredentialProvider + ?Sized> CredentialProvider for std::sync::Arc<T> {
    fn token(&self) -> String {
        (**self).token()
    }
}

#[derive(Clone)]
pub struct StaticCredentials {
    token: String,
}

impl StaticCredentials {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
        }
    }
}

impl fmt::Debug for StaticCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StaticCredentials")
            .field("token", &"[REDACTED]")
            .finish()
    }
}

impl CredentialProvider for StaticCredentials {
    fn token(&self) -> String {
        self.token.clone()
    }
}

/// Reads the token from an environment variable on every call, so a rotated
/// token is picked up without restarting.
#[derive(Debug, Clone)]
pub struct EnvCredentials {
    pub var: String,
}

pub const DEFAULT_TOKEN_ENV: &str = "DATASPACE_TOKEN";

impl EnvCredentials {
    pub fn new(var: impl Into<String>) -> Self {
        Self { var: var.into() }
    }
}

impl Default for EnvCredentials {
    fn default() -> Self {
        Self::new(DEFAULT_TOKEN_ENV)
    }
}

impl CredentialProvider for EnvCredentials {
    fn token(&self) -> String {
        match std::env::var(&self.var) {
            Ok(token) => token,
            Err(_) => {
                log::warn!("{} is not set, sending an empty bearer token", self.var);
                String::new()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_static_credentials() {
        let credentials = StaticCredentials::new("secret");
        assert_eq!(credentials.token(), "secret");
        assert_eq!(credentials.authorization_header(), "Bearer secret");
        assert!(!format!("{:?}", credentials).contains("secret"));
    }

    #[test]
    fn test_env_credentials_read_at_call_time() {
        let var = "DATASPACE_COMMON_TEST_TOKEN";
        let credentials = EnvCredentials::new(var);
        std::env::remove_var(var);
        assert_eq!(credentials.token(), "");
        std::env::set_var(var, "first");
        assert_eq!(credentials.token(), "first");
        std::env::set_var(var, "second");
        assert_eq!(credentials.authorization_header(), "Bearer second");
        std::env::remove_var(var);
    }
}
