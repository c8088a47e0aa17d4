use dataspace_common::credentials::DEFAULT_TOKEN_ENV;
use dataspace_config_file::DataspaceConfigToml;

use crate::args::Args;
use crate::commands::CliError;

pub const BASE_URL_ENV: &str = "DATASPACE_BASE_URL";
pub const USER_EMAIL_ENV: &str = "DATASPACE_USER_EMAIL";

/// Effective settings: flags win over the config file, which wins over the
/// environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub base_url: String,
    pub user_email: String,
    pub token_env: String,
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|value| !value.trim().is_empty())
}

/// First non-blank value of flag, file and environment, in that order.
fn pick(flag: Option<&String>, file: Option<&String>, env: &str) -> Option<String> {
    non_empty(flag.cloned())
        .or_else(|| non_empty(file.cloned()))
        .or_else(|| non_empty(std::env::var(env).ok()))
}

impl Settings {
    pub fn resolve(args: &Args, config: &DataspaceConfigToml) -> Result<Self, CliError> {
        let base_url = pick(args.base_url.as_ref(), config.base_url.as_ref(), BASE_URL_ENV)
            .ok_or(CliError::MissingSetting("base_url"))?;
        let user_email = pick(
            args.user_email.as_ref(),
            config.user_email.as_ref(),
            USER_EMAIL_ENV,
        )
        .ok_or(CliError::MissingSetting("user_email"))?;
        let token_env = config
            .token_env
            .clone()
            .unwrap_or_else(|| DEFAULT_TOKEN_ENV.to_string());
        Ok(Self {
            base_url,
            user_email,
            token_env,
        })
    }
}
