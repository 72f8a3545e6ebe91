//! Credential resolution from configuration, environment and profile files.

use std::path::{Path, PathBuf};

use ini::Ini;

use super::Credentials;
use crate::config::ProviderConfig;
use crate::Error;

/// Environment variable overriding the access key id.
pub const ENV_ACCESS_KEY: &str = "TURBOT_ACCESS_KEY_ID";

/// Environment variable overriding the secret access key.
pub const ENV_SECRET_KEY: &str = "TURBOT_SECRET_ACCESS_KEY";

/// Environment variable overriding the workspace.
pub const ENV_WORKSPACE: &str = "TURBOT_WORKSPACE";

/// Environment variable selecting the profile when none is configured.
pub const ENV_PROFILE: &str = "TURBOT_PROFILE";

/// Profile used when neither configuration nor environment names one.
pub const DEFAULT_PROFILE: &str = "default";

const KEY_ACCESS_KEY: &str = "turbot_access_key_id";
const KEY_SECRET_KEY: &str = "turbot_secret_access_key";
const KEY_WORKSPACE: &str = "turbot_workspace";

/// Resolves credentials using the process environment.
///
/// See [`resolve_with_env`] for the precedence rules.
pub fn resolve(config: &ProviderConfig) -> Result<Credentials, Error> {
    resolve_with_env(config, |name| std::env::var(name).ok())
}

/// Resolves credentials using an explicit environment lookup.
///
/// Each field is resolved independently, highest precedence first:
///
/// 1. the explicit value in `config`
/// 2. the environment variable ([`ENV_ACCESS_KEY`], [`ENV_SECRET_KEY`], [`ENV_WORKSPACE`])
/// 3. the selected profile of the credentials file
///
/// The credentials file is only read when steps 1 and 2 leave a field
/// empty. The profile is `config.profile`, then [`ENV_PROFILE`], then
/// [`DEFAULT_PROFILE`]; the file is `config.credentials_file` or
/// `~/.config/turbot/credentials`.
///
/// # Example
///
/// ```rust
/// use turbot_provider::ProviderConfig;
/// use turbot_provider::auth::resolve_with_env;
///
/// let config = ProviderConfig::builder()
///     .access_key("ak")
///     .workspace("example.cloud.turbot.com")
///     .build();
///
/// let creds = resolve_with_env(&config, |name| {
///     (name == "TURBOT_SECRET_ACCESS_KEY").then(|| "sk".to_string())
/// })
/// .unwrap();
/// assert_eq!(creds.secret_key(), "sk");
/// ```
pub fn resolve_with_env<F>(config: &ProviderConfig, env: F) -> Result<Credentials, Error>
where
    F: Fn(&str) -> Option<String>,
{
    let explicit = PartialCredentials {
        access_key: non_empty(config.access_key.clone()),
        secret_key: non_empty(config.secret_key.clone()),
        workspace: non_empty(config.workspace.clone()),
    };
    if let Some(credentials) = explicit.complete() {
        tracing::debug!("using explicitly configured credentials");
        return Ok(credentials);
    }

    let merged = explicit.or(PartialCredentials {
        access_key: non_empty(env(ENV_ACCESS_KEY)),
        secret_key: non_empty(env(ENV_SECRET_KEY)),
        workspace: non_empty(env(ENV_WORKSPACE)),
    });
    if let Some(credentials) = merged.complete() {
        tracing::debug!("using credentials from configuration and environment");
        return Ok(credentials);
    }

    let profile = non_empty(config.profile.clone())
        .or_else(|| non_empty(env(ENV_PROFILE)))
        .unwrap_or_else(|| DEFAULT_PROFILE.to_string());
    let path = match &config.credentials_file {
        Some(path) => path.clone(),
        None => default_credentials_path()?,
    };

    let from_file = load_profile(&path, &profile)?;
    tracing::debug!(profile = %profile, path = %path.display(), "loaded credentials profile");

    merged.or(from_file).complete().ok_or_else(|| {
        Error::configuration(format!(
            "incomplete credentials for profile '{}' in '{}'",
            profile,
            path.display()
        ))
    })
}

/// Returns the default credentials file location, `~/.config/turbot/credentials`.
pub fn default_credentials_path() -> Result<PathBuf, Error> {
    let home = dirs::home_dir().ok_or_else(|| {
        Error::configuration("cannot locate home directory for the default credentials file")
    })?;
    Ok(home.join(".config").join("turbot").join("credentials"))
}

/// Reads one profile section of a credentials file.
///
/// All three keys are required.
fn load_profile(path: &Path, profile: &str) -> Result<PartialCredentials, Error> {
    let file = Ini::load_from_file(path).map_err(|e| {
        Error::configuration(format!(
            "failed to load credentials file '{}': {}",
            path.display(),
            e
        ))
    })?;

    let section = file.section(Some(profile)).ok_or_else(|| {
        Error::configuration(format!(
            "profile '{}' not found in credentials file '{}'",
            profile,
            path.display()
        ))
    })?;

    let required = |key: &str| {
        section
            .get(key)
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .map(str::to_string)
            .ok_or_else(|| {
                Error::configuration(format!(
                    "profile '{}' in credentials file '{}' is missing '{}'",
                    profile,
                    path.display(),
                    key
                ))
            })
    };

    Ok(PartialCredentials {
        access_key: Some(required(KEY_ACCESS_KEY)?),
        secret_key: Some(required(KEY_SECRET_KEY)?),
        workspace: Some(required(KEY_WORKSPACE)?),
    })
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// Field-by-field credentials gathered from one source.
#[derive(Default)]
struct PartialCredentials {
    access_key: Option<String>,
    secret_key: Option<String>,
    workspace: Option<String>,
}

impl PartialCredentials {
    /// Fills fields missing here from a lower-precedence source.
    fn or(self, lower: PartialCredentials) -> Self {
        Self {
            access_key: self.access_key.or(lower.access_key),
            secret_key: self.secret_key.or(lower.secret_key),
            workspace: self.workspace.or(lower.workspace),
        }
    }

    fn complete(&self) -> Option<Credentials> {
        match (&self.access_key, &self.secret_key, &self.workspace) {
            (Some(access_key), Some(secret_key), Some(workspace)) => Some(Credentials::new(
                access_key.as_str(),
                secret_key.as_str(),
                workspace.as_str(),
            )),
            _ => None,
        }
    }
}
