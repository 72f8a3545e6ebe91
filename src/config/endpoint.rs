//! Turbot API endpoint construction.

use url::{Host, Url};

use crate::Error;

const DEFAULT_API_PATH: &str = "/api/latest";
const GRAPHQL_SEGMENT: &str = "/graphql";
const SHORT_NAME_DOMAIN: &str = "turbot.io";

/// Builds the GraphQL endpoint URL for a workspace.
///
/// The workspace may be a bare host, a host with an API version path, or a
/// full URL. Rules, applied in order:
///
/// 1. Without a scheme, `https://` is prepended, and a two-label host
///    (`<workspace>.<environment>`) is completed with `.turbot.io`.
/// 2. Without a path (or with only `/`), `/api/latest` is used.
/// 3. A single trailing slash is stripped.
/// 4. `/graphql` is appended unless it is already the final segment.
///
/// A URL that already ends in `/api/<version>/graphql` is returned as is.
///
/// # Example
///
/// ```rust
/// use turbot_provider::config::build_api_url;
///
/// assert_eq!(
///     build_api_url("example-turbot.cloud.turbot.com/api/v5/").unwrap(),
///     "https://example-turbot.cloud.turbot.com/api/v5/graphql",
/// );
/// ```
///
/// # Errors
///
/// Returns a [`Configuration`](crate::ErrorKind::Configuration) error if
/// the workspace is empty or does not parse as a URL.
pub fn build_api_url(workspace: &str) -> Result<String, Error> {
    let workspace = workspace.trim();
    if workspace.is_empty() {
        return Err(Error::configuration("workspace must not be empty"));
    }

    let has_scheme = workspace.contains("://");
    let with_scheme = if has_scheme {
        workspace.to_string()
    } else {
        format!("https://{}", workspace)
    };

    let mut url = Url::parse(&with_scheme).map_err(|e| {
        Error::configuration(format!("invalid workspace '{}': {}", workspace, e))
    })?;
    if url.cannot_be_a_base() || url.host_str().is_none() {
        return Err(Error::configuration(format!(
            "invalid workspace '{}': missing host",
            workspace
        )));
    }

    if !has_scheme {
        expand_short_name(&mut url)?;
    }

    let mut path = match url.path() {
        "" | "/" => DEFAULT_API_PATH.to_string(),
        other => other.strip_suffix('/').unwrap_or(other).to_string(),
    };
    if !path.ends_with(GRAPHQL_SEGMENT) {
        path.push_str(GRAPHQL_SEGMENT);
    }

    url.set_path(&path);
    url.set_fragment(None);
    Ok(url.to_string())
}

/// Completes `name.env` to `name.env.turbot.io`. IP addresses and hosts
/// with one or three or more labels are left alone.
fn expand_short_name(url: &mut Url) -> Result<(), Error> {
    let short = match url.host() {
        Some(Host::Domain(domain)) if domain.split('.').count() == 2 => {
            format!("{}.{}", domain, SHORT_NAME_DOMAIN)
        }
        _ => return Ok(()),
    };
    url.set_host(Some(&short)).map_err(|e| {
        Error::configuration(format!("invalid workspace host '{}': {}", short, e))
    })
}
