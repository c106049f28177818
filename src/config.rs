/// Configuration constants for TFE API
pub mod api {
    /// Base path for TFE API v2
    pub const BASE_PATH: &str = "/api/v2";

    /// Organizations endpoint
    pub const ORGANIZATIONS: &str = "organizations";

    /// Teams endpoint
    pub const TEAMS: &str = "teams";

    /// Organization memberships endpoint (also the JSON:API resource type)
    pub const ORGANIZATION_MEMBERSHIPS: &str = "organization-memberships";

    /// JSON:API media type used for both Content-Type and Accept
    pub const MEDIA_TYPE: &str = "application/vnd.api+json";

    /// Default page size for API requests
    pub const DEFAULT_PAGE_SIZE: u32 = 100;
}

/// Configuration constants for credentials
pub mod credentials {
    /// Credentials file name
    pub const FILE_NAME: &str = "terraform.d/credentials.tfrc.json";

    /// Path to Terraform credentials file on Unix (relative to HOME)
    pub const FILE_PATH_UNIX: &str = ".terraform.d/credentials.tfrc.json";

    /// Environment variable names for token (checked in order)
    pub const TOKEN_ENV_VARS: &[&str] = &["TFE_TOKEN", "TFC_TOKEN", "HCP_TOKEN"];
}

/// Configuration constants for host resolution
pub mod host {
    /// Environment variable holding the API host (hostname or full URL)
    pub const ENV_VAR: &str = "TFE_HOST";
}

/// Configuration constants for the emails input
pub mod emails {
    /// Required extension for `--emails-file`
    pub const FILE_EXTENSION: &str = "txt";

    /// Lines starting with this marker are ignored
    pub const COMMENT_MARKER: char = '#';
}

/// Default values for CLI
pub mod defaults {
    /// Default TFE host
    pub const HOST: &str = "app.terraform.io";

    /// Default log level
    pub const LOG_LEVEL: &str = "warn";

    /// Seconds to wait after the bulk removal before any dependent read
    pub const GRACE_PERIOD_SECS: u64 = 3;

    /// Environment variable overriding the grace period
    pub const GRACE_PERIOD_ENV_VAR: &str = "TFE_GRACE_PERIOD";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_base_path_format() {
        assert!(api::BASE_PATH.starts_with('/'));
    }

    #[test]
    fn test_credentials_env_vars() {
        assert_eq!(
            credentials::TOKEN_ENV_VARS,
            &["TFE_TOKEN", "TFC_TOKEN", "HCP_TOKEN"]
        );
    }

    #[test]
    fn test_default_host_is_valid() {
        assert!(defaults::HOST.contains('.'));
        assert!(!defaults::HOST.starts_with("https://"));
    }

    #[test]
    fn test_emails_extension_has_no_dot() {
        assert!(!emails::FILE_EXTENSION.starts_with('.'));
    }
}
