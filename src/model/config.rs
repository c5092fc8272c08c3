use serde::{Deserialize, Serialize};

pub const DEFAULT_PAGE_SIZE: u64 = 10;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AdminConfig {
    pub version: u32,

    #[serde(default)]
    pub remote: Option<RemoteConfig>,

    #[serde(default = "default_page_size")]
    pub page_size: u64,

    /// Display name of the operator, shown by `config show`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<String>,

    /// Permissions granted to this operator (`seed:i18n:key:write`, `seed:i18n:*`, ...).
    #[serde(default = "default_permissions")]
    pub permissions: Vec<String>,
}

impl Default for AdminConfig {
    fn default() -> Self {
        Self {
            version: 1,
            remote: None,
            page_size: DEFAULT_PAGE_SIZE,
            user: None,
            permissions: default_permissions(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoteConfig {
    /// REST prefix of the i18n server, e.g. `http://localhost:8080/seed-i18n`.
    pub base_url: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
}

fn default_page_size() -> u64 {
    DEFAULT_PAGE_SIZE
}

fn default_permissions() -> Vec<String> {
    vec!["seed:i18n:*".to_string()]
}
