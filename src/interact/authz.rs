/// Permissions checked by the i18n server.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Permission {
    LocaleRead,
    LocaleWrite,
    LocaleDelete,
    KeyRead,
    KeyWrite,
    KeyDelete,
    TranslationRead,
    TranslationWrite,
    TranslationDelete,
}

impl Permission {
    pub fn as_str(&self) -> &'static str {
        match self {
            Permission::LocaleRead => "seed:i18n:locale:read",
            Permission::LocaleWrite => "seed:i18n:locale:write",
            Permission::LocaleDelete => "seed:i18n:locale:delete",
            Permission::KeyRead => "seed:i18n:key:read",
            Permission::KeyWrite => "seed:i18n:key:write",
            Permission::KeyDelete => "seed:i18n:key:delete",
            Permission::TranslationRead => "seed:i18n:translation:read",
            Permission::TranslationWrite => "seed:i18n:translation:write",
            Permission::TranslationDelete => "seed:i18n:translation:delete",
        }
    }
}

impl std::fmt::Display for Permission {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Read-only view of who is operating and what they may do.
pub trait Authorization: Send + Sync {
    fn principal(&self) -> Option<&str>;
    fn has_permission(&self, permission: Permission) -> bool;
}

/// Permissions granted from configuration, in wildcard form
/// (`seed:i18n:*`, `seed:i18n:key:read,write`).
#[derive(Clone, Debug, Default)]
pub struct Grants {
    principal: Option<String>,
    grants: Vec<String>,
}

impl Grants {
    pub fn new(principal: Option<String>, grants: Vec<String>) -> Self {
        Self { principal, grants }
    }

    pub fn grants(&self) -> &[String] {
        &self.grants
    }
}

impl Authorization for Grants {
    fn principal(&self) -> Option<&str> {
        self.principal.as_deref()
    }

    fn has_permission(&self, permission: Permission) -> bool {
        self.grants.iter().any(|g| implies(g, permission.as_str()))
    }
}

/// Wildcard implication: parts are `:`-separated, a part may list
/// alternatives with `,` or be `*`, and a grant with fewer parts covers
/// everything below it.
fn implies(grant: &str, wanted: &str) -> bool {
    let grant: Vec<&str> = grant.trim().split(':').collect();
    let wanted: Vec<&str> = wanted.split(':').collect();
    if grant.iter().all(|p| p.is_empty()) {
        return false;
    }

    for (i, want) in wanted.iter().enumerate() {
        let Some(part) = grant.get(i) else {
            return true;
        };
        if *part == "*" {
            continue;
        }
        if !part.split(',').any(|alt| alt.trim() == *want) {
            return false;
        }
    }
    grant[wanted.len().min(grant.len())..]
        .iter()
        .all(|p| *p == "*")
}

#[cfg(test)]
#[path = "../tests/interact/authz_tests.rs"]
mod tests;
