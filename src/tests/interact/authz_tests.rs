use super::*;

#[test]
fn wildcard_grants_cover_every_permission_below_them() {
    assert!(implies("seed:i18n:*", "seed:i18n:key:write"));
    assert!(implies("seed:i18n", "seed:i18n:locale:delete"));
    assert!(implies("*", "seed:i18n:translation:read"));
    assert!(!implies("seed:other:*", "seed:i18n:key:read"));
}

#[test]
fn alternatives_are_matched_per_part() {
    assert!(implies("seed:i18n:key:read,write", "seed:i18n:key:write"));
    assert!(!implies("seed:i18n:key:read,write", "seed:i18n:key:delete"));
    assert!(implies("seed:i18n:key,locale:read", "seed:i18n:locale:read"));
}

#[test]
fn longer_grants_only_imply_with_trailing_wildcards() {
    assert!(implies("seed:i18n:key:read:*", "seed:i18n:key:read"));
    assert!(!implies("seed:i18n:key:read:own", "seed:i18n:key:read"));
}

#[test]
fn empty_grants_imply_nothing() {
    assert!(!implies("", "seed:i18n:key:read"));
    let grants = Grants::new(None, Vec::new());
    assert!(!grants.has_permission(Permission::KeyRead));
}

#[test]
fn grants_expose_principal_and_check_permissions() {
    let grants = Grants::new(
        Some("ana".to_string()),
        vec!["seed:i18n:translation:read,write".to_string()],
    );
    assert_eq!(grants.principal(), Some("ana"));
    assert!(grants.has_permission(Permission::TranslationWrite));
    assert!(!grants.has_permission(Permission::KeyDelete));
    assert_eq!(Permission::KeyDelete.to_string(), "seed:i18n:key:delete");
}
