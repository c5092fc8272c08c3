use super::*;
use crate::interact::StaticConfirm;
use crate::model::TranslationValue;

fn key(name: &str, translation: &str, outdated: bool) -> Key {
    Key {
        name: name.to_string(),
        translation: translation.to_string(),
        outdated,
        ..Key::default()
    }
}

fn translation(name: &str, source: &str, target: &str, outdated: bool) -> Translation {
    Translation {
        name: name.to_string(),
        source: TranslationValue {
            locale: "en".to_string(),
            translation: source.to_string(),
            ..TranslationValue::default()
        },
        target: TranslationValue {
            locale: "fr".to_string(),
            translation: target.to_string(),
            outdated,
            ..TranslationValue::default()
        },
        missing: target.is_empty(),
        ..Translation::default()
    }
}

#[test]
fn set_current_takes_server_fields() {
    let mut current = CurrentItem::new();
    let listed = key("greeting", "", false);
    let mut fetched = key("greeting", "Hello", false);
    fetched.comment = "home page".to_string();

    let item = current.set_current(listed, fetched);
    assert_eq!(item.translation, "Hello");
    assert_eq!(item.comment, "home page");
    assert_eq!(current.state(), Some(ItemState::Fresh));
}

#[test]
fn key_edit_marks_outdated_and_round_trip_clears_it() {
    let mut current = CurrentItem::new();
    current.set_current(key("greeting", "Hello", false), key("greeting", "Hello", false));

    assert_eq!(current.set_translation("Hello!"), Some(ItemState::Outdated));
    assert!(current.is_modified());

    assert_eq!(current.set_translation("Hello"), Some(ItemState::Fresh));
    assert!(!current.item().unwrap().outdated);
    assert!(!current.is_modified());
}

#[test]
fn key_round_trip_keeps_server_reported_outdated() {
    let mut current = CurrentItem::new();
    current.set_current(key("greeting", "Hello", true), key("greeting", "Hello", true));
    assert_eq!(current.state(), Some(ItemState::Outdated));

    current.set_translation("Hi");
    current.set_translation("Hello");
    assert!(current.item().unwrap().outdated);
}

#[test]
fn missing_follows_the_text_immediately() {
    let mut current = CurrentItem::new();
    current.set_current(key("greeting", "Hello", false), key("greeting", "Hello", false));

    assert_eq!(current.set_translation(""), Some(ItemState::Missing));
    assert!(current.item().unwrap().missing);
    current.set_translation("H");
    assert!(!current.item().unwrap().missing);

    let mut current = CurrentItem::new();
    current.set_current(
        translation("greeting", "Hello", "Bonjour", false),
        translation("greeting", "Hello", "Bonjour", false),
    );
    current.set_translation("");
    assert!(current.item().unwrap().missing);
}

#[test]
fn comment_edit_does_not_mark_key_outdated() {
    let mut current = CurrentItem::new();
    current.set_current(key("greeting", "Hello", false), key("greeting", "Hello", false));
    assert_eq!(current.set_comment("shown on login"), Some(ItemState::Fresh));
    assert_eq!(current.item().unwrap().comment, "shown on login");
}

// Keys and translations reconcile differently: a key edit raises the flag,
// a translation edit lowers it, and only the server flag brings it back.
#[test]
fn key_and_translation_rules_diverge_on_edit() {
    let mut keys = CurrentItem::new();
    keys.set_current(key("greeting", "Hello", false), key("greeting", "Hello", false));
    keys.set_translation("Hello there");
    assert!(keys.item().unwrap().outdated);

    let mut translations = CurrentItem::new();
    translations.set_current(
        translation("greeting", "Hello", "Bonjour", true),
        translation("greeting", "Hello", "Bonjour", true),
    );
    assert_eq!(translations.state(), Some(ItemState::Outdated));

    translations.set_translation("Salut");
    assert!(!translations.item().unwrap().target.outdated);
    assert_eq!(translations.state(), Some(ItemState::Fresh));

    translations.set_translation("Bonjour");
    assert!(translations.item().unwrap().target.outdated);
}

#[test]
fn translation_round_trip_without_server_flag_is_fresh() {
    let mut current = CurrentItem::new();
    current.set_current(
        translation("greeting", "Hello", "Bonjour", false),
        translation("greeting", "Hello", "Bonjour", false),
    );
    current.set_translation("Salut");
    current.set_translation("Bonjour");
    assert_eq!(current.state(), Some(ItemState::Fresh));
}

#[test]
fn translation_fetch_refreshes_source_and_target() {
    let mut current = CurrentItem::new();
    let item = current.set_current(
        translation("greeting", "", "", false),
        translation("greeting", "Hello", "Bonjour", false),
    );
    assert_eq!(item.source.translation, "Hello");
    assert_eq!(item.target.translation, "Bonjour");
    assert!(!item.missing);
}

#[test]
fn clear_requires_confirmation() {
    let mut current = CurrentItem::new();
    let mut fetched = key("greeting", "Hello", false);
    fetched.comment = "c".to_string();
    current.set_current(key("greeting", "", false), fetched);

    assert!(!current.clear(&StaticConfirm(false)));
    assert_eq!(current.item().unwrap().translation, "Hello");

    assert!(current.clear(&StaticConfirm(true)));
    let item = current.item().unwrap();
    assert!(item.translation.is_empty() && item.comment.is_empty());
    assert_eq!(current.state(), Some(ItemState::Missing));
}

#[test]
fn translation_reset_keeps_comment() {
    let mut current = CurrentItem::new();
    let mut fetched = translation("greeting", "Hello", "Bonjour", false);
    fetched.comment = "c".to_string();
    current.set_current(translation("greeting", "", "", false), fetched);

    assert!(current.clear(&StaticConfirm(true)));
    let item = current.item().unwrap();
    assert!(item.target.translation.is_empty());
    assert_eq!(item.comment, "c");
}

#[test]
fn nothing_selected() {
    let mut current = CurrentItem::<Key>::new();
    assert_eq!(current.set_translation("x"), None);
    assert!(!current.clear(&StaticConfirm(true)));
    assert!(current.state().is_none());
    assert!(current.unset().is_none());
}
