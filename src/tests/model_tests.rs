use super::*;

#[test]
fn new_key_names_are_lowercased_without_whitespace() {
    assert_eq!(normalize_key_name("Hello World"), "helloworld");
    assert_eq!(normalize_key_name("  App.Title\tMain \n"), "app.titlemain");
    assert_eq!(NewKey::new("Hello World").name, "helloworld");
}

#[test]
fn key_decodes_null_text_fields_as_empty() {
    let key: Key = serde_json::from_value(serde_json::json!({
        "name": "greeting",
        "comment": null,
        "translation": null,
        "missing": true
    }))
    .expect("parse key");
    assert_eq!(key.comment, "");
    assert_eq!(key.translation, "");
    assert!(key.missing);
    assert!(!key.outdated);
}

#[test]
fn translation_decodes_missing_target_as_default() {
    let t: Translation = serde_json::from_value(serde_json::json!({
        "name": "greeting",
        "source": {"locale": "en", "translation": "Hello"},
        "target": null
    }))
    .expect("parse translation");
    assert_eq!(t.source.translation, "Hello");
    assert_eq!(t.target, TranslationValue::default());
}

#[test]
fn locale_uses_camel_case_on_the_wire() {
    let l = Locale::new("fr", "French");
    let v = serde_json::to_value(&l).expect("serialize locale");
    assert_eq!(v["englishLanguage"], "French");
    assert_eq!(v["code"], "fr");
}

#[test]
fn locales_compare_by_code() {
    let a = Locale::new("fr", "French");
    let mut b = Locale::new("fr", "");
    b.language = "français".to_string();
    assert_eq!(a, b);
    assert_ne!(a, Locale::new("en", "French"));
}

#[test]
fn difference_keeps_order_and_drops_shared_locales() {
    let all = vec![
        Locale::new("en", "English"),
        Locale::new("fr", "French"),
        Locale::new("de", "German"),
    ];
    let active = vec![Locale::new("fr", "French")];
    let rest = difference(&all, &active);
    let codes: Vec<&str> = rest.iter().map(|l| l.code.as_str()).collect();
    assert_eq!(codes, vec!["en", "de"]);
}

#[test]
fn filter_only_sends_set_predicates() {
    let f = ListFilter::default();
    assert!(f.to_query_pairs().is_empty());
    assert!(f.is_unfiltered());

    let f = ListFilter {
        missing: true,
        outdated: false,
        approx: true,
        search_name: "  menu ".to_string(),
    };
    assert_eq!(
        f.to_query_pairs(),
        vec![
            ("isMissing", "true".to_string()),
            ("isApprox", "true".to_string()),
            ("searchName", "menu".to_string()),
        ]
    );
}

#[test]
fn query_leads_with_pagination_params() {
    let q = ListQuery {
        page_index: 2,
        page_size: 25,
        filter: ListFilter {
            outdated: true,
            ..ListFilter::default()
        },
    };
    assert_eq!(
        q.to_query_pairs(),
        vec![
            ("pageIndex", "2".to_string()),
            ("pageSize", "25".to_string()),
            ("isOutdated", "true".to_string()),
        ]
    );
}

#[test]
fn page_count_rounds_up() {
    let mut p: Page<Key> = Page::empty(0, 10);
    assert_eq!(p.num_pages(), 0);
    p.total_count = 21;
    assert_eq!(p.num_pages(), 3);
    p.page_size = 0;
    assert_eq!(p.num_pages(), 0);
}
