#![allow(dead_code)]

use std::collections::{BTreeMap, HashMap, HashSet};
use std::sync::{Arc, Mutex, MutexGuard};

use anyhow::{Context, Result};
use axum::extract::{Multipart, Path, Query, Request, State};
use axum::http::{StatusCode, header};
use axum::middleware::{self, Next};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use i18n_admin::interact::{Grants, RecordingNotifier};
use i18n_admin::model::{
    Key, ListFilter, Locale, NewKey, RemoteConfig, Statistic, Translation, TranslationValue,
};
use i18n_admin::remote::RemoteClient;
use i18n_admin::session::{MemoryStore, SessionState};
use i18n_admin::views::ViewContext;
use tokio::task::JoinHandle;

pub const PREFIX: &str = "/seed-i18n";
pub const TOKEN: &str = "dev";

/// One request as seen by the mock, path relative to [`PREFIX`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Recorded {
    pub method: String,
    pub path: String,
    pub query: String,
    pub authorization: Option<String>,
}

impl Recorded {
    pub fn line(&self) -> String {
        format!("{} {}", self.method, self.path)
    }
}

/// Server-side data of the i18n mock.
#[derive(Debug, Default)]
pub struct MockState {
    pub locales: Vec<Locale>,
    pub active: Vec<Locale>,
    pub default_locale: Option<Locale>,
    pub keys: Vec<Key>,
    /// locale code -> key name -> stored translation
    pub translations: BTreeMap<String, BTreeMap<String, TranslationValue>>,
    pub imports: Vec<(String, String)>,
    pub requests: Vec<Recorded>,
    /// `METHOD /path` entries answered with a 500.
    pub fail: HashSet<String>,
}

type Shared = Arc<Mutex<MockState>>;

fn lock(state: &Shared) -> MutexGuard<'_, MockState> {
    state.lock().expect("mock state lock")
}

pub fn locale(code: &str, name: &str) -> Locale {
    Locale::new(code, name)
}

pub fn key(name: &str, translation: &str) -> Key {
    Key {
        name: name.to_string(),
        translation: translation.to_string(),
        default_locale: Some("en".to_string()),
        missing: translation.is_empty(),
        ..Key::default()
    }
}

pub fn value(locale: &str, translation: &str) -> TranslationValue {
    TranslationValue {
        locale: locale.to_string(),
        translation: translation.to_string(),
        ..TranslationValue::default()
    }
}

/// English and French in use (English by default), German and Spanish
/// known, a few keys with some French done.
pub fn seeded() -> MockState {
    let en = locale("en", "English");
    let fr = locale("fr", "French");
    let mut state = MockState {
        locales: vec![
            en.clone(),
            fr.clone(),
            locale("de", "German"),
            locale("es", "Spanish"),
        ],
        active: vec![en.clone(), fr],
        default_locale: Some(en),
        keys: vec![
            key("app.title", "Admin"),
            key("app.welcome", "Welcome"),
            key("menu.file", "File"),
            key("menu.quit", ""),
        ],
        ..MockState::default()
    };
    let mut fr = BTreeMap::new();
    fr.insert("app.title".to_string(), value("fr", "Administration"));
    fr.insert(
        "app.welcome".to_string(),
        TranslationValue {
            outdated: true,
            ..value("fr", "Bienvenu")
        },
    );
    state.translations.insert("fr".to_string(), fr);
    state
}

pub struct MockServer {
    pub base_url: String,
    state: Shared,
    handle: JoinHandle<()>,
}

impl Drop for MockServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

impl MockServer {
    pub async fn start(state: MockState) -> Result<Self> {
        let state = Arc::new(Mutex::new(state));
        let app = Router::new()
            .nest(PREFIX, api())
            .layer(middleware::from_fn_with_state(state.clone(), record))
            .with_state(state.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .context("bind mock server")?;
        let addr = listener.local_addr().context("read mock server addr")?;
        let handle = tokio::spawn(async move {
            let _ = axum::serve(listener, app).await;
        });

        Ok(Self {
            base_url: format!("http://{}{}", addr, PREFIX),
            state,
            handle,
        })
    }

    pub fn remote_config(&self) -> RemoteConfig {
        RemoteConfig {
            base_url: self.base_url.clone(),
            token: Some(TOKEN.to_string()),
        }
    }

    pub fn client(&self) -> Result<RemoteClient> {
        Ok(RemoteClient::new(&self.remote_config())?)
    }

    /// A view context allowed to do everything.
    pub fn context(&self) -> Result<(ViewContext, Arc<RecordingNotifier>)> {
        self.context_with(&["seed:i18n:*"])
    }

    pub fn context_with(&self, grants: &[&str]) -> Result<(ViewContext, Arc<RecordingNotifier>)> {
        let notifier = Arc::new(RecordingNotifier::new());
        let grants = Grants::new(
            Some("tester".to_string()),
            grants.iter().map(|g| g.to_string()).collect(),
        );
        let ctx = ViewContext::new(self.client()?, notifier.clone(), Arc::new(grants));
        Ok((ctx, notifier))
    }

    pub fn with_state<R>(&self, f: impl FnOnce(&mut MockState) -> R) -> R {
        f(&mut lock(&self.state))
    }

    pub fn requests(&self) -> Vec<Recorded> {
        lock(&self.state).requests.clone()
    }

    /// `METHOD /path` of every request so far.
    pub fn request_lines(&self) -> Vec<String> {
        self.requests().iter().map(Recorded::line).collect()
    }

    pub fn clear_requests(&self) {
        lock(&self.state).requests.clear();
    }

    pub fn fail(&self, method: &str, path: &str) {
        lock(&self.state)
            .fail
            .insert(format!("{} {}", method, path));
    }

    pub fn recover(&self, method: &str, path: &str) {
        lock(&self.state)
            .fail
            .remove(&format!("{} {}", method, path));
    }
}

pub fn session() -> SessionState {
    SessionState::new(Arc::new(MemoryStore::new()))
}

fn api() -> Router<Shared> {
    Router::new()
        .route("/locales", get(list_locales))
        .route("/locales/:code", get(get_locale))
        .route(
            "/available-locales",
            get(list_active).post(add_active).put(replace_active),
        )
        .route(
            "/available-locales/:code",
            get(get_active).delete(delete_active),
        )
        .route("/default-locale", get(get_default).put(put_default))
        .route(
            "/keys",
            get(list_keys).post(create_key).delete(delete_keys),
        )
        .route("/keys/file", get(export_keys).post(import_keys))
        .route(
            "/keys/:name",
            get(get_key).put(update_key).delete(delete_key),
        )
        .route("/translations/:locale", get(list_translations))
        .route(
            "/translations/:locale/:name",
            get(get_translation).put(update_translation),
        )
        .route("/statistic", get(statistics))
}

async fn record(State(state): State<Shared>, req: Request, next: Next) -> Response {
    let method = req.method().to_string();
    let path = req
        .uri()
        .path()
        .strip_prefix(PREFIX)
        .unwrap_or(req.uri().path())
        .to_string();
    let authorization = req
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);

    let failing = {
        let mut st = lock(&state);
        let entry = Recorded {
            method,
            path,
            query: req.uri().query().unwrap_or_default().to_string(),
            authorization,
        };
        let failing = st.fail.contains(&entry.line());
        st.requests.push(entry);
        failing
    };
    if failing {
        return (StatusCode::INTERNAL_SERVER_ERROR, "boom").into_response();
    }
    next.run(req).await
}

fn json_or_no_content<T: serde::Serialize>(items: Vec<T>) -> Response {
    if items.is_empty() {
        return StatusCode::NO_CONTENT.into_response();
    }
    Json(items).into_response()
}

async fn list_locales(State(state): State<Shared>) -> Response {
    json_or_no_content(lock(&state).locales.clone())
}

async fn get_locale(State(state): State<Shared>, Path(code): Path<String>) -> Response {
    match lock(&state).locales.iter().find(|l| l.code == code) {
        Some(l) => Json(l.clone()).into_response(),
        None => StatusCode::NOT_FOUND.into_response(),
    }
}

async fn list_active(State(state): State<Shared>) -> Response {
    json_or_no_content(lock(&state).active.clone())
}

async fn add_active(State(state): State<Shared>, Json(locale): Json<Locale>) -> Response {
    let mut st = lock(&state);
    if st.active.contains(&locale) {
        return (StatusCode::CONFLICT, "locale already in use").into_response();
    }
    st.active.push(locale);
    StatusCode::CREATED.into_response()
}

async fn replace_active(State(state): State<Shared>, Json(locales): Json<Vec<Locale>>) -> Response {
    lock(&state).active = locales;
    StatusCode::NO_CONTENT.into_response()
}

async fn get_active(State(state): State<Shared>, Path(code): Path<String>) -> Response {
    match lock(&state).active.iter().find(|l| l.code == code) {
        Some(l) => Json(l.clone()).into_response(),
        None => StatusCode::NOT_FOUND.into_response(),
    }
}

async fn delete_active(State(state): State<Shared>, Path(code): Path<String>) -> Response {
    let mut st = lock(&state);
    let before = st.active.len();
    st.active.retain(|l| l.code != code);
    if st.active.len() == before {
        return StatusCode::NOT_FOUND.into_response();
    }
    if st.default_locale.as_ref().is_some_and(|d| d.code == code) {
        st.default_locale = None;
    }
    StatusCode::NO_CONTENT.into_response()
}

async fn get_default(State(state): State<Shared>) -> Response {
    match lock(&state).default_locale.clone() {
        Some(l) => Json(l).into_response(),
        None => StatusCode::NO_CONTENT.into_response(),
    }
}

async fn put_default(State(state): State<Shared>, Json(locale): Json<Locale>) -> Response {
    let mut st = lock(&state);
    if !st.active.contains(&locale) {
        return (StatusCode::BAD_REQUEST, "locale is not in use").into_response();
    }
    st.default_locale = Some(locale);
    StatusCode::NO_CONTENT.into_response()
}

fn filter_from(params: &HashMap<String, String>) -> ListFilter {
    let flag = |name: &str| params.get(name).is_some_and(|v| v == "true");
    ListFilter {
        missing: flag("isMissing"),
        outdated: flag("isOutdated"),
        approx: flag("isApprox"),
        search_name: params.get("searchName").cloned().unwrap_or_default(),
    }
}

fn key_matches(key: &Key, filter: &ListFilter) -> bool {
    (!filter.missing || key.missing)
        && (!filter.outdated || key.outdated)
        && key.name.contains(filter.search_name.as_str())
}

/// Paginated view when paging parameters are present, bare array otherwise.
fn paginate<T: serde::Serialize>(items: Vec<T>, params: &HashMap<String, String>) -> Response {
    if items.is_empty() {
        return StatusCode::NO_CONTENT.into_response();
    }
    let (Some(index), Some(size)) = (
        params.get("pageIndex").and_then(|v| v.parse::<usize>().ok()),
        params.get("pageSize").and_then(|v| v.parse::<usize>().ok()),
    ) else {
        return Json(items).into_response();
    };
    let size = size.max(1);
    let total = items.len();
    let view: Vec<T> = items.into_iter().skip(index * size).take(size).collect();
    Json(serde_json::json!({
        "view": view,
        "pageIndex": index,
        "pageSize": size,
        "resultSize": total,
        "pagesCount": total.div_ceil(size),
    }))
    .into_response()
}

async fn list_keys(
    State(state): State<Shared>,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    let filter = filter_from(&params);
    let keys: Vec<Key> = lock(&state)
        .keys
        .iter()
        .filter(|k| key_matches(k, &filter))
        .cloned()
        .collect();
    paginate(keys, &params)
}

async fn create_key(State(state): State<Shared>, Json(new): Json<NewKey>) -> Response {
    if new.name.is_empty() || new.name.contains('!') {
        return (
            StatusCode::BAD_REQUEST,
            Json(serde_json::json!({"message": "key name contains invalid characters"})),
        )
            .into_response();
    }
    let mut st = lock(&state);
    if st.keys.iter().any(|k| k.name == new.name) {
        return (StatusCode::CONFLICT, "key already exists").into_response();
    }
    let created = Key {
        name: new.name,
        comment: new.comment,
        missing: new.translation.is_empty(),
        translation: new.translation,
        default_locale: new.default_locale,
        ..Key::default()
    };
    st.keys.push(created.clone());
    (StatusCode::CREATED, Json(created)).into_response()
}

async fn delete_keys(
    State(state): State<Shared>,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    let filter = filter_from(&params);
    let mut st = lock(&state);
    let before = st.keys.len();
    st.keys.retain(|k| !key_matches(k, &filter));
    let deleted = before - st.keys.len();
    format!("{} deleted keys", deleted).into_response()
}

async fn get_key(State(state): State<Shared>, Path(name): Path<String>) -> Response {
    match lock(&state).keys.iter().find(|k| k.name == name) {
        Some(k) => Json(k.clone()).into_response(),
        None => StatusCode::NOT_FOUND.into_response(),
    }
}

async fn update_key(
    State(state): State<Shared>,
    Path(name): Path<String>,
    Json(key): Json<Key>,
) -> Response {
    let mut st = lock(&state);
    match st.keys.iter_mut().find(|k| k.name == name) {
        Some(slot) => {
            *slot = key;
            StatusCode::NO_CONTENT.into_response()
        }
        None => StatusCode::NOT_FOUND.into_response(),
    }
}

async fn delete_key(State(state): State<Shared>, Path(name): Path<String>) -> Response {
    let mut st = lock(&state);
    let before = st.keys.len();
    st.keys.retain(|k| k.name != name);
    if st.keys.len() == before {
        return StatusCode::NOT_FOUND.into_response();
    }
    for values in st.translations.values_mut() {
        values.remove(&name);
    }
    StatusCode::NO_CONTENT.into_response()
}

async fn export_keys(State(state): State<Shared>) -> Response {
    let st = lock(&state);
    let mut csv = String::from("key,translation\n");
    for k in &st.keys {
        csv.push_str(&format!("{},{}\n", k.name, k.translation));
    }
    ([(header::CONTENT_TYPE, "text/csv")], csv).into_response()
}

/// Each CSV line after the header is `name,translation`.
async fn import_keys(State(state): State<Shared>, mut multipart: Multipart) -> Response {
    let mut files = Vec::new();
    loop {
        let field = match multipart.next_field().await {
            Ok(Some(field)) => field,
            Ok(None) => break,
            Err(err) => return (StatusCode::BAD_REQUEST, err.to_string()).into_response(),
        };
        let name = field.file_name().unwrap_or_default().to_string();
        if !name.ends_with(".csv") {
            return (StatusCode::BAD_REQUEST, "only csv files are accepted").into_response();
        }
        match field.text().await {
            Ok(text) => files.push((name, text)),
            Err(err) => return (StatusCode::BAD_REQUEST, err.to_string()).into_response(),
        }
    }

    let mut st = lock(&state);
    let mut imported = 0;
    for (_, text) in &files {
        for line in text.lines().skip(1).filter(|l| !l.trim().is_empty()) {
            let (name, translation) = line.split_once(',').unwrap_or((line, ""));
            let imported_key = key(name.trim(), translation.trim());
            match st.keys.iter_mut().find(|k| k.name == imported_key.name) {
                Some(slot) => *slot = imported_key,
                None => st.keys.push(imported_key),
            }
            imported += 1;
        }
    }
    st.imports.extend(files);
    format!("{} imported keys", imported).into_response()
}

fn translation_of(st: &MockState, locale: &str, key: &Key) -> Translation {
    let source_locale = st
        .default_locale
        .as_ref()
        .map(|l| l.code.clone())
        .unwrap_or_default();
    let target = st
        .translations
        .get(locale)
        .and_then(|values| values.get(&key.name))
        .cloned()
        .unwrap_or_else(|| value(locale, ""));
    Translation {
        name: key.name.clone(),
        comment: key.comment.clone(),
        source: value(&source_locale, &key.translation),
        missing: target.translation.is_empty(),
        target,
    }
}

async fn list_translations(
    State(state): State<Shared>,
    Path(locale): Path<String>,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    let filter = filter_from(&params);
    let st = lock(&state);
    let items: Vec<Translation> = st
        .keys
        .iter()
        .filter(|k| k.name.contains(filter.search_name.as_str()))
        .map(|k| translation_of(&st, &locale, k))
        .filter(|t| {
            (!filter.missing || t.missing)
                && (!filter.outdated || t.target.outdated)
                && (!filter.approx || t.target.approx)
        })
        .collect();
    paginate(items, &params)
}

async fn get_translation(
    State(state): State<Shared>,
    Path((locale, name)): Path<(String, String)>,
) -> Response {
    let st = lock(&state);
    match st.keys.iter().find(|k| k.name == name) {
        Some(k) => Json(translation_of(&st, &locale, k)).into_response(),
        None => StatusCode::NOT_FOUND.into_response(),
    }
}

async fn update_translation(
    State(state): State<Shared>,
    Path((locale, name)): Path<(String, String)>,
    Json(translation): Json<Translation>,
) -> Response {
    let mut st = lock(&state);
    if !st.keys.iter().any(|k| k.name == name) {
        return StatusCode::NOT_FOUND.into_response();
    }
    let mut target = translation.target;
    target.locale = locale.clone();
    st.translations
        .entry(locale)
        .or_default()
        .insert(name, target);
    StatusCode::NO_CONTENT.into_response()
}

async fn statistics(
    State(state): State<Shared>,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    let select = params.get("selectLang").cloned().unwrap_or_default();
    let st = lock(&state);
    let total = st.keys.len() as u64;
    let default_code = st.default_locale.as_ref().map(|l| l.code.as_str());
    let rows: Vec<Statistic> = st
        .active
        .iter()
        .filter(|l| select.is_empty() || l.code == select)
        .map(|l| {
            let translated = if Some(l.code.as_str()) == default_code {
                st.keys.iter().filter(|k| !k.translation.is_empty()).count() as u64
            } else {
                st.translations
                    .get(&l.code)
                    .map(|values| values.values().filter(|v| !v.translation.is_empty()).count())
                    .unwrap_or(0) as u64
            };
            Statistic {
                locale: l.code.clone(),
                translated,
                totranslate: total.saturating_sub(translated),
                keytotal: total,
                english_language: l.english_language.clone(),
            }
        })
        .collect();
    json_or_no_content(rows)
}
