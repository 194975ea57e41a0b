//! Integration tests for the page host.
//!
//! Tests the complete flow: admin submission → persistence → fresh
//! startup → render.

use decor_host::{
    FooterDecorator, HostConfig, HostError, LocalFileStore, MemoryStore, PageHost, SettingsStore,
};
use decor_page::{AdminRequest, FormData, PageContext};
use decor_types::DecoratorId;
use serde_json::json;
use tempfile::TempDir;

fn file_host(dir: &TempDir) -> PageHost<LocalFileStore> {
    let store = LocalFileStore::new(dir.path().to_path_buf()).expect("create store");
    let mut host = PageHost::new(store);
    host.register(Box::new(FooterDecorator::ciborg()))
        .expect("register ciborg");
    host.register(Box::new(FooterDecorator::lobot()))
        .expect("register lobot");
    host
}

fn memory_host() -> PageHost<MemoryStore> {
    let mut host = PageHost::new(MemoryStore::new());
    host.register(Box::new(FooterDecorator::ciborg()))
        .expect("register ciborg");
    host.register(Box::new(FooterDecorator::lobot()))
        .expect("register lobot");
    host
}

/// Configuration submitted to one host instance survives a fresh
/// startup over the same storage directory.
#[tokio::test]
async fn configure_then_fresh_startup_round_trips() {
    let temp = TempDir::new().expect("temp dir");

    // First host: submit configuration
    {
        let mut host = file_host(&temp);
        host.startup().await.expect("startup");

        let form = FormData::from_pairs([
            ("footer_html", json!("<p>build ok</p>")),
            ("footer_css", json!("p { color: green }")),
        ]);
        host.submit_configuration("builtin::ciborg", &AdminRequest::new(), &form)
            .await
            .expect("submission accepted");
    }

    // Second host over the same directory: settings come back
    let mut host = file_host(&temp);
    host.startup().await.expect("fresh startup");

    let fragments = host.decorate(&PageContext::new("/jobs/build-all"));
    assert_eq!(fragments.len(), 1);
    assert_eq!(fragments[0].html, "<p>build ok</p>");
    assert_eq!(fragments[0].css.as_deref(), Some("p { color: green }"));
}

/// Startup with no saved state leaves every decorator at defaults.
#[tokio::test]
async fn startup_without_saved_state_uses_defaults() {
    let temp = TempDir::new().expect("temp dir");
    let mut host = file_host(&temp);
    host.startup().await.expect("startup");

    // Default footer is empty: nothing rendered
    assert!(host.decorate(&PageContext::new("/")).is_empty());
}

/// Every accepted submission performs exactly one persisted write,
/// even when the submitted settings equal the stored ones.
#[tokio::test]
async fn accepted_submission_always_writes() {
    let mut host = memory_host();
    host.startup().await.expect("startup");

    let form = FormData::from_pairs([("footer_html", json!("<p>same</p>"))]);
    for _ in 0..3 {
        host.submit_configuration("builtin::ciborg", &AdminRequest::new(), &form)
            .await
            .expect("submission accepted");
    }

    assert_eq!(
        host.store().write_count_for(&DecoratorId::builtin("ciborg")),
        3
    );
}

/// Two decorators of the same type keep fully independent state.
#[tokio::test]
async fn decorator_states_are_independent() {
    let temp = TempDir::new().expect("temp dir");
    let mut host = file_host(&temp);
    host.startup().await.expect("startup");

    let ciborg_form = FormData::from_pairs([("footer_html", json!("<p>ciborg</p>"))]);
    let lobot_form = FormData::from_pairs([("footer_html", json!("<p>lobot</p>"))]);

    host.submit_configuration("builtin::ciborg", &AdminRequest::new(), &ciborg_form)
        .await
        .expect("ciborg accepted");
    host.submit_configuration("builtin::lobot", &AdminRequest::new(), &lobot_form)
        .await
        .expect("lobot accepted");

    // Reconfigure ciborg; lobot must be untouched
    let updated = FormData::from_pairs([("footer_html", json!("<p>ciborg v2</p>"))]);
    host.submit_configuration("builtin::ciborg", &AdminRequest::new(), &updated)
        .await
        .expect("ciborg update accepted");

    let fragments = host.decorate(&PageContext::new("/"));
    assert_eq!(fragments.len(), 2);
    assert_eq!(fragments[0].html, "<p>ciborg v2</p>");
    assert_eq!(fragments[1].html, "<p>lobot</p>");

    // Same holds after a fresh startup
    let mut fresh = file_host(&temp);
    fresh.startup().await.expect("fresh startup");
    let fragments = fresh.decorate(&PageContext::new("/"));
    assert_eq!(fragments[0].html, "<p>ciborg v2</p>");
    assert_eq!(fragments[1].html, "<p>lobot</p>");
}

/// End to end: an admin submits a footer form to ciborg. Ciborg's
/// store updates and its fragment appears; lobot's store is untouched.
#[tokio::test]
async fn footer_submission_updates_only_target_decorator() {
    let mut host = memory_host();
    host.startup().await.expect("startup");

    let form = FormData::from_pairs([("footer_html", json!("<p>hi</p>"))]);
    host.submit_configuration(
        "builtin::ciborg",
        &AdminRequest::new().with_submitted_by("admin"),
        &form,
    )
    .await
    .expect("submission accepted");

    // Ciborg persisted
    let ciborg = DecoratorId::builtin("ciborg");
    let record = host.store().load(&ciborg).await.expect("ciborg record");
    assert_eq!(record.settings.content["footer_html"], "<p>hi</p>");

    // Lobot never written
    let lobot = DecoratorId::builtin("lobot");
    assert_eq!(host.store().write_count_for(&lobot), 0);
    assert!(!host.store().exists(&lobot).await.expect("exists check"));

    // Render shows ciborg's footer only
    let fragments = host.decorate(&PageContext::new("/"));
    assert_eq!(fragments.len(), 1);
    assert_eq!(fragments[0].html, "<p>hi</p>");
}

/// A rejected submission still performs the one eager write of the
/// admin form path, but live state is untouched.
#[tokio::test]
async fn rejected_submission_writes_once_without_applying() {
    let mut host = memory_host();
    host.startup().await.expect("startup");

    // footer_html must be a string
    let bad_form = FormData::from_pairs([("footer_html", json!(123))]);
    let result = host
        .submit_configuration("builtin::ciborg", &AdminRequest::new(), &bad_form)
        .await;

    assert!(matches!(result, Err(HostError::Form(_))));
    assert_eq!(
        host.store().write_count_for(&DecoratorId::builtin("ciborg")),
        1
    );
    assert!(host.decorate(&PageContext::new("/")).is_empty());
}

/// A blob left on disk by a rejected submission does not wedge the
/// next startup: the decorator starts from defaults.
#[tokio::test]
async fn startup_tolerates_rejected_blob_on_disk() {
    let temp = TempDir::new().expect("temp dir");
    {
        let mut host = file_host(&temp);
        host.startup().await.expect("startup");

        let bad_form = FormData::from_pairs([("footer_html", json!(123))]);
        let result = host
            .submit_configuration("builtin::ciborg", &AdminRequest::new(), &bad_form)
            .await;
        assert!(matches!(result, Err(HostError::Form(_))));
    }

    let mut host = file_host(&temp);
    host.startup().await.expect("startup after rejected blob");
    assert!(host.decorate(&PageContext::new("/")).is_empty());
}

/// Submitting to an unregistered decorator fails without touching
/// storage.
#[tokio::test]
async fn unknown_decorator_is_not_found() {
    let mut host = memory_host();

    let form = FormData::from_pairs([("footer_html", json!("<p>hi</p>"))]);
    let result = host
        .submit_configuration("builtin::unknown", &AdminRequest::new(), &form)
        .await;

    assert!(matches!(result, Err(HostError::DecoratorNotFound(_))));
    assert_eq!(host.store().write_count(), 0);
}

/// A host built from configuration registers the configured builtins
/// over the configured settings directory.
#[tokio::test]
async fn host_from_config() {
    let temp = TempDir::new().expect("temp dir");
    let config = HostConfig::from_toml(&format!(
        r#"
[paths]
settings_dir = "{}"

[decorators]
load = ["ciborg", "lobot", "unknown"]
"#,
        temp.path().display()
    ))
    .expect("parse config");

    let mut host = PageHost::from_config(&config).expect("build host");
    host.startup().await.expect("startup");

    // Known builtins registered, unknown name skipped
    assert_eq!(host.len(), 2);
    assert!(host.contains("builtin::ciborg"));
    assert!(host.contains("builtin::lobot"));
}

/// Disabling a footer through its form hides the fragment while
/// keeping the settings persisted.
#[tokio::test]
async fn disabled_footer_is_hidden_but_persisted() {
    let temp = TempDir::new().expect("temp dir");
    let mut host = file_host(&temp);
    host.startup().await.expect("startup");

    let form = FormData::from_pairs([
        ("footer_html", json!("<p>hi</p>")),
        ("enabled", json!(false)),
    ]);
    host.submit_configuration("builtin::ciborg", &AdminRequest::new(), &form)
        .await
        .expect("submission accepted");

    assert!(host.decorate(&PageContext::new("/")).is_empty());

    // Still persisted: re-enabling brings the markup back without
    // resubmitting it
    let record = host
        .store()
        .load(&DecoratorId::builtin("ciborg"))
        .await
        .expect("record persisted");
    assert_eq!(record.settings.content["footer_html"], "<p>hi</p>");
    assert_eq!(record.settings.content["enabled"], false);
}
