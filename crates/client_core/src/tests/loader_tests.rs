use super::*;
use crate::{
    headless::HeadlessPage,
    mock_backend::{refused_url, MockBackend},
    view::CHOOSE_FRAMEWORK_PROMPT,
    ClientSettings, HttpEnhancerApi,
};
use axum::http::StatusCode;
use shared::{
    domain::{FrameworkDescriptor, FrameworkId},
    protocol::{EnhanceRequest, EnhanceResponse},
};

#[tokio::test]
async fn populates_selector_in_response_order_and_enables_submit() {
    let backend = MockBackend::new().spawn().await.expect("spawn backend");
    let page = HeadlessPage::default();
    let loader = FrameworkLoader::new(backend.api(), &page.handles());

    let count = loader.load().await.expect("load");

    assert_eq!(count, 2);
    let options = page.framework_select.options();
    assert_eq!(options.len(), 3);
    assert_eq!(options[0].label, CHOOSE_FRAMEWORK_PROMPT);
    assert_eq!(options[0].value, "");
    assert_eq!(options[1].value, "f1");
    assert_eq!(options[1].label, "Framework One - Role, task, format");
    assert_eq!(options[2].value, "f2");
    assert_eq!(options[2].label, "Framework Two - Context first");
    assert!(page.enhance_button.is_enabled());
    assert!(!page.notifier.has_pending());
}

#[tokio::test]
async fn empty_catalog_leaves_only_the_prompt_entry() {
    let backend = MockBackend::new()
        .frameworks(StatusCode::OK, r#"{"frameworks":[]}"#)
        .spawn()
        .await
        .expect("spawn backend");
    let page = HeadlessPage::default();

    let count = FrameworkLoader::new(backend.api(), &page.handles())
        .load()
        .await
        .expect("load");

    assert_eq!(count, 0);
    assert_eq!(page.framework_select.options(), vec![SelectOption::choose_prompt()]);
}

#[tokio::test]
async fn connection_refused_shows_error_placeholder_and_keeps_submit_disabled() {
    let api = Arc::new(HttpEnhancerApi::new(
        ClientSettings::new(&refused_url().await).expect("url"),
    ));
    let page = HeadlessPage::default();

    let result = FrameworkLoader::new(api, &page.handles()).load().await;

    assert!(result.is_err());
    let options = page.framework_select.options();
    assert_eq!(options.len(), 1);
    assert_eq!(options[0].label, LOAD_ERROR_PLACEHOLDER);
    assert_eq!(page.framework_select.selected_value(), LOAD_ERROR_PLACEHOLDER);
    assert!(!page.enhance_button.is_enabled());
    assert!(!page.notifier.has_pending(), "load failures are passive");
}

#[tokio::test]
async fn backend_error_status_shows_error_placeholder() {
    let backend = MockBackend::new()
        .frameworks(StatusCode::SERVICE_UNAVAILABLE, r#"{"detail":"warming up"}"#)
        .spawn()
        .await
        .expect("spawn backend");
    let page = HeadlessPage::default();

    let result = FrameworkLoader::new(backend.api(), &page.handles()).load().await;

    assert!(result.is_err());
    assert_eq!(
        page.framework_select.options(),
        vec![SelectOption::placeholder(LOAD_ERROR_PLACEHOLDER, false)]
    );
    assert!(!page.enhance_button.is_enabled());
}

/// Answers `list_frameworks` only once released.
struct GatedApi {
    release: tokio::sync::Notify,
}

#[async_trait::async_trait]
impl EnhancerApi for GatedApi {
    async fn list_frameworks(&self) -> Result<Vec<FrameworkDescriptor>, ClientError> {
        self.release.notified().await;
        Ok(vec![FrameworkDescriptor {
            id: FrameworkId::new("f1"),
            name: "Framework One".into(),
            description: "Role, task, format".into(),
        }])
    }

    async fn enhance(&self, _request: &EnhanceRequest) -> Result<EnhanceResponse, ClientError> {
        unreachable!("loader never enhances")
    }
}

#[tokio::test]
async fn shows_disabled_loading_placeholder_while_request_is_in_flight() {
    let api = Arc::new(GatedApi {
        release: tokio::sync::Notify::new(),
    });
    let page = HeadlessPage::default();
    let loader = FrameworkLoader::new(api.clone(), &page.handles());

    let load = loader.load();
    futures::pin_mut!(load);
    assert!(futures::poll!(load.as_mut()).is_pending());

    assert_eq!(
        page.framework_select.options(),
        vec![SelectOption::placeholder(LOADING_PLACEHOLDER, true)]
    );
    assert!(!page.enhance_button.is_enabled());

    api.release.notify_one();
    assert_eq!(load.await.expect("load"), 1);
    assert!(page.enhance_button.is_enabled());
    assert_eq!(page.framework_select.selected_value(), "");
}
