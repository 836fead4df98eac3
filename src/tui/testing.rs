// Test fixtures for key handling and render tests
//
// The page is backed by a demo API that never answers within a test, so the
// test decides what each request returns through `apply_current`.

use super::app::App;
use super::theme::Theme;
use crate::animals::{Animal, AnimalFilter, SharedAnimals};
use crate::api::{ApiResponse, DemoApi, FetchError};
use crate::diagnostics::TracingSink;
use crate::listing::{AvailableAnimalsPage, FetchOutcome, PageDeps};
use crate::logging::LogBuffer;
use crate::session::StaticToken;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;

/// Mounted page with its first request still in flight
pub(crate) fn loading_app(filter: Option<AnimalFilter>) -> App {
    let (tx, _rx) = mpsc::unbounded_channel();
    let deps = PageDeps {
        api: Arc::new(DemoApi::with_animals(Vec::new(), Duration::from_secs(3600))),
        tokens: Arc::new(StaticToken(String::new())),
        sink: Arc::new(TracingSink),
        animals: SharedAnimals::default(),
    };

    let mut page = AvailableAnimalsPage::new(deps, tx);
    page.mount();
    if let Some(filter) = filter {
        page.handle_filter_available_animals(filter);
    }
    App::new(page, LogBuffer::new(), Theme::dark())
}

/// Page whose latest request returned `animals`
pub(crate) fn loaded_app(animals: Vec<Animal>, filter: Option<AnimalFilter>) -> App {
    let mut app = loading_app(filter);
    apply_current(&mut app, Ok(ApiResponse::ok(animals)));
    app
}

/// Complete the request currently in flight
pub(crate) fn apply_current(app: &mut App, result: Result<ApiResponse, FetchError>) {
    let generation = app.page.generation();
    assert!(app.page.apply_outcome(FetchOutcome { generation, result }));
}
