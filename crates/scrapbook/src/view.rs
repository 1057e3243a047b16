//! Page handlers and the views they produce
//!
//! A route resolves to a [`PageHandler`]. The handler builds a [`View`],
//! which the shell renders into the content root. Interactive views also
//! take [`ViewInput`] and re-render when the debounced refresh arrives.

use std::sync::Arc;

use async_trait::async_trait;
use maud::Markup;
use scrapbook_router::Params;

use crate::config::Config;
use crate::data::JournalData;
use crate::decor::Decor;
use crate::error::PageError;

/// User input routed to the current view
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewInput {
    /// Raw search box contents
    Search(String),
    ToggleTag(String),
    ToggleOption { category: String, option: String },
    /// Opens a category panel, or closes it when already open
    OpenCategory(String),
    /// Clears search and every selection
    Clear,
    /// Opens the lightbox at an image of the current view
    OpenImage(usize),
    NextImage,
    PrevImage,
    CloseLightbox,
}

/// How the shell should follow up on an input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputOutcome {
    /// The view does not handle this input
    Ignored,
    /// Re-render now
    Render,
    /// Re-render the controls now and refresh results after the debounce
    Debounce,
}

/// A page that can render itself and react to input
pub trait View: Send {
    fn render(&mut self) -> Markup;

    fn handle_input(&mut self, _input: ViewInput) -> InputOutcome {
        InputOutcome::Ignored
    }

    /// Brings debounced results up to date with the latest input
    fn refresh(&mut self) {}
}

/// Pre-rendered page with no interaction
pub struct StaticView(Markup);

impl StaticView {
    pub fn new(markup: Markup) -> Self {
        Self(markup)
    }

    pub fn boxed(markup: Markup) -> Box<dyn View> {
        Box::new(Self(markup))
    }
}

impl View for StaticView {
    fn render(&mut self) -> Markup {
        self.0.clone()
    }
}

/// Everything a handler needs to build its view
pub struct PageRequest {
    /// Resolved path including any query suffix
    pub path: String,
    pub params: Params,
    pub query: Option<String>,
    pub data: Arc<JournalData>,
    pub config: Arc<Config>,
    /// Decorations for this view only
    pub decor: Decor,
}

impl PageRequest {
    /// Required route parameter
    pub fn param(&self, name: &'static str) -> Result<&str, PageError> {
        self.params.get(name).ok_or(PageError::MissingParam(name))
    }

    /// Query value by key, percent-decoded
    pub fn query_value(&self, key: &str) -> Option<String> {
        self.query
            .as_deref()
            .and_then(|query| scrapbook_router::query_value(query, key))
    }
}

/// Builds the view for a resolved route
#[async_trait]
pub trait PageHandler: Send + Sync {
    async fn handle(&self, request: PageRequest) -> Result<Box<dyn View>, PageError>;
}

/// Adapts a plain function into a [`PageHandler`]
pub struct FnHandler<F>(F);

#[async_trait]
impl<F> PageHandler for FnHandler<F>
where
    F: Fn(PageRequest) -> Result<Box<dyn View>, PageError> + Send + Sync,
{
    async fn handle(&self, request: PageRequest) -> Result<Box<dyn View>, PageError> {
        (self.0)(request)
    }
}

/// Wraps a synchronous page function as a shareable handler
pub fn page_fn<F>(f: F) -> Arc<dyn PageHandler>
where
    F: Fn(PageRequest) -> Result<Box<dyn View>, PageError> + Send + Sync + 'static,
{
    Arc::new(FnHandler(f))
}

#[cfg(test)]
mod tests {
    use super::*;
    use maud::html;

    fn request(params: Params, query: Option<&str>) -> PageRequest {
        PageRequest {
            path: "/".to_string(),
            params,
            query: query.map(str::to_string),
            data: Arc::new(JournalData::default()),
            config: Arc::new(Config::default()),
            decor: Decor::new(Some(0)),
        }
    }

    #[test]
    fn test_missing_param() {
        let req = request(Params::new(), None);
        assert!(matches!(req.param("id"), Err(PageError::MissingParam("id"))));
    }

    #[test]
    fn test_query_value() {
        let req = request(Params::new(), Some("tag=field%20notes"));
        assert_eq!(req.query_value("tag").as_deref(), Some("field notes"));
        assert_eq!(req.query_value("page"), None);
    }

    #[tokio::test]
    async fn test_page_fn_handler() {
        let handler = page_fn(|_| Ok(StaticView::boxed(html! { p { "hi" } })));
        let mut view = handler.handle(request(Params::new(), None)).await.unwrap();
        assert_eq!(view.render().into_string(), "<p>hi</p>");
        assert_eq!(view.handle_input(ViewInput::Clear), InputOutcome::Ignored);
    }
}
