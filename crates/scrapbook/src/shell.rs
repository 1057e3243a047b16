//! The application shell: location, document and the event loop
//!
//! Every change reaches the shell as a [`ShellEvent`] on one unbounded queue
//! and is handled in arrival order. Navigating while a route is rendering
//! only enqueues another `HashChange`; nothing re-enters the pipeline.
//!
//! Render pipeline for a hash change:
//! 1. resolve the path (unresolvable paths redirect to `#/`)
//! 2. mark the top-level section in the navbar
//! 3. await the page handler
//! 4. replace the content root and scroll to the top
//!
//! A failing handler is logged and the previous view stays in place.

use std::collections::BTreeSet;
use std::sync::Arc;

use maud::{html, Markup};
use scrapbook_filter::Debouncer;
use scrapbook_router::{hash_to_path, section_of, split_query, Router};
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tracing::{debug, error, info, warn};

use crate::components::NavMenu;
use crate::config::Config;
use crate::data::JournalData;
use crate::decor::Decor;
use crate::error::ShellError;
use crate::layout;
use crate::pages::{boot_failure, register_routes};
use crate::preferences::{LayoutPreference, SCRAPBOOK_CLASS};
use crate::storage::PreferenceStore;
use crate::view::{InputOutcome, PageHandler, PageRequest, View, ViewInput};

/// Hash the shell starts on and redirects to
pub const ROOT_HASH: &str = "#/";

/// Something the shell has to react to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellEvent {
    /// The location hash changed
    HashChange,
    /// User input for the current view
    Input(ViewInput),
    /// The filter debounce expired
    Refresh,
    ToggleLayout,
    ToggleMenu,
}

/// Normalizes `journal`, `/journal` and `#/journal` to `#/journal`
pub fn normalize_hash(hash: &str) -> String {
    let path = hash_to_path(hash);
    if path.starts_with('/') {
        format!("#{path}")
    } else {
        format!("#/{path}")
    }
}

/// The current location hash
#[derive(Debug)]
pub struct Location {
    hash: String,
    events: UnboundedSender<ShellEvent>,
}

impl Location {
    fn new(events: UnboundedSender<ShellEvent>) -> Self {
        Self {
            hash: ROOT_HASH.to_string(),
            events,
        }
    }

    pub fn hash(&self) -> &str {
        &self.hash
    }

    /// Path part of the hash, query included
    pub fn path(&self) -> &str {
        hash_to_path(&self.hash)
    }

    /// Moves to `hash`; a `HashChange` is queued only when it differs
    pub fn set_hash(&mut self, hash: &str) -> bool {
        let hash = normalize_hash(hash);
        if hash == self.hash {
            return false;
        }
        self.hash = hash;
        let _ = self.events.send(ShellEvent::HashChange);
        true
    }
}

/// The rendered document: content root, scroll position and body classes
#[derive(Debug, Clone)]
pub struct Document {
    content: Markup,
    scroll_top: u32,
    body_classes: BTreeSet<String>,
}

impl Default for Document {
    fn default() -> Self {
        Self {
            content: html! {},
            scroll_top: 0,
            body_classes: BTreeSet::new(),
        }
    }
}

impl Document {
    pub fn content(&self) -> &Markup {
        &self.content
    }

    /// Swaps the whole content root for `markup`
    pub fn replace_content(&mut self, markup: Markup) {
        self.content = markup;
    }

    pub fn scroll_top(&self) -> u32 {
        self.scroll_top
    }

    pub fn scroll_to(&mut self, top: u32) {
        self.scroll_top = top;
    }

    pub fn set_body_class(&mut self, class: &str, on: bool) {
        if on {
            self.body_classes.insert(class.to_string());
        } else {
            self.body_classes.remove(class);
        }
    }

    pub fn has_body_class(&self, class: &str) -> bool {
        self.body_classes.contains(class)
    }

    pub fn body_class(&self) -> String {
        self.body_classes
            .iter()
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Full page with the navbar around the content root
    pub fn to_html(&self, title: &str, navbar: Markup) -> String {
        layout::page(title, &self.body_class(), navbar, self.content.clone()).into_string()
    }
}

type Handler = Arc<dyn PageHandler>;

/// Routes hash changes to pages and input to the current view
pub struct Shell {
    router: Router<Handler>,
    data: Arc<JournalData>,
    config: Arc<Config>,
    store: Arc<dyn PreferenceStore>,
    location: Location,
    document: Document,
    nav: NavMenu,
    layout: LayoutPreference,
    view: Option<Box<dyn View>>,
    sender: UnboundedSender<ShellEvent>,
    events: UnboundedReceiver<ShellEvent>,
    refresh: Debouncer<()>,
    decor: Decor,
    boot_failed: bool,
    started: bool,
}

impl Shell {
    /// Creates a shell over already loaded data with every page registered
    pub fn new(
        data: Arc<JournalData>,
        config: Arc<Config>,
        store: Arc<dyn PreferenceStore>,
    ) -> Result<Self, ShellError> {
        let mut router = Router::new();
        register_routes(&mut router)?;

        let (sender, events) = mpsc::unbounded_channel();
        let refresh_sender = sender.clone();
        let refresh = Debouncer::new(config.filter.debounce(), move |_: ()| {
            let _ = refresh_sender.send(ShellEvent::Refresh);
        });

        Ok(Self {
            router,
            data,
            decor: Decor::new(config.decor.seed),
            config,
            store,
            location: Location::new(sender.clone()),
            document: Document::default(),
            nav: NavMenu::new(),
            layout: LayoutPreference::default(),
            view: None,
            sender,
            events,
            refresh,
            boot_failed: false,
            started: false,
        })
    }

    /// Loads the journal data named by `config` and creates the shell
    ///
    /// A missing data directory does not fail the boot: the shell comes up
    /// showing the boot failure message on every route.
    pub async fn boot(config: Config, store: Arc<dyn PreferenceStore>) -> Result<Self, ShellError> {
        match JournalData::load(&config.data.dir).await {
            Ok(data) => Self::new(Arc::new(data), Arc::new(config), store),
            Err(err) => {
                error!(error = %err, "Failed to load journal data");
                let mut shell = Self::new(Arc::new(JournalData::default()), Arc::new(config), store)?;
                shell.boot_failed = true;
                Ok(shell)
            }
        }
    }

    /// Loads the layout preference and renders the current location
    pub async fn start(&mut self) -> Result<(), ShellError> {
        if self.started {
            return Err(ShellError::AlreadyStarted);
        }
        self.started = true;

        self.layout = LayoutPreference::load(self.store.as_ref()).await;
        self.document
            .set_body_class(SCRAPBOOK_CLASS, self.layout.is_scrapbook());

        info!(hash = %self.location.hash(), routes = self.router.len(), "Shell started");
        self.route().await;
        self.process_pending().await;
        Ok(())
    }

    /// Queues a move to `hash`
    pub fn navigate(&mut self, hash: &str) -> bool {
        self.location.set_hash(hash)
    }

    /// Queues an event
    pub fn dispatch(&self, event: ShellEvent) {
        let _ = self.sender.send(event);
    }

    /// Sender for events produced outside the shell
    pub fn sender(&self) -> UnboundedSender<ShellEvent> {
        self.sender.clone()
    }

    /// Handles every queued event, returning how many there were
    pub async fn process_pending(&mut self) -> usize {
        let mut handled = 0;
        while let Ok(event) = self.events.try_recv() {
            self.handle_event(event).await;
            handled += 1;
        }
        handled
    }

    /// Handles queued events until no debounce is pending
    pub async fn settle(&mut self) {
        loop {
            let handled = self.process_pending().await;
            if handled == 0 && !self.refresh.is_pending() {
                break;
            }
            if self.refresh.is_pending() {
                tokio::time::sleep(self.refresh.delay()).await;
            }
        }
    }

    async fn handle_event(&mut self, event: ShellEvent) {
        match event {
            ShellEvent::HashChange => self.route().await,
            ShellEvent::Input(input) => self.input(input),
            ShellEvent::Refresh => {
                if let Some(view) = self.view.as_mut() {
                    view.refresh();
                    self.render_view();
                }
            }
            ShellEvent::ToggleLayout => {
                let on = self.layout.toggle();
                self.document.set_body_class(SCRAPBOOK_CLASS, on);
                if let Err(err) = self.layout.save(self.store.as_ref()).await {
                    warn!(store = self.store.name(), error = %err, "Failed to save layout preference");
                }
            }
            ShellEvent::ToggleMenu => {
                self.nav.toggle();
            }
        }
    }

    fn input(&mut self, input: ViewInput) {
        let Some(view) = self.view.as_mut() else {
            debug!(?input, "Input before any view was rendered");
            return;
        };

        match view.handle_input(input) {
            InputOutcome::Ignored => {}
            InputOutcome::Render => self.render_view(),
            InputOutcome::Debounce => {
                self.render_view();
                self.refresh.trigger(());
            }
        }
    }

    fn render_view(&mut self) {
        if let Some(view) = self.view.as_mut() {
            self.document.replace_content(view.render());
        }
    }

    async fn route(&mut self) {
        if self.boot_failed {
            self.document.replace_content(boot_failure());
            return;
        }

        let hash = self.location.hash().to_string();
        let path = hash_to_path(&hash);

        let Some(route_match) = self.router.resolve(path) else {
            warn!(path, "No route matched, redirecting to root");
            self.location.set_hash(ROOT_HASH);
            return;
        };
        let handler = Arc::clone(route_match.handler);
        let params = route_match.params;

        self.nav.set_active(section_of(path));
        self.nav.close();

        let (_, query) = split_query(path);
        let request = PageRequest {
            path: path.to_string(),
            params,
            query: query.map(str::to_string),
            data: Arc::clone(&self.data),
            config: Arc::clone(&self.config),
            decor: self.decor.fork(),
        };

        match handler.handle(request).await {
            Ok(mut view) => {
                self.document.replace_content(view.render());
                self.document.scroll_to(0);
                self.view = Some(view);
                debug!(path, "Route rendered");
            }
            Err(err) => {
                error!(path, error = %err, "Page failed to render, keeping previous view");
            }
        }
    }

    // ------------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------------

    /// Route table, for registering extra pages before `start`
    pub fn router_mut(&mut self) -> &mut Router<Handler> {
        &mut self.router
    }

    /// Registered patterns in registration order
    pub fn routes(&self) -> Vec<&str> {
        self.router.patterns().collect()
    }

    pub fn location(&self) -> &Location {
        &self.location
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    /// Scroll position the browser would be asked to restore
    pub fn scroll_to(&mut self, top: u32) {
        self.document.scroll_to(top);
    }

    pub fn nav(&self) -> &NavMenu {
        &self.nav
    }

    pub fn layout(&self) -> LayoutPreference {
        self.layout
    }

    pub fn data(&self) -> &JournalData {
        &self.data
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn is_started(&self) -> bool {
        self.started
    }

    /// Content root as HTML
    pub fn content_html(&self) -> String {
        self.document.content().clone().into_string()
    }

    /// Full page: navbar plus content root
    pub fn page_html(&self) -> String {
        let navbar = self.nav.render(&self.config.site.title, &self.layout);
        self.document.to_html(&self.config.site.title, navbar)
    }
}
