use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use tokio::sync::watch;
use tracing::{debug, error};

use crate::adapter::http::schema::project::ProjectResponse;
use crate::application::dto::project::ProjectFilter;
use crate::presentation::source::ProjectSource;

/// What the projects section renders.
#[derive(Debug, Clone, Default)]
pub struct BrowserState {
    pub projects: Vec<ProjectResponse>,
    pub selected_skill: Option<String>,
    pub search_text: String,
    pub loading: bool,
}

/// Drives the skill badges and the search box of the projects section.
///
/// Requests are neither cancelled nor sequenced: when several overlap, the
/// response that arrives last is the one displayed. A failed request leaves
/// the previous list on screen.
pub struct ProjectBrowser {
    source: Arc<dyn ProjectSource>,
    state: watch::Sender<BrowserState>,
    in_flight: AtomicUsize,
}

impl ProjectBrowser {
    pub fn new(source: Arc<dyn ProjectSource>) -> Self {
        let (state, _) = watch::channel(BrowserState::default());
        Self {
            source,
            state,
            in_flight: AtomicUsize::new(0),
        }
    }

    pub fn subscribe(&self) -> watch::Receiver<BrowserState> {
        self.state.subscribe()
    }

    pub fn state(&self) -> BrowserState {
        self.state.borrow().clone()
    }

    /// Loads the unfiltered list, as on first render.
    pub async fn load_all(&self) {
        self.fetch(ProjectFilter::All).await;
    }

    /// Clicking the active badge again, or an empty name, clears the filter.
    pub async fn select_skill(&self, name: &str) {
        let toggled_off = name.is_empty() || self.state.borrow().selected_skill.as_deref() == Some(name);
        if toggled_off {
            self.clear_skill().await;
            return;
        }

        self.state.send_modify(|s| {
            s.selected_skill = Some(name.to_string());
            s.search_text.clear();
        });
        self.fetch(ProjectFilter::SkillName(name.to_string())).await;
    }

    pub async fn clear_skill(&self) {
        self.state.send_modify(|s| s.selected_skill = None);
        self.fetch(ProjectFilter::All).await;
    }

    /// Only an emptied box triggers a request; other edits wait for `submit_search`.
    pub async fn set_search_text(&self, text: &str) {
        self.state.send_modify(|s| {
            s.search_text = text.to_string();
            if text.is_empty() {
                s.selected_skill = None;
            }
        });
        if text.is_empty() {
            self.fetch(ProjectFilter::All).await;
        }
    }

    pub async fn submit_search(&self) {
        let mut text = String::new();
        self.state.send_modify(|s| {
            s.selected_skill = None;
            text = s.search_text.clone();
        });
        self.fetch(ProjectFilter::SearchText(text)).await;
    }

    async fn fetch(&self, filter: ProjectFilter) {
        debug!(?filter, "Loading projects");
        self.state.send_modify(|s| {
            self.in_flight.fetch_add(1, Ordering::SeqCst);
            s.loading = true;
        });

        let result = self.source.list_projects(filter).await;

        self.state.send_modify(|s| {
            let remaining = self.in_flight.fetch_sub(1, Ordering::SeqCst) - 1;
            s.loading = remaining > 0;
            match result {
                Ok(projects) => s.projects = projects,
                Err(e) => error!(error = %e, "Failed to load projects"),
            }
        });
    }
}
