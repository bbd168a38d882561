use async_trait::async_trait;
use reqwest::Url;
use tracing::debug;

use crate::adapter::http::schema::project::ProjectResponse;
use crate::application::app_error::{AppError, AppResult};
use crate::application::dto::project::ProjectFilter;

/// Where the browser gets its project lists from.
#[async_trait]
pub trait ProjectSource: Send + Sync {
    async fn list_projects(&self, filter: ProjectFilter) -> AppResult<Vec<ProjectResponse>>;
}

/// Talks to the portfolio HTTP API, e.g. `http://localhost:8000/api`.
#[derive(Debug, Clone)]
pub struct HttpProjectSource {
    http: reqwest::Client,
    base_url: Url,
}

impl HttpProjectSource {
    pub fn new(http: reqwest::Client, base_url: &str) -> AppResult<Self> {
        let base_url = Url::parse(base_url).map_err(|e| AppError::InvalidBaseUrl(format!("{}: {}", base_url, e)))?;
        if base_url.cannot_be_a_base() {
            return Err(AppError::InvalidBaseUrl(base_url.to_string()));
        }
        Ok(Self { http, base_url })
    }

    fn endpoint(&self, segments: &[&str]) -> AppResult<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| AppError::InvalidBaseUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// `All` and `SearchText` share the search route; an absent query lists everything.
    pub fn request_url(&self, filter: &ProjectFilter) -> AppResult<Url> {
        match filter {
            ProjectFilter::All => self.endpoint(&["search"]),
            ProjectFilter::SkillName(name) => self.endpoint(&["projects", "skill", name.as_str()]),
            ProjectFilter::SearchText(text) => {
                let mut url = self.endpoint(&["search"])?;
                url.query_pairs_mut().append_pair("q", text);
                Ok(url)
            }
        }
    }
}

#[async_trait]
impl ProjectSource for HttpProjectSource {
    async fn list_projects(&self, filter: ProjectFilter) -> AppResult<Vec<ProjectResponse>> {
        let url = self.request_url(&filter)?;
        debug!(%url, "Requesting projects");

        let resp = self.http.get(url).send().await?;
        if !resp.status().is_success() {
            return Err(AppError::UnexpectedStatus(resp.status().as_u16()));
        }

        Ok(resp.json().await?)
    }
}
