use std::sync::Arc;

use async_trait::async_trait;
use axum::extract::{FromRef, FromRequestParts};
use axum::http::request::Parts;
use sqlx::{Pool, Postgres};

use crate::adapter::db::gateway::profile::ProfileGateway;
use crate::adapter::db::gateway::project::ProjectGateway;
use crate::adapter::db::gateway::skill::SkillGateway;
use crate::adapter::db::session::SqlxSession;
use crate::application::app_error::{AppError, AppResult};
use crate::application::interactors::portfolio::GetPortfolioInteractor;
use crate::application::interactors::profile::{
    CreateProfileInteractor, GetProfileInteractor, UpdateProfileInteractor,
};
use crate::application::interactors::project::ListProjectsInteractor;
use crate::application::interactors::skill::{ListSkillsInteractor, TopSkillsInteractor};
use crate::infra::config::AppConfig;

#[derive(Clone)]
pub struct AppState {
    pub pool: Pool<Postgres>,
    pub config: Arc<AppConfig>,
}

impl FromRef<AppState> for Arc<AppConfig> {
    fn from_ref(state: &AppState) -> Self {
        state.config.clone()
    }
}

#[async_trait]
pub trait FromAppState: Sized {
    async fn from_app_state(state: &AppState) -> AppResult<Self>;
}

// GetProfileInteractor
#[async_trait]
impl FromAppState for GetProfileInteractor {
    async fn from_app_state(state: &AppState) -> AppResult<Self> {
        let session = SqlxSession::new_lazy(state.pool.clone());
        let profile_gateway = Arc::new(ProfileGateway::new(session));

        Ok(GetProfileInteractor::new(profile_gateway))
    }
}

impl<S> FromRequestParts<S> for GetProfileInteractor
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = AppError;

    async fn from_request_parts(_parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let app_state = AppState::from_ref(state);
        GetProfileInteractor::from_app_state(&app_state).await
    }
}

// CreateProfileInteractor
#[async_trait]
impl FromAppState for CreateProfileInteractor {
    async fn from_app_state(state: &AppState) -> AppResult<Self> {
        let session = SqlxSession::new_lazy(state.pool.clone());
        let profile_gateway = ProfileGateway::new(session.clone());

        Ok(CreateProfileInteractor::new(Arc::new(session), Arc::new(profile_gateway)))
    }
}

impl<S> FromRequestParts<S> for CreateProfileInteractor
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = AppError;

    async fn from_request_parts(_parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let app_state = AppState::from_ref(state);
        CreateProfileInteractor::from_app_state(&app_state).await
    }
}

// UpdateProfileInteractor
#[async_trait]
impl FromAppState for UpdateProfileInteractor {
    async fn from_app_state(state: &AppState) -> AppResult<Self> {
        let session = SqlxSession::new_lazy(state.pool.clone());
        let profile_gateway = ProfileGateway::new(session.clone());

        Ok(UpdateProfileInteractor::new(
            Arc::new(session),
            Arc::new(profile_gateway.clone()),
            Arc::new(profile_gateway),
        ))
    }
}

impl<S> FromRequestParts<S> for UpdateProfileInteractor
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = AppError;

    async fn from_request_parts(_parts: &mut Parts, state: &S) -> AppResult<Self> {
        let app_state = AppState::from_ref(state);
        UpdateProfileInteractor::from_app_state(&app_state).await
    }
}

// ListSkillsInteractor
#[async_trait]
impl FromAppState for ListSkillsInteractor {
    async fn from_app_state(state: &AppState) -> AppResult<Self> {
        let session = SqlxSession::new_lazy(state.pool.clone());
        let skill_gateway = Arc::new(SkillGateway::new(session));

        Ok(ListSkillsInteractor::new(skill_gateway))
    }
}

impl<S> FromRequestParts<S> for ListSkillsInteractor
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = AppError;

    async fn from_request_parts(_parts: &mut Parts, state: &S) -> AppResult<Self> {
        let app_state = AppState::from_ref(state);
        ListSkillsInteractor::from_app_state(&app_state).await
    }
}

// TopSkillsInteractor
#[async_trait]
impl FromAppState for TopSkillsInteractor {
    async fn from_app_state(state: &AppState) -> AppResult<Self> {
        let session = SqlxSession::new_lazy(state.pool.clone());
        let skill_gateway = Arc::new(SkillGateway::new(session));

        Ok(TopSkillsInteractor::new(skill_gateway))
    }
}

impl<S> FromRequestParts<S> for TopSkillsInteractor
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = AppError;

    async fn from_request_parts(_parts: &mut Parts, state: &S) -> AppResult<Self> {
        let app_state = AppState::from_ref(state);
        TopSkillsInteractor::from_app_state(&app_state).await
    }
}

// ListProjectsInteractor
#[async_trait]
impl FromAppState for ListProjectsInteractor {
    async fn from_app_state(state: &AppState) -> AppResult<Self> {
        let session = SqlxSession::new_lazy(state.pool.clone());
        let project_gateway = ProjectGateway::new(session.clone());
        let skill_gateway = SkillGateway::new(session);

        Ok(ListProjectsInteractor::new(
            Arc::new(project_gateway),
            Arc::new(skill_gateway),
        ))
    }
}

impl<S> FromRequestParts<S> for ListProjectsInteractor
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = AppError;

    async fn from_request_parts(_parts: &mut Parts, state: &S) -> AppResult<Self> {
        let app_state = AppState::from_ref(state);
        ListProjectsInteractor::from_app_state(&app_state).await
    }
}

// GetPortfolioInteractor
#[async_trait]
impl FromAppState for GetPortfolioInteractor {
    async fn from_app_state(state: &AppState) -> AppResult<Self> {
        let session = SqlxSession::new_lazy(state.pool.clone());

        Ok(GetPortfolioInteractor::new(
            Arc::new(ProfileGateway::new(session.clone())),
            Arc::new(ProjectGateway::new(session.clone())),
            Arc::new(SkillGateway::new(session)),
        ))
    }
}

impl<S> FromRequestParts<S> for GetPortfolioInteractor
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = AppError;

    async fn from_request_parts(_parts: &mut Parts, state: &S) -> AppResult<Self> {
        let app_state = AppState::from_ref(state);
        GetPortfolioInteractor::from_app_state(&app_state).await
    }
}
