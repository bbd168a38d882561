use std::sync::Arc;

use tracing::info;

use crate::application::app_error::{AppError, AppResult};
use crate::application::dto::profile::{CreateProfileDTO, ProfileDTO, UpdateProfileDTO};
use crate::application::interface::db::DBSession;
use crate::application::interface::gateway::profile::{ProfileReader, ProfileWriter};
use crate::domain::entities::profile::{Profile, ProfilePatch};

#[derive(Clone)]
pub struct GetProfileInteractor {
    profile_reader: Arc<dyn ProfileReader>,
}

impl GetProfileInteractor {
    pub fn new(profile_reader: Arc<dyn ProfileReader>) -> Self {
        Self { profile_reader }
    }

    pub async fn execute(&self) -> AppResult<Option<ProfileDTO>> {
        let profile = self.profile_reader.get().await?;
        Ok(profile.map(ProfileDTO::from))
    }
}

#[derive(Clone)]
pub struct CreateProfileInteractor {
    db_session: Arc<dyn DBSession>,
    profile_writer: Arc<dyn ProfileWriter>,
}

impl CreateProfileInteractor {
    pub fn new(db_session: Arc<dyn DBSession>, profile_writer: Arc<dyn ProfileWriter>) -> Self {
        Self {
            db_session,
            profile_writer,
        }
    }

    pub async fn execute(&self, dto: CreateProfileDTO) -> AppResult<ProfileDTO> {
        let profile = Profile::new(
            dto.name,
            dto.email,
            dto.bio,
            dto.education,
            dto.experience,
            dto.social_links,
        );

        let inserted = self.profile_writer.insert_if_absent(profile.clone()).await?;
        if !inserted {
            self.db_session.rollback().await?;
            return Err(AppError::ProfileAlreadyExists);
        }
        self.db_session.commit().await?;

        info!(profile_id = %profile.id, "Profile created");
        Ok(profile.into())
    }
}

#[derive(Clone)]
pub struct UpdateProfileInteractor {
    db_session: Arc<dyn DBSession>,
    profile_reader: Arc<dyn ProfileReader>,
    profile_writer: Arc<dyn ProfileWriter>,
}

impl UpdateProfileInteractor {
    pub fn new(
        db_session: Arc<dyn DBSession>,
        profile_reader: Arc<dyn ProfileReader>,
        profile_writer: Arc<dyn ProfileWriter>,
    ) -> Self {
        Self {
            db_session,
            profile_reader,
            profile_writer,
        }
    }

    pub async fn execute(&self, dto: UpdateProfileDTO) -> AppResult<ProfileDTO> {
        let mut profile = self
            .profile_reader
            .get_for_update()
            .await?
            .ok_or(AppError::ProfileNotFound)?;

        let patch: ProfilePatch = dto.into();
        if patch.is_empty() {
            return Ok(profile.into());
        }

        profile.apply(patch);
        self.profile_writer.update(profile.clone()).await?;
        self.db_session.commit().await?;

        Ok(profile.into())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use async_trait::async_trait;
    use chrono::NaiveDate;
    use mockall::mock;
    use rstest::{fixture, rstest};

    use crate::application::app_error::{AppError, AppResult};
    use crate::application::dto::profile::{CreateProfileDTO, UpdateProfileDTO};
    use crate::application::interactors::profile::{
        CreateProfileInteractor, GetProfileInteractor, UpdateProfileInteractor,
    };
    use crate::application::interface::db::DBSession;
    use crate::application::interface::gateway::profile::{ProfileReader, ProfileWriter};
    use crate::domain::entities::profile::{Education, Experience, Profile, SocialLinks};

    // Mocks
    mock! {
        pub DBSessionMock {}

        #[async_trait]
        impl DBSession for DBSessionMock {
            async fn commit(&self) -> AppResult<()>;
            async fn rollback(&self) -> AppResult<()>;
        }
    }

    mock! {
        pub ProfileReaderMock {}

        #[async_trait]
        impl ProfileReader for ProfileReaderMock {
            async fn get(&self) -> AppResult<Option<Profile>>;
            async fn get_for_update(&self) -> AppResult<Option<Profile>>;
        }
    }

    mock! {
        pub ProfileWriterMock {}

        #[async_trait]
        impl ProfileWriter for ProfileWriterMock {
            async fn insert_if_absent(&self, profile: Profile) -> AppResult<bool>;
            async fn update(&self, profile: Profile) -> AppResult<()>;
        }
    }

    // Fixtures
    #[fixture]
    fn create_dto() -> CreateProfileDTO {
        CreateProfileDTO {
            name: "Ada Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            bio: "First programmer".to_string(),
            education: vec![Education {
                degree: "BSc Mathematics".to_string(),
                school: "University of London".to_string(),
                year: "1833 – 1835".to_string(),
            }],
            experience: vec![Experience {
                company: "Analytical Engine".to_string(),
                position: "Programmer".to_string(),
                start_date: NaiveDate::from_ymd_opt(1842, 1, 1).unwrap(),
                end_date: None,
                description: Some("Wrote the first algorithm".to_string()),
            }],
            social_links: SocialLinks {
                github: Some("https://github.com/ada".to_string()),
                linkedin: None,
                portfolio: None,
            },
        }
    }

    #[fixture]
    fn stored_profile(create_dto: CreateProfileDTO) -> Profile {
        Profile::new(
            create_dto.name,
            create_dto.email,
            "old bio".to_string(),
            create_dto.education,
            create_dto.experience,
            create_dto.social_links,
        )
    }

    // GetProfileInteractor tests
    #[rstest]
    #[tokio::test]
    async fn test_get_profile_returns_none_when_empty() {
        let mut reader = MockProfileReaderMock::new();
        reader.expect_get().returning(|| Ok(None));

        let result = GetProfileInteractor::new(Arc::new(reader)).execute().await;

        assert!(result.unwrap().is_none());
    }

    #[rstest]
    #[tokio::test]
    async fn test_get_profile_returns_stored_profile(stored_profile: Profile) {
        let mut reader = MockProfileReaderMock::new();
        let expected_id = stored_profile.id.to_string();
        reader.expect_get().returning(move || Ok(Some(stored_profile.clone())));

        let result = GetProfileInteractor::new(Arc::new(reader)).execute().await.unwrap();

        assert_eq!(result.unwrap().id, expected_id);
    }

    // CreateProfileInteractor tests
    #[rstest]
    #[tokio::test]
    async fn test_create_profile_success(create_dto: CreateProfileDTO) {
        let mut db_session = MockDBSessionMock::new();
        let mut writer = MockProfileWriterMock::new();

        writer.expect_insert_if_absent().times(1).returning(|_| Ok(true));
        db_session.expect_commit().times(1).returning(|| Ok(()));

        let result = CreateProfileInteractor::new(Arc::new(db_session), Arc::new(writer))
            .execute(create_dto)
            .await
            .unwrap();

        assert_eq!(result.name, "Ada Lovelace");
        assert_eq!(result.education.len(), 1);
        assert_eq!(result.created_at, result.updated_at);
    }

    #[rstest]
    #[tokio::test]
    async fn test_create_profile_conflict_when_exists(create_dto: CreateProfileDTO) {
        let mut db_session = MockDBSessionMock::new();
        let mut writer = MockProfileWriterMock::new();

        writer.expect_insert_if_absent().returning(|_| Ok(false));
        db_session.expect_rollback().times(1).returning(|| Ok(()));
        db_session.expect_commit().never();

        let result = CreateProfileInteractor::new(Arc::new(db_session), Arc::new(writer))
            .execute(create_dto)
            .await;

        assert!(matches!(result.unwrap_err(), AppError::ProfileAlreadyExists));
    }

    #[rstest]
    #[tokio::test]
    async fn test_create_profile_store_error(create_dto: CreateProfileDTO) {
        let db_session = MockDBSessionMock::new();
        let mut writer = MockProfileWriterMock::new();

        writer
            .expect_insert_if_absent()
            .returning(|_| Err(AppError::DatabaseError(sqlx::Error::PoolClosed)));

        let result = CreateProfileInteractor::new(Arc::new(db_session), Arc::new(writer))
            .execute(create_dto)
            .await;

        assert!(matches!(result.unwrap_err(), AppError::DatabaseError(_)));
    }

    // UpdateProfileInteractor tests
    fn make_update_interactor(
        db_session: MockDBSessionMock,
        reader: MockProfileReaderMock,
        writer: MockProfileWriterMock,
    ) -> UpdateProfileInteractor {
        UpdateProfileInteractor::new(Arc::new(db_session), Arc::new(reader), Arc::new(writer))
    }

    #[rstest]
    #[tokio::test]
    async fn test_update_profile_changes_only_bio(stored_profile: Profile) {
        let mut db_session = MockDBSessionMock::new();
        let mut reader = MockProfileReaderMock::new();
        let mut writer = MockProfileWriterMock::new();

        let before = stored_profile.clone();
        reader
            .expect_get_for_update()
            .returning(move || Ok(Some(stored_profile.clone())));
        writer
            .expect_update()
            .withf(|p| p.bio == "new bio")
            .times(1)
            .returning(|_| Ok(()));
        db_session.expect_commit().times(1).returning(|| Ok(()));

        let dto = UpdateProfileDTO {
            bio: Some("new bio".to_string()),
            ..Default::default()
        };
        let result = make_update_interactor(db_session, reader, writer)
            .execute(dto)
            .await
            .unwrap();

        assert_eq!(result.bio, "new bio");
        assert_eq!(result.name, before.name);
        assert_eq!(result.email, before.email);
        assert_eq!(result.education, before.education);
        assert_eq!(result.experience, before.experience);
        assert_eq!(result.social_links, before.social_links);
    }

    #[rstest]
    #[tokio::test]
    async fn test_update_profile_not_found() {
        let db_session = MockDBSessionMock::new();
        let mut reader = MockProfileReaderMock::new();
        let mut writer = MockProfileWriterMock::new();

        reader.expect_get_for_update().returning(|| Ok(None));
        writer.expect_update().never();

        let dto = UpdateProfileDTO {
            bio: Some("new bio".to_string()),
            ..Default::default()
        };
        let result = make_update_interactor(db_session, reader, writer).execute(dto).await;

        assert!(matches!(result.unwrap_err(), AppError::ProfileNotFound));
    }

    #[rstest]
    #[tokio::test]
    async fn test_update_profile_empty_patch_skips_write(stored_profile: Profile) {
        let mut db_session = MockDBSessionMock::new();
        let mut reader = MockProfileReaderMock::new();
        let mut writer = MockProfileWriterMock::new();

        let before = stored_profile.clone();
        reader
            .expect_get_for_update()
            .returning(move || Ok(Some(stored_profile.clone())));
        writer.expect_update().never();
        db_session.expect_commit().never();

        let result = make_update_interactor(db_session, reader, writer)
            .execute(UpdateProfileDTO::default())
            .await
            .unwrap();

        assert_eq!(result.bio, before.bio);
        assert_eq!(result.updated_at, before.updated_at);
    }

    #[rstest]
    #[tokio::test]
    async fn test_update_profile_replaces_social_links(stored_profile: Profile) {
        let mut db_session = MockDBSessionMock::new();
        let mut reader = MockProfileReaderMock::new();
        let mut writer = MockProfileWriterMock::new();

        reader
            .expect_get_for_update()
            .returning(move || Ok(Some(stored_profile.clone())));
        writer.expect_update().returning(|_| Ok(()));
        db_session.expect_commit().returning(|| Ok(()));

        let dto = UpdateProfileDTO {
            social_links: Some(SocialLinks {
                linkedin: Some("https://linkedin.com/in/ada".to_string()),
                ..Default::default()
            }),
            ..Default::default()
        };
        let result = make_update_interactor(db_session, reader, writer)
            .execute(dto)
            .await
            .unwrap();

        assert_eq!(result.social_links.github, None);
        assert_eq!(result.social_links.linkedin.as_deref(), Some("https://linkedin.com/in/ada"));
    }
}
