use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use crate::application::app_error::AppResult;
use crate::application::dto::project::{ProjectDTO, ProjectFilter};
use crate::application::dto::skill::SkillDTO;
use crate::application::interface::gateway::project::ProjectReader;
use crate::application::interface::gateway::skill::SkillReader;
use crate::domain::entities::id::Id;
use crate::domain::entities::project::Project;
use crate::domain::entities::skill::Skill;

/// Replaces each project's skill ids with the full skill records, keeping the
/// project's reference order. Ids with no matching skill are dropped.
pub(crate) async fn populate_skills(
    skill_reader: &dyn SkillReader,
    projects: Vec<Project>,
) -> AppResult<Vec<ProjectDTO>> {
    let ids: Vec<Id<Skill>> = projects
        .iter()
        .flat_map(|project| project.skill_ids.iter().cloned())
        .collect::<HashSet<_>>()
        .into_iter()
        .collect();

    let skills: HashMap<Id<Skill>, Skill> = if ids.is_empty() {
        HashMap::new()
    } else {
        skill_reader
            .find_by_ids(&ids)
            .await?
            .into_iter()
            .map(|skill| (skill.id.clone(), skill))
            .collect()
    };

    Ok(projects
        .into_iter()
        .map(|project| ProjectDTO {
            id: project.id.to_string(),
            skills: project
                .skill_ids
                .iter()
                .filter_map(|skill_id| skills.get(skill_id).cloned())
                .map(SkillDTO::from)
                .collect(),
            title: project.title,
            description: project.description,
            live_url: project.live_url,
            repo_url: project.repo_url,
            created_at: project.created_at,
            updated_at: project.updated_at,
        })
        .collect())
}

#[derive(Clone)]
pub struct ListProjectsInteractor {
    project_reader: Arc<dyn ProjectReader>,
    skill_reader: Arc<dyn SkillReader>,
}

impl ListProjectsInteractor {
    pub fn new(project_reader: Arc<dyn ProjectReader>, skill_reader: Arc<dyn SkillReader>) -> Self {
        Self {
            project_reader,
            skill_reader,
        }
    }

    pub async fn execute(&self, filter: ProjectFilter) -> AppResult<Vec<ProjectDTO>> {
        let projects = match filter {
            ProjectFilter::All => self.project_reader.get_all().await?,
            // No stored name, title or description can contain NUL.
            ProjectFilter::SkillName(text) | ProjectFilter::SearchText(text) if text.contains('\0') => {
                return Ok(Vec::new());
            }
            ProjectFilter::SkillName(name) => match self.skill_reader.find_by_name(&name).await? {
                Some(skill) => self.project_reader.find_by_skill(&skill.id).await?,
                None => return Ok(Vec::new()),
            },
            ProjectFilter::SearchText(text) if text.is_empty() => self.project_reader.get_all().await?,
            ProjectFilter::SearchText(text) => self.project_reader.search(&text).await?,
        };

        populate_skills(self.skill_reader.as_ref(), projects).await
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use async_trait::async_trait;
    use mockall::mock;
    use rstest::{fixture, rstest};

    use crate::application::app_error::{AppError, AppResult};
    use crate::application::dto::project::ProjectFilter;
    use crate::application::interactors::project::ListProjectsInteractor;
    use crate::application::interface::gateway::project::ProjectReader;
    use crate::application::interface::gateway::skill::SkillReader;
    use crate::domain::entities::id::Id;
    use crate::domain::entities::project::Project;
    use crate::domain::entities::skill::{Skill, SkillLevel, SkillUsage};

    // Mocks
    mock! {
        pub ProjectReaderMock {}

        #[async_trait]
        impl ProjectReader for ProjectReaderMock {
            async fn get_all(&self) -> AppResult<Vec<Project>>;
            async fn find_by_skill(&self, skill_id: &Id<Skill>) -> AppResult<Vec<Project>>;
            async fn search(&self, text: &str) -> AppResult<Vec<Project>>;
        }
    }

    mock! {
        pub SkillReaderMock {}

        #[async_trait]
        impl SkillReader for SkillReaderMock {
            async fn get_all(&self) -> AppResult<Vec<Skill>>;
            async fn find_by_name(&self, name: &str) -> AppResult<Option<Skill>>;
            async fn find_by_ids(&self, ids: &[Id<Skill>]) -> AppResult<Vec<Skill>>;
            async fn top_by_usage(&self, limit: i64) -> AppResult<Vec<SkillUsage>>;
        }
    }

    struct Catalog {
        react: Skill,
        node: Skill,
        python: Skill,
        billing: Project,
        water: Project,
    }

    // Fixtures
    #[fixture]
    fn catalog() -> Catalog {
        let react = Skill::new("React.js".to_string(), SkillLevel::Expert);
        let node = Skill::new("Node.js".to_string(), SkillLevel::Expert);
        let python = Skill::new("Python".to_string(), SkillLevel::Expert);
        let billing = Project::new(
            "Smart Electricity Billing System".to_string(),
            "Web-based electricity billing platform".to_string(),
            None,
            None,
            vec![node.id.clone(), react.id.clone()],
        );
        let water = Project::new(
            "Water Distribution System".to_string(),
            "Simulation tool for optimizing water networks".to_string(),
            None,
            Some("https://github.com/example/water-dist".to_string()),
            vec![react.id.clone()],
        );
        Catalog {
            react,
            node,
            python,
            billing,
            water,
        }
    }

    fn expect_skill_lookup(skill_reader: &mut MockSkillReaderMock, skills: Vec<Skill>) {
        skill_reader.expect_find_by_ids().returning(move |ids| {
            Ok(skills
                .iter()
                .filter(|skill| ids.contains(&skill.id))
                .cloned()
                .collect())
        });
    }

    fn make_interactor(project_reader: MockProjectReaderMock, skill_reader: MockSkillReaderMock) -> ListProjectsInteractor {
        ListProjectsInteractor::new(Arc::new(project_reader), Arc::new(skill_reader))
    }

    #[rstest]
    #[tokio::test]
    async fn test_list_all_populates_skills_in_reference_order(catalog: Catalog) {
        let mut project_reader = MockProjectReaderMock::new();
        let mut skill_reader = MockSkillReaderMock::new();

        let projects = vec![catalog.billing.clone(), catalog.water.clone()];
        project_reader.expect_get_all().returning(move || Ok(projects.clone()));
        expect_skill_lookup(
            &mut skill_reader,
            vec![catalog.react.clone(), catalog.node.clone(), catalog.python.clone()],
        );

        let result = make_interactor(project_reader, skill_reader)
            .execute(ProjectFilter::All)
            .await
            .unwrap();

        assert_eq!(result.len(), 2);
        let billing_skills: Vec<&str> = result[0].skills.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(billing_skills, vec!["Node.js", "React.js"]);
        assert_eq!(result[1].skills.len(), 1);
        assert_eq!(result[1].repo_url.as_deref(), Some("https://github.com/example/water-dist"));
    }

    #[rstest]
    #[tokio::test]
    async fn test_dangling_skill_reference_is_omitted(catalog: Catalog) {
        let mut project_reader = MockProjectReaderMock::new();
        let mut skill_reader = MockSkillReaderMock::new();

        let mut project = catalog.water.clone();
        project.skill_ids.push(Id::generate());
        project_reader.expect_get_all().returning(move || Ok(vec![project.clone()]));
        expect_skill_lookup(&mut skill_reader, vec![catalog.react.clone()]);

        let result = make_interactor(project_reader, skill_reader)
            .execute(ProjectFilter::All)
            .await
            .unwrap();

        assert_eq!(result[0].skills.len(), 1);
        assert_eq!(result[0].skills[0].name, "React.js");
    }

    #[rstest]
    #[tokio::test]
    async fn test_skill_filter_uses_matched_skill_id(catalog: Catalog) {
        let mut project_reader = MockProjectReaderMock::new();
        let mut skill_reader = MockSkillReaderMock::new();

        let react = catalog.react.clone();
        let react_id = catalog.react.id.clone();
        let water = catalog.water.clone();
        skill_reader
            .expect_find_by_name()
            .withf(|name| name == "react.js")
            .returning(move |_| Ok(Some(react.clone())));
        project_reader
            .expect_find_by_skill()
            .withf(move |skill_id| *skill_id == react_id)
            .times(1)
            .returning(move |_| Ok(vec![water.clone()]));
        expect_skill_lookup(&mut skill_reader, vec![catalog.react.clone()]);

        let result = make_interactor(project_reader, skill_reader)
            .execute(ProjectFilter::SkillName("react.js".to_string()))
            .await
            .unwrap();

        assert_eq!(result.len(), 1);
        assert_eq!(result[0].title, "Water Distribution System");
    }

    #[rstest]
    #[tokio::test]
    async fn test_unknown_skill_returns_empty_list() {
        let mut project_reader = MockProjectReaderMock::new();
        let mut skill_reader = MockSkillReaderMock::new();

        skill_reader.expect_find_by_name().returning(|_| Ok(None));
        project_reader.expect_find_by_skill().never();
        skill_reader.expect_find_by_ids().never();

        let result = make_interactor(project_reader, skill_reader)
            .execute(ProjectFilter::SkillName("COBOL".to_string()))
            .await
            .unwrap();

        assert!(result.is_empty());
    }

    #[rstest]
    #[tokio::test]
    async fn test_search_text_is_passed_verbatim(catalog: Catalog) {
        let mut project_reader = MockProjectReaderMock::new();
        let mut skill_reader = MockSkillReaderMock::new();

        let billing = catalog.billing.clone();
        project_reader
            .expect_search()
            .withf(|text| text == "billing")
            .times(1)
            .returning(move |_| Ok(vec![billing.clone()]));
        expect_skill_lookup(&mut skill_reader, vec![catalog.react.clone(), catalog.node.clone()]);

        let result = make_interactor(project_reader, skill_reader)
            .execute(ProjectFilter::SearchText("billing".to_string()))
            .await
            .unwrap();

        assert_eq!(result.len(), 1);
        assert_eq!(result[0].title, "Smart Electricity Billing System");
    }

    #[rstest]
    #[tokio::test]
    async fn test_empty_search_text_lists_all(catalog: Catalog) {
        let mut project_reader = MockProjectReaderMock::new();
        let mut skill_reader = MockSkillReaderMock::new();

        let projects = vec![catalog.billing.clone(), catalog.water.clone()];
        project_reader.expect_search().never();
        project_reader.expect_get_all().times(1).returning(move || Ok(projects.clone()));
        expect_skill_lookup(&mut skill_reader, vec![catalog.react.clone(), catalog.node.clone()]);

        let result = make_interactor(project_reader, skill_reader)
            .execute(ProjectFilter::SearchText(String::new()))
            .await
            .unwrap();

        assert_eq!(result.len(), 2);
    }

    // Tests filters carrying NUL
    // Verifies:
    // - An empty list is returned without touching either reader
    #[rstest]
    #[case(ProjectFilter::SkillName("\0".to_string()))]
    #[case(ProjectFilter::SearchText("bill\0ing".to_string()))]
    #[tokio::test]
    async fn test_nul_filter_returns_empty_list(#[case] filter: ProjectFilter) {
        let project_reader = MockProjectReaderMock::new();
        let skill_reader = MockSkillReaderMock::new();

        let result = make_interactor(project_reader, skill_reader)
            .execute(filter)
            .await
            .unwrap();

        assert!(result.is_empty());
    }

    #[rstest]
    #[tokio::test]
    async fn test_shared_skill_ids_are_looked_up_once(catalog: Catalog) {
        let mut project_reader = MockProjectReaderMock::new();
        let mut skill_reader = MockSkillReaderMock::new();

        let projects = vec![catalog.billing.clone(), catalog.water.clone(), catalog.water.clone()];
        let skills = vec![catalog.react.clone(), catalog.node.clone()];
        project_reader.expect_get_all().returning(move || Ok(projects.clone()));
        skill_reader
            .expect_find_by_ids()
            .withf(|ids| ids.len() == 2)
            .times(1)
            .returning(move |_| Ok(skills.clone()));

        let result = make_interactor(project_reader, skill_reader)
            .execute(ProjectFilter::All)
            .await
            .unwrap();

        assert_eq!(result.len(), 3);
        assert_eq!(result[2].skills[0].name, "React.js");
    }

    #[rstest]
    #[tokio::test]
    async fn test_projects_without_skills_skip_lookup() {
        let mut project_reader = MockProjectReaderMock::new();
        let mut skill_reader = MockSkillReaderMock::new();

        project_reader.expect_get_all().returning(|| {
            Ok(vec![Project::new(
                "Notes".to_string(),
                "Plain text notes".to_string(),
                None,
                None,
                vec![],
            )])
        });
        skill_reader.expect_find_by_ids().never();

        let result = make_interactor(project_reader, skill_reader)
            .execute(ProjectFilter::All)
            .await
            .unwrap();

        assert!(result[0].skills.is_empty());
    }

    #[rstest]
    #[tokio::test]
    async fn test_store_error_is_propagated() {
        let mut project_reader = MockProjectReaderMock::new();
        let skill_reader = MockSkillReaderMock::new();

        project_reader
            .expect_get_all()
            .returning(|| Err(AppError::DatabaseError(sqlx::Error::PoolClosed)));

        let result = make_interactor(project_reader, skill_reader)
            .execute(ProjectFilter::All)
            .await;

        assert!(matches!(result.unwrap_err(), AppError::DatabaseError(_)));
    }
}
