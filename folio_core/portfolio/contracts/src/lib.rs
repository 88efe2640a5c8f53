use std::sync::Arc;

use folio_models::portfolio::{
    Experience, ExperienceDuration, Portfolio, ProjectFilter, ProjectSelection, SkillGroup,
};

/// Views derived from the static portfolio content.
#[cfg_attr(feature = "mock", mockall::automock)]
pub trait PortfolioFeatureService: Send + Sync + 'static {
    /// Returns the raw portfolio content.
    fn content(&self) -> Arc<Portfolio>;

    /// Groups the skills by category. Groups appear in the order their first
    /// skill appears in the content.
    fn skills_by_category(&self) -> Vec<SkillGroup>;

    /// Returns how long the position lasted, or has lasted so far if it is
    /// ongoing.
    fn experience_duration(&self, experience: &Experience) -> ExperienceDuration;

    /// Returns the projects matching `filter`. Unless `show_all` is set only
    /// the first few are included.
    fn projects(&self, filter: ProjectFilter, show_all: bool) -> ProjectSelection;
}

#[cfg(feature = "mock")]
impl MockPortfolioFeatureService {
    pub fn with_content(mut self, content: Arc<Portfolio>) -> Self {
        self.expect_content().once().return_const(content);
        self
    }

    pub fn with_skills_by_category(mut self, result: Vec<SkillGroup>) -> Self {
        self.expect_skills_by_category()
            .once()
            .return_const(result);
        self
    }

    pub fn with_experience_duration(
        mut self,
        experience: Experience,
        result: ExperienceDuration,
    ) -> Self {
        self.expect_experience_duration()
            .once()
            .with(mockall::predicate::eq(experience))
            .return_const(result);
        self
    }

    pub fn with_projects(
        mut self,
        filter: ProjectFilter,
        show_all: bool,
        result: ProjectSelection,
    ) -> Self {
        self.expect_projects()
            .once()
            .with(
                mockall::predicate::eq(filter),
                mockall::predicate::eq(show_all),
            )
            .return_const(result);
        self
    }
}
