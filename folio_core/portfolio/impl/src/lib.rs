use std::sync::Arc;

use folio_core_portfolio_contracts::PortfolioFeatureService;
use folio_models::portfolio::{
    Experience, ExperienceDuration, Portfolio, ProjectFilter, ProjectSelection, SkillGroup,
    YearMonth,
};
use folio_shared_contracts::time::TimeService;
use folio_utils::trace_instrument;

/// Number of projects shown before the "show all" toggle.
pub const COLLAPSED_PROJECT_COUNT: usize = 6;

#[derive(Debug, Clone)]
pub struct PortfolioFeatureServiceImpl<Time> {
    time: Time,
    config: PortfolioFeatureConfig,
}

#[derive(Debug, Clone)]
pub struct PortfolioFeatureConfig {
    pub content: Arc<Portfolio>,
}

impl<Time> PortfolioFeatureServiceImpl<Time> {
    pub fn new(time: Time, config: PortfolioFeatureConfig) -> Self {
        Self { time, config }
    }
}

impl<Time> PortfolioFeatureService for PortfolioFeatureServiceImpl<Time>
where
    Time: TimeService,
{
    fn content(&self) -> Arc<Portfolio> {
        Arc::clone(&self.config.content)
    }

    #[trace_instrument(skip(self))]
    fn skills_by_category(&self) -> Vec<SkillGroup> {
        let mut groups = Vec::<SkillGroup>::new();
        for skill in &self.config.content.skills {
            match groups.iter_mut().find(|g| g.category == skill.category) {
                Some(group) => group.skills.push(skill.clone()),
                None => groups.push(SkillGroup {
                    category: skill.category,
                    skills: vec![skill.clone()],
                }),
            }
        }
        groups
    }

    #[trace_instrument(skip(self, experience), fields(id = %experience.id))]
    fn experience_duration(&self, experience: &Experience) -> ExperienceDuration {
        let end = experience
            .end_date
            .unwrap_or_else(|| YearMonth::of(self.time.now()));
        let months = experience.start_date.months_until(end).max(0);

        ExperienceDuration {
            months: u32::try_from(months).unwrap_or(u32::MAX),
        }
    }

    #[trace_instrument(skip(self))]
    fn projects(&self, filter: ProjectFilter, show_all: bool) -> ProjectSelection {
        let matching = self
            .config
            .content
            .projects
            .iter()
            .filter(|project| filter.matches(project));

        let total = matching.clone().count();
        let limit = if show_all {
            usize::MAX
        } else {
            COLLAPSED_PROJECT_COUNT
        };

        ProjectSelection {
            projects: matching.take(limit).cloned().collect(),
            total,
        }
    }
}
