use std::fmt::Write;

use clap::Subcommand;
use folio_config::Config;
use folio_core_portfolio_contracts::PortfolioFeatureService;
use folio_models::portfolio::{ProjectFilter, SkillLevel};

use crate::environment;

const LEVEL_BAR_WIDTH: usize = 10;

#[derive(Debug, Subcommand)]
pub enum PortfolioCommand {
    /// List skills grouped by category
    #[command(aliases(["s"]))]
    Skills,
    /// List work experience with durations
    #[command(aliases(["e", "exp"]))]
    Experience,
    /// List projects
    #[command(aliases(["p"]))]
    Projects {
        /// Only list projects of this category (web, mobile, desktop, api, other)
        #[arg(short, long, default_value = "all")]
        category: ProjectFilter,
        /// List every matching project instead of the first few
        #[arg(short, long)]
        all: bool,
    },
}

impl PortfolioCommand {
    pub async fn invoke(self, config: Config) -> anyhow::Result<()> {
        let portfolio = environment::portfolio(&config)?;
        let output = match self {
            PortfolioCommand::Skills => render_skills(&portfolio),
            PortfolioCommand::Experience => render_experience(&portfolio),
            PortfolioCommand::Projects { category, all } => {
                render_projects(&portfolio, category, all)
            }
        };
        print!("{output}");
        Ok(())
    }
}

pub fn render_skills(portfolio: &impl PortfolioFeatureService) -> String {
    let mut out = String::new();
    for group in portfolio.skills_by_category() {
        let _ = writeln!(out, "{}", group.category.label());
        for skill in group.skills {
            let _ = writeln!(
                out,
                "  {:<28} {} {}",
                skill.name,
                level_bar(skill.level),
                skill.level.as_str()
            );
        }
    }
    out
}

fn level_bar(level: SkillLevel) -> String {
    let filled = (level.fraction() * LEVEL_BAR_WIDTH as f64).round() as usize;
    format!(
        "{}{}",
        "#".repeat(filled),
        "-".repeat(LEVEL_BAR_WIDTH.saturating_sub(filled))
    )
}

pub fn render_experience(portfolio: &impl PortfolioFeatureService) -> String {
    let mut out = String::new();
    for experience in &portfolio.content().experiences {
        let end = experience
            .end_date
            .map_or_else(|| "Present".into(), |end| end.label());
        let _ = writeln!(out, "{} at {}", experience.position, experience.company);
        let _ = writeln!(
            out,
            "  {} - {} ({}, {})",
            experience.start_date.label(),
            end,
            portfolio.experience_duration(experience),
            experience.employment_type.as_str()
        );
    }
    out
}

pub fn render_projects(
    portfolio: &impl PortfolioFeatureService,
    filter: ProjectFilter,
    show_all: bool,
) -> String {
    let selection = portfolio.projects(filter, show_all);

    let mut out = String::new();
    let _ = writeln!(out, "{} ({})", filter.label(), selection.total);
    if selection.total == 0 {
        out.push_str("  No projects found.\n");
        return out;
    }

    for project in &selection.projects {
        let featured = if project.featured { " *" } else { "" };
        let _ = writeln!(
            out,
            "  {}{featured} [{}, {}]",
            project.title,
            project.category.as_str(),
            project.status.label()
        );
    }

    if selection.has_more() {
        let _ = writeln!(out, "  Show all {} projects with --all", selection.total);
    }
    out
}
