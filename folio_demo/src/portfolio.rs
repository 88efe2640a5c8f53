use std::sync::LazyLock;

use folio_models::portfolio::{
    ContactInfo, EmploymentType, Experience, PersonalInfo, Portfolio, Project, ProjectCategory,
    ProjectStatus, Skill, SkillCategory, SkillLevel, SocialLink, SocialPlatform, YearMonth,
};

pub static PORTFOLIO: LazyLock<Portfolio> = LazyLock::new(|| Portfolio {
    personal: PersonalInfo {
        name: "Rana Alariqi".into(),
        title: "Information Technology Student".into(),
        bio: "Building a career in technology with experience in social media management \
              and client negotiation."
            .into(),
        email: "rana@example.com".into(),
        phone: None,
        location: Some("Taiz, Yemen".into()),
        profile_image: Some("/student.jpg".into()),
    },
    social_links: vec![
        SocialLink {
            platform: SocialPlatform::Email,
            url: "mailto:rana@example.com".into(),
            username: Some("rana@example.com".into()),
        },
        SocialLink {
            platform: SocialPlatform::Github,
            url: "https://github.com/rana-alariqi".into(),
            username: Some("rana-alariqi".into()),
        },
    ],
    skills: SKILLS.clone(),
    experiences: vec![FREELANCE.clone(), STUDIES.clone()],
    projects: vec![CAMPAIGN.clone(), WEBSITE.clone(), DATABASE.clone()],
    contact: ContactInfo {
        email: "rana@example.com".into(),
        phone: None,
        location: Some("Taiz, Yemen".into()),
        availability: Some("Available for freelance work and internships".into()),
    },
});

pub static SKILLS: LazyLock<Vec<Skill>> = LazyLock::new(|| {
    [
        ("1", "HTML", SkillCategory::Frontend, SkillLevel::Intermediate),
        ("2", "CSS", SkillCategory::Frontend, SkillLevel::Intermediate),
        ("3", "C++", SkillCategory::Frontend, SkillLevel::Beginner),
        ("4", "Oracle Database", SkillCategory::Backend, SkillLevel::Intermediate),
        ("5", "Social Media Management", SkillCategory::Other, SkillLevel::Advanced),
        ("6", "Negotiation", SkillCategory::Other, SkillLevel::Advanced),
        ("7", "Effective Communication", SkillCategory::Other, SkillLevel::Expert),
    ]
    .into_iter()
    .map(|(id, name, category, level)| Skill {
        id: id.into(),
        name: name.into(),
        category,
        level,
    })
    .collect()
});

/// Ongoing position.
pub static FREELANCE: LazyLock<Experience> = LazyLock::new(|| Experience {
    id: "1".into(),
    company: "Freelance - Social Media Management".into(),
    position: "Social Media Manager & Digital Mediator".into(),
    start_date: ym(2022, 1),
    end_date: None,
    description: "Managing social media platforms for multiple clients".into(),
    responsibilities: vec![
        "Managing social media accounts for multiple clients".into(),
        "Creating digital content and advertisements".into(),
    ],
    achievements: vec!["Grew engagement for multiple accounts".into()],
    technologies: vec!["Social Media Management".into(), "Digital Marketing".into()],
    company_url: None,
    location: Some("Taiz, Yemen".into()),
    employment_type: EmploymentType::Freelance,
});

pub static STUDIES: LazyLock<Experience> = LazyLock::new(|| Experience {
    id: "2".into(),
    company: "Information Technology Studies".into(),
    position: "Information Technology Student".into(),
    start_date: ym(2020, 9),
    end_date: Some(ym(2024, 6)),
    description: "Studying IT fundamentals and programming".into(),
    responsibilities: vec!["Learning programming basics using C++ and HTML/CSS".into()],
    achievements: Vec::new(),
    technologies: vec!["C++".into(), "HTML".into(), "CSS".into(), "Oracle Database".into()],
    company_url: None,
    location: Some("Taiz, Yemen".into()),
    employment_type: EmploymentType::PartTime,
});

pub static CAMPAIGN: LazyLock<Project> = LazyLock::new(|| Project {
    id: "1".into(),
    title: "Online Store Marketing Campaign".into(),
    description: "Social media campaign for an online store".into(),
    long_description: None,
    image: None,
    technologies: vec!["Digital Marketing".into(), "Content Creation".into()],
    category: ProjectCategory::Other,
    status: ProjectStatus::Completed,
    featured: true,
    demo_url: None,
    github_url: None,
    start_date: Some(ym(2023, 1)),
    end_date: Some(ym(2023, 6)),
    team_size: Some(1),
    role: Some("Digital Marketing Manager".into()),
});

pub static WEBSITE: LazyLock<Project> = LazyLock::new(|| Project {
    id: "2".into(),
    title: "Personal Website".into(),
    description: "Responsive personal website built with HTML and CSS".into(),
    long_description: None,
    image: None,
    technologies: vec!["HTML".into(), "CSS".into(), "JavaScript".into()],
    category: ProjectCategory::Web,
    status: ProjectStatus::Completed,
    featured: true,
    demo_url: None,
    github_url: None,
    start_date: Some(ym(2022, 8)),
    end_date: Some(ym(2022, 12)),
    team_size: Some(1),
    role: Some("Web Developer".into()),
});

pub static DATABASE: LazyLock<Project> = LazyLock::new(|| Project {
    id: "3".into(),
    title: "Student Records Database".into(),
    description: "Oracle database with a C++ interface for managing student data".into(),
    long_description: None,
    image: None,
    technologies: vec!["Oracle Database".into(), "C++".into(), "SQL".into()],
    category: ProjectCategory::Desktop,
    status: ProjectStatus::Completed,
    featured: false,
    demo_url: None,
    github_url: None,
    start_date: Some(ym(2022, 5)),
    end_date: Some(ym(2022, 7)),
    team_size: Some(1),
    role: Some("Database Developer".into()),
});

fn ym(year: i32, month: u32) -> YearMonth {
    YearMonth::new(year, month).unwrap()
}
