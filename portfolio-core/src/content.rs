//! Static portfolio content embedded at compile time
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use thiserror::Error;

const PORTFOLIO_JSON: &str = include_str!("../data/portfolio.json");

static BUNDLED: Lazy<PortfolioContent> = Lazy::new(|| {
    PortfolioContent::from_json(PORTFOLIO_JSON).unwrap_or_else(|err| {
        log::error!("bundled portfolio content is invalid: {err}");
        PortfolioContent::default()
    })
});

#[derive(Debug, Error)]
pub enum ContentError {
    #[error("content JSON is malformed: {0}")]
    Json(#[from] serde_json::Error),
    #[error("skill `{name}` has level {level}, expected 0..=100")]
    SkillLevel { name: String, level: u8 },
    #[error("profile lists no roles")]
    NoRoles,
    #[error("skill category `{0}` is empty")]
    EmptyCategory(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Profile {
    pub brand: String,
    pub greeting: String,
    pub name: String,
    pub roles: Vec<String>,
    pub tagline: String,
    /// Resume path relative to the site root.
    pub resume: String,
    pub summary: String,
    pub employer: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct InfoCard {
    pub title: String,
    pub body: String,
    pub gradient: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    pub level: u8,
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Highlight {
    pub dot: String,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct About {
    pub cards: Vec<InfoCard>,
    pub skills: Vec<Skill>,
    pub highlights: Vec<Highlight>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Experience {
    pub company: String,
    pub position: String,
    pub duration: String,
    pub location: String,
    pub description: String,
    pub achievements: Vec<String>,
    pub technologies: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProjectCategory {
    #[serde(rename = "Full Stack")]
    FullStack,
    Frontend,
    Backend,
    Mobile,
}

impl ProjectCategory {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::FullStack => "Full Stack",
            Self::Frontend => "Frontend",
            Self::Backend => "Backend",
            Self::Mobile => "Mobile",
        }
    }
}

/// Gallery filter button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProjectFilter {
    #[default]
    All,
    Only(ProjectCategory),
}

pub const PROJECT_FILTERS: [ProjectFilter; 5] = [
    ProjectFilter::All,
    ProjectFilter::Only(ProjectCategory::FullStack),
    ProjectFilter::Only(ProjectCategory::Frontend),
    ProjectFilter::Only(ProjectCategory::Backend),
    ProjectFilter::Only(ProjectCategory::Mobile),
];

impl ProjectFilter {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Only(category) => category.label(),
        }
    }

    #[must_use]
    pub fn matches(self, project: &Project) -> bool {
        match self {
            Self::All => true,
            Self::Only(category) => project.category == category,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub name: String,
    pub description: String,
    pub image: String,
    pub tech_stack: Vec<String>,
    pub github: String,
    pub live: String,
    pub category: ProjectCategory,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SkillCategory {
    pub key: String,
    pub title: String,
    pub description: String,
    pub skills: Vec<Skill>,
}

impl SkillCategory {
    /// First word of the title, used on tabs and orbit bubbles.
    #[must_use]
    pub fn short_title(&self) -> &str {
        self.title.split_whitespace().next().unwrap_or(&self.title)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ContactChannel {
    pub title: String,
    pub value: String,
    pub link: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SocialLink {
    pub name: String,
    pub url: String,
}

/// Everything the page renders besides the seasonal decoration.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PortfolioContent {
    pub profile: Profile,
    pub about: About,
    pub experience: Vec<Experience>,
    pub projects: Vec<Project>,
    pub skills: Vec<SkillCategory>,
    pub contact: Vec<ContactChannel>,
    pub socials: Vec<SocialLink>,
}

impl PortfolioContent {
    /// Parse and validate content JSON.
    ///
    /// # Errors
    ///
    /// Returns [`ContentError`] when the JSON is malformed, a skill level exceeds
    /// 100, the profile has no roles, or a skill category is empty.
    pub fn from_json(json: &str) -> Result<Self, ContentError> {
        let content: Self = serde_json::from_str(json)?;
        content.validate()?;
        Ok(content)
    }

    /// Content compiled into the binary. Invalid bundles degrade to empty content.
    #[must_use]
    pub fn bundled() -> &'static Self {
        &BUNDLED
    }

    fn validate(&self) -> Result<(), ContentError> {
        if self.profile.roles.is_empty() {
            return Err(ContentError::NoRoles);
        }
        if let Some(empty) = self.skills.iter().find(|c| c.skills.is_empty()) {
            return Err(ContentError::EmptyCategory(empty.key.clone()));
        }
        let all_skills = self
            .about
            .skills
            .iter()
            .chain(self.skills.iter().flat_map(|c| c.skills.iter()));
        for skill in all_skills {
            if skill.level > 100 {
                return Err(ContentError::SkillLevel {
                    name: skill.name.clone(),
                    level: skill.level,
                });
            }
        }
        Ok(())
    }

    /// Projects passing `filter`, in authored order.
    pub fn projects_in(&self, filter: ProjectFilter) -> impl Iterator<Item = &Project> {
        self.projects.iter().filter(move |p| filter.matches(p))
    }

    #[must_use]
    pub fn skill_category(&self, key: &str) -> Option<&SkillCategory> {
        self.skills.iter().find(|c| c.key == key)
    }
}
