use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use utoipa::ToSchema;
use uuid::Uuid;

pub const DEFAULT_PROFILE_IMAGE: &str = "profile_images/default.png";

// ──────────────────────────────────────────────────────────
// Profile
// ──────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct Profile {
    pub id: Uuid,
    pub full_name: String,
    pub headline: String,
    pub bio: String,
    pub email: String,
    pub phone: Option<String>,
    pub location: Option<String>,
    pub github_url: Option<String>,
    pub linkedin_url: Option<String>,
    /// Media-relative path; the default asset until an image is uploaded.
    pub image: String,
    pub resume: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Profile {
    pub fn has_custom_image(&self) -> bool {
        self.image != DEFAULT_PROFILE_IMAGE
    }
}

// ──────────────────────────────────────────────────────────
// Project
// ──────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct Project {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    /// Comma separated, e.g. "Rust, Actix, Postgres".
    pub technologies: String,
    pub link: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Project {
    pub fn technology_list(&self) -> Vec<&str> {
        self.technologies
            .split(',')
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .collect()
    }
}

// ──────────────────────────────────────────────────────────
// Skills
// ──────────────────────────────────────────────────────────

/// Declaration order is display order.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, ToSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum SkillCategory {
    Language,
    Framework,
    Database,
    Concept,
}

impl SkillCategory {
    pub const ALL: [SkillCategory; 4] = [
        SkillCategory::Language,
        SkillCategory::Framework,
        SkillCategory::Database,
        SkillCategory::Concept,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            SkillCategory::Language => "language",
            SkillCategory::Framework => "framework",
            SkillCategory::Database => "database",
            SkillCategory::Concept => "concept",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SkillCategory::Language => "Programming Language",
            SkillCategory::Framework => "Framework & Technology",
            SkillCategory::Database => "Database",
            SkillCategory::Concept => "Concept",
        }
    }
}

impl fmt::Display for SkillCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown skill category: {0}")]
pub struct UnknownSkillCategory(pub String);

impl FromStr for SkillCategory {
    type Err = UnknownSkillCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SkillCategory::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| UnknownSkillCategory(s.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct Skill {
    pub id: Uuid,
    pub name: String,
    pub category: SkillCategory,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkillGroup {
    pub category: SkillCategory,
    pub label: &'static str,
    pub skills: Vec<Skill>,
}

/// Groups skills by category in declaration order, names sorted
/// case-insensitively inside each group. Empty categories are omitted.
pub fn group_skills(skills: Vec<Skill>) -> Vec<SkillGroup> {
    let mut groups: Vec<SkillGroup> = SkillCategory::ALL
        .into_iter()
        .map(|category| SkillGroup {
            category,
            label: category.label(),
            skills: Vec::new(),
        })
        .collect();

    for skill in skills {
        // ALL is indexed in declaration order
        let slot = skill.category as usize;
        groups[slot].skills.push(skill);
    }

    for group in &mut groups {
        group
            .skills
            .sort_by_key(|s| s.name.to_lowercase());
    }

    groups.retain(|g| !g.skills.is_empty());
    groups
}

// ──────────────────────────────────────────────────────────
// Experience / Education / Certification / Links
// ──────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct Experience {
    pub id: Uuid,
    pub role: String,
    pub company: String,
    pub location: Option<String>,
    pub start_date: NaiveDate,
    /// `None` means the position is current.
    pub end_date: Option<NaiveDate>,
    pub description: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct Education {
    pub id: Uuid,
    pub degree: String,
    pub institution: String,
    pub admission_year: i32,
    pub passing_year: i32,
    pub grade: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct Certification {
    pub id: Uuid,
    pub name: String,
    pub issuer: String,
    pub issue_date: Option<NaiveDate>,
    pub credential_url: Option<String>,
    pub document: Option<String>,
    pub thumbnail: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct OtherLink {
    pub id: Uuid,
    pub name: String,
    pub url: String,
    pub created_at: DateTime<Utc>,
}

// ──────────────────────────────────────────────────────────
// Aggregates
// ──────────────────────────────────────────────────────────

/// Every row the site displays, each list already in display order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PortfolioSnapshot {
    pub profile: Option<Profile>,
    pub projects: Vec<Project>,
    pub skills: Vec<Skill>,
    pub experiences: Vec<Experience>,
    pub educations: Vec<Education>,
    pub certifications: Vec<Certification>,
    pub links: Vec<OtherLink>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PortfolioPage {
    pub profile: Profile,
    pub projects: Vec<Project>,
    pub skill_groups: Vec<SkillGroup>,
    pub experiences: Vec<Experience>,
    pub educations: Vec<Education>,
    pub certifications: Vec<Certification>,
    pub links: Vec<OtherLink>,
}

impl PortfolioSnapshot {
    /// `None` when no profile has been set up yet.
    pub fn into_page(self) -> Option<PortfolioPage> {
        let profile = self.profile?;

        Some(PortfolioPage {
            profile,
            projects: self.projects,
            skill_groups: group_skills(self.skills),
            experiences: self.experiences,
            educations: self.educations,
            certifications: self.certifications,
            links: self.links,
        })
    }
}
