//! Admin-submitted content before persistence.

use chrono::NaiveDate;
use email_address::EmailAddress;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use utoipa::ToSchema;

use super::entities::SkillCategory;

static HTTP_URL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^https?://[^\s/$.?#][^\s]*$").expect("static URL pattern compiles")
});

pub const MIN_YEAR: i32 = 1900;
pub const MAX_YEAR: i32 = 2100;
pub const EMAIL_MAX_CHARS: usize = 254;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{field}: {message}")]
pub struct DraftError {
    pub field: &'static str,
    pub message: String,
}

impl DraftError {
    fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

pub trait Validate {
    fn validate(&self) -> Result<(), DraftError>;
}

fn required(field: &'static str, value: &str, max_chars: usize) -> Result<(), DraftError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(DraftError::new(field, "is required"));
    }
    max_len(field, value, max_chars)
}

fn max_len(field: &'static str, value: &str, max_chars: usize) -> Result<(), DraftError> {
    if value.chars().count() > max_chars {
        return Err(DraftError::new(
            field,
            format!("must be at most {max_chars} characters"),
        ));
    }
    Ok(())
}

fn optional(field: &'static str, value: Option<&str>, max_chars: usize) -> Result<(), DraftError> {
    match value {
        Some(v) => max_len(field, v, max_chars),
        None => Ok(()),
    }
}

fn http_url(field: &'static str, value: &str) -> Result<(), DraftError> {
    if HTTP_URL.is_match(value.trim()) {
        Ok(())
    } else {
        Err(DraftError::new(field, "must be an http(s) URL"))
    }
}

fn optional_url(field: &'static str, value: Option<&str>) -> Result<(), DraftError> {
    match value {
        Some(v) if !v.trim().is_empty() => http_url(field, v),
        _ => Ok(()),
    }
}

fn year(field: &'static str, value: i32) -> Result<(), DraftError> {
    if !(MIN_YEAR..=MAX_YEAR).contains(&value) {
        return Err(DraftError::new(
            field,
            format!("must be between {MIN_YEAR} and {MAX_YEAR}"),
        ));
    }
    Ok(())
}

/// Empty optional strings are stored as NULL.
pub fn normalize_optional(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

// ──────────────────────────────────────────────────────────
// Drafts
// ──────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ProfileDraft {
    pub full_name: String,
    pub headline: String,
    pub bio: String,
    pub email: String,
    pub phone: Option<String>,
    pub location: Option<String>,
    pub github_url: Option<String>,
    pub linkedin_url: Option<String>,
}

impl Validate for ProfileDraft {
    fn validate(&self) -> Result<(), DraftError> {
        required("full_name", &self.full_name, 150)?;
        required("headline", &self.headline, 200)?;
        required("bio", &self.bio, 10_000)?;
        max_len("email", self.email.trim(), EMAIL_MAX_CHARS)?;
        if !EmailAddress::is_valid(self.email.trim()) {
            return Err(DraftError::new("email", "must be a valid email address"));
        }
        optional("phone", self.phone.as_deref(), 30)?;
        optional("location", self.location.as_deref(), 150)?;
        optional_url("github_url", self.github_url.as_deref())?;
        optional_url("linkedin_url", self.linkedin_url.as_deref())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ProjectDraft {
    pub title: String,
    pub description: String,
    #[schema(example = "Rust, Actix, PostgreSQL")]
    pub technologies: String,
    pub link: Option<String>,
}

impl Validate for ProjectDraft {
    fn validate(&self) -> Result<(), DraftError> {
        required("title", &self.title, 200)?;
        required("description", &self.description, 10_000)?;
        required("technologies", &self.technologies, 200)?;
        optional_url("link", self.link.as_deref())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct SkillDraft {
    pub name: String,
    pub category: SkillCategory,
}

impl Validate for SkillDraft {
    fn validate(&self) -> Result<(), DraftError> {
        required("name", &self.name, 100)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ExperienceDraft {
    pub role: String,
    pub company: String,
    pub location: Option<String>,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    pub description: String,
}

impl Validate for ExperienceDraft {
    fn validate(&self) -> Result<(), DraftError> {
        required("role", &self.role, 150)?;
        required("company", &self.company, 150)?;
        optional("location", self.location.as_deref(), 150)?;
        required("description", &self.description, 10_000)?;
        if let Some(end) = self.end_date {
            if end < self.start_date {
                return Err(DraftError::new("end_date", "must not be before start_date"));
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct EducationDraft {
    pub degree: String,
    pub institution: String,
    #[schema(example = 2016)]
    pub admission_year: i32,
    #[schema(example = 2020)]
    pub passing_year: i32,
    pub grade: Option<String>,
}

impl Validate for EducationDraft {
    fn validate(&self) -> Result<(), DraftError> {
        required("degree", &self.degree, 150)?;
        required("institution", &self.institution, 200)?;
        year("admission_year", self.admission_year)?;
        year("passing_year", self.passing_year)?;
        if self.admission_year >= self.passing_year {
            return Err(DraftError::new(
                "passing_year",
                "Admission year must be less than passing year.",
            ));
        }
        optional("grade", self.grade.as_deref(), 50)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct CertificationDraft {
    pub name: String,
    pub issuer: String,
    pub issue_date: Option<NaiveDate>,
    pub credential_url: Option<String>,
}

impl Validate for CertificationDraft {
    fn validate(&self) -> Result<(), DraftError> {
        required("name", &self.name, 200)?;
        required("issuer", &self.issuer, 200)?;
        optional_url("credential_url", self.credential_url.as_deref())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct LinkDraft {
    pub name: String,
    pub url: String,
}

impl Validate for LinkDraft {
    fn validate(&self) -> Result<(), DraftError> {
        required("name", &self.name, 100)?;
        http_url("url", &self.url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn education(admission_year: i32, passing_year: i32) -> EducationDraft {
        EducationDraft {
            degree: "BSc Computer Science".to_string(),
            institution: "State University".to_string(),
            admission_year,
            passing_year,
            grade: None,
        }
    }

    #[test]
    fn test_education_admission_must_precede_passing() {
        assert!(education(2016, 2020).validate().is_ok());

        let same_year = education(2020, 2020).validate().unwrap_err();
        assert_eq!(same_year.field, "passing_year");
        assert_eq!(
            same_year.message,
            "Admission year must be less than passing year."
        );

        assert!(education(2021, 2020).validate().is_err());
    }

    #[test]
    fn test_profile_email_longer_than_column_rejected() {
        let domain = vec!["b".repeat(60); 4].join(".");
        let draft = ProfileDraft {
            full_name: "Ada Lovelace".to_string(),
            headline: "Engineer".to_string(),
            bio: "Writes programs.".to_string(),
            email: format!("{}@{domain}.com", "a".repeat(64)),
            phone: None,
            location: None,
            github_url: None,
            linkedin_url: None,
        };
        assert!(EmailAddress::is_valid(&draft.email));

        let err = draft.validate().unwrap_err();
        assert_eq!(err.field, "email");
        assert_eq!(err.message, "must be at most 254 characters");

        let ok = ProfileDraft {
            email: "ada@example.com".to_string(),
            ..draft
        };
        assert!(ok.validate().is_ok());
    }

    #[test]
    fn test_education_years_in_range() {
        let err = education(1850, 2020).validate().unwrap_err();
        assert_eq!(err.field, "admission_year");
    }

    #[test]
    fn test_experience_end_before_start_rejected() {
        let draft = ExperienceDraft {
            role: "Engineer".to_string(),
            company: "Acme".to_string(),
            location: None,
            start_date: NaiveDate::from_ymd_opt(2022, 5, 1).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2021, 1, 1),
            description: "Built things".to_string(),
        };

        assert_eq!(draft.validate().unwrap_err().field, "end_date");

        let current = ExperienceDraft {
            end_date: None,
            ..draft
        };
        assert!(current.validate().is_ok());
    }

    #[test]
    fn test_urls_must_be_http() {
        let link = LinkDraft {
            name: "Blog".to_string(),
            url: "javascript:alert(1)".to_string(),
        };
        assert_eq!(link.validate().unwrap_err().field, "url");

        let link = LinkDraft {
            name: "Blog".to_string(),
            url: "HTTPS://blog.example.com/posts".to_string(),
        };
        assert!(link.validate().is_ok());
    }

    #[test]
    fn test_project_blank_link_allowed() {
        let draft = ProjectDraft {
            title: "Portfolio".to_string(),
            description: "This site".to_string(),
            technologies: "Rust".to_string(),
            link: Some("  ".to_string()),
        };
        assert!(draft.validate().is_ok());
    }

    #[test]
    fn test_skill_name_required() {
        let draft = SkillDraft {
            name: "   ".to_string(),
            category: SkillCategory::Concept,
        };
        assert_eq!(
            draft.validate().unwrap_err(),
            DraftError::new("name", "is required")
        );
    }

    #[test]
    fn test_profile_email_validated() {
        let draft = ProfileDraft {
            full_name: "Jane Doe".to_string(),
            headline: "Backend Engineer".to_string(),
            bio: "Builds services.".to_string(),
            email: "jane@".to_string(),
            phone: None,
            location: None,
            github_url: Some("https://github.com/jane".to_string()),
            linkedin_url: None,
        };
        assert_eq!(draft.validate().unwrap_err().field, "email");
    }

    #[test]
    fn test_normalize_optional() {
        assert_eq!(normalize_optional(Some("  ".to_string())), None);
        assert_eq!(
            normalize_optional(Some(" x ".to_string())),
            Some("x".to_string())
        );
    }
}
