//! Plain-text facts about the portfolio owner that the model must stay within.

use std::fmt::Write;

use crate::portfolio::application::domain::entities::{group_skills, PortfolioSnapshot};

const NONE_LISTED: &str = "None listed.";

/// The text block handed to the model as its only source of facts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroundingContext(String);

impl GroundingContext {
    pub fn from_snapshot(snapshot: &PortfolioSnapshot) -> Self {
        let mut out = String::new();

        // Writing into a String cannot fail.
        let _ = write_sections(&mut out, snapshot);

        Self(out.trim_end().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

fn write_sections(out: &mut String, snapshot: &PortfolioSnapshot) -> std::fmt::Result {
    writeln!(out, "PROFILE")?;
    match &snapshot.profile {
        Some(p) => {
            writeln!(out, "Name: {}", p.full_name)?;
            writeln!(out, "Headline: {}", p.headline)?;
            writeln!(out, "Email: {}", p.email)?;
            if let Some(location) = &p.location {
                writeln!(out, "Location: {location}")?;
            }
            if let Some(phone) = &p.phone {
                writeln!(out, "Phone: {phone}")?;
            }
            if let Some(github) = &p.github_url {
                writeln!(out, "GitHub: {github}")?;
            }
            if let Some(linkedin) = &p.linkedin_url {
                writeln!(out, "LinkedIn: {linkedin}")?;
            }
            writeln!(out, "Resume available: {}", if p.resume.is_some() { "yes" } else { "no" })?;
            writeln!(out, "About: {}", p.bio)?;
        }
        None => writeln!(out, "No profile data is available.")?,
    }

    writeln!(out, "\nSKILLS")?;
    let groups = group_skills(snapshot.skills.clone());
    if groups.is_empty() {
        writeln!(out, "{NONE_LISTED}")?;
    }
    for group in groups {
        let names: Vec<&str> = group.skills.iter().map(|s| s.name.as_str()).collect();
        writeln!(out, "{}: {}", group.label, names.join(", "))?;
    }

    writeln!(out, "\nEXPERIENCE")?;
    if snapshot.experiences.is_empty() {
        writeln!(out, "{NONE_LISTED}")?;
    }
    for e in &snapshot.experiences {
        let end = e
            .end_date
            .map_or_else(|| "present".to_string(), |d| d.format("%Y-%m").to_string());
        write!(out, "- {} at {}", e.role, e.company)?;
        if let Some(location) = &e.location {
            write!(out, " ({location})")?;
        }
        writeln!(out, ", {} to {end}: {}", e.start_date.format("%Y-%m"), e.description)?;
    }

    writeln!(out, "\nPROJECTS")?;
    if snapshot.projects.is_empty() {
        writeln!(out, "{NONE_LISTED}")?;
    }
    for p in &snapshot.projects {
        write!(out, "- {} [{}]: {}", p.title, p.technology_list().join(", "), p.description)?;
        match &p.link {
            Some(link) => writeln!(out, " ({link})")?,
            None => writeln!(out)?,
        }
    }

    writeln!(out, "\nEDUCATION")?;
    if snapshot.educations.is_empty() {
        writeln!(out, "{NONE_LISTED}")?;
    }
    for e in &snapshot.educations {
        write!(
            out,
            "- {}, {} ({}-{})",
            e.degree, e.institution, e.admission_year, e.passing_year
        )?;
        match &e.grade {
            Some(grade) => writeln!(out, ", grade {grade}")?,
            None => writeln!(out)?,
        }
    }

    writeln!(out, "\nCERTIFICATIONS")?;
    if snapshot.certifications.is_empty() {
        writeln!(out, "{NONE_LISTED}")?;
    }
    for c in &snapshot.certifications {
        write!(out, "- {} by {}", c.name, c.issuer)?;
        if let Some(date) = c.issue_date {
            write!(out, " (issued {date})")?;
        }
        match &c.credential_url {
            Some(url) => writeln!(out, ": {url}")?,
            None => writeln!(out)?,
        }
    }

    writeln!(out, "\nLINKS")?;
    if snapshot.links.is_empty() {
        writeln!(out, "{NONE_LISTED}")?;
    }
    for l in &snapshot.links {
        writeln!(out, "- {}: {}", l.name, l.url)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::portfolio::application::domain::entities::{
        Experience, Profile, Skill, SkillCategory, DEFAULT_PROFILE_IMAGE,
    };
    use chrono::{NaiveDate, Utc};
    use uuid::Uuid;

    fn profile() -> Profile {
        Profile {
            id: Uuid::new_v4(),
            full_name: "Jane Doe".to_string(),
            headline: "Backend Engineer".to_string(),
            bio: "Builds reliable services.".to_string(),
            email: "jane@example.com".to_string(),
            phone: None,
            location: Some("Lisbon".to_string()),
            github_url: Some("https://github.com/jane".to_string()),
            linkedin_url: None,
            image: DEFAULT_PROFILE_IMAGE.to_string(),
            resume: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn skill(name: &str, category: SkillCategory) -> Skill {
        Skill {
            id: Uuid::new_v4(),
            name: name.to_string(),
            category,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_context_contains_every_section() {
        let snapshot = PortfolioSnapshot {
            profile: Some(profile()),
            skills: vec![
                skill("Rust", SkillCategory::Language),
                skill("PostgreSQL", SkillCategory::Database),
                skill("Go", SkillCategory::Language),
            ],
            experiences: vec![Experience {
                id: Uuid::new_v4(),
                role: "Engineer".to_string(),
                company: "Acme".to_string(),
                location: None,
                start_date: NaiveDate::from_ymd_opt(2021, 5, 1).unwrap(),
                end_date: None,
                description: "Payments".to_string(),
                created_at: Utc::now(),
            }],
            ..Default::default()
        };

        let context = GroundingContext::from_snapshot(&snapshot);
        let text = context.as_str();

        assert!(text.starts_with("PROFILE\nName: Jane Doe"));
        assert!(text.contains("Location: Lisbon"));
        assert!(text.contains("Programming Language: Go, Rust"));
        assert!(text.contains("Database: PostgreSQL"));
        assert!(text.contains("- Engineer at Acme, 2021-05 to present: Payments"));
        for heading in ["EDUCATION", "CERTIFICATIONS", "LINKS", "PROJECTS"] {
            assert!(text.contains(heading), "missing {heading}");
        }
    }

    #[test]
    fn test_missing_profile_is_stated() {
        let context = GroundingContext::from_snapshot(&PortfolioSnapshot::default());

        assert!(context.as_str().contains("No profile data is available."));
        assert!(context.as_str().contains("SKILLS\nNone listed."));
    }
}
