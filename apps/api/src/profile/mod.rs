//! Profile Data Store — pure, synchronous read accessors over the in-memory
//! portfolio document. Lookups never fail; "not found" is a value, not an error.

use serde::{Deserialize, Serialize};

pub mod data;

/// A single skill. `key` is the internal identifier, `label` the display name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Skill {
    pub key: String,
    pub label: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Education {
    pub degree: String,
    pub institution: String,
    pub year: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub title: String,
    pub short_desc: String,
    pub description: String,
    pub skills: Vec<Skill>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}

/// Listing view of a project: detail fields stripped.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectSummary {
    pub title: String,
    pub short_desc: String,
    pub skills: Vec<Skill>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Experience {
    pub role: String,
    pub company: String,
    pub duration: String,
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Activity {
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SocialLink {
    pub platform: String,
    pub url: String,
}

/// The full portfolio document. Built once at startup from [`data::default_profile`]
/// and shared read-only across the process.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub introduction: String,
    pub educations: Vec<Education>,
    pub skills: Vec<Skill>,
    pub projects: Vec<Project>,
    pub experiences: Vec<Experience>,
    pub extracurricular_activities: Vec<Activity>,
    pub social_links: Vec<SocialLink>,
}

impl Profile {
    pub fn introduction(&self) -> &str {
        &self.introduction
    }

    pub fn educations(&self) -> &[Education] {
        &self.educations
    }

    pub fn skills(&self) -> &[Skill] {
        &self.skills
    }

    pub fn experiences(&self) -> &[Experience] {
        &self.experiences
    }

    pub fn activities(&self) -> &[Activity] {
        &self.extracurricular_activities
    }

    pub fn social_links(&self) -> &[SocialLink] {
        &self.social_links
    }

    /// All projects with detail fields stripped.
    pub fn all_projects(&self) -> Vec<ProjectSummary> {
        self.projects
            .iter()
            .map(|p| ProjectSummary {
                title: p.title.clone(),
                short_desc: p.short_desc.clone(),
                skills: p.skills.clone(),
            })
            .collect()
    }

    /// Case-insensitive exact title match.
    pub fn find_project(&self, title: &str) -> Option<&Project> {
        self.projects
            .iter()
            .find(|p| p.title.eq_ignore_ascii_case(title))
    }

    /// Projects tagged with the given skill, matched case-insensitively
    /// against either the internal key or the display label.
    pub fn find_projects_by_skill(&self, skill_name: &str) -> Vec<&Project> {
        self.projects
            .iter()
            .filter(|p| {
                p.skills.iter().any(|s| {
                    s.key.eq_ignore_ascii_case(skill_name)
                        || s.label.eq_ignore_ascii_case(skill_name)
                })
            })
            .collect()
    }
}
