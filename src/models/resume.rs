use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;

use super::{deserialize_nullable_default, deserialize_nullable_string, deserialize_timestamp};
use super::LlmAnalysis;

/// Server-assigned resume identifier
pub type ResumeId = i64;

/// One row of the resume history, as returned by the list endpoint
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ResumeSummary {
    pub id: ResumeId,
    pub filename: String,
    #[serde(deserialize_with = "deserialize_timestamp")]
    pub uploaded_at: DateTime<Utc>,
    /// Candidate name, when extraction found one
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

/// Contact block of a parsed resume. Every field is optional.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ContactInfo {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub linkedin: Option<String>,
    #[serde(default)]
    pub github: Option<String>,
    #[serde(default)]
    pub portfolio_url: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct WorkExperience {
    #[serde(default, deserialize_with = "deserialize_nullable_string")]
    pub company: String,
    #[serde(default, deserialize_with = "deserialize_nullable_string")]
    pub role: String,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub end_date: Option<String>,
    #[serde(default)]
    pub duration_months: Option<u32>,
    #[serde(default, deserialize_with = "deserialize_nullable_default")]
    pub responsibilities: Vec<String>,
    #[serde(default, deserialize_with = "deserialize_nullable_default")]
    pub achievements: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Education {
    #[serde(default, deserialize_with = "deserialize_nullable_string")]
    pub institution: String,
    #[serde(default, deserialize_with = "deserialize_nullable_string")]
    pub degree: String,
    #[serde(default, deserialize_with = "deserialize_nullable_string")]
    pub major: String,
    #[serde(default)]
    pub graduation_date: Option<String>,
    #[serde(default)]
    pub gpa: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default, deserialize_with = "deserialize_nullable_default")]
    pub relevant_coursework: Vec<String>,
}

/// A named skill with an optional proficiency label ("expert", "3 years", ...)
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Skill {
    pub name: String,
    #[serde(default)]
    pub proficiency: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct SkillSet {
    #[serde(default, deserialize_with = "deserialize_nullable_default")]
    pub technical: Vec<Skill>,
    #[serde(default, deserialize_with = "deserialize_nullable_default")]
    pub soft: Vec<String>,
    #[serde(default, deserialize_with = "deserialize_nullable_default")]
    pub tools: Vec<Skill>,
    /// Spoken languages. Objects such as `{"language": "French"}` are
    /// flattened to their name.
    #[serde(default, deserialize_with = "deserialize_languages")]
    pub languages: Vec<String>,
}

impl SkillSet {
    pub fn is_empty(&self) -> bool {
        self.technical.is_empty()
            && self.soft.is_empty()
            && self.tools.is_empty()
            && self.languages.is_empty()
    }
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum LanguageEntry {
    Name(String),
    Fields(BTreeMap<String, Option<String>>),
}

impl LanguageEntry {
    fn into_name(self) -> Option<String> {
        match self {
            LanguageEntry::Name(name) => Some(name),
            LanguageEntry::Fields(mut fields) => ["language", "name"]
                .iter()
                .find_map(|key| fields.remove(*key).flatten())
                .or_else(|| fields.into_values().flatten().next()),
        }
    }
}

fn deserialize_languages<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let entries = Option::<Vec<LanguageEntry>>::deserialize(deserializer)?.unwrap_or_default();
    Ok(entries
        .into_iter()
        .filter_map(LanguageEntry::into_name)
        .collect())
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Project {
    #[serde(default, deserialize_with = "deserialize_nullable_string")]
    pub name: String,
    #[serde(default, deserialize_with = "deserialize_nullable_string")]
    pub description: String,
    #[serde(default, deserialize_with = "deserialize_nullable_default")]
    pub technologies_used: Vec<String>,
    #[serde(default)]
    pub link: Option<String>,
    #[serde(default)]
    pub repo_link: Option<String>,
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub end_date: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Certification {
    #[serde(default, deserialize_with = "deserialize_nullable_string")]
    pub name: String,
    #[serde(default)]
    pub issuing_organization: Option<String>,
    #[serde(default)]
    pub issue_date: Option<String>,
    #[serde(default)]
    pub expiration_date: Option<String>,
    #[serde(default)]
    pub credential_id: Option<String>,
    #[serde(default)]
    pub credential_url: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Award {
    #[serde(default, deserialize_with = "deserialize_nullable_string")]
    pub name: String,
    #[serde(default)]
    pub issuer: Option<String>,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

/// Fully structured record derived from one uploaded resume.
///
/// `llm_analysis` is `None` until the server has finished its analysis pass;
/// that is a normal state, not an error. Every list keeps server order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ResumeDetail {
    pub id: ResumeId,
    pub filename: String,
    #[serde(deserialize_with = "deserialize_timestamp")]
    pub uploaded_at: DateTime<Utc>,
    #[serde(default, deserialize_with = "deserialize_nullable_string")]
    pub raw_text: String,
    #[serde(default, deserialize_with = "deserialize_nullable_default")]
    pub contact_info: ContactInfo,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default, deserialize_with = "deserialize_nullable_default")]
    pub work_experience: Vec<WorkExperience>,
    #[serde(default, deserialize_with = "deserialize_nullable_default")]
    pub education: Vec<Education>,
    #[serde(default, deserialize_with = "deserialize_nullable_default")]
    pub skills: SkillSet,
    #[serde(default, deserialize_with = "deserialize_nullable_default")]
    pub projects: Vec<Project>,
    #[serde(default, deserialize_with = "deserialize_nullable_default")]
    pub certifications: Vec<Certification>,
    #[serde(default, deserialize_with = "deserialize_nullable_default")]
    pub awards: Vec<Award>,
    #[serde(default)]
    pub llm_analysis: Option<LlmAnalysis>,
}

impl ResumeDetail {
    /// Whether the server-side analysis has completed for this resume
    pub fn has_analysis(&self) -> bool {
        self.llm_analysis.is_some()
    }

    /// The list-row projection of this record
    pub fn to_summary(&self) -> ResumeSummary {
        ResumeSummary {
            id: self.id,
            filename: self.filename.clone(),
            uploaded_at: self.uploaded_at,
            name: self.contact_info.name.clone(),
            email: self.contact_info.email.clone(),
        }
    }
}
