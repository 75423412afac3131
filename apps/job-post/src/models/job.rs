use serde::{Deserialize, Serialize};

use crate::form::salary::SalaryRange;

/// Locations offered by the picker. No other value is accepted.
pub const LOCATIONS: &[&str] = &[
    "Remote",
    "New York, NY",
    "San Francisco, CA",
    "London, UK",
    "Toronto, CA",
    "Berlin, DE",
    "Paris, FR",
    "Sydney, AU",
    "Tokyo, JP",
    "Singapore, SG",
];

/// Suggestion pool for the requirements autocomplete, in display order.
pub const REQUIREMENT_SUGGESTIONS: &[&str] = &[
    "JavaScript",
    "TypeScript",
    "React",
    "Node.js",
    "Python",
    "Java",
    "C#",
    "AWS",
    "GraphQL",
    "REST API",
    "SQL",
    "NoSQL",
    "Git",
    "Docker",
    "Kubernetes",
    "CI/CD",
    "3+ years experience",
    "5+ years experience",
    "Bachelor's degree",
    "Master's degree",
    "Agile methodologies",
    "Team leadership",
    "Remote work",
];

/// Ordered, duplicate-free list of requirement tags.
/// Equality is exact and case-sensitive; insertion order is display order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Requirements(Vec<String>);

impl Requirements {
    /// Appends `tag` unless it is blank or already present. Returns whether it was added.
    pub fn insert(&mut self, tag: &str) -> bool {
        if tag.trim().is_empty() || self.contains(tag) {
            return false;
        }
        self.0.push(tag.to_string());
        true
    }

    /// Removes the exact match for `tag`, if any.
    pub fn remove(&mut self, tag: &str) -> bool {
        match self.0.iter().position(|t| t == tag) {
            Some(idx) => {
                self.0.remove(idx);
                true
            }
            None => false,
        }
    }

    pub fn contains(&self, tag: &str) -> bool {
        self.0.iter().any(|t| t == tag)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

/// The in-progress, unsaved job posting.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JobDraft {
    pub title: String,
    pub description: String,
    pub location: Option<String>,
    pub salary: SalaryRange,
    pub requirements: Requirements,
}

impl JobDraft {
    /// Builds the wire payload. Text fields are sent as typed; callers validate first.
    pub fn to_payload(&self) -> JobPayload {
        JobPayload {
            title: self.title.clone(),
            description: self.description.clone(),
            location: self.location.clone().unwrap_or_default(),
            salary_range: self.salary.label(),
            requirements: self.requirements.as_slice().to_vec(),
        }
    }
}

/// Body of `POST /api/jobs`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobPayload {
    pub title: String,
    pub description: String,
    pub location: String,
    /// Formatted as `$<min>k-$<max>k`.
    pub salary_range: String,
    pub requirements: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_appends_in_order() {
        let mut reqs = Requirements::default();
        assert!(reqs.insert("Rust"));
        assert!(reqs.insert("Docker"));
        assert_eq!(reqs.as_slice(), ["Rust", "Docker"]);
    }

    #[test]
    fn test_insert_rejects_blank_and_duplicates() {
        let mut reqs = Requirements::default();
        assert!(!reqs.insert("   "));
        assert!(reqs.insert("React"));
        assert!(!reqs.insert("React"));
        assert_eq!(reqs.len(), 1);
    }

    #[test]
    fn test_insert_is_case_sensitive() {
        let mut reqs = Requirements::default();
        assert!(reqs.insert("react"));
        assert!(reqs.insert("React"));
        assert_eq!(reqs.len(), 2);
    }

    #[test]
    fn test_remove_then_insert_moves_to_end() {
        let mut reqs = Requirements::default();
        reqs.insert("SQL");
        reqs.insert("Git");
        reqs.insert("AWS");
        assert!(reqs.remove("SQL"));
        assert!(reqs.insert("SQL"));
        assert_eq!(reqs.as_slice(), ["Git", "AWS", "SQL"]);
    }

    #[test]
    fn test_remove_absent_is_noop() {
        let mut reqs = Requirements::default();
        reqs.insert("Git");
        assert!(!reqs.remove("git"));
        assert_eq!(reqs.as_slice(), ["Git"]);
    }

    #[test]
    fn test_payload_serializes_camel_case() {
        let mut draft = JobDraft {
            title: "Engineer".to_string(),
            description: "Build things".to_string(),
            location: Some("Remote".to_string()),
            ..JobDraft::default()
        };
        draft.requirements.insert("React");

        let json = serde_json::to_value(draft.to_payload()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "title": "Engineer",
                "description": "Build things",
                "location": "Remote",
                "salaryRange": "$50k-$150k",
                "requirements": ["React"]
            })
        );
    }

    #[test]
    fn test_default_draft_is_empty() {
        let draft = JobDraft::default();
        assert!(draft.title.is_empty());
        assert!(draft.location.is_none());
        assert!(draft.requirements.is_empty());
        assert_eq!((draft.salary.min(), draft.salary.max()), (50, 150));
    }
}
