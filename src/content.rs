use serde::Deserialize;
use thiserror::Error;

use crate::components::icon::IconKind;

const EMBEDDED: &str = include_str!("../assets/content.json");

#[derive(Debug, Error)]
pub enum ContentError {
    #[error("failed to parse content: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Content {
    pub profile: Profile,
    pub roles: Vec<String>,
    pub about: Vec<String>,
    pub skills: Vec<Skill>,
    pub experiences: Vec<Experience>,
    pub projects: Vec<Project>,
    pub contact_methods: Vec<ContactMethod>,
    pub social_links: Vec<SocialLink>,
}

#[derive(Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Profile {
    pub name: String,
    pub greeting: String,
    pub tagline: String,
    pub email: String,
    pub github_url: String,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct Skill {
    pub icon: IconKind,
    pub title: String,
    pub description: String,
    pub tech: Vec<String>,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct Experience {
    pub company: String,
    pub position: String,
    pub period: String,
    pub location: String,
    pub description: String,
    pub achievements: Vec<String>,
    pub tech: Vec<String>,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct Project {
    pub title: String,
    pub description: String,
    pub image: String,
    pub tech: Vec<String>,
    pub live_url: String,
    pub github_url: String,
    #[serde(default)]
    pub featured: bool,
    pub category: String,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct ContactMethod {
    pub icon: IconKind,
    pub label: String,
    pub value: String,
    pub href: String,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct SocialLink {
    pub icon: IconKind,
    pub label: String,
    pub href: String,
}

impl Content {
    pub fn parse(raw: &str) -> Result<Self, ContentError> {
        Ok(serde_json::from_str(raw)?)
    }

    /// The content bundled into the binary at build time.
    pub fn load() -> Result<Self, ContentError> {
        Self::parse(EMBEDDED)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_content_parses() {
        let content = Content::load().expect("bundled content should parse");
        assert_eq!(content.profile.name, "Athos");
        assert_eq!(content.roles.len(), 3);
        assert_eq!(content.skills.len(), 4);
        assert_eq!(content.experiences.len(), 3);
        assert_eq!(content.projects.len(), 4);
        assert_eq!(content.contact_methods.len(), 3);
        assert!(content.projects.iter().filter(|p| p.featured).count() >= 1);
    }

    #[test]
    fn unknown_icon_is_a_parse_error() {
        let raw = r##"{"icon": "rocket", "label": "X", "href": "#"}"##;
        assert!(serde_json::from_str::<SocialLink>(raw).is_err());
    }

    #[test]
    fn malformed_content_reports_parse_error() {
        let err = Content::parse("{ not json").unwrap_err();
        assert!(err.to_string().starts_with("failed to parse content"));
    }
}
