use std::fmt;
use std::str::FromStr;

use crate::components::icon::IconKind;

/// Top-level anchors of the page, in the order they are laid out.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SectionId {
    Hero,
    About,
    Projects,
    Experience,
    Contact,
}

impl SectionId {
    pub const ALL: [SectionId; 5] = [
        SectionId::Hero,
        SectionId::About,
        SectionId::Projects,
        SectionId::Experience,
        SectionId::Contact,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            SectionId::Hero => "hero",
            SectionId::About => "about",
            SectionId::Projects => "projects",
            SectionId::Experience => "experience",
            SectionId::Contact => "contact",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SectionId::Hero => "Home",
            SectionId::About => "About",
            SectionId::Projects => "Projects",
            SectionId::Experience => "Experience",
            SectionId::Contact => "Contact",
        }
    }

    pub fn icon(self) -> IconKind {
        match self {
            SectionId::Hero => IconKind::Home,
            SectionId::About => IconKind::Eye,
            SectionId::Projects => IconKind::Heart,
            SectionId::Experience => IconKind::Send,
            SectionId::Contact => IconKind::Sun,
        }
    }
}

impl Default for SectionId {
    fn default() -> Self {
        SectionId::Hero
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownSection(pub String);

impl fmt::Display for UnknownSection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown section `{}`", self.0)
    }
}

impl FromStr for SectionId {
    type Err = UnknownSection;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| UnknownSection(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_round_trip_through_anchor_names() {
        for id in SectionId::ALL {
            assert_eq!(id.as_str().parse::<SectionId>(), Ok(id));
        }
        assert_eq!(
            "blog".parse::<SectionId>(),
            Err(UnknownSection("blog".to_string()))
        );
    }

    #[test]
    fn nav_order_starts_at_hero() {
        let names: Vec<&str> = SectionId::ALL.iter().map(|id| id.as_str()).collect();
        assert_eq!(names, vec!["hero", "about", "projects", "experience", "contact"]);
        assert_eq!(SectionId::default(), SectionId::Hero);
    }
}
