//! Portfolio Content
//!
//! Read-only records shown by the sections. The embedded defaults can be
//! replaced wholesale by a TOML file with the same shape.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::config::ConfigError;

/// Header card and hero
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    /// Hero photo URI, also the carousel fallback image
    #[serde(default)]
    pub photo: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    pub label: String,
    pub url: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub title: String,
    pub subtitle: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub description: Vec<String>,
    #[serde(default)]
    pub links: Vec<Link>,
    /// Opaque image URIs for the detail carousel
    #[serde(default)]
    pub images: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Experience {
    pub role: String,
    pub organization: String,
    pub period: String,
    #[serde(default)]
    pub highlights: Vec<String>,
}

impl Experience {
    /// Heading line joining role and organization
    pub fn heading(&self) -> String {
        format!("{} — {}", self.role, self.organization)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Education {
    pub school: String,
    pub program: String,
    pub period: String,
}

impl Education {
    pub fn heading(&self) -> String {
        format!("{} — {}", self.school, self.program)
    }
}

/// Everything the view displays
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Portfolio {
    pub profile: Profile,
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub experience: Vec<Experience>,
    #[serde(default)]
    pub education: Vec<Education>,
    #[serde(default)]
    pub contact: Vec<Link>,
}

impl Portfolio {
    /// Load from a TOML file
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let portfolio = Self::from_toml_str(&text)?;
        tracing::info!(
            path = %path.display(),
            projects = portfolio.projects.len(),
            "loaded portfolio content"
        );
        Ok(portfolio)
    }

    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }
}

impl Default for Portfolio {
    fn default() -> Self {
        Self {
            profile: Profile {
                name: "Kai Samson".to_string(),
                photo: Some("/your-photo.jpg".to_string()),
            },
            projects: vec![
                Project {
                    title: "Neuronami Golf AI".to_string(),
                    subtitle: "AI Swing Analysis App".to_string(),
                    tags: vec!["Swift".into(), "YOLO".into(), "CoreML".into()],
                    description: vec![
                        "iOS app using pose estimation + ML to compare user swings to \
                         professional models."
                            .to_string(),
                    ],
                    links: Vec::new(),
                    images: vec![
                        "/projects/neuronami-1.png".to_string(),
                        "/projects/neuronami-2.png".to_string(),
                        "/projects/neuronami-3.png".to_string(),
                    ],
                },
                Project {
                    title: "Mycel OS".to_string(),
                    subtitle: "Brokerless Freight Platform".to_string(),
                    tags: vec!["React".into(), "Firebase".into(), "Swift".into()],
                    description: vec![
                        "Real-time logistics platform built for OppFest 2025 — 1st place winner."
                            .to_string(),
                    ],
                    links: Vec::new(),
                    images: vec![
                        "/projects/mycel-1.png".to_string(),
                        "/projects/mycel-2.png".to_string(),
                    ],
                },
            ],
            experience: vec![
                Experience {
                    role: "Founder".to_string(),
                    organization: "Neuronami".to_string(),
                    period: "2024–Present".to_string(),
                    highlights: Vec::new(),
                },
                Experience {
                    role: "Product Lead".to_string(),
                    organization: "Mycel OS".to_string(),
                    period: "OppFest 2025 Winner".to_string(),
                    highlights: Vec::new(),
                },
                Experience {
                    role: "Software Developer Intern".to_string(),
                    organization: "14 Oranges Software".to_string(),
                    period: "2020 Oct–2021 Aug".to_string(),
                    highlights: Vec::new(),
                },
            ],
            education: vec![
                Education {
                    school: "Simon Fraser University".to_string(),
                    program: "BSc Computing Science".to_string(),
                    period: "2025–Present".to_string(),
                },
                Education {
                    school: "Langara College".to_string(),
                    program: "ASc Computer Science (Part-time)".to_string(),
                    period: "2021–2025".to_string(),
                },
            ],
            contact: vec![
                Link {
                    label: "GitHub".to_string(),
                    url: "https://github.com/".to_string(),
                },
                Link {
                    label: "LinkedIn".to_string(),
                    url: "https://www.linkedin.com/".to_string(),
                },
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_content() {
        let p = Portfolio::default();
        assert_eq!(p.profile.name, "Kai Samson");
        assert_eq!(p.projects.len(), 2);
        assert_eq!(p.experience[0].heading(), "Founder — Neuronami");
        assert_eq!(
            p.education[1].heading(),
            "Langara College — ASc Computer Science (Part-time)"
        );
    }

    #[test]
    fn test_parse_minimal_toml() {
        let p = Portfolio::from_toml_str(
            r#"
            [profile]
            name = "Ada"

            [[projects]]
            title = "Engine"
            subtitle = "Analytical"
            tags = ["brass"]
            "#,
        )
        .unwrap();

        assert_eq!(p.profile.name, "Ada");
        assert_eq!(p.profile.photo, None);
        assert_eq!(p.projects[0].tags, vec!["brass"]);
        assert!(p.projects[0].images.is_empty());
        assert!(p.experience.is_empty());
    }

    #[test]
    fn test_roundtrip_default_through_toml() {
        let text = toml::to_string(&Portfolio::default()).unwrap();
        assert_eq!(Portfolio::from_toml_str(&text).unwrap(), Portfolio::default());
    }

    #[test]
    fn test_missing_profile_is_error() {
        assert!(Portfolio::from_toml_str("[[projects]]\ntitle = \"x\"\n").is_err());
    }
}
