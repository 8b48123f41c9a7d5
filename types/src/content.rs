//! Static page content.
//!
//! Everything the page displays besides interaction state: navigation labels,
//! the hero block, skills, projects and contact details. Content is loaded once
//! at startup (built in, or from a TOML file) and validated before any
//! controller is created. It is never mutated afterwards.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::SectionId;

const DEFAULT_PROFICIENCY: u8 = 78;

const fn default_proficiency() -> u8 {
    DEFAULT_PROFICIENCY
}

/// Defects in static content. These are startup-time failures: the content
/// has to be fixed, there is no runtime recovery.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContentError {
    #[error("navigation must list at least one section")]
    EmptyNavigation,
    #[error("section `{0}` appears more than once in navigation")]
    DuplicateNavItem(SectionId),
    #[error("{field} must not be blank")]
    Blank { field: String },
    #[error("{field} contains control characters")]
    ControlCharacters { field: String },
    #[error("skill `{0}` is listed more than once")]
    DuplicateSkill(String),
    #[error("skill `{name}` has proficiency {value}%, expected 0-100")]
    ProficiencyOutOfRange { name: String, value: u8 },
    #[error("project `{0}` is listed more than once")]
    DuplicateProject(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SiteContent {
    pub hero: HeroContent,
    pub nav: Vec<NavItem>,
    pub about: AboutContent,
    #[serde(default)]
    pub skills: Vec<Skill>,
    #[serde(default)]
    pub projects: Vec<Project>,
    pub contact: ContactContent,
    #[serde(default)]
    pub footer: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NavItem {
    pub id: SectionId,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HeroContent {
    /// Text revealed by the typewriter.
    pub name: String,
    pub role: String,
    pub tagline: String,
    #[serde(default)]
    pub socials: Vec<SocialLink>,
    /// Path or URL of the downloadable resume.
    #[serde(default)]
    pub resume: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SocialKind {
    Github,
    Linkedin,
    Email,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SocialLink {
    pub kind: SocialKind,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AboutContent {
    pub paragraphs: Vec<String>,
    #[serde(default)]
    pub highlights: Vec<Highlight>,
}

/// Headline figure shown next to the about text ("20+ Projects Completed").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Highlight {
    pub value: String,
    pub label: String,
}

/// Icon reference for a skill card. Rendering picks the glyph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SkillIcon {
    #[default]
    Code,
    Palette,
    Smartphone,
    Globe,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Skill {
    pub name: String,
    pub category: String,
    #[serde(default)]
    pub icon: SkillIcon,
    /// Percentage, 0-100.
    #[serde(default = "default_proficiency")]
    pub proficiency: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Project {
    pub title: String,
    pub description: String,
    pub tech: Vec<String>,
    pub image: String,
    pub link: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ContactContent {
    pub heading: String,
    pub message: String,
    pub email: String,
    #[serde(default)]
    pub linkedin: Option<String>,
    #[serde(default)]
    pub github: Option<String>,
}

impl SiteContent {
    /// Nav label for a section, falling back to the section id.
    #[must_use]
    pub fn label_for(&self, id: SectionId) -> &str {
        self.nav
            .iter()
            .find(|item| item.id == id)
            .map_or(id.as_str(), |item| item.label.as_str())
    }

    /// Reject content that would render incorrectly or ambiguously.
    pub fn validate(&self) -> Result<(), ContentError> {
        if self.nav.is_empty() {
            return Err(ContentError::EmptyNavigation);
        }
        let mut seen = HashSet::new();
        for (i, item) in self.nav.iter().enumerate() {
            if !seen.insert(item.id) {
                return Err(ContentError::DuplicateNavItem(item.id));
            }
            require_text(&item.label, || format!("nav[{i}].label"))?;
        }

        check_text(&self.hero.name, || "hero.name".to_owned())?;
        require_text(&self.hero.role, || "hero.role".to_owned())?;
        check_text(&self.hero.tagline, || "hero.tagline".to_owned())?;
        for (i, social) in self.hero.socials.iter().enumerate() {
            require_text(&social.url, || format!("hero.socials[{i}].url"))?;
        }
        if let Some(resume) = &self.hero.resume {
            require_text(resume, || "hero.resume".to_owned())?;
        }

        for (i, paragraph) in self.about.paragraphs.iter().enumerate() {
            require_text(paragraph, || format!("about.paragraphs[{i}]"))?;
        }
        for (i, highlight) in self.about.highlights.iter().enumerate() {
            require_text(&highlight.value, || format!("about.highlights[{i}].value"))?;
            require_text(&highlight.label, || format!("about.highlights[{i}].label"))?;
        }

        let mut names = HashSet::new();
        for (i, skill) in self.skills.iter().enumerate() {
            require_text(&skill.name, || format!("skills[{i}].name"))?;
            require_text(&skill.category, || format!("skills[{i}].category"))?;
            if !names.insert(skill.name.as_str()) {
                return Err(ContentError::DuplicateSkill(skill.name.clone()));
            }
            if skill.proficiency > 100 {
                return Err(ContentError::ProficiencyOutOfRange {
                    name: skill.name.clone(),
                    value: skill.proficiency,
                });
            }
        }

        let mut titles = HashSet::new();
        for (i, project) in self.projects.iter().enumerate() {
            require_text(&project.title, || format!("projects[{i}].title"))?;
            require_text(&project.description, || format!("projects[{i}].description"))?;
            check_text(&project.image, || format!("projects[{i}].image"))?;
            require_text(&project.link, || format!("projects[{i}].link"))?;
            for (j, tag) in project.tech.iter().enumerate() {
                require_text(tag, || format!("projects[{i}].tech[{j}]"))?;
            }
            if !titles.insert(project.title.as_str()) {
                return Err(ContentError::DuplicateProject(project.title.clone()));
            }
        }

        require_text(&self.contact.heading, || "contact.heading".to_owned())?;
        check_text(&self.contact.message, || "contact.message".to_owned())?;
        require_text(&self.contact.email, || "contact.email".to_owned())?;
        check_text(&self.footer, || "footer".to_owned())?;
        Ok(())
    }

    /// Content shipped with the binary.
    #[must_use]
    pub fn builtin() -> Self {
        Self {
            hero: HeroContent {
                name: "Deependra Swami".to_owned(),
                role: "Full Stack Developer & UI/UX Designer".to_owned(),
                tagline:
                    "I create beautiful, functional, and user-centered digital experiences."
                        .to_owned(),
                socials: vec![
                    SocialLink {
                        kind: SocialKind::Github,
                        url: "github.com/yourusername".to_owned(),
                    },
                    SocialLink {
                        kind: SocialKind::Linkedin,
                        url: "linkedin.com/in/yourprofile".to_owned(),
                    },
                    SocialLink {
                        kind: SocialKind::Email,
                        url: "your.email@example.com".to_owned(),
                    },
                ],
                resume: Some("assets/resume.pdf".to_owned()),
            },
            nav: SectionId::ALL
                .into_iter()
                .map(|id| NavItem {
                    id,
                    label: match id {
                        SectionId::Home => "Home",
                        SectionId::About => "About",
                        SectionId::Skills => "Skills",
                        SectionId::Projects => "Projects",
                        SectionId::Contact => "Contact",
                    }
                    .to_owned(),
                })
                .collect(),
            about: AboutContent {
                paragraphs: vec![
                    "I'm Deependra Swami, a passionate Frontend Developer with over 1 year of \
                     experience in building responsive and user-friendly web applications. I \
                     specialize in React.js, with strong skills in JavaScript, Redux Toolkit, \
                     Tailwind CSS, and Bootstrap, focusing on performance optimization and clean \
                     UI/UX design."
                        .to_owned(),
                    "Currently, I'm working as a Frontend Developer at Stomer Infotech, where I \
                     contribute to real-world projects including e-commerce platforms, MLM \
                     systems, and scalable web solutions. My work spans from developing intuitive \
                     user panels to integrating APIs, ensuring smooth performance, and delivering \
                     efficient admin interfaces."
                        .to_owned(),
                    "When I'm not coding, you can find me exploring new technologies, \
                     contributing to open-source projects, or sharing knowledge with the \
                     developer community."
                        .to_owned(),
                ],
                highlights: vec![
                    highlight("1+", "Years Experience"),
                    highlight("20+", "Projects Completed"),
                    highlight("20+", "Happy Clients"),
                ],
            },
            skills: vec![
                skill("React.js", "Frontend", SkillIcon::Code),
                skill("Redux Toolkit", "Frontend", SkillIcon::Smartphone),
                skill("Next.js", "Frontend", SkillIcon::Smartphone),
                skill("JavaScript", "Frontend", SkillIcon::Code),
                skill("React Hook Form", "Frontend", SkillIcon::Smartphone),
                skill("Yup", "Frontend", SkillIcon::Code),
                skill("Tailwind CSS", "Styling", SkillIcon::Palette),
                skill("Bootstrap", "Styling", SkillIcon::Palette),
                skill("Node.js", "Backend", SkillIcon::Code),
                skill("Express.js", "Backend", SkillIcon::Globe),
                skill("MongoDB", "Database", SkillIcon::Globe),
                skill("Axios", "Utilities", SkillIcon::Smartphone),
                skill("Fetch API", "Utilities", SkillIcon::Smartphone),
            ],
            projects: vec![
                project(
                    "Wildly Indian (Fish E-commerce)",
                    "A MERN-based fish-selling e-commerce website with dynamic product listings, \
                     search, filtering, cart system, and UPI payment integration.",
                    &["React", "Redux Toolkit", "Node.js", "Express.js", "MongoDB", "Tailwind"],
                    "https://via.placeholder.com/400x250/3b82f6/ffffff?text=Wildly+Indian",
                    "https://wildlyindian.com",
                ),
                project(
                    "Viraasi (Jewelry E-commerce)",
                    "Developed user and admin panels for an online jewelry store with product \
                     CRUD, order management, and responsive UI optimized for performance.",
                    &["React", "Redux Toolkit", "Tailwind", "API Integration"],
                    "https://www.viraasi.com/cdn/shop/files/viraasi-official-logo.png",
                    "https://www.viraasi.com/",
                ),
                project(
                    "The Dolphin (MLM Platform)",
                    "Designed and developed user and admin interfaces for an MLM platform with \
                     digital products, referral rewards, and responsive layouts.",
                    &["React", "Redux Toolkit", "Node.js", "Express.js", "MongoDB", "Bootstrap"],
                    "https://via.placeholder.com/400x250/ef4444/ffffff?text=The+Dolphin",
                    "#",
                ),
                project(
                    "YouTube Backend API System",
                    "A backend system built with Node.js and MongoDB to support video uploads, \
                     authentication, subscriptions, comments, and history tracking.",
                    &["Node.js", "Express.js", "MongoDB", "Mongoose", "JWT", "Cloudinary"],
                    "https://via.placeholder.com/400x250/8b5cf6/ffffff?text=YouTube+API",
                    "#",
                ),
            ],
            contact: ContactContent {
                heading: "Let's work together!".to_owned(),
                message: "I'm always interested in hearing about new projects and opportunities. \
                          Whether you have a question or just want to say hi, feel free to reach \
                          out!"
                    .to_owned(),
                email: "your.email@example.com".to_owned(),
                linkedin: Some("linkedin.com/in/yourprofile".to_owned()),
                github: Some("github.com/yourusername".to_owned()),
            },
            footer: "\u{a9} 2024 Your Name. All rights reserved.".to_owned(),
        }
    }
}

impl Default for SiteContent {
    fn default() -> Self {
        Self::builtin()
    }
}

fn highlight(value: &str, label: &str) -> Highlight {
    Highlight {
        value: value.to_owned(),
        label: label.to_owned(),
    }
}

fn skill(name: &str, category: &str, icon: SkillIcon) -> Skill {
    Skill {
        name: name.to_owned(),
        category: category.to_owned(),
        icon,
        proficiency: DEFAULT_PROFICIENCY,
    }
}

fn project(title: &str, description: &str, tech: &[&str], image: &str, link: &str) -> Project {
    Project {
        title: title.to_owned(),
        description: description.to_owned(),
        tech: tech.iter().map(|t| (*t).to_owned()).collect(),
        image: image.to_owned(),
        link: link.to_owned(),
    }
}

/// Text that may be empty but must be safe to write to a terminal.
fn check_text(value: &str, field: impl FnOnce() -> String) -> Result<(), ContentError> {
    if value.chars().any(char::is_control) {
        return Err(ContentError::ControlCharacters { field: field() });
    }
    Ok(())
}

fn require_text(value: &str, field: impl Fn() -> String) -> Result<(), ContentError> {
    if value.trim().is_empty() {
        return Err(ContentError::Blank { field: field() });
    }
    check_text(value, field)
}
