//! Document pages
//!
//! Long-form listings of one collection each, rendered as Markdown.

use std::fmt::{self, Write as _};
use std::str::FromStr;

use serde::Serialize;

use crate::content::Content;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Page {
    Experience,
    Education,
    Projects,
    Certifications,
    Skills,
}

impl Page {
    pub const ALL: [Page; 5] = [
        Page::Experience,
        Page::Education,
        Page::Projects,
        Page::Certifications,
        Page::Skills,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            Self::Experience => "experience",
            Self::Education => "education",
            Self::Projects => "projects",
            Self::Certifications => "certifications",
            Self::Skills => "skills",
        }
    }

    /// Section name used in the stamp line
    fn section(&self) -> &'static str {
        match self {
            Self::Experience => "Experience",
            Self::Education => "Education",
            Self::Projects => "Projects",
            Self::Certifications => "Certifications",
            Self::Skills => "Skills & Tools",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::Experience => "Roles & impact",
            Self::Education => "Academic track",
            Self::Projects => "Build log",
            Self::Certifications => "Verified credentials",
            Self::Skills => "Stacks & strengths",
        }
    }

    pub fn lead(&self) -> &'static str {
        match self {
            Self::Experience => {
                "Backend, cloud, and mobile work across startups, student organizations, and mentorship programs."
            }
            Self::Education => {
                "Graduate and undergraduate studies with emphasis on software, cloud, and systems foundations."
            }
            Self::Projects => {
                "Cloud-native systems, mobile apps, backend services, and data projects with AWS, Flutter, and Node.js."
            }
            Self::Certifications => {
                "AWS, AI, security, programming, and language credentials captured in one list."
            }
            Self::Skills => {
                "Cloud and AWS, backend services, data engineering, mobile development, and supporting practices."
            }
        }
    }

    /// `<Section> — <full name>`
    pub fn stamp(&self, content: &Content) -> String {
        format!("{} — {}", self.section(), content.basics.full_name)
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Page {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|page| page.key() == lowered)
            .ok_or_else(|| format!("unknown page: {s}"))
    }
}

/// Render a page as Markdown
pub fn render_markdown(page: Page, content: &Content) -> String {
    let mut out = String::new();
    // fmt::Write into a String cannot fail
    let _ = write_page(&mut out, page, content);
    out
}

fn write_page(out: &mut String, page: Page, content: &Content) -> fmt::Result {
    writeln!(out, "_{}_", page.stamp(content))?;
    writeln!(out)?;
    writeln!(out, "# {}", page.title())?;
    writeln!(out)?;
    writeln!(out, "{}", page.lead())?;
    writeln!(out)?;

    match page {
        Page::Experience => {
            writeln!(out, "## Full log")?;
            for item in &content.experience {
                writeln!(out)?;
                writeln!(out, "### {}", item.role)?;
                writeln!(out, "{} · {}", item.org, item.period)?;
                writeln!(out)?;
                writeln!(out, "{}", item.summary)?;
                if !item.bullets.is_empty() {
                    writeln!(out)?;
                    for line in &item.bullets {
                        writeln!(out, "- {line}")?;
                    }
                }
            }
        }
        Page::Education => {
            writeln!(out, "## Degrees")?;
            for item in &content.education {
                writeln!(out)?;
                writeln!(out, "### {}", item.school)?;
                writeln!(out, "**{}**", item.degree)?;
                let details = [
                    item.specialization.as_deref(),
                    item.cgpa.as_deref(),
                    Some(item.duration.as_str()),
                    item.location.as_deref(),
                ];
                for detail in details.into_iter().flatten() {
                    writeln!(out, "{detail}  ")?;
                }
                if !item.focus.is_empty() {
                    writeln!(out)?;
                    for line in &item.focus {
                        writeln!(out, "- {line}")?;
                    }
                }
            }
            if !content.coursework.is_empty() {
                writeln!(out)?;
                writeln!(out, "## Relevant coursework")?;
                writeln!(out)?;
                for course in &content.coursework {
                    writeln!(out, "- {course}")?;
                }
            }
        }
        Page::Projects => {
            writeln!(out, "## Full list")?;
            for project in &content.projects {
                writeln!(out)?;
                writeln!(out, "### {}", project.name)?;
                writeln!(out, "{} · `{}`", project.duration, project.stack)?;
                writeln!(out)?;
                writeln!(out, "{}", project.summary)?;
                if let Some(link) = &project.link {
                    writeln!(out)?;
                    writeln!(out, "<{link}>")?;
                }
            }
        }
        Page::Certifications => {
            writeln!(out, "## Full list")?;
            for cert in &content.certifications {
                writeln!(out)?;
                writeln!(out, "### {}", cert.name)?;
                writeln!(out, "{}  ", cert.issuer)?;
                match &cert.expires {
                    Some(expires) => writeln!(out, "Issued: {} · Expires: {}  ", cert.issued, expires)?,
                    None => writeln!(out, "Issued: {}  ", cert.issued)?,
                }
                if let Some(id) = &cert.credential_id {
                    writeln!(out, "Credential ID: {id}  ")?;
                }
                if let Some(skills) = &cert.skills {
                    writeln!(out, "_{skills}_")?;
                }
            }
            if let Some(url) = &content.verify_url {
                writeln!(out)?;
                writeln!(out, "Verify all: <{url}>")?;
            }
        }
        Page::Skills => {
            writeln!(out, "## Full index")?;
            for group in &content.skills {
                writeln!(out)?;
                writeln!(out, "### {}", group.title)?;
                writeln!(out)?;
                for item in &group.items {
                    writeln!(out, "- {item}")?;
                }
            }
        }
    }

    Ok(())
}
