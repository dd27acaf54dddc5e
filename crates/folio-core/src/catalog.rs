//! Pseudo filesystem over the portfolio content
//!
//! Built once from [`Content`]: every experience, education and project item
//! gets a unique `<slug>.txt` file name, and `projects` / `certifications` are
//! split into sub-directories by the category classifiers.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::category::CategoryClassifier;
use crate::config::Config;
use crate::content::{Certification, Content, Education, Experience, Project};
use crate::error::Result;
use crate::slug::{slugify, year_from_period, SlugAllocator};

/// Top-level directories, in listing order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Directory {
    About,
    Experience,
    Education,
    Certifications,
    Projects,
}

impl Directory {
    pub const ALL: [Directory; 5] = [
        Directory::About,
        Directory::Experience,
        Directory::Education,
        Directory::Certifications,
        Directory::Projects,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            Self::About => "about",
            Self::Experience => "experience",
            Self::Education => "education",
            Self::Certifications => "certifications",
            Self::Projects => "projects",
        }
    }

    /// Listing label (`projects/`)
    pub fn label(&self) -> String {
        format!("{}/", self.key())
    }

    /// Whether the directory is split into sub-directories
    pub fn has_sub_categories(&self) -> bool {
        matches!(self, Self::Projects | Self::Certifications)
    }

    /// Whether `cat` works here
    pub fn has_files(&self) -> bool {
        matches!(self, Self::Projects | Self::Experience | Self::Education)
    }
}

impl fmt::Display for Directory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Directory {
    type Err = ();

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Self::ALL.into_iter().find(|d| d.key() == s).ok_or(())
    }
}

/// An addressable file inside a directory
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LeafEntry {
    /// Index into the owning content collection
    pub id: usize,
    /// Unique within the directory
    pub slug: String,
    /// `<slug>.txt`
    pub file: String,
    /// Human readable name (project name, role, school)
    pub name: String,
}

impl LeafEntry {
    fn new(id: usize, slug: String, name: &str) -> Self {
        Self {
            id,
            file: format!("{slug}.txt"),
            slug,
            name: name.to_string(),
        }
    }

    /// `cat` matching: slug, then file name, then display name (verbatim or
    /// slugified, so `software-engineer` finds the role "Software Engineer").
    /// Exact only.
    pub fn matches(&self, arg: &str) -> bool {
        let lowered = arg.to_lowercase();
        let key = slugify(arg);
        self.slug == key
            || self.file == lowered
            || self.name.to_lowercase() == lowered
            || (!key.is_empty() && slugify(&self.name) == key)
    }
}

/// A sub-directory of `projects` or `certifications`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubCategory {
    pub key: String,
    /// Ids of the items in this bucket, in content order
    pub items: Vec<usize>,
}

impl SubCategory {
    pub fn label(&self) -> String {
        format!("{}/", self.key)
    }
}

pub struct Catalog {
    content: Content,
    experience: Vec<LeafEntry>,
    education: Vec<LeafEntry>,
    projects: Vec<LeafEntry>,
    project_groups: Vec<SubCategory>,
    certification_groups: Vec<SubCategory>,
}

impl Catalog {
    /// Build the catalog with the given sub-category classifiers
    pub fn build(
        content: Content,
        project_rules: &CategoryClassifier,
        certification_rules: &CategoryClassifier,
    ) -> Self {
        let experience = experience_entries(&content.experience);
        let education = education_entries(&content.education);
        let projects = project_entries(&content.projects);

        let project_groups = group(
            project_rules,
            content.projects.iter().map(|p| {
                (
                    format!("{} {}", p.name, p.stack),
                    p.category.as_deref(),
                )
            }),
        );
        let certification_groups = group(
            certification_rules,
            content.certifications.iter().map(|c| {
                (
                    format!(
                        "{} {} {}",
                        c.name,
                        c.issuer,
                        c.skills.as_deref().unwrap_or_default()
                    ),
                    None,
                )
            }),
        );

        tracing::debug!(
            experience = experience.len(),
            education = education.len(),
            projects = projects.len(),
            project_groups = project_groups.len(),
            certification_groups = certification_groups.len(),
            "catalog built"
        );

        Self {
            content,
            experience,
            education,
            projects,
            project_groups,
            certification_groups,
        }
    }

    /// Build with the builtin rules
    pub fn with_builtin_rules(content: Content) -> Result<Self> {
        Ok(Self::build(
            content,
            &CategoryClassifier::projects()?,
            &CategoryClassifier::certifications()?,
        ))
    }

    /// Build with rules from `config` (builtin + overrides)
    pub fn with_config(content: Content, config: &Config) -> Result<Self> {
        let (projects, certifications) = config.classifiers()?;
        Ok(Self::build(content, &projects, &certifications))
    }

    /// Builtin content with builtin rules
    pub fn builtin() -> Result<Self> {
        Self::with_builtin_rules(Content::builtin()?)
    }

    pub fn content(&self) -> &Content {
        &self.content
    }

    /// All files of a directory; empty for `about` and `certifications`
    pub fn leaves(&self, dir: Directory) -> &[LeafEntry] {
        match dir {
            Directory::Experience => &self.experience,
            Directory::Education => &self.education,
            Directory::Projects => &self.projects,
            Directory::About | Directory::Certifications => &[],
        }
    }

    pub fn leaf(&self, dir: Directory, id: usize) -> Option<&LeafEntry> {
        self.leaves(dir).get(id)
    }

    /// Non-empty sub-directories in display order
    pub fn sub_categories(&self, dir: Directory) -> &[SubCategory] {
        match dir {
            Directory::Projects => &self.project_groups,
            Directory::Certifications => &self.certification_groups,
            _ => &[],
        }
    }

    pub fn sub_category(&self, dir: Directory, key: &str) -> Option<&SubCategory> {
        self.sub_categories(dir).iter().find(|c| c.key == key)
    }

    /// Files visible at `dir` (or `dir/sub` when given)
    pub fn visible_leaves(&self, dir: Directory, sub: Option<&str>) -> Vec<&LeafEntry> {
        let all = self.leaves(dir);
        match sub.and_then(|key| self.sub_category(dir, key)) {
            Some(group) => group.items.iter().filter_map(|&id| all.get(id)).collect(),
            None => all.iter().collect(),
        }
    }

    /// Resolve a `cat` argument against the visible files; first match wins
    pub fn resolve(&self, dir: Directory, sub: Option<&str>, arg: &str) -> Option<&LeafEntry> {
        self.visible_leaves(dir, sub)
            .into_iter()
            .find(|entry| entry.matches(arg))
    }

    pub fn experience(&self, id: usize) -> Option<&Experience> {
        self.content.experience.get(id)
    }

    pub fn education(&self, id: usize) -> Option<&Education> {
        self.content.education.get(id)
    }

    pub fn project(&self, id: usize) -> Option<&Project> {
        self.content.projects.get(id)
    }

    /// Certifications of one sub-directory
    pub fn certifications_in(&self, key: &str) -> Vec<&Certification> {
        self.sub_category(Directory::Certifications, key)
            .map(|group| {
                group
                    .items
                    .iter()
                    .filter_map(|&id| self.content.certifications.get(id))
                    .collect()
            })
            .unwrap_or_default()
    }
}

fn experience_entries(items: &[Experience]) -> Vec<LeafEntry> {
    let mut alloc = SlugAllocator::new();
    items
        .iter()
        .enumerate()
        .map(|(id, item)| {
            let base = format!(
                "{}-{}",
                slugify(item.org_name()),
                year_from_period(&item.period)
            );
            LeafEntry::new(id, alloc.allocate(&base, None), &item.role)
        })
        .collect()
}

fn education_entries(items: &[Education]) -> Vec<LeafEntry> {
    let mut alloc = SlugAllocator::new();
    items
        .iter()
        .enumerate()
        .map(|(id, item)| {
            let year = year_from_period(&item.duration);
            let slug = alloc.allocate(&slugify(&item.school), Some(&year));
            LeafEntry::new(id, slug, &item.school)
        })
        .collect()
}

fn project_entries(items: &[Project]) -> Vec<LeafEntry> {
    let mut alloc = SlugAllocator::new();
    items
        .iter()
        .enumerate()
        .map(|(id, item)| {
            let year = year_from_period(&item.duration);
            let slug = alloc.allocate(&slugify(&item.name), Some(&year));
            LeafEntry::new(id, slug, &item.name)
        })
        .collect()
}

/// Bucket items and keep the non-empty buckets in display order
fn group<'a, I>(classifier: &CategoryClassifier, items: I) -> Vec<SubCategory>
where
    I: IntoIterator<Item = (String, Option<&'a str>)>,
{
    let classified = classifier.classify_all(items);
    classifier
        .category_names()
        .into_iter()
        .map(|name| SubCategory {
            key: name.to_string(),
            items: classified
                .iter()
                .filter(|c| c.category == name)
                .map(|c| c.index)
                .collect(),
        })
        .filter(|group| !group.items.is_empty())
        .collect()
}
