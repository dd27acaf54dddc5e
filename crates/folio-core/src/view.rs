//! Render model
//!
//! [`Screen`] is a front-end independent description of what the shell shows
//! for a [`NavState`]: title bar, breadcrumb, context hints, the error line
//! and one [`Body`]. It serializes to JSON for `exec --json`.

use serde::Serialize;

use crate::catalog::{Catalog, Directory, LeafEntry};
use crate::content::{Certification, Link};
use crate::shell::{Mode, NavState, TouchAction, View};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Screen {
    pub title: String,
    pub mode: Mode,
    /// Input prompt, cli mode only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prompt: Option<String>,
    /// Breadcrumb; absent on the intro screen
    pub path: Option<String>,
    /// Context help, cli mode only
    pub hints: Vec<String>,
    pub error: Option<String>,
    pub can_go_back: bool,
    /// "verify all" link, shown inside certifications
    #[serde(skip_serializing_if = "Option::is_none")]
    pub verify_url: Option<String>,
    pub body: Body,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum Body {
    Intro { lines: Vec<String>, link: Option<Link> },
    Directories { rows: Vec<Row> },
    About(AboutCard),
    Files { heading: String, rows: Vec<Row> },
    File(FileDetail),
    Certificates { heading: String, cards: Vec<CertificateCard> },
}

impl Body {
    /// Selectable rows; empty for bodies without a listing
    pub fn rows(&self) -> &[Row] {
        match self {
            Self::Directories { rows } | Self::Files { rows, .. } => rows,
            Self::Intro { .. } | Self::About(_) | Self::File(_) | Self::Certificates { .. } => &[],
        }
    }
}

/// A selectable line of a listing
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Row {
    pub label: String,
    pub target: Target,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Target {
    Directory(Directory),
    SubCategory(String),
    Leaf(usize),
}

impl Target {
    /// Touch action selecting this target
    pub fn action(&self) -> TouchAction {
        match self {
            Self::Directory(dir) => TouchAction::OpenDirectory(*dir),
            Self::SubCategory(key) => TouchAction::OpenSubCategory(key.clone()),
            Self::Leaf(id) => TouchAction::OpenLeaf(*id),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AboutCard {
    pub name: String,
    pub roles: String,
    pub location: String,
    pub age: Option<String>,
    pub email: String,
    pub online: Vec<Link>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FileDetail {
    pub heading: String,
    /// File name of the open leaf
    pub title: String,
    pub meta: Vec<String>,
    pub summary: Option<String>,
    pub bullets: Vec<String>,
    pub link: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CertificateCard {
    pub name: String,
    pub issuer: String,
    /// `Issued: <date>` with ` · Expires: <date>` when known
    pub validity: String,
    pub credential_id: Option<String>,
}

impl From<&Certification> for CertificateCard {
    fn from(cert: &Certification) -> Self {
        let validity = match &cert.expires {
            Some(expires) => format!("Issued: {} · Expires: {}", cert.issued, expires),
            None => format!("Issued: {}", cert.issued),
        };
        Self {
            name: cert.name.clone(),
            issuer: cert.issuer.clone(),
            validity,
            credential_id: cert.credential_id.clone(),
        }
    }
}

impl Screen {
    pub fn render(state: &NavState, catalog: &Catalog) -> Self {
        let handle = &catalog.content().basics.handle;
        let (title, prompt, hints) = match state.mode() {
            Mode::Cli => (
                format!("{handle}@portfolio:~ soft-terminal"),
                Some(format!("{handle}@prompt:~$")),
                hints(state, catalog),
            ),
            Mode::Touch => (format!("{handle}@portfolio:~ touch-mode"), None, Vec::new()),
        };

        let verify_url = match state.view() {
            View::Directory(Directory::Certifications) => catalog.content().verify_url.clone(),
            _ => None,
        };

        Self {
            title,
            mode: state.mode(),
            prompt,
            path: (state.view() != View::Intro).then(|| state.path()),
            hints,
            error: state.error().map(str::to_string),
            can_go_back: !state.is_home(),
            verify_url,
            body: body(state, catalog),
        }
    }
}

fn body(state: &NavState, catalog: &Catalog) -> Body {
    let dir = match state.view() {
        View::Intro => return intro(catalog),
        View::Listing => {
            return Body::Directories {
                rows: Directory::ALL
                    .into_iter()
                    .map(|dir| Row {
                        label: dir.label(),
                        target: Target::Directory(dir),
                    })
                    .collect(),
            }
        }
        View::Directory(dir) => dir,
    };

    if dir == Directory::About {
        return about(catalog);
    }

    if let Some(detail) = state
        .open_leaf()
        .and_then(|id| file_detail(catalog, dir, id))
    {
        return Body::File(detail);
    }

    let heading = dir.key().to_string();
    match (dir, state.sub_category()) {
        (Directory::Certifications, Some(key)) => Body::Certificates {
            heading,
            cards: catalog
                .certifications_in(key)
                .into_iter()
                .map(CertificateCard::from)
                .collect(),
        },
        (dir, None) if dir.has_sub_categories() => Body::Files {
            heading,
            rows: catalog
                .sub_categories(dir)
                .iter()
                .map(|group| Row {
                    label: group.label(),
                    target: Target::SubCategory(group.key.clone()),
                })
                .collect(),
        },
        (dir, sub) => Body::Files {
            heading,
            rows: catalog
                .visible_leaves(dir, sub)
                .into_iter()
                .map(|entry| Row {
                    label: entry.file.clone(),
                    target: Target::Leaf(entry.id),
                })
                .collect(),
        },
    }
}

fn intro(catalog: &Catalog) -> Body {
    let basics = &catalog.content().basics;
    let mut lines = vec![format!("hi, i'm {}", basics.handle)];
    lines.extend(basics.tagline.clone());

    let link = basics.website.as_ref().map(|url| Link {
        label: url
            .trim_start_matches("https://")
            .trim_start_matches("http://")
            .trim_end_matches('/')
            .to_string(),
        url: url.clone(),
    });
    if link.is_some() {
        lines.push("curious about me outside work?".to_string());
    }

    Body::Intro { lines, link }
}

fn about(catalog: &Catalog) -> Body {
    let content = catalog.content();
    Body::About(AboutCard {
        name: content.basics.full_name.clone(),
        roles: content.roles.join(" · "),
        location: content.basics.location.clone(),
        age: content.basics.age.clone(),
        email: content.basics.email.clone(),
        online: content.online.clone(),
    })
}

fn file_detail(catalog: &Catalog, dir: Directory, id: usize) -> Option<FileDetail> {
    let entry = catalog.leaf(dir, id)?;
    let detail = |meta: Vec<String>| FileDetail {
        heading: dir.key().to_string(),
        title: entry.file.clone(),
        meta,
        summary: None,
        bullets: Vec::new(),
        link: None,
    };

    match dir {
        Directory::Projects => {
            let project = catalog.project(id)?;
            Some(FileDetail {
                summary: Some(project.summary.clone()),
                link: project.link.clone(),
                ..detail(vec![project.duration.clone(), project.stack.clone()])
            })
        }
        Directory::Experience => {
            let item = catalog.experience(id)?;
            Some(FileDetail {
                summary: Some(item.summary.clone()),
                bullets: item.bullets.clone(),
                ..detail(vec![item.period.clone(), item.org.clone()])
            })
        }
        Directory::Education => {
            let item = catalog.education(id)?;
            let meta = [
                Some(item.degree.clone()),
                item.specialization.clone(),
                Some(item.duration.clone()),
                item.location.clone(),
                item.cgpa.clone(),
            ]
            .into_iter()
            .flatten()
            .collect();
            Some(FileDetail {
                bullets: item.focus.clone(),
                ..detail(meta)
            })
        }
        Directory::About | Directory::Certifications => None,
    }
}

fn hints(state: &NavState, catalog: &Catalog) -> Vec<String> {
    let open_dir = |example: Option<&str>| match example {
        Some(key) => format!("to open a directory, type `cd <directory>` (e.g. `cd {key}`)"),
        None => "to open a directory, type `cd <directory>`".to_string(),
    };
    let open_file = |what: &str, example: Option<&LeafEntry>| match example {
        Some(entry) => format!("`cat <file>` to open {what} (e.g. `cat {}`)", entry.file),
        None => format!("`cat <file>` to open {what}"),
    };
    let back_home = "`cd ..` to return to `~`".to_string();

    let dir = match state.view() {
        View::Intro => return vec!["type `pwd` and press enter to list directories".to_string()],
        View::Listing => return vec![open_dir(Some(Directory::Projects.key()))],
        View::Directory(dir) => dir,
    };

    if state.open_leaf().is_some() {
        return vec!["`q` to close file view".to_string()];
    }

    let first_leaf = catalog
        .visible_leaves(dir, state.sub_category())
        .into_iter()
        .next();
    let first_group = catalog
        .sub_categories(dir)
        .first()
        .map(|group| group.key.as_str());

    match (dir, state.sub_category()) {
        (Directory::About, _) => vec!["use `cd ..` to go back".to_string()],
        (Directory::Experience, _) => vec![open_file("experience page", first_leaf), back_home],
        (Directory::Education, _) => vec![open_file("education page", first_leaf), back_home],
        (Directory::Projects, Some(_)) => vec![
            open_file("a project", first_leaf),
            "`cd ..` to return to `projects`".to_string(),
        ],
        (Directory::Certifications, Some(_)) => {
            vec!["use `cd ..` to go back to certifications".to_string()]
        }
        (Directory::Projects | Directory::Certifications, None) => {
            vec![open_dir(first_group), back_home]
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shell::Shell;

    fn shell(mode: Mode, inputs: &[&str]) -> Shell {
        let mut shell = Shell::new(Catalog::builtin().unwrap(), mode);
        for input in inputs {
            shell.execute(input);
        }
        shell
    }

    #[test]
    fn test_intro_screen() {
        let screen = shell(Mode::Cli, &[]).screen();
        assert_eq!(screen.title, "sodeeq@portfolio:~ soft-terminal");
        assert_eq!(screen.prompt.as_deref(), Some("sodeeq@prompt:~$"));
        assert_eq!(screen.path, None);
        assert!(!screen.can_go_back);
        match screen.body {
            Body::Intro { lines, link } => {
                assert_eq!(lines[0], "hi, i'm sodeeq");
                assert_eq!(link.unwrap().label, "sodeeq.com");
            }
            other => panic!("unexpected body: {other:?}"),
        }
    }

    #[test]
    fn test_listing_rows_target_directories() {
        let screen = shell(Mode::Cli, &["pwd"]).screen();
        assert_eq!(screen.path.as_deref(), Some("~"));
        assert_eq!(
            screen.hints,
            vec!["to open a directory, type `cd <directory>` (e.g. `cd projects`)"]
        );
        let Body::Directories { rows } = screen.body else {
            panic!("expected directory listing");
        };
        assert_eq!(rows.len(), 5);
        assert_eq!(rows[4].label, "projects/");
        assert_eq!(rows[4].target.action(), TouchAction::OpenDirectory(Directory::Projects));
    }

    #[test]
    fn test_projects_lists_sub_categories() {
        let screen = shell(Mode::Cli, &["cd projects"]).screen();
        assert_eq!(
            screen.hints[0],
            "to open a directory, type `cd <directory>` (e.g. `cd backend-cloud`)"
        );
        let Body::Files { heading, rows } = screen.body else {
            panic!("expected file listing");
        };
        assert_eq!(heading, "projects");
        assert_eq!(rows[0].label, "backend-cloud/");
        assert_eq!(rows[0].target, Target::SubCategory("backend-cloud".to_string()));
    }

    #[test]
    fn test_open_project_detail() {
        let screen = shell(
            Mode::Cli,
            &["cd projects", "cat serverless-gameday-notification-system.txt"],
        )
        .screen();
        assert_eq!(screen.hints, vec!["`q` to close file view"]);
        let Body::File(detail) = screen.body else {
            panic!("expected file detail");
        };
        assert_eq!(detail.title, "serverless-gameday-notification-system.txt");
        assert!(detail.meta[1].contains("AWS Lambda"));
        assert!(detail.summary.is_some());
    }

    #[test]
    fn test_experience_hint_uses_first_file() {
        let screen = shell(Mode::Cli, &["cd experience"]).screen();
        assert_eq!(
            screen.hints[0],
            "`cat <file>` to open experience page (e.g. `cat nsbe-ucalgary-national-society-of-black-engineers-2025.txt`)"
        );
        assert_eq!(screen.hints[1], "`cd ..` to return to `~`");
    }

    #[test]
    fn test_certificates_and_verify_link() {
        let screen = shell(Mode::Cli, &["cd certifications", "cd language-academics"]).screen();
        assert!(screen.verify_url.is_some());
        let Body::Certificates { cards, .. } = screen.body else {
            panic!("expected certificate cards");
        };
        assert_eq!(cards.len(), 2);
        assert!(cards[0].validity.starts_with("Issued: "));
    }

    #[test]
    fn test_touch_screen_has_no_hints() {
        let mut shell = shell(Mode::Touch, &[]);
        let screen = shell.screen();
        assert!(screen.hints.is_empty());
        assert_eq!(screen.prompt, None);
        assert_eq!(screen.path.as_deref(), Some("~"));

        shell.touch(&TouchAction::OpenDirectory(Directory::About));
        let screen = shell.screen();
        assert!(screen.can_go_back);
        assert!(matches!(screen.body, Body::About(_)));
    }

    #[test]
    fn test_error_line_rendered() {
        let screen = shell(Mode::Cli, &["pwd", "sudo"]).screen();
        assert_eq!(screen.error.as_deref(), Some("command not found: sudo"));
    }

    #[test]
    fn test_json_tags_body_kind() {
        let json = serde_json::to_value(shell(Mode::Cli, &["cd about"]).screen()).unwrap();
        assert_eq!(json["body"]["kind"], "about");
        assert_eq!(json["path"], "~/about");
        assert_eq!(json["mode"], "cli");
    }
}
