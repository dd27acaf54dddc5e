//! Terminal rendering of shell screens

use std::fmt::{self, Write as _};

use colored::Colorize;
use folio_core::catalog::{Catalog, Directory};
use folio_core::view::{Body, Screen};

/// Render a screen. Touch screens number their rows and offer `b` to go back.
pub fn render_screen(screen: &Screen, numbered: bool) -> String {
    let mut out = String::new();
    // fmt::Write into a String cannot fail
    let _ = write_screen(&mut out, screen, numbered);
    out
}

fn write_screen(out: &mut String, screen: &Screen, numbered: bool) -> fmt::Result {
    writeln!(out, "{}", screen.title.dimmed())?;
    if let Some(error) = &screen.error {
        writeln!(out, "{} {}", ">".red().bold(), error.red())?;
    }
    for hint in &screen.hints {
        writeln!(out, "  {} {}", "•".yellow(), hint)?;
    }
    if let Some(path) = &screen.path {
        writeln!(out, "{} {}", ">".cyan().bold(), path.cyan().bold())?;
    }
    if numbered && screen.can_go_back {
        writeln!(out, "  {} back", "[b]".yellow())?;
    }
    if let Some(url) = &screen.verify_url {
        writeln!(out, "  verify all: {}", url.underline())?;
    }
    writeln!(out)?;

    write_body(out, &screen.body, numbered)
}

fn write_body(out: &mut String, body: &Body, numbered: bool) -> fmt::Result {
    match body {
        Body::Intro { lines, link } => {
            for line in lines {
                writeln!(out, "{} {}", ">".cyan(), line)?;
            }
            if let Some(link) = link {
                writeln!(out, "  {} {}", link.label.bold(), link.url.underline())?;
            }
        }
        Body::Directories { .. } => write_rows(out, body, numbered)?,
        Body::About(card) => {
            writeln!(out, "{}", "about".bold())?;
            write_field(out, "name", &card.name)?;
            write_field(out, "roles", &card.roles)?;
            write_field(out, "location", &card.location)?;
            if let Some(age) = &card.age {
                write_field(out, "age", age)?;
            }
            write_field(out, "contact", &card.email)?;
            writeln!(out)?;
            writeln!(out, "{}", "online".bold())?;
            for link in &card.online {
                writeln!(out, "  {:<10}{}", link.label, link.url.underline())?;
            }
        }
        Body::Files { heading, .. } => {
            writeln!(out, "{}", heading.bold())?;
            write_rows(out, body, numbered)?;
        }
        Body::File(detail) => {
            writeln!(out, "{}", detail.heading.bold())?;
            writeln!(out, "{} {}", ">".cyan(), detail.title.bold())?;
            for line in &detail.meta {
                writeln!(out, "  {}", line.dimmed())?;
            }
            if let Some(summary) = &detail.summary {
                writeln!(out)?;
                writeln!(out, "  {summary}")?;
            }
            if !detail.bullets.is_empty() {
                writeln!(out)?;
                for line in &detail.bullets {
                    writeln!(out, "  - {line}")?;
                }
            }
            if let Some(link) = &detail.link {
                writeln!(out)?;
                writeln!(out, "  view project: {}", link.underline())?;
            }
        }
        Body::Certificates { heading, cards } => {
            writeln!(out, "{}", heading.bold())?;
            for card in cards {
                writeln!(out, "  {}", card.name.bold())?;
                writeln!(out, "    {}", card.issuer)?;
                writeln!(out, "    {}", card.validity.dimmed())?;
                if let Some(id) = &card.credential_id {
                    writeln!(out, "    {}", format!("Credential ID: {id}").dimmed())?;
                }
            }
        }
    }
    Ok(())
}

fn write_field(out: &mut String, label: &str, value: &str) -> fmt::Result {
    writeln!(out, "  {:<10}{}", label.dimmed(), value)
}

fn write_rows(out: &mut String, body: &Body, numbered: bool) -> fmt::Result {
    for (i, row) in body.rows().iter().enumerate() {
        if numbered {
            writeln!(out, "  {} {}", format!("[{}]", i + 1).yellow(), row.label.blue())?;
        } else {
            writeln!(out, "  {}", row.label.blue())?;
        }
    }
    Ok(())
}

/// Directory tree of the pseudo filesystem
pub fn render_tree(catalog: &Catalog) -> String {
    let mut out = String::new();
    // fmt::Write into a String cannot fail
    let _ = write_tree(&mut out, catalog);
    out
}

fn write_tree(out: &mut String, catalog: &Catalog) -> fmt::Result {
    writeln!(out, "~")?;
    let dirs = Directory::ALL;

    for (i, dir) in dirs.iter().enumerate() {
        let last = i + 1 == dirs.len();
        let (branch, indent) = if last { ("└── ", "    ") } else { ("├── ", "│   ") };
        writeln!(out, "{branch}{}", dir.label().blue().bold())?;

        let groups = catalog.sub_categories(*dir);
        if groups.is_empty() {
            write_files(out, indent, catalog, *dir, None)?;
            continue;
        }

        for (j, group) in groups.iter().enumerate() {
            let last_group = j + 1 == groups.len();
            let (sub_branch, sub_indent) = if last_group {
                ("└── ", "    ")
            } else {
                ("├── ", "│   ")
            };
            write!(out, "{indent}{sub_branch}{}", group.label().blue())?;
            if *dir == Directory::Certifications {
                writeln!(out, " {}", format!("({})", group.items.len()).dimmed())?;
            } else {
                writeln!(out)?;
                write_files(
                    out,
                    &format!("{indent}{sub_indent}"),
                    catalog,
                    *dir,
                    Some(&group.key),
                )?;
            }
        }
    }
    Ok(())
}

fn write_files(
    out: &mut String,
    indent: &str,
    catalog: &Catalog,
    dir: Directory,
    sub: Option<&str>,
) -> fmt::Result {
    let files = catalog.visible_leaves(dir, sub);
    for (k, entry) in files.iter().enumerate() {
        let branch = if k + 1 == files.len() { "└── " } else { "├── " };
        writeln!(out, "{indent}{branch}{}", entry.file)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_core::shell::{Mode, Shell};

    fn plain() {
        colored::control::set_override(false);
    }

    #[test]
    fn test_touch_rows_are_numbered() {
        plain();
        let shell = Shell::new(Catalog::builtin().unwrap(), Mode::Touch);
        let text = render_screen(&shell.screen(), true);
        assert!(text.contains("[1] about/"));
        assert!(text.contains("[5] projects/"));
        assert!(!text.contains("[b] back"));
    }

    #[test]
    fn test_error_and_hints() {
        plain();
        let mut shell = Shell::new(Catalog::builtin().unwrap(), Mode::Cli);
        shell.execute("ls");
        let text = render_screen(&shell.screen(), false);
        assert!(text.contains("> command not found: ls"));
        assert!(text.contains("type `pwd` and press enter"));
    }

    #[test]
    fn test_about_and_detail_bodies() {
        plain();
        let mut shell = Shell::new(Catalog::builtin().unwrap(), Mode::Cli);
        shell.execute("cd about");
        let text = render_screen(&shell.screen(), false);
        assert!(text.contains("name"));
        assert!(text.contains("Sodeeq Alli"));
        assert!(text.contains("online"));

        shell.execute("cd experience");
        shell.execute("cat kdnplus-2024.txt");
        let text = render_screen(&shell.screen(), false);
        assert!(text.contains("> kdnplus-2024.txt"));
        assert!(text.contains("`q` to close file view"));
    }

    #[test]
    fn test_tree_lists_files() {
        plain();
        let tree = render_tree(&Catalog::builtin().unwrap());
        assert!(tree.starts_with("~\n├── about/\n"));
        assert!(tree.contains("kdnplus-2024.txt"));
        assert!(tree.contains("mobile/"));
        assert!(tree.contains("quiz-app.txt"));
        assert!(tree.contains("└── projects/"));
    }
}
