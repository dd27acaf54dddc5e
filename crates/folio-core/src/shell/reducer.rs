//! Text command transitions
//!
//! `reduce` is a pure function of `(state, catalog, command)`. A failed
//! command returns the previous state with only the error line changed.

use crate::catalog::{Catalog, Directory};

use super::command::{Command, CommandKind};
use super::error::{ShellError, CAT_USAGE, CD_USAGE};
use super::state::NavState;

/// Apply a command and record its outcome on the error line
pub fn reduce(state: &NavState, catalog: &Catalog, command: &Command) -> NavState {
    match transition(state, catalog, command) {
        Ok(next) => {
            tracing::debug!(command = %command.line, path = %next.path(), "command applied");
            next
        }
        Err(err) => {
            tracing::debug!(command = %command.line, error = %err, "command rejected");
            state.with_error(err.to_string())
        }
    }
}

/// Parse and apply one input line. Blank input leaves the state untouched.
pub fn run(state: &NavState, catalog: &Catalog, input: &str) -> NavState {
    match Command::parse(input) {
        Some(command) => reduce(state, catalog, &command),
        None => state.clone(),
    }
}

/// The transition table
pub fn transition(
    state: &NavState,
    catalog: &Catalog,
    command: &Command,
) -> Result<NavState, ShellError> {
    match &command.kind {
        CommandKind::Close if state.has_focus() => Ok(state.close_one()),
        // nothing to close: `q` is not a directory either
        CommandKind::Close => Err(ShellError::CommandNotFound {
            input: command.line.clone(),
        }),
        CommandKind::Pwd => Ok(state.home()),
        CommandKind::Cd(None) => Err(ShellError::Usage { usage: CD_USAGE }),
        CommandKind::Cd(Some(arg)) => change_dir(state, catalog, arg),
        CommandKind::Cat(arg) => cat(state, catalog, arg.as_deref()),
        CommandKind::Other { root } => match root.parse::<Directory>() {
            Ok(dir) => Ok(state.enter(dir)),
            Err(()) => Err(ShellError::CommandNotFound {
                input: command.line.clone(),
            }),
        },
    }
}

fn change_dir(state: &NavState, catalog: &Catalog, arg: &str) -> Result<NavState, ShellError> {
    match arg {
        ".." if state.is_home() => return Err(ShellError::AlreadyHome),
        ".." => return Ok(state.up()),
        "~" => return Ok(state.home()),
        _ => {}
    }

    if let Some(dir) = state.directory() {
        if dir.has_sub_categories() && state.sub_category().is_none() {
            if let Some(group) = catalog.sub_category(dir, arg) {
                return Ok(state.open_sub_category(&group.key));
            }
        }
    }

    arg.parse::<Directory>()
        .map(|dir| state.enter(dir))
        .map_err(|()| ShellError::DirectoryNotFound {
            dir: arg.to_string(),
        })
}

fn cat(state: &NavState, catalog: &Catalog, arg: Option<&str>) -> Result<NavState, ShellError> {
    let dir = state
        .directory()
        .filter(Directory::has_files)
        .ok_or(ShellError::CatUnavailable)?;
    let arg = arg.ok_or(ShellError::Usage { usage: CAT_USAGE })?;

    let entry = catalog
        .resolve(dir, state.sub_category(), arg)
        .ok_or_else(|| ShellError::FileNotFound {
            file: arg.to_string(),
        })?;
    Ok(state.open(entry.id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shell::{Mode, View};

    fn catalog() -> Catalog {
        Catalog::builtin().unwrap()
    }

    fn run_all(catalog: &Catalog, inputs: &[&str]) -> NavState {
        inputs
            .iter()
            .fold(NavState::new(Mode::Cli), |state, input| run(&state, catalog, input))
    }

    #[test]
    fn test_pwd_lists_directories() {
        let catalog = catalog();
        let state = run_all(&catalog, &["pwd"]);
        assert_eq!(state.view(), View::Listing);
        assert_eq!(state.path(), "~");
        assert_eq!(state.error(), None);
    }

    #[test]
    fn test_blank_input_is_noop() {
        let catalog = catalog();
        let state = run_all(&catalog, &["cd nosuchdir"]);
        let next = run(&state, &catalog, "   ");
        assert_eq!(next, state);
    }

    #[test]
    fn test_cd_sub_category_then_back() {
        let catalog = catalog();
        let state = run_all(&catalog, &["pwd", "cd projects", "cd mobile"]);
        assert_eq!(state.path(), "~/projects/mobile");

        let state = run(&state, &catalog, "cd ..");
        assert_eq!(state.path(), "~/projects");
        assert_eq!(state.view(), View::Directory(Directory::Projects));

        let state = run(&state, &catalog, "cd ..");
        assert_eq!(state.path(), "~");
        assert_eq!(state.view(), View::Listing);

        let state = run(&state, &catalog, "cd ..");
        assert_eq!(state.error(), Some("already in home directory"));
    }

    #[test]
    fn test_sub_category_only_from_its_directory() {
        let catalog = catalog();
        let state = run_all(&catalog, &["pwd", "cd mobile"]);
        assert_eq!(state.error(), Some("directory not found: mobile"));
        assert_eq!(state.path(), "~");

        // already inside a sub-category: keys are not nested
        let state = run_all(&catalog, &["cd projects", "cd mobile", "cd console"]);
        assert_eq!(state.error(), Some("directory not found: console"));
        assert_eq!(state.path(), "~/projects/mobile");
    }

    #[test]
    fn test_cd_directory_from_anywhere() {
        let catalog = catalog();
        let state = run_all(&catalog, &["cd projects", "cd mobile", "cd education"]);
        assert_eq!(state.path(), "~/education");
        assert_eq!(state.sub_category(), None);
    }

    #[test]
    fn test_cd_usage_and_tilde() {
        let catalog = catalog();
        let state = run_all(&catalog, &["cd"]);
        assert_eq!(state.error(), Some("usage: cd <directory>"));

        let state = run_all(&catalog, &["cd certifications", "cd cloud-computing", "cd ~"]);
        assert_eq!(state.view(), View::Listing);
    }

    #[test]
    fn test_cat_opens_and_q_closes() {
        let catalog = catalog();
        let before = run_all(&catalog, &["cd experience"]);
        let open = run(&before, &catalog, "cat kdnplus-2024.txt");
        let entry = catalog.leaf(Directory::Experience, open.open_leaf().unwrap()).unwrap();
        assert_eq!(entry.file, "kdnplus-2024.txt");

        let closed = run(&open, &catalog, "q");
        assert_eq!(closed, before);

        let again = run(&closed, &catalog, ":q");
        assert_eq!(again.error(), Some("command not found: :q"));
    }

    #[test]
    fn test_cat_experience_by_role() {
        let catalog = catalog();
        let state = run_all(&catalog, &["cd experience", "cat software-engineer"]);
        assert_eq!(state.error(), None);
        let entry = catalog.leaf(Directory::Experience, state.open_leaf().unwrap()).unwrap();
        // newest "Software Engineer" role wins
        assert_eq!(
            entry.file,
            "nsbe-ucalgary-national-society-of-black-engineers-2025.txt"
        );

        let state = run_all(&catalog, &["cd experience", "cat python-mentor-volunteer"]);
        let entry = catalog.leaf(Directory::Experience, state.open_leaf().unwrap()).unwrap();
        assert_eq!(entry.name, "Python Mentor (Volunteer)");
    }

    #[test]
    fn test_cat_errors() {
        let catalog = catalog();
        let state = run_all(&catalog, &["cd education", "cat"]);
        assert_eq!(state.error(), Some("usage: cat <file>"));

        let state = run_all(&catalog, &["cd education", "cat harvard.txt"]);
        assert_eq!(state.error(), Some("file not found: harvard.txt"));

        let state = run_all(&catalog, &["cd about", "cat anything"]);
        assert_eq!(
            state.error(),
            Some("cat is available inside ~/projects, ~/experience, ~/education")
        );
        let state = run_all(&catalog, &["cd certifications", "cd cloud-computing", "cat x"]);
        assert_eq!(
            state.error(),
            Some("cat is available inside ~/projects, ~/experience, ~/education")
        );
    }

    #[test]
    fn test_cat_in_sub_category_is_scoped() {
        let catalog = catalog();
        let state = run_all(&catalog, &["cd projects", "cd console", "cat quiz-app.txt"]);
        assert_eq!(state.error(), Some("file not found: quiz-app.txt"));

        let state = run_all(&catalog, &["cd projects", "cat quiz-app.txt"]);
        assert!(state.open_leaf().is_some());
    }

    #[test]
    fn test_q_closes_leaf_before_sub_category() {
        let catalog = catalog();
        let state = run_all(
            &catalog,
            &["cd projects", "cd mobile", "cat studystats.txt", "q"],
        );
        assert_eq!(state.open_leaf(), None);
        assert_eq!(state.path(), "~/projects/mobile");

        let state = run(&state, &catalog, "q");
        assert_eq!(state.path(), "~/projects");
    }

    #[test]
    fn test_cd_up_closes_leaf() {
        let catalog = catalog();
        let state = run_all(&catalog, &["cd projects", "cd mobile", "cat quiz app", "cd .."]);
        assert_eq!(state.path(), "~/projects");
        assert_eq!(state.open_leaf(), None);
    }

    #[test]
    fn test_bare_directory_key() {
        let catalog = catalog();
        let state = run_all(&catalog, &["pwd", "PROJECTS"]);
        assert_eq!(state.path(), "~/projects");
    }

    #[test]
    fn test_success_clears_error() {
        let catalog = catalog();
        let state = run_all(&catalog, &["pwd", "nonsense", "cd about"]);
        assert_eq!(state.error(), None);
        assert_eq!(state.path(), "~/about");
    }
}
