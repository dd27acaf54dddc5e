//! Touch actions
//!
//! Discrete navigation for the touch front ends. Actions bypass the command
//! parser but share the state transitions and error line with it.

use serde::{Deserialize, Serialize};

use crate::catalog::{Catalog, Directory};

use super::error::ShellError;
use super::state::NavState;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", tag = "action", content = "target")]
pub enum TouchAction {
    OpenDirectory(Directory),
    OpenSubCategory(String),
    /// Leaf id within the current directory
    OpenLeaf(usize),
    /// Pop one level: leaf, sub-category, directory
    Back,
}

/// Apply a touch action. Invalid targets leave the state as it was and set
/// the error line.
pub fn reduce_touch(state: &NavState, catalog: &Catalog, action: &TouchAction) -> NavState {
    match apply(state, catalog, action) {
        Ok(next) => {
            tracing::debug!(?action, path = %next.path(), "touch action applied");
            next
        }
        Err(err) => {
            tracing::debug!(?action, error = %err, "touch action rejected");
            state.with_error(err.to_string())
        }
    }
}

fn apply(state: &NavState, catalog: &Catalog, action: &TouchAction) -> Result<NavState, ShellError> {
    match action {
        TouchAction::OpenDirectory(dir) => Ok(state.enter(*dir)),
        TouchAction::OpenSubCategory(key) => {
            let not_found = || ShellError::DirectoryNotFound { dir: key.clone() };
            let dir = state.directory().ok_or_else(not_found)?;
            if state.sub_category().is_some() {
                return Err(not_found());
            }
            catalog
                .sub_category(dir, key)
                .map(|group| state.open_sub_category(&group.key))
                .ok_or_else(not_found)
        }
        TouchAction::OpenLeaf(id) => {
            let dir = state
                .directory()
                .filter(Directory::has_files)
                .ok_or(ShellError::CatUnavailable)?;
            catalog
                .visible_leaves(dir, state.sub_category())
                .into_iter()
                .find(|entry| entry.id == *id)
                .map(|entry| state.open(entry.id))
                .ok_or_else(|| ShellError::FileNotFound {
                    file: id.to_string(),
                })
        }
        TouchAction::Back if state.has_focus() => Ok(state.close_one()),
        TouchAction::Back if state.is_home() => Ok(state.clone()),
        TouchAction::Back => Ok(state.up()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shell::{Mode, View};

    #[test]
    fn test_back_pops_one_level() {
        let catalog = Catalog::builtin().unwrap();
        let listing = NavState::new(Mode::Touch);

        let state = [
            TouchAction::OpenDirectory(Directory::Projects),
            TouchAction::OpenSubCategory("mobile".to_string()),
            TouchAction::OpenLeaf(7),
        ]
        .iter()
        .fold(listing.clone(), |s, a| reduce_touch(&s, &catalog, a));
        assert_eq!(state.open_leaf(), Some(7));
        assert_eq!(state.error(), None);

        let state = reduce_touch(&state, &catalog, &TouchAction::Back);
        assert_eq!(state.path(), "~/projects/mobile");
        assert_eq!(state.open_leaf(), None);

        let state = reduce_touch(&state, &catalog, &TouchAction::Back);
        assert_eq!(state.path(), "~/projects");

        let state = reduce_touch(&state, &catalog, &TouchAction::Back);
        assert_eq!(state, listing);

        let state = reduce_touch(&state, &catalog, &TouchAction::Back);
        assert_eq!(state, listing);
        assert_eq!(state.view(), View::Listing);
    }

    #[test]
    fn test_leaf_outside_sub_category_is_rejected() {
        let catalog = Catalog::builtin().unwrap();
        let state = NavState::new(Mode::Touch)
            .enter(Directory::Projects)
            .open_sub_category("console");

        // project 0 lives in backend-cloud
        let next = reduce_touch(&state, &catalog, &TouchAction::OpenLeaf(0));
        assert_eq!(next.error(), Some("file not found: 0"));
        assert_eq!(next.open_leaf(), None);
    }

    #[test]
    fn test_unknown_sub_category() {
        let catalog = Catalog::builtin().unwrap();
        let state = NavState::new(Mode::Touch).enter(Directory::Certifications);
        let next = reduce_touch(
            &state,
            &catalog,
            &TouchAction::OpenSubCategory("astronomy".to_string()),
        );
        assert_eq!(next.error(), Some("directory not found: astronomy"));
        assert_eq!(next.path(), "~/certifications");
    }

    #[test]
    fn test_action_json_shape() {
        let json = serde_json::to_string(&TouchAction::OpenDirectory(Directory::About)).unwrap();
        assert_eq!(json, r#"{"action":"open-directory","target":"about"}"#);
        let back: TouchAction = serde_json::from_str(r#"{"action":"back"}"#).unwrap();
        assert_eq!(back, TouchAction::Back);
    }
}
