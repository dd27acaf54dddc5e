use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::catalog::Directory;

/// How input reaches the shell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Typed commands, starts on the intro screen
    #[default]
    Cli,
    /// Discrete navigation actions, starts on the directory listing
    Touch,
}

impl Mode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Cli => "cli",
            Self::Touch => "touch",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Mode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "cli" => Ok(Self::Cli),
            "touch" => Ok(Self::Touch),
            other => Err(format!("unknown mode: {other}")),
        }
    }
}

/// The active view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum View {
    Intro,
    Listing,
    Directory(Directory),
}

/// Navigation state of one shell session.
///
/// The breadcrumb path is derived from `view` and `sub_category`, so the two
/// can never disagree. At most one sub-category and one leaf are open, and
/// only inside the directory that owns them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavState {
    mode: Mode,
    view: View,
    sub_category: Option<String>,
    open_leaf: Option<usize>,
    error: Option<String>,
}

impl NavState {
    pub fn new(mode: Mode) -> Self {
        let view = match mode {
            Mode::Cli => View::Intro,
            Mode::Touch => View::Listing,
        };
        Self {
            mode,
            view,
            sub_category: None,
            open_leaf: None,
            error: None,
        }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn view(&self) -> View {
        self.view
    }

    /// Directory of the current view, if any
    pub fn directory(&self) -> Option<Directory> {
        match self.view {
            View::Directory(dir) => Some(dir),
            View::Intro | View::Listing => None,
        }
    }

    pub fn sub_category(&self) -> Option<&str> {
        self.sub_category.as_deref()
    }

    /// Id of the open leaf within the current directory
    pub fn open_leaf(&self) -> Option<usize> {
        self.open_leaf
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Breadcrumb: `~`, `~/<dir>` or `~/<dir>/<sub>`
    pub fn path(&self) -> String {
        match (self.directory(), &self.sub_category) {
            (None, _) => "~".to_string(),
            (Some(dir), None) => format!("~/{dir}"),
            (Some(dir), Some(sub)) => format!("~/{dir}/{sub}"),
        }
    }

    /// Number of path segments below `~`
    pub fn depth(&self) -> usize {
        match (self.directory(), &self.sub_category) {
            (None, _) => 0,
            (Some(_), None) => 1,
            (Some(_), Some(_)) => 2,
        }
    }

    pub fn is_home(&self) -> bool {
        self.depth() == 0
    }

    /// A leaf or sub-category is open
    pub fn has_focus(&self) -> bool {
        self.open_leaf.is_some() || self.sub_category.is_some()
    }

    // Transitions below always produce a clean error line; the reducer
    // restores the previous state when a command fails.

    pub(crate) fn home(&self) -> Self {
        Self {
            view: View::Listing,
            ..Self::new(self.mode)
        }
    }

    pub(crate) fn enter(&self, dir: Directory) -> Self {
        Self {
            view: View::Directory(dir),
            ..Self::new(self.mode)
        }
    }

    pub(crate) fn open_sub_category(&self, key: &str) -> Self {
        Self {
            sub_category: Some(key.to_string()),
            open_leaf: None,
            error: None,
            ..self.clone()
        }
    }

    pub(crate) fn open(&self, leaf: usize) -> Self {
        Self {
            open_leaf: Some(leaf),
            error: None,
            ..self.clone()
        }
    }

    /// Close the innermost focus: leaf first, then sub-category
    pub(crate) fn close_one(&self) -> Self {
        let mut next = Self {
            error: None,
            ..self.clone()
        };
        if next.open_leaf.take().is_none() {
            next.sub_category = None;
        }
        next
    }

    /// One directory level up, closing any open leaf. Stays put at `~`.
    pub(crate) fn up(&self) -> Self {
        match (self.directory(), &self.sub_category) {
            (Some(_), Some(_)) => Self {
                sub_category: None,
                open_leaf: None,
                error: None,
                ..self.clone()
            },
            (Some(_), None) => self.home(),
            (None, _) => Self {
                error: None,
                ..self.clone()
            },
        }
    }

    pub(crate) fn with_error(&self, message: String) -> Self {
        Self {
            error: Some(message),
            ..self.clone()
        }
    }
}
