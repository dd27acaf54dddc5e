//! Command/View Interpreter
//!
//! A shell session is an explicit [`NavState`] value moved through pure
//! reducers:
//!
//! - [`reducer::run`] for typed command lines (`pwd`, `cd`, `cat`, `q`)
//! - [`touch::reduce_touch`] for discrete touch actions
//!
//! [`Shell`] bundles a state with its [`Catalog`] for front ends.
//!
//! # Example
//!
//! ```rust
//! use folio_core::catalog::Catalog;
//! use folio_core::shell::{Mode, Shell};
//!
//! let mut shell = Shell::new(Catalog::builtin().unwrap(), Mode::Cli);
//! shell.execute("cd projects");
//! shell.execute("cd mobile");
//! assert_eq!(shell.state().path(), "~/projects/mobile");
//!
//! shell.execute("cd nowhere");
//! assert_eq!(shell.state().error(), Some("directory not found: nowhere"));
//! ```

mod command;
mod error;
pub mod reducer;
mod state;
pub mod touch;

pub use command::{Command, CommandKind};
pub use error::ShellError;
pub use reducer::{reduce, run, transition};
pub use state::{Mode, NavState, View};
pub use touch::{reduce_touch, TouchAction};

use crate::catalog::Catalog;
use crate::view::Screen;

/// One interactive session
pub struct Shell {
    catalog: Catalog,
    state: NavState,
}

impl Shell {
    pub fn new(catalog: Catalog, mode: Mode) -> Self {
        Self {
            catalog,
            state: NavState::new(mode),
        }
    }

    pub fn state(&self) -> &NavState {
        &self.state
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Run one input line
    pub fn execute(&mut self, input: &str) -> &NavState {
        self.state = run(&self.state, &self.catalog, input);
        &self.state
    }

    /// Apply one touch action
    pub fn touch(&mut self, action: &TouchAction) -> &NavState {
        self.state = reduce_touch(&self.state, &self.catalog, action);
        &self.state
    }

    /// Render the current state
    pub fn screen(&self) -> Screen {
        Screen::render(&self.state, &self.catalog)
    }
}
