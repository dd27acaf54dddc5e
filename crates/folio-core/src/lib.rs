pub mod catalog;
pub mod category;
pub mod config;
pub mod content;
pub mod error;
pub mod pages;
pub mod shell;
pub mod slug;
pub mod view;

pub use catalog::{Catalog, Directory, LeafEntry, SubCategory};
pub use config::Config;
pub use content::Content;
pub use error::{FolioError, Result};
pub use pages::{render_markdown, Page};
pub use shell::{Mode, NavState, Shell, ShellError, TouchAction, View};
pub use view::{Body, Screen, Target};

// Category system
pub use category::{
    CategoriesConfig, CategoryClassifier, CategoryConfigEntry, CategoryDef, CategoryStore,
    CERTIFICATION_CATEGORIES, PROJECT_CATEGORIES,
};
