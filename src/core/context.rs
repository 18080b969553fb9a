use dioxus::prelude::*;

use crate::config::Config;
use crate::db::Database;
use crate::theme::Theme;

/// Root state handed to the UI at launch.
#[derive(Clone, Debug)]
pub struct AppContext {
    pub config: Config,
    pub database: Database,
    pub initial_theme: Theme,
}

impl AppContext {
    pub fn new(config: Config, initial_theme: Theme) -> Self {
        let database = Database::new(config.db_path());
        Self {
            config,
            database,
            initial_theme,
        }
    }
}

pub fn use_app_context() -> AppContext {
    use_context::<AppContext>()
}

pub fn use_database() -> Database {
    use_app_context().database
}

/// Path of the page currently shown, e.g. `/todos`.
#[derive(Clone, Copy)]
pub struct CurrentPath(pub Signal<String>);

pub fn use_current_path() -> Signal<String> {
    use_context::<CurrentPath>().0
}

/// Active theme, applied as `data-theme` on the root element.
#[derive(Clone, Copy)]
pub struct ThemeState(pub Signal<Theme>);

pub fn use_theme() -> Signal<Theme> {
    use_context::<ThemeState>().0
}
