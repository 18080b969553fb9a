//! Fixed source templates stamped out by the slice generator.
//!
//! Tokens are replaced verbatim by [`render`]:
//! `__NAME__` (kebab name as given), `__PASCAL__`, `__CAMEL__`, `__SNAKE__`,
//! `__HOOK__` (hook function and module name), `__USE_CASE__`.

use super::case::{to_camel_case, to_pascal_case, to_snake_case};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SliceNames {
    pub name: String,
    pub pascal: String,
    pub camel: String,
    pub snake: String,
}

impl SliceNames {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            pascal: to_pascal_case(name),
            camel: to_camel_case(name),
            snake: to_snake_case(name),
        }
    }
}

pub fn render(template: &str, names: &SliceNames, use_case: Option<(&str, &str)>) -> String {
    let mut out = template.to_string();
    if let Some((use_case, hook)) = use_case {
        out = out
            .replace("__USE_CASE__", use_case)
            .replace("__HOOK__", hook);
    }
    out.replace("__PASCAL__", &names.pascal)
        .replace("__CAMEL__", &names.camel)
        .replace("__SNAKE__", &names.snake)
        .replace("__NAME__", &names.name)
}

pub const TYPES: &str = r#"use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct __PASCAL__ {
    pub id: i32,
    // Add your fields here
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Create__PASCAL__Input {
    // Add your input fields here
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Update__PASCAL__Input {
    // Add your update fields here
}
"#;

pub const DATABASE: &str = r#"use diesel::prelude::*;
use diesel::sql_types::{Integer, Text};
use diesel_async::RunQueryDsl;

use crate::db::Database;
use crate::error::{Result, StarterError};

use super::types::{Create__PASCAL__Input, Update__PASCAL__Input, __PASCAL__};

#[derive(QueryableByName)]
struct __PASCAL__Row {
    #[diesel(sql_type = Integer)]
    id: i32,
    #[diesel(sql_type = Text)]
    created_at: String,
    #[diesel(sql_type = Text)]
    updated_at: String,
}

#[derive(Clone, Debug)]
pub struct __PASCAL__Store {
    db: Database,
}

impl __PASCAL__Store {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    /// Get all __NAME__
    pub async fn list_all(&self) -> Result<Vec<__PASCAL__>> {
        let mut conn = self.db.conn().await?;
        let rows: Vec<__PASCAL__Row> =
            diesel::sql_query("SELECT * FROM __SNAKE__ ORDER BY created_at DESC, id DESC")
                .load(&mut conn)
                .await
                .map_err(|e| StarterError::Database(e.to_string()))?;
        Ok(rows.into_iter().map(map_row).collect())
    }

    /// Get __NAME__ by ID
    pub async fn get_by_id(&self, id: i32) -> Result<Option<__PASCAL__>> {
        let mut conn = self.db.conn().await?;
        let row: Option<__PASCAL__Row> =
            diesel::sql_query("SELECT * FROM __SNAKE__ WHERE id = ?1")
                .bind::<Integer, _>(id)
                .get_result(&mut conn)
                .await
                .optional()
                .map_err(|e| StarterError::Database(e.to_string()))?;
        Ok(row.map(map_row))
    }

    /// Create a new __NAME__
    pub async fn create(&self, _input: Create__PASCAL__Input) -> Result<usize> {
        let mut conn = self.db.conn().await?;
        // TODO: insert the fields of Create__PASCAL__Input
        diesel::sql_query("INSERT INTO __SNAKE__ DEFAULT VALUES")
            .execute(&mut conn)
            .await
            .map_err(|e| StarterError::Database(e.to_string()))
    }

    /// Update __NAME__
    pub async fn update(&self, id: i32, _input: Update__PASCAL__Input) -> Result<usize> {
        let mut conn = self.db.conn().await?;
        // TODO: set the fields of Update__PASCAL__Input
        diesel::sql_query("UPDATE __SNAKE__ SET updated_at = CURRENT_TIMESTAMP WHERE id = ?1")
            .bind::<Integer, _>(id)
            .execute(&mut conn)
            .await
            .map_err(|e| StarterError::Database(e.to_string()))
    }

    /// Delete __NAME__
    pub async fn delete(&self, id: i32) -> Result<bool> {
        let mut conn = self.db.conn().await?;
        let count = diesel::sql_query("DELETE FROM __SNAKE__ WHERE id = ?1")
            .bind::<Integer, _>(id)
            .execute(&mut conn)
            .await
            .map_err(|e| StarterError::Database(e.to_string()))?;
        Ok(count > 0)
    }
}

fn map_row(row: __PASCAL__Row) -> __PASCAL__ {
    __PASCAL__ {
        id: row.id,
        created_at: row.created_at,
        updated_at: row.updated_at,
    }
}
"#;

pub const SHARED_MOD: &str = r#"pub mod database;
pub mod types;

/// Cache key for the __NAME__ list query.
pub const QUERY_KEY: &str = "__NAME__";
"#;

pub const HOOK_LIST: &str = r#"use dioxus::prelude::*;

use crate::core::context::use_database;
use crate::core::query::use_query;
use crate::error::Result;
use crate::slices::__SNAKE__::shared::database::__PASCAL__Store;
use crate::slices::__SNAKE__::shared::types::__PASCAL__;
use crate::slices::__SNAKE__::shared::QUERY_KEY;

pub fn __HOOK__() -> Resource<Result<Vec<__PASCAL__>>> {
    let store = __PASCAL__Store::new(use_database());
    use_query(QUERY_KEY, move || {
        let store = store.clone();
        async move { store.list_all().await }
    })
}
"#;

pub const HOOK_CREATE: &str = r#"use crate::core::context::use_database;
use crate::core::query::{use_mutation, Mutation};
use crate::slices::__SNAKE__::shared::database::__PASCAL__Store;
use crate::slices::__SNAKE__::shared::types::Create__PASCAL__Input;
use crate::slices::__SNAKE__::shared::QUERY_KEY;

pub fn __HOOK__() -> Mutation<Create__PASCAL__Input> {
    let store = __PASCAL__Store::new(use_database());
    use_mutation(QUERY_KEY, "creating __NAME__", move |input| {
        let store = store.clone();
        async move { store.create(input).await.map(|_| ()) }
    })
}
"#;

pub const HOOK_UPDATE: &str = r#"use crate::core::context::use_database;
use crate::core::query::{use_mutation, Mutation};
use crate::slices::__SNAKE__::shared::database::__PASCAL__Store;
use crate::slices::__SNAKE__::shared::types::Update__PASCAL__Input;
use crate::slices::__SNAKE__::shared::QUERY_KEY;

pub fn __HOOK__() -> Mutation<(i32, Update__PASCAL__Input)> {
    let store = __PASCAL__Store::new(use_database());
    use_mutation(QUERY_KEY, "updating __NAME__", move |(id, input)| {
        let store = store.clone();
        async move { store.update(id, input).await.map(|_| ()) }
    })
}
"#;

pub const HOOK_DELETE: &str = r#"use crate::core::context::use_database;
use crate::core::query::{use_mutation, Mutation};
use crate::slices::__SNAKE__::shared::database::__PASCAL__Store;
use crate::slices::__SNAKE__::shared::QUERY_KEY;

pub fn __HOOK__() -> Mutation<i32> {
    let store = __PASCAL__Store::new(use_database());
    use_mutation(QUERY_KEY, "deleting __NAME__", move |id| {
        let store = store.clone();
        async move { store.delete(id).await.map(|_| ()) }
    })
}
"#;

pub const HOOK_GENERIC: &str = r#"use serde_json::Value;

use crate::core::query::{use_mutation, Mutation};
use crate::slices::__SNAKE__::shared::QUERY_KEY;

pub fn __HOOK__() -> Mutation<Value> {
    use_mutation(QUERY_KEY, "__USE_CASE__ __NAME__", move |data: Value| async move {
        // TODO: implement the __USE_CASE__ logic
        tracing::info!("__USE_CASE__ __NAME__: {data}");
        Ok(())
    })
}
"#;

pub const LIST_PAGE: &str = r#"use dioxus::prelude::*;

use super::__HOOK__::__HOOK__;

#[component]
pub fn List__PASCAL__() -> Element {
    let items = __HOOK__();

    let body = match &*items.read() {
        None => rsx! {
            div { class: "loading", span { class: "spinner" } }
        },
        Some(Err(err)) => rsx! {
            div { class: "alert alert-error", "Error loading __NAME__: {err}" }
        },
        Some(Ok(items)) => {
            let pretty = serde_json::to_string_pretty(items).unwrap_or_default();
            rsx! {
                div { class: "card",
                    pre { "{pretty}" }
                }
            }
        }
    };

    rsx! {
        div { class: "page",
            div { class: "page-header",
                div {
                    h1 { "__PASCAL__" }
                    p { class: "muted", "Manage your __NAME__" }
                }
            }
            {body}
        }
    }
}
"#;

pub const LIST_USE_CASE_MOD: &str = r#"mod list___SNAKE__;
mod __HOOK__;

pub use list___SNAKE__::List__PASCAL__;
pub use __HOOK__::__HOOK__;
"#;

pub const USE_CASE_MOD: &str = r#"mod __HOOK__;

pub use __HOOK__::__HOOK__;
"#;

pub const CONFIG: &str = r#"use crate::nav::NavItem;

pub fn config() -> NavItem {
    // TODO: pick an icon for __NAME__
    NavItem::new("__CAMEL__", "__PASCAL__", "/__NAME__", "📦")
}
"#;

pub const ROUTE_WITH_LIST: &str = r#"use dioxus::prelude::*;

use crate::slices::__SNAKE__::List__PASCAL__;

pub const PATH: &str = "/__NAME__";

pub fn render() -> Element {
    rsx! { List__PASCAL__ {} }
}
"#;

pub const ROUTE_PLACEHOLDER: &str = r#"use dioxus::prelude::*;

pub const PATH: &str = "/__NAME__";

pub fn render() -> Element {
    rsx! {
        div { class: "page",
            h1 { "__PASCAL__" }
        }
    }
}
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_replaces_every_token() {
        let names = SliceNames::new("user-profiles");
        let out = render(
            "__HOOK__ __USE_CASE__ __NAME__ __PASCAL__ __CAMEL__ __SNAKE__",
            &names,
            Some(("archive", "use_archive_user_profiles")),
        );
        assert_eq!(
            out,
            "use_archive_user_profiles archive user-profiles UserProfiles userProfiles user_profiles"
        );
    }

    #[test]
    fn snake_token_adjacent_to_underscores() {
        let names = SliceNames::new("products");
        assert_eq!(render("mod list___SNAKE__;", &names, None), "mod list_products;");
    }
}
