use dioxus::prelude::*;

use crate::core::context::use_database;
use crate::core::query::use_query;
use crate::error::Result;
use crate::slices::todos::shared::database::TodoStore;
use crate::slices::todos::shared::types::Todo;
use crate::slices::todos::shared::QUERY_KEY;

pub fn use_list_todos() -> Resource<Result<Vec<Todo>>> {
    let store = TodoStore::new(use_database());
    use_query(QUERY_KEY, move || {
        let store = store.clone();
        async move { store.list_todos().await }
    })
}
