use crate::core::context::use_database;
use crate::core::query::{use_mutation, Mutation};
use crate::slices::todos::shared::database::TodoStore;
use crate::slices::todos::shared::QUERY_KEY;

pub fn use_toggle_todo_status() -> Mutation<i32> {
    let store = TodoStore::new(use_database());
    use_mutation(QUERY_KEY, "toggling todo status", move |id| {
        let store = store.clone();
        async move { store.toggle_todo_status(id).await.map(|_| ()) }
    })
}
