use crate::core::context::use_database;
use crate::core::query::{use_mutation, Mutation};
use crate::slices::todos::shared::database::TodoStore;
use crate::slices::todos::shared::QUERY_KEY;

pub fn use_delete_todo() -> Mutation<i32> {
    let store = TodoStore::new(use_database());
    use_mutation(QUERY_KEY, "deleting todo", move |id| {
        let store = store.clone();
        async move {
            if !store.delete_todo(id).await? {
                tracing::warn!(id, "todo was already deleted");
            }
            Ok(())
        }
    })
}
