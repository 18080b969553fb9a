use crate::core::context::use_database;
use crate::core::query::{use_mutation, Mutation};
use crate::error::StarterError;
use crate::slices::todos::shared::database::TodoStore;
use crate::slices::todos::shared::types::UpdateTodoInput;
use crate::slices::todos::shared::QUERY_KEY;

pub fn use_update_todo() -> Mutation<(i32, UpdateTodoInput)> {
    let store = TodoStore::new(use_database());
    use_mutation(QUERY_KEY, "updating todo", move |(id, input)| {
        let store = store.clone();
        async move {
            match store.update_todo(id, input).await? {
                Some(_) => Ok(()),
                None => Err(StarterError::Database(format!("todo {id} no longer exists"))),
            }
        }
    })
}
