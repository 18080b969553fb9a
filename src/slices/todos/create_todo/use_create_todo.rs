use crate::core::context::use_database;
use crate::core::query::{use_mutation, Mutation};
use crate::slices::todos::shared::database::TodoStore;
use crate::slices::todos::shared::types::CreateTodoInput;
use crate::slices::todos::shared::QUERY_KEY;

pub fn use_create_todo() -> Mutation<CreateTodoInput> {
    let store = TodoStore::new(use_database());
    use_mutation(QUERY_KEY, "creating todo", move |input| {
        let store = store.clone();
        async move { store.create_todo(input).await.map(|_| ()) }
    })
}
