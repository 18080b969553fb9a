diesel::table! {
    todos (id) {
        id -> Integer,
        title -> Text,
        description -> Nullable<Text>,
        status -> Text,
        priority -> Text,
        due_date -> Nullable<Text>,
        created_at -> Text,
        updated_at -> Text,
    }
}
