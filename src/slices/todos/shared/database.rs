use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::db::{now_timestamp, Database};
use crate::error::{Result, StarterError};

use super::schema::todos;
use super::types::{CreateTodoInput, Todo, TodoStatus, UpdateTodoInput};

#[derive(Queryable)]
struct TodoRow {
    id: i32,
    title: String,
    description: Option<String>,
    status: String,
    priority: String,
    due_date: Option<String>,
    created_at: String,
    updated_at: String,
}

#[derive(Insertable)]
#[diesel(table_name = todos)]
struct NewTodo<'a> {
    title: &'a str,
    description: Option<&'a str>,
    status: &'a str,
    priority: &'a str,
    due_date: Option<&'a str>,
}

/// Only `Some` fields end up in the `SET` clause.
#[derive(AsChangeset)]
#[diesel(table_name = todos)]
struct TodoChangeset<'a> {
    title: Option<&'a str>,
    description: Option<&'a str>,
    status: Option<&'a str>,
    priority: Option<&'a str>,
    due_date: Option<&'a str>,
    updated_at: String,
}

#[derive(Clone, Debug)]
pub struct TodoStore {
    db: Database,
}

impl TodoStore {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    pub async fn list_todos(&self) -> Result<Vec<Todo>> {
        let mut conn = self.db.conn().await?;
        let rows: Vec<TodoRow> = todos::table
            .order((todos::created_at.desc(), todos::id.desc()))
            .load(&mut conn)
            .await
            .map_err(|e| StarterError::Database(e.to_string()))?;
        rows.into_iter().map(map_row).collect()
    }

    pub async fn get_todo(&self, id: i32) -> Result<Option<Todo>> {
        let mut conn = self.db.conn().await?;
        let row: Option<TodoRow> = todos::table
            .filter(todos::id.eq(id))
            .first(&mut conn)
            .await
            .optional()
            .map_err(|e| StarterError::Database(e.to_string()))?;
        row.map(map_row).transpose()
    }

    pub async fn create_todo(&self, input: CreateTodoInput) -> Result<Todo> {
        let new = NewTodo {
            title: &input.title,
            description: input.description.as_deref(),
            status: input.status.unwrap_or_default().as_str(),
            priority: input.priority.unwrap_or_default().as_str(),
            due_date: input.due_date.as_deref(),
        };

        let mut conn = self.db.conn().await?;
        diesel::insert_into(todos::table)
            .values(&new)
            .execute(&mut conn)
            .await
            .map_err(|e| StarterError::Database(e.to_string()))?;

        let row: TodoRow = todos::table
            .order(todos::id.desc())
            .first(&mut conn)
            .await
            .map_err(|e| StarterError::Database(e.to_string()))?;
        tracing::debug!(id = row.id, "todo created");
        map_row(row)
    }

    /// Writes only the fields present in `input`; `updated_at` is always refreshed.
    /// Returns `None` when no todo has this id.
    pub async fn update_todo(&self, id: i32, input: UpdateTodoInput) -> Result<Option<Todo>> {
        let changes = TodoChangeset {
            title: input.title.as_deref(),
            description: input.description.as_deref(),
            status: input.status.map(TodoStatus::as_str),
            priority: input.priority.map(|p| p.as_str()),
            due_date: input.due_date.as_deref(),
            updated_at: now_timestamp(),
        };

        let mut conn = self.db.conn().await?;
        let count = diesel::update(todos::table.filter(todos::id.eq(id)))
            .set(&changes)
            .execute(&mut conn)
            .await
            .map_err(|e| StarterError::Database(e.to_string()))?;
        if count == 0 {
            return Ok(None);
        }

        let row: TodoRow = todos::table
            .filter(todos::id.eq(id))
            .first(&mut conn)
            .await
            .map_err(|e| StarterError::Database(e.to_string()))?;
        map_row(row).map(Some)
    }

    pub async fn delete_todo(&self, id: i32) -> Result<bool> {
        let mut conn = self.db.conn().await?;
        let count = diesel::delete(todos::table.filter(todos::id.eq(id)))
            .execute(&mut conn)
            .await
            .map_err(|e| StarterError::Database(e.to_string()))?;
        Ok(count > 0)
    }

    /// Read-modify-write: completed becomes pending, any other status becomes completed.
    pub async fn toggle_todo_status(&self, id: i32) -> Result<Option<Todo>> {
        let Some(todo) = self.get_todo(id).await? else {
            return Ok(None);
        };
        let update = UpdateTodoInput {
            status: Some(todo.status.toggled()),
            ..UpdateTodoInput::default()
        };
        self.update_todo(id, update).await
    }
}

fn map_row(row: TodoRow) -> Result<Todo> {
    Ok(Todo {
        id: row.id,
        title: row.title,
        description: row.description,
        status: row.status.parse()?,
        priority: row.priority.parse()?,
        due_date: row.due_date,
        created_at: row.created_at,
        updated_at: row.updated_at,
    })
}
