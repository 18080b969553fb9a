use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use serde::Serialize;

use crate::db::Database;
use crate::error::{Result, StarterError};

mod schema;
use schema::users;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Queryable)]
pub struct User {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub created_at: String,
}

#[derive(Insertable)]
#[diesel(table_name = users)]
struct NewUser<'a> {
    name: &'a str,
    email: &'a str,
}

#[derive(Clone, Debug)]
pub struct UserStore {
    db: Database,
}

impl UserStore {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    /// Fails when the email is already taken.
    pub async fn insert_user(&self, name: &str, email: &str) -> Result<User> {
        let mut conn = self.db.conn().await?;
        diesel::insert_into(users::table)
            .values(&NewUser { name, email })
            .execute(&mut conn)
            .await
            .map_err(|e| StarterError::Database(e.to_string()))?;

        users::table
            .filter(users::email.eq(email))
            .first(&mut conn)
            .await
            .map_err(|e| StarterError::Database(e.to_string()))
    }

    pub async fn list_users(&self) -> Result<Vec<User>> {
        let mut conn = self.db.conn().await?;
        users::table
            .order((users::created_at.desc(), users::id.desc()))
            .load(&mut conn)
            .await
            .map_err(|e| StarterError::Database(e.to_string()))
    }

    pub async fn get_user(&self, id: i32) -> Result<Option<User>> {
        let mut conn = self.db.conn().await?;
        users::table
            .filter(users::id.eq(id))
            .first(&mut conn)
            .await
            .optional()
            .map_err(|e| StarterError::Database(e.to_string()))
    }

    pub async fn delete_user(&self, id: i32) -> Result<bool> {
        let mut conn = self.db.conn().await?;
        let count = diesel::delete(users::table.filter(users::id.eq(id)))
            .execute(&mut conn)
            .await
            .map_err(|e| StarterError::Database(e.to_string()))?;
        Ok(count > 0)
    }
}
