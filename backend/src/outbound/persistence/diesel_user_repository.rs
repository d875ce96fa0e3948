//! PostgreSQL-backed `UserRepository` implementation using Diesel.
//!
//! Inserts rely on the `users` primary key (the email address) to enforce
//! uniqueness; a duplicate surfaces as a plain query error because the port
//! deliberately does not distinguish it.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{UserPersistenceError, UserRepository};
use crate::domain::user::{NewUser, UserRecord};

use super::error_mapping::{map_diesel_error, map_pool_error};
use super::models::{NewUserRow, UserAuthRow};
use super::pool::DbPool;
use super::schema::users;

/// Diesel-backed implementation of the `UserRepository` port.
#[derive(Clone)]
pub struct DieselUserRepository {
    pool: DbPool,
}

impl DieselUserRepository {
    /// Create a repository backed by the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_error(error: diesel::result::Error) -> UserPersistenceError {
    map_diesel_error(
        error,
        UserPersistenceError::query,
        UserPersistenceError::connection,
    )
}

#[async_trait]
impl UserRepository for DieselUserRepository {
    async fn insert(&self, user: &NewUser) -> Result<(), UserPersistenceError> {
        let mut conn = self
            .pool
            .get()
            .await
            .map_err(|err| map_pool_error(err, UserPersistenceError::connection))?;

        diesel::insert_into(users::table)
            .values(NewUserRow {
                firstname: &user.firstname,
                lastname: &user.lastname,
                name: &user.name,
                profile: user.profile.as_str(),
                email: &user.email,
                password: &user.password_hash,
                createddate: user.createddate,
            })
            .execute(&mut conn)
            .await
            .map_err(map_error)?;

        Ok(())
    }

    async fn find_by_email(
        &self,
        email: &str,
    ) -> Result<Option<UserRecord>, UserPersistenceError> {
        let mut conn = self
            .pool
            .get()
            .await
            .map_err(|err| map_pool_error(err, UserPersistenceError::connection))?;

        let row = users::table
            .filter(users::email.eq(email))
            .select(UserAuthRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_error)?;

        Ok(row.map(|row| UserRecord {
            email: row.email,
            name: row.name,
            password_hash: row.password,
        }))
    }
}
