//! `PostgreSQL` repository implementation for users.

use super::{
    models::{NewUserRow, UserRow},
    schema::users,
};
use crate::persistence::{
    PgPool,
    blocking::{get_conn_with, run_blocking_with},
};
use crate::task::{
    domain::{NewUser, PersistedUserData, User, UserId},
    ports::{UserRepository, UserRepositoryError, UserRepositoryResult},
};
use async_trait::async_trait;
use diesel::prelude::*;

/// `PostgreSQL`-backed user repository.
#[derive(Debug, Clone)]
pub struct PostgresUserRepository {
    pool: PgPool,
}

impl PostgresUserRepository {
    /// Creates a new repository from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn run_blocking<F, T>(&self, f: F) -> UserRepositoryResult<T>
    where
        F: FnOnce(&mut PgConnection) -> UserRepositoryResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        run_blocking_with(
            move || {
                let mut connection = get_conn_with(&pool, UserRepositoryError::persistence)?;
                f(&mut connection)
            },
            UserRepositoryError::persistence,
        )
        .await
    }
}

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn save(&self, user: NewUser) -> UserRepositoryResult<User> {
        let new_row = to_new_row(&user);
        self.run_blocking(move |connection| {
            let row = diesel::insert_into(users::table)
                .values(&new_row)
                .returning(UserRow::as_returning())
                .get_result::<UserRow>(connection)
                .map_err(UserRepositoryError::persistence)?;
            Ok(row_to_user(row))
        })
        .await
    }

    async fn find_by_id(&self, id: UserId) -> UserRepositoryResult<Option<User>> {
        self.run_blocking(move |connection| {
            let row = users::table
                .find(id.value())
                .select(UserRow::as_select())
                .first::<UserRow>(connection)
                .optional()
                .map_err(UserRepositoryError::persistence)?;
            Ok(row.map(row_to_user))
        })
        .await
    }
}

pub(super) fn to_new_row(user: &NewUser) -> NewUserRow {
    NewUserRow {
        username: user.username().to_owned(),
        email: user.email().to_owned(),
    }
}

pub(super) fn row_to_user(row: UserRow) -> User {
    User::from_persisted(PersistedUserData {
        id: UserId::new(row.id),
        username: row.username,
        email: row.email,
    })
}
