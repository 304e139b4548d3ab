//! User Repository Service
//!
//! CRUD operations against the user table. Every operation leases one
//! connection from the shared pool for the minimum span of its statements
//! and releases it on all exit paths when the lease guard drops. Password
//! hashing always happens before a connection is taken.

use sqlx::SqlitePool;
use validator::Validate;

use crate::models::{
    requests::{CreateUserRequest, UpdateUserRequest},
    user::{CredentialRow, User, DEFAULT_ROLE},
};
use crate::utils::{
    error::{ApiError, ApiResult},
    security::{hash_password, DEFAULT_BCRYPT_COST},
    validation::normalize_email,
};

/// Repository over the shared connection pool
#[derive(Clone)]
pub struct UserService {
    /// Database connection pool, created once at startup and passed in
    pool: SqlitePool,

    /// bcrypt cost factor for password hashing
    bcrypt_cost: u32,
}

impl UserService {
    /// Creates a new UserService borrowing the shared pool
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            pool,
            bcrypt_cost: DEFAULT_BCRYPT_COST,
        }
    }

    /// Override the bcrypt cost factor (lower values for tests)
    pub fn with_bcrypt_cost(mut self, cost: u32) -> Self {
        self.bcrypt_cost = cost;
        self
    }

    /// Creates a new user, hashing the password before any connection is
    /// leased. The role defaults to "USER" when the request carries none.
    /// The insert auto-commits; a duplicate email surfaces as a conflict.
    pub async fn create_user(&self, request: CreateUserRequest) -> ApiResult<i64> {
        // Normalize first so validation sees the email as it will be stored.
        let request = CreateUserRequest {
            email: normalize_email(&request.email),
            ..request
        };
        request
            .validate()
            .map_err(|e| ApiError::Validation(format!("Invalid user data: {e}")))?;

        let role = request.role.unwrap_or_else(|| DEFAULT_ROLE.to_string());
        let password_hash = hash_password(request.password, self.bcrypt_cost).await?;

        let mut conn = self.pool.acquire().await?;
        let result = sqlx::query(
            "INSERT INTO users (name, email, password_hash, role) VALUES (?, ?, ?, ?)",
        )
        .bind(&request.name)
        .bind(&request.email)
        .bind(&password_hash)
        .bind(&role)
        .execute(&mut *conn)
        .await
        .map_err(map_unique_violation)?;

        Ok(result.last_insert_rowid())
    }

    /// Lists all users, projecting id, name, email, and role only.
    ///
    /// An empty table is reported as not-found rather than an empty list;
    /// callers relying on this service expect the 404 contract.
    pub async fn list_users(&self) -> ApiResult<Vec<User>> {
        let mut conn = self.pool.acquire().await?;
        let users = sqlx::query_as::<_, User>("SELECT id, name, email, role FROM users")
            .fetch_all(&mut *conn)
            .await?;

        if users.is_empty() {
            return Err(ApiError::not_found("No users found in the database."));
        }

        Ok(users)
    }

    /// Retrieves a single user by id with the same projection as the listing
    pub async fn get_user_by_id(&self, id: i64) -> ApiResult<User> {
        let mut conn = self.pool.acquire().await?;
        sqlx::query_as::<_, User>("SELECT id, name, email, role FROM users WHERE id = ?")
            .bind(id)
            .fetch_optional(&mut *conn)
            .await?
            .ok_or_else(|| {
                ApiError::not_found_with_details(
                    "User not found",
                    format!("No record found with ID: {id}"),
                )
            })
    }

    /// Updates a user's mutable fields. The password is re-hashed and
    /// replaced only when the request supplies one; otherwise the stored
    /// digest is untouched.
    ///
    /// A single UPDATE statement carries the existence check: zero affected
    /// rows means the target never existed or was removed concurrently, and
    /// is reported as not-found rather than vacuous success.
    pub async fn update_user(&self, id: i64, request: UpdateUserRequest) -> ApiResult<()> {
        // Normalize first so validation sees the email as it will be stored.
        let request = UpdateUserRequest {
            email: normalize_email(&request.email),
            ..request
        };
        request
            .validate()
            .map_err(|e| ApiError::Validation(format!("Invalid update data: {e}")))?;

        // Hash before leasing, so the slow step never holds a connection.
        let password_hash = match request.password {
            Some(password) => Some(hash_password(password, self.bcrypt_cost).await?),
            None => None,
        };

        let mut conn = self.pool.acquire().await?;
        let result = match password_hash {
            Some(hash) => {
                sqlx::query(
                    "UPDATE users
                     SET name = ?, email = ?, password_hash = ?, role = ?,
                         updated_at = datetime('now')
                     WHERE id = ?",
                )
                .bind(&request.name)
                .bind(&request.email)
                .bind(&hash)
                .bind(&request.role)
                .bind(id)
                .execute(&mut *conn)
                .await
            }
            None => {
                sqlx::query(
                    "UPDATE users
                     SET name = ?, email = ?, role = ?, updated_at = datetime('now')
                     WHERE id = ?",
                )
                .bind(&request.name)
                .bind(&request.email)
                .bind(&request.role)
                .bind(id)
                .execute(&mut *conn)
                .await
            }
        }
        .map_err(map_unique_violation)?;

        if result.rows_affected() == 0 {
            return Err(ApiError::not_found_with_details(
                "User not found",
                format!("No record found with ID: {id}"),
            ));
        }

        Ok(())
    }

    /// Deletes a user by id. Zero affected rows means the row never existed
    /// or was already removed, reported as not-found.
    pub async fn delete_user(&self, id: i64) -> ApiResult<()> {
        let mut conn = self.pool.acquire().await?;
        let result = sqlx::query("DELETE FROM users WHERE id = ?")
            .bind(id)
            .execute(&mut *conn)
            .await?;

        if result.rows_affected() == 0 {
            return Err(ApiError::not_found_with_details(
                "User not found",
                format!("No user exists with ID: {id}"),
            ));
        }

        Ok(())
    }

    /// Credential lookup for the authentication service. The lease is scoped
    /// to this call, so password verification happens off-lease.
    ///
    /// Returns None for an unknown email; the caller maps that to the same
    /// failure as a digest mismatch.
    pub(crate) async fn credentials_by_email(
        &self,
        email: &str,
    ) -> ApiResult<Option<CredentialRow>> {
        let mut conn = self.pool.acquire().await?;
        let row = sqlx::query_as::<_, CredentialRow>(
            "SELECT id, password_hash, role FROM users WHERE email = ?",
        )
        .bind(normalize_email(email))
        .fetch_optional(&mut *conn)
        .await?;

        Ok(row)
    }
}

/// Map a unique-constraint violation (duplicate email) to a conflict;
/// everything else stays a database error.
fn map_unique_violation(e: sqlx::Error) -> ApiError {
    match &e {
        sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
            ApiError::Conflict("A user with this email already exists".to_string())
        }
        _ => ApiError::Database(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::security::verify_password;
    use sqlx::SqlitePool;

    const TEST_COST: u32 = 4;

    fn service(pool: SqlitePool) -> UserService {
        UserService::new(pool).with_bcrypt_cost(TEST_COST)
    }

    fn create_request(email: &str, role: Option<&str>) -> CreateUserRequest {
        CreateUserRequest {
            name: "Ana".to_string(),
            email: email.to_string(),
            password: "password1".to_string(),
            role: role.map(str::to_string),
        }
    }

    async fn stored_digest(pool: &SqlitePool, id: i64) -> String {
        sqlx::query_scalar("SELECT password_hash FROM users WHERE id = ?")
            .bind(id)
            .fetch_one(pool)
            .await
            .unwrap()
    }

    #[sqlx::test]
    async fn create_defaults_role_to_user(pool: SqlitePool) {
        let users = service(pool);
        let id = users.create_user(create_request("ana@x.com", None)).await.unwrap();

        let user = users.get_user_by_id(id).await.unwrap();
        assert_eq!(user.role, "USER");
        assert_eq!(user.email, "ana@x.com");
    }

    #[sqlx::test]
    async fn create_keeps_explicit_role(pool: SqlitePool) {
        let users = service(pool);
        let id = users
            .create_user(create_request("ana@x.com", Some("ADMIN")))
            .await
            .unwrap();

        assert_eq!(users.get_user_by_id(id).await.unwrap().role, "ADMIN");
    }

    #[sqlx::test]
    async fn create_stores_a_digest_not_the_plaintext(pool: SqlitePool) {
        let users = service(pool.clone());
        let id = users.create_user(create_request("ana@x.com", None)).await.unwrap();

        let digest = stored_digest(&pool, id).await;
        assert_ne!(digest, "password1");
        assert!(verify_password("password1".into(), digest).await.unwrap());
    }

    #[sqlx::test]
    async fn short_passwords_are_accepted(pool: SqlitePool) {
        let users = service(pool.clone());
        let id = users
            .create_user(CreateUserRequest {
                name: "Ana".to_string(),
                email: "ana@x.com".to_string(),
                password: "p1".to_string(),
                role: Some("ADMIN".to_string()),
            })
            .await
            .unwrap();

        let user = users.get_user_by_id(id).await.unwrap();
        assert_eq!(user.role, "ADMIN");

        let digest = stored_digest(&pool, id).await;
        assert!(verify_password("p1".into(), digest).await.unwrap());
    }

    #[sqlx::test]
    async fn duplicate_email_is_a_conflict(pool: SqlitePool) {
        let users = service(pool);
        users.create_user(create_request("ana@x.com", None)).await.unwrap();

        let err = users
            .create_user(create_request("ana@x.com", None))
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::Conflict(_)));
    }

    #[sqlx::test]
    async fn concurrent_duplicate_creates_admit_exactly_one(pool: SqlitePool) {
        let users = service(pool);
        let (a, b) = tokio::join!(
            users.create_user(create_request("ana@x.com", None)),
            users.create_user(create_request("ana@x.com", None)),
        );

        let successes = [&a, &b].iter().filter(|r| r.is_ok()).count();
        assert_eq!(successes, 1);

        let loser = if a.is_err() { a.unwrap_err() } else { b.unwrap_err() };
        assert!(matches!(loser, ApiError::Conflict(_)));
    }

    #[sqlx::test]
    async fn email_is_normalized_before_insert(pool: SqlitePool) {
        let users = service(pool);
        let id = users
            .create_user(create_request("  ANA@X.COM ", None))
            .await
            .unwrap();

        assert_eq!(users.get_user_by_id(id).await.unwrap().email, "ana@x.com");
    }

    #[sqlx::test]
    async fn list_on_empty_table_is_not_found(pool: SqlitePool) {
        let err = service(pool).list_users().await.unwrap_err();
        match err {
            ApiError::NotFound { message, .. } => {
                assert_eq!(message, "No users found in the database.")
            }
            other => panic!("expected NotFound, got {other:?}"),
        }
    }

    #[sqlx::test]
    async fn list_projects_without_digest(pool: SqlitePool) {
        let users = service(pool);
        users.create_user(create_request("ana@x.com", None)).await.unwrap();
        users.create_user(create_request("bob@x.com", None)).await.unwrap();

        let listed = users.list_users().await.unwrap();
        assert_eq!(listed.len(), 2);
        for user in &listed {
            let json = serde_json::to_string(user).unwrap();
            assert!(!json.contains("password"));
        }
    }

    #[sqlx::test]
    async fn get_missing_user_names_the_id(pool: SqlitePool) {
        let err = service(pool).get_user_by_id(999).await.unwrap_err();
        match err {
            ApiError::NotFound { details, .. } => {
                assert_eq!(details.as_deref(), Some("No record found with ID: 999"))
            }
            other => panic!("expected NotFound, got {other:?}"),
        }
    }

    #[sqlx::test]
    async fn update_without_password_keeps_digest(pool: SqlitePool) {
        let users = service(pool.clone());
        let id = users.create_user(create_request("ana@x.com", None)).await.unwrap();
        let before = stored_digest(&pool, id).await;

        users
            .update_user(
                id,
                UpdateUserRequest {
                    name: "Ana Maria".to_string(),
                    email: "ana@x.com".to_string(),
                    password: None,
                    role: "ADMIN".to_string(),
                },
            )
            .await
            .unwrap();

        assert_eq!(stored_digest(&pool, id).await, before);
        let user = users.get_user_by_id(id).await.unwrap();
        assert_eq!(user.name, "Ana Maria");
        assert_eq!(user.role, "ADMIN");
    }

    #[sqlx::test]
    async fn update_with_password_replaces_digest(pool: SqlitePool) {
        let users = service(pool.clone());
        let id = users.create_user(create_request("ana@x.com", None)).await.unwrap();
        let before = stored_digest(&pool, id).await;

        users
            .update_user(
                id,
                UpdateUserRequest {
                    name: "Ana".to_string(),
                    email: "ana@x.com".to_string(),
                    password: Some("password2".to_string()),
                    role: "USER".to_string(),
                },
            )
            .await
            .unwrap();

        let after = stored_digest(&pool, id).await;
        assert_ne!(after, before);
        assert!(verify_password("password2".into(), after.clone()).await.unwrap());
        assert!(!verify_password("password1".into(), after).await.unwrap());
    }

    #[sqlx::test]
    async fn update_normalizes_email(pool: SqlitePool) {
        let users = service(pool);
        let id = users.create_user(create_request("ana@x.com", None)).await.unwrap();

        users
            .update_user(
                id,
                UpdateUserRequest {
                    name: "Ana".to_string(),
                    email: "  ANA@Y.COM ".to_string(),
                    password: None,
                    role: "USER".to_string(),
                },
            )
            .await
            .unwrap();

        assert_eq!(users.get_user_by_id(id).await.unwrap().email, "ana@y.com");
    }

    #[sqlx::test]
    async fn update_missing_user_is_not_found(pool: SqlitePool) {
        let err = service(pool)
            .update_user(
                999,
                UpdateUserRequest {
                    name: "Ghost".to_string(),
                    email: "ghost@x.com".to_string(),
                    password: None,
                    role: "USER".to_string(),
                },
            )
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::NotFound { .. }));
    }

    #[sqlx::test]
    async fn delete_then_get_is_not_found(pool: SqlitePool) {
        let users = service(pool);
        let id = users.create_user(create_request("ana@x.com", None)).await.unwrap();

        users.delete_user(id).await.unwrap();
        assert!(matches!(
            users.get_user_by_id(id).await.unwrap_err(),
            ApiError::NotFound { .. }
        ));

        // Second delete hits zero rows and reports not-found, not success.
        assert!(matches!(
            users.delete_user(id).await.unwrap_err(),
            ApiError::NotFound { .. }
        ));
    }

    #[sqlx::test]
    async fn delete_missing_user_is_not_found(pool: SqlitePool) {
        let err = service(pool).delete_user(123).await.unwrap_err();
        match err {
            ApiError::NotFound { details, .. } => {
                assert_eq!(details.as_deref(), Some("No user exists with ID: 123"))
            }
            other => panic!("expected NotFound, got {other:?}"),
        }
    }

    #[sqlx::test]
    async fn invalid_payload_is_rejected_before_any_insert(pool: SqlitePool) {
        let users = service(pool);
        let err = users
            .create_user(CreateUserRequest {
                name: "Ana".to_string(),
                email: "not-an-email".to_string(),
                password: "password1".to_string(),
                role: None,
            })
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::Validation(_)));
    }
}
