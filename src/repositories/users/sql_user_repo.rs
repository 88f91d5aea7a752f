//! # Postgres 사용자 리포지토리
//!
//! `users` 테이블을 사용하는 영구 저장소 구현입니다.
//!
//! ## 특징
//!
//! - **ID 위임**: `INSERT ... RETURNING id` 한 번의 왕복으로 `SERIAL` 값을 받아옵니다.
//! - **바인딩 파라미터**: 사용자 입력은 항상 `$n` 파라미터로 전달되며 SQL 문자열에 삽입되지 않습니다.
//! - **전체 조회**: `list`는 정렬 없이 테이블 전체를 읽어 `Vec`으로 만든 뒤 반환합니다.
//! - **재시도 없음**: 연결 실패와 쿼리 실패는 모두 `StorageUnavailable`로 전달됩니다.
//!
//! ## ID 해석
//!
//! 테이블의 ID는 32비트 정수이며 응답에는 항상 `to_string()` 형태로 나갑니다.
//! 그 형태와 정확히 같은 문자열만 ID로 인정합니다. `"007"`, `"+7"`, `" 7 "`처럼
//! 정수로는 읽히지만 표준 형태가 아닌 문자열은 인메모리 백엔드와 마찬가지로
//! 어떤 행도 가리키지 않으므로 `get`은 `NotFound`, `update`/`delete`는 no-op 성공입니다.

use async_trait::async_trait;
use sqlx::{FromRow, PgPool};
use crate::domain::entities::users::{User, UserData};
use super::user_repo::{RepositoryError, RepositoryResult, UserRepository};

const CREATE_TABLE_SQL: &str = r#"
    CREATE TABLE IF NOT EXISTS users (
        id SERIAL PRIMARY KEY,
        name TEXT,
        age INT,
        email TEXT
    )
"#;

/// `users` 테이블의 한 행
///
/// 컬럼에 NOT NULL 제약이 없으므로 모두 `Option`으로 읽고 기본값으로 채웁니다.
#[derive(Debug, FromRow)]
struct UserRow {
    id: i32,
    name: Option<String>,
    age: Option<i32>,
    email: Option<String>,
}

impl From<UserRow> for User {
    fn from(row: UserRow) -> Self {
        User {
            id: row.id.to_string(),
            name: row.name.unwrap_or_default(),
            age: row.age.unwrap_or_default(),
            email: row.email.unwrap_or_default(),
        }
    }
}

impl From<sqlx::Error> for RepositoryError {
    fn from(err: sqlx::Error) -> Self {
        RepositoryError::StorageUnavailable(err.to_string())
    }
}

/// Postgres 기반 사용자 리포지토리
///
/// 커넥션 풀은 시작 시 한 번 만들어져 모든 요청이 공유합니다.
#[derive(Clone)]
pub struct SqlUserRepository {
    pool: PgPool,
}

impl SqlUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn parse_id(id: &str) -> Option<i32> {
        id.parse::<i32>()
            .ok()
            .filter(|key| key.to_string() == id)
    }
}

#[async_trait]
impl UserRepository for SqlUserRepository {
    fn backend(&self) -> &'static str {
        "postgres"
    }

    /// 테이블이 없으면 생성합니다. 같은 형태의 테이블이 이미 있으면 그대로 사용합니다.
    async fn init(&self) -> RepositoryResult<()> {
        sqlx::query(CREATE_TABLE_SQL).execute(&self.pool).await?;

        Ok(())
    }

    async fn create(&self, data: UserData) -> RepositoryResult<User> {
        let id: i32 = sqlx::query_scalar(
            r#"
            INSERT INTO users (name, age, email)
            VALUES ($1, $2, $3)
            RETURNING id
            "#,
        )
        .bind(&data.name)
        .bind(data.age)
        .bind(&data.email)
        .fetch_one(&self.pool)
        .await?;

        Ok(User::with_id(id.to_string(), data))
    }

    async fn get(&self, id: &str) -> RepositoryResult<User> {
        let Some(key) = Self::parse_id(id) else {
            return Err(RepositoryError::user_not_found(id));
        };

        let row: Option<UserRow> = sqlx::query_as(
            r#"
            SELECT id, name, age, email
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(key)
        .fetch_optional(&self.pool)
        .await?;

        row.map(User::from)
            .ok_or_else(|| RepositoryError::user_not_found(id))
    }

    async fn list(&self) -> RepositoryResult<Vec<User>> {
        let rows: Vec<UserRow> = sqlx::query_as("SELECT id, name, age, email FROM users")
            .fetch_all(&self.pool)
            .await?;

        Ok(rows.into_iter().map(User::from).collect())
    }

    /// 영향받은 행 수를 확인하지 않습니다. 없는 ID에 대한 수정은 성공으로 끝납니다.
    async fn update(&self, id: &str, data: UserData) -> RepositoryResult<()> {
        let Some(key) = Self::parse_id(id) else {
            return Ok(());
        };

        sqlx::query(
            r#"
            UPDATE users
            SET name = $1, age = $2, email = $3
            WHERE id = $4
            "#,
        )
        .bind(&data.name)
        .bind(data.age)
        .bind(&data.email)
        .bind(key)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn delete(&self, id: &str) -> RepositoryResult<()> {
        let Some(key) = Self::parse_id(id) else {
            return Ok(());
        };

        sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(key)
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}
