//! Database Connection Management Module
//!
//! Postgres 커넥션 풀을 관리하는 모듈입니다.
//! 프로세스 시작 시 풀을 한 번 만들고 모든 요청이 이를 공유합니다.
//! 풀 내부의 동시성 안전성은 sqlx가 보장합니다.
//!
//! # 기본 사용법
//!
//! ```rust,ignore
//! use crate::config::StorageConfig;
//! use crate::db::Database;
//!
//! let database = Database::connect(&StorageConfig::from_env()).await?;
//! let repo = SqlUserRepository::new(database.pool().clone());
//! ```

use log::info;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use crate::config::StorageConfig;
use crate::core::errors::{AppResult, ErrorContext};

/// Postgres 커넥션 풀 래퍼
#[derive(Clone)]
pub struct Database {
    pool: PgPool,
}

impl Database {
    /// 새 커넥션 풀을 생성하고 연결 상태를 검증합니다.
    ///
    /// 연결 실패 시 재시도하지 않고 `AppError::InternalError`로 반환합니다.
    pub async fn connect(config: &StorageConfig) -> AppResult<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .connect(&config.database_url)
            .await
            .with_context(|| format!("Postgres 연결 실패 (max_connections={})", config.max_connections))?;

        // 연결 테스트
        sqlx::query("SELECT 1")
            .execute(&pool)
            .await
            .context("Postgres 연결 확인 쿼리 실패")?;

        info!("✅ Postgres 연결 성공 (max_connections={})", config.max_connections);

        Ok(Self { pool })
    }

    /// 리포지토리에서 사용할 커넥션 풀
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// 풀을 닫고 모든 커넥션 반환을 기다립니다.
    pub async fn close(&self) {
        self.pool.close().await;
        info!("Postgres 커넥션 풀 종료");
    }
}
