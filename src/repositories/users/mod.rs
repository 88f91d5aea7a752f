//! 사용자 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! [`UserRepository`](user_repo::UserRepository) 계약과 두 구현체를 제공합니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use crate::repositories::users::{MemoryUserRepository, UserRepository};
//!
//! let repo: Arc<dyn UserRepository> = Arc::new(MemoryUserRepository::new());
//! let user = repo.create(data).await?;
//! ```

pub mod user_repo;
pub mod sql_user_repo;
pub mod memory_user_repo;

pub use user_repo::{RepositoryError, RepositoryResult, UserRepository};
pub use sql_user_repo::SqlUserRepository;
pub use memory_user_repo::MemoryUserRepository;
