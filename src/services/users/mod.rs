//! 사용자 관리 서비스 모듈
//!
//! 사용자 CRUD 요청을 리포지토리 연산으로 연결하는 서비스를 제공합니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::users::UserService;
//!
//! let user_service = UserService::instance();
//! let users = user_service.list_users().await?;
//! ```

pub mod user_service;

pub use user_service::UserService;
