//! # Core Framework Module
//!
//! 서비스 전반에서 공유하는 기반 기능을 제공하는 모듈입니다.
//!
//! ## 모듈 구성
//!
//! ### [`registry`] - 서비스 로케이터
//! - **ServiceLocator**: 프로세스 전역 싱글톤 보관소 (`Arc<T>` 타입 기반 조회)
//! - **Service trait**: 시작 시 1회 실행되는 `init` 훅 (스키마 생성 등)
//!
//! ### [`errors`] - 통합 에러 처리
//! - **AppError**: 애플리케이션 전역 에러 타입
//! - **HTTP 통합**: Actix-Web `ResponseError` 구현으로 상태 코드 자동 매핑
//!
//! ## 사용 패턴
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use crate::core::registry::ServiceLocator;
//!
//! let repo = build_repository(&storage_config).await?;
//! ServiceLocator::register_service(Arc::new(UserService::new(repo)));
//! ServiceLocator::initialize_all().await?;
//!
//! let user_service = UserService::instance();
//! ```

pub mod errors;
pub mod registry;
