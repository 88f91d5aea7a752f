//! 사용자 관리 서비스 백엔드
//!
//! 사용자 레코드(`id`, `name`, `age`, `email`)의 생성, 조회, 목록, 수정, 삭제를
//! JSON over HTTP로 제공하는 서비스입니다.
//!
//! # Features
//!
//! - **사용자 CRUD**: 단순한 REST 엔드포인트
//! - **교체 가능한 저장소**: Postgres(영구) 또는 인메모리(휘발성)를 시작 시 선택
//! - **ServiceLocator DI**: 타입 기반 레지스트리와 시작 시 초기화 훅
//! - **Rate Limiting / CORS**: actix-governor, actix-cors 미들웨어
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← REST API 엔드포인트
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 요청/응답 처리
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Services     │ ← DTO 변환, 로깅
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  Repositories   │ ← dyn UserRepository
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ Postgres / Map  │ ← 저장소
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use user_service_backend::repositories::users::MemoryUserRepository;
//! use user_service_backend::services::users::UserService;
//!
//! let service = UserService::new(Arc::new(MemoryUserRepository::new()));
//! let user = service.create_user(request).await?;
//! ```

pub mod core;
pub mod config;
pub mod db;
pub mod domain;
pub mod repositories;
pub mod services;
pub mod routes;
pub mod handlers;
