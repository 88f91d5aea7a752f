//! # Domain Layer Module
//!
//! 도메인 계층은 엔티티와 DTO로 구성됩니다.
//!
//! ```text
//! Domain Layer (이 모듈)
//! ├── Entities  - 저장되는 레코드 (User, UserData)
//! └── DTOs      - 요청/응답 계약 (UserRequest, UserResponse, UpdateUserResponse)
//!      │
//!      ▼
//! Application Layer (Services)
//!      │
//!      ▼
//! Infrastructure Layer (Repositories, DB)
//! ```
//!
//! 엔티티는 HTTP 표현과 분리되어 있으므로 응답 형식이 바뀌어도
//! 리포지토리 계약은 영향을 받지 않습니다.

pub mod entities;
pub mod dto;
