//! # HTTP Request Handlers Module
//!
//! HTTP 요청을 처리하는 핸들러 함수들을 정의하는 모듈입니다.
//! ActixWeb 프레임워크를 기반으로 구현되었습니다.
//!
//! ## 아키텍처 위치
//!
//! ```text
//! HTTP Layer Architecture
//! ┌─────────────────────────────────────────────┐
//!   Client (curl, Frontend, API Client)
//! └─────────────────────┬───────────────────────┘
//!                       │ HTTP Request/Response
//! ┌─────────────────────▼───────────────────────┐
//!   Handlers (이 모듈) - HTTP 엔드포인트 처리         ← Web Layer
//! ├─────────────────────────────────────────────┤
//!   Services - 비즈니스 로직                        ← Service Layer
//! ├─────────────────────────────────────────────┤
//!   Repositories - 데이터 접근 (Postgres/Memory)     ← Repository Layer
//! ├─────────────────────────────────────────────┤
//!   Entities/DTOs - 도메인 모델                    ← Domain Layer
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## 의존성 주입
//!
//! 핸들러는 `web::Data<UserService>`로 서비스를 받습니다. `main`에서는
//! [`ServiceLocator`](crate::core::registry::ServiceLocator)에 등록된 인스턴스를
//! `web::Data::from`으로 감싸 등록하고, 테스트에서는 인메모리 백엔드로 만든
//! 서비스를 직접 주입합니다.
//!
//! ```rust,ignore
//! let service = UserService::instance();
//!
//! App::new()
//!     .app_data(web::Data::from(service))
//!     .configure(configure_all_routes)
//! ```
//!
//! ## 에러 처리
//! - **Result 패턴**: 모든 핸들러는 `Result<HttpResponse, AppError>`를 반환
//! - **자동 변환**: `?` 연산자로 서비스 에러를 그대로 전파
//! - **통합 에러 응답**: `AppError`의 `ResponseError` 구현이 상태 코드와 본문을 결정

pub mod users;
