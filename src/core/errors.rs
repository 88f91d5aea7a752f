//! # Application Error Handling System
//!
//! 사용자 서비스 전역에서 사용하는 에러 처리 시스템입니다.
//! `thiserror`로 에러 타입을 정의하고 `actix_web::ResponseError`를 구현하여
//! 핸들러에서 `?` 연산자만으로 일관된 HTTP 에러 응답을 만들 수 있습니다.
//!
//! ## 에러 분류
//!
//! - **디코딩 에러**: 요청 본문이 올바른 JSON이 아님 (리포지토리까지 도달하지 않음)
//! - **조회 실패**: 요청한 ID의 사용자가 존재하지 않음
//! - **스토리지 에러**: 백엔드 연결 실패 또는 쿼리 실패
//! - **내부 에러**: 설정, 초기화 등 그 외 모든 예상치 못한 오류
//!
//! 일시적/영구적 스토리지 장애는 구분하지 않습니다. 재시도 여부는 호출자가 결정합니다.
//!
//! ## HTTP 응답 매핑
//!
//! | AppError | HTTP Status |
//! |----------|-------------|
//! | `DecodeError` | 400 Bad Request |
//! | `NotFound` | 404 Not Found |
//! | `StorageUnavailable` | 500 Internal Server Error |
//! | `InternalError` | 500 Internal Server Error |
//!
//! ## 사용 패턴
//!
//! ```rust,ignore
//! use crate::core::errors::AppError;
//!
//! async fn get_user(id: web::Path<String>, service: web::Data<UserService>) -> Result<HttpResponse, AppError> {
//!     let user = service.get_user_by_id(&id).await?; // NotFound → 404
//!     Ok(HttpResponse::Ok().json(user))
//! }
//! ```

use thiserror::Error;
use crate::repositories::users::user_repo::RepositoryError;

/// 애플리케이션 전역 에러 타입
///
/// 모든 변형은 사람이 읽을 수 있는 메시지 문자열 하나만 가집니다.
/// 메시지 내용은 버전 간에 안정적으로 유지된다는 보장이 없습니다.
#[derive(Error, Debug)]
pub enum AppError {
    /// 요청 본문 디코딩 실패 (400 Bad Request)
    ///
    /// 잘못된 JSON, 타입이 맞지 않는 필드 등. 트랜스포트 계층에서만 생성됩니다.
    #[error("Decode error: {0}")]
    DecodeError(String),

    /// 리소스 찾을 수 없음 (404 Not Found)
    #[error("Not found: {0}")]
    NotFound(String),

    /// 스토리지 백엔드 접근 불가 또는 쿼리 실패 (500 Internal Server Error)
    ///
    /// # 발생 시나리오
    /// - 데이터베이스 연결 끊김, 풀 타임아웃
    /// - 쿼리 실행 오류
    /// - 인메모리 저장소의 잠금 오염(poisoned lock)
    #[error("Storage unavailable: {0}")]
    StorageUnavailable(String),

    /// 내부 서버 에러 (500 Internal Server Error)
    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl From<RepositoryError> for AppError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound(msg) => AppError::NotFound(msg),
            RepositoryError::StorageUnavailable(msg) => AppError::StorageUnavailable(msg),
        }
    }
}

impl actix_web::ResponseError for AppError {
    fn status_code(&self) -> actix_web::http::StatusCode {
        use actix_web::http::StatusCode;

        match self {
            AppError::DecodeError(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// HTTP 에러 응답을 생성합니다.
    ///
    /// 모든 에러 응답은 다음 형식을 따릅니다:
    ///
    /// ```json
    /// { "error": "Not found: user 42 not found" }
    /// ```
    fn error_response(&self) -> actix_web::HttpResponse {
        actix_web::HttpResponse::build(self.status_code())
            .json(serde_json::json!({
                "error": self.to_string()
            }))
    }
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;

/// 외부 라이브러리 에러를 AppError로 변환하는 확장 trait
///
/// ```rust,ignore
/// let port = raw.parse::<u16>().context("PORT 파싱 실패")?;
/// ```
pub trait ErrorContext<T> {
    /// 컨텍스트 정보와 함께 에러를 변환합니다.
    fn context(self, msg: &str) -> AppResult<T>;

    /// 클로저를 사용하여 지연 평가된 컨텍스트를 제공합니다.
    fn with_context<F>(self, f: F) -> AppResult<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::fmt::Display,
{
    fn context(self, msg: &str) -> AppResult<T> {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", msg, e)))
    }

    fn with_context<F>(self, f: F) -> AppResult<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", f(), e)))
    }
}
