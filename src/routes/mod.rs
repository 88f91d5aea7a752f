//! API 라우트 설정 모듈
//!
//! 사용자 CRUD 엔드포인트와 헬스체크 엔드포인트를 애플리케이션에 등록합니다.
//!
//! # Features
//!
//! - 사용자 CRUD API 엔드포인트 (별칭 경로 포함)
//! - JSON 디코딩 실패를 `400 Bad Request`로 변환하는 추출기 설정
//! - 헬스체크 엔드포인트
//!
//! # Registration Order
//!
//! actix-web은 등록 순서대로 경로를 매칭합니다. `GET /users/all`은 반드시
//! `GET /users/{id}`보다 먼저 등록되어야 합니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use actix_web::{web, App};
//!
//! let app = App::new()
//!     .app_data(web::Data::from(UserService::instance()))
//!     .configure(configure_all_routes);
//! ```

use actix_web::{error, web, HttpRequest, HttpResponse};
use serde_json::json;
use crate::core::errors::AppError;
use crate::handlers;
use crate::services::users::UserService;

/// 모든 라우트를 설정합니다
///
/// # Arguments
///
/// * `cfg` - Actix-web 서비스 설정 객체
pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config());

    // Health check endpoint
    cfg.service(health_check);

    configure_user_routes(cfg);
}

/// 사용자 관련 라우트를 설정합니다
///
/// # Available Routes
///
/// - `POST /users`, `POST /create` - 사용자 생성
/// - `GET /users/all` - 전체 목록
/// - `GET /users/{id}`, `GET /user/{id}` - 사용자 조회
/// - `PUT /users/update/{id}` - 사용자 수정
/// - `DELETE /users/delete/{id}` - 사용자 삭제
///
/// # Examples
///
/// ```bash
/// curl -X POST http://localhost:7777/users \
///   -d '{"name":"Ana","age":30,"email":"a@x.com"}'
///
/// curl http://localhost:7777/users/all
/// ```
fn configure_user_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(handlers::users::create_user)
        // /users/{id}보다 먼저
        .service(handlers::users::list_users)
        .service(handlers::users::get_user)
        .service(handlers::users::update_user)
        .service(handlers::users::delete_user);
}

/// JSON 본문 추출기 설정
///
/// `Content-Type` 헤더 없이 보낸 본문도 JSON으로 해석합니다.
/// 본문 크기 제한은 두지 않습니다 (actix 기본값 2 MiB 해제).
/// 디코딩에 실패하면 [`AppError::DecodeError`]로 변환되어
/// `{"error": "..."}` 본문과 함께 `400`으로 응답합니다.
fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .content_type_required(false)
        .limit(usize::MAX)
        .error_handler(json_error_handler)
}

fn json_error_handler(err: error::JsonPayloadError, req: &HttpRequest) -> actix_web::Error {
    log::debug!("JSON decode failed on {} {}: {}", req.method(), req.path(), err);

    AppError::DecodeError(err.to_string()).into()
}

/// 서비스 상태를 확인하는 헬스체크 엔드포인트
///
/// # Returns
///
/// * `HttpResponse` - 서비스 상태 정보를 포함한 JSON 응답
///   - `status`: 서비스 상태 ("healthy")
///   - `service`: 서비스 이름
///   - `version`: 현재 버전
///   - `timestamp`: 응답 시각
///   - `storage`: 사용 중인 스토리지 백엔드
///
/// # Examples
///
/// ```bash
/// curl http://localhost:7777/health
/// ```
///
/// Response:
/// ```json
/// {
///   "status": "healthy",
///   "service": "user_service",
///   "version": "0.1.0",
///   "timestamp": "2026-01-01T00:00:00+00:00",
///   "storage": "postgres"
/// }
/// ```
#[actix_web::get("/health")]
async fn health_check(user_service: web::Data<UserService>) -> HttpResponse {
    HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": "user_service",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "storage": user_service.backend(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::sync::Arc;
    use actix_web::{http::StatusCode, middleware::NormalizePath, test, App};
    use crate::domain::dto::users::response::{UpdateUserResponse, UserResponse};
    use crate::repositories::users::MemoryUserRepository;

    macro_rules! memory_app {
        () => {
            test::init_service(
                App::new()
                    .app_data(web::Data::new(UserService::new(Arc::new(MemoryUserRepository::new()))))
                    .wrap(NormalizePath::trim())
                    .configure(configure_all_routes),
            )
            .await
        };
    }

    #[actix_web::test]
    async fn test_health_reports_storage_backend() {
        let app = memory_app!();

        let req = test::TestRequest::get().uri("/health").to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["status"], "healthy");
        assert_eq!(body["storage"], "memory");
    }

    #[actix_web::test]
    async fn test_full_crud_cycle() {
        let app = memory_app!();

        // create
        let req = test::TestRequest::post()
            .uri("/users")
            .set_json(json!({"name": "Ana", "age": 30, "email": "a@x.com"}))
            .to_request();
        let created: UserResponse = test::call_and_read_body_json(&app, req).await;
        assert!(!created.id.is_empty());

        // get
        let req = test::TestRequest::get().uri(&format!("/users/{}", created.id)).to_request();
        let fetched: UserResponse = test::call_and_read_body_json(&app, req).await;
        assert_eq!(fetched, created);

        // update (trailing slash)
        let req = test::TestRequest::put()
            .uri(&format!("/users/update/{}/", created.id))
            .set_json(json!({"name": "Ana B", "age": 31, "email": "b@x.com"}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let updated: UpdateUserResponse = test::read_body_json(resp).await;
        assert_eq!(updated.name, "Ana B");

        let req = test::TestRequest::get().uri(&format!("/user/{}", created.id)).to_request();
        let fetched: UserResponse = test::call_and_read_body_json(&app, req).await;
        assert_eq!(fetched.id, created.id);
        assert_eq!(fetched.age, 31);
        assert_eq!(fetched.email, "b@x.com");

        // delete (trailing slash)
        let req = test::TestRequest::delete()
            .uri(&format!("/users/delete/{}/", created.id))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NO_CONTENT);

        let req = test::TestRequest::get().uri(&format!("/users/{}", created.id)).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn test_list_all_is_not_captured_by_id_route() {
        let app = memory_app!();

        let req = test::TestRequest::get().uri("/users/all").to_request();
        let empty: Vec<UserResponse> = test::call_and_read_body_json(&app, req).await;
        assert!(empty.is_empty());

        let mut expected = HashSet::new();
        for name in ["a", "b", "c"] {
            let req = test::TestRequest::post()
                .uri("/create")
                .set_json(json!({"name": name, "age": 1, "email": ""}))
                .to_request();
            let created: UserResponse = test::call_and_read_body_json(&app, req).await;
            expected.insert(created.id);
        }

        let req = test::TestRequest::get().uri("/users/all/").to_request();
        let listed: Vec<UserResponse> = test::call_and_read_body_json(&app, req).await;
        let ids: HashSet<String> = listed.into_iter().map(|u| u.id).collect();
        assert_eq!(ids, expected);
    }

    #[actix_web::test]
    async fn test_update_missing_id_does_not_create_record() {
        let app = memory_app!();

        let req = test::TestRequest::put()
            .uri("/users/update/77")
            .set_json(json!({"name": "Ghost", "age": 0, "email": ""}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let req = test::TestRequest::get().uri("/users/all").to_request();
        let listed: Vec<UserResponse> = test::call_and_read_body_json(&app, req).await;
        assert!(listed.is_empty());
    }

    #[actix_web::test]
    async fn test_malformed_json_is_400_with_error_body() {
        let app = memory_app!();

        let req = test::TestRequest::post()
            .uri("/users")
            .insert_header(("content-type", "application/json"))
            .set_payload("{\"name\": \"Ana\", \"age\": ")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert!(body["error"].as_str().unwrap().starts_with("Decode error"));
    }

    #[actix_web::test]
    async fn test_wrong_field_type_is_400() {
        let app = memory_app!();

        let req = test::TestRequest::put()
            .uri("/users/update/1")
            .set_json(json!({"name": "Ana", "age": "thirty"}))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn test_body_without_content_type_is_accepted() {
        let app = memory_app!();

        let req = test::TestRequest::post()
            .uri("/users")
            .set_payload(r#"{"name":"Ana","age":30,"email":"a@x.com"}"#)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let created: UserResponse = test::read_body_json(resp).await;
        assert_eq!(created.name, "Ana");
    }

    #[actix_web::test]
    async fn test_body_larger_than_default_limit_is_accepted() {
        let app = memory_app!();
        let name = "a".repeat(3 * 1024 * 1024);

        let req = test::TestRequest::post()
            .uri("/users")
            .set_json(json!({"name": name, "age": 1, "email": "big@x.com"}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let created: UserResponse = test::read_body_json(resp).await;
        assert_eq!(created.name.len(), 3 * 1024 * 1024);
    }
}
