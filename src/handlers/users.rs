//! # User Management HTTP Handlers
//!
//! 사용자 CRUD 엔드포인트를 처리하는 핸들러 함수들입니다.
//! 핸들러는 요청 디코딩과 상태 코드 결정만 담당하고, 실제 작업은
//! [`UserService`]에 위임합니다.
//!
//! ## 엔드포인트
//!
//! | 메서드 | 경로 | 설명 | 상태 코드 |
//! |--------|------|------|-----------|
//! | `POST` | `/users`, `/create` | 사용자 생성 | 200 OK |
//! | `GET` | `/users/all` | 전체 목록 | 200 OK |
//! | `GET` | `/users/{id}`, `/user/{id}` | 사용자 조회 | 200 OK / 404 |
//! | `PUT` | `/users/update/{id}` | 사용자 수정 | 200 OK |
//! | `DELETE` | `/users/delete/{id}` | 사용자 삭제 | 204 No Content |
//!
//! 경로 끝의 `/`는 `NormalizePath::trim()` 미들웨어가 제거하므로
//! `/users/update/3/`과 `/users/update/3`은 같은 엔드포인트입니다.
//!
//! ## 에러 응답
//!
//! 모든 에러는 [`AppError`](crate::core::errors::AppError)를 통해
//! `{"error": "..."}` 형태로 응답됩니다.
//!
//! ```json
//! { "error": "Not found: user 42 not found" }
//! ```

use actix_web::{web, HttpResponse, routes, get, put, delete};
use crate::core::errors::AppError;
use crate::domain::dto::users::request::UserRequest;
use crate::services::users::UserService;

/// 사용자 생성 핸들러
///
/// # 엔드포인트
///
/// `POST /users` (별칭: `POST /create`)
///
/// # 요청 본문
///
/// ```json
/// { "name": "Ana", "age": 30, "email": "a@x.com" }
/// ```
///
/// 누락된 필드는 빈 문자열 또는 0으로 채워집니다. 본문의 `id`는 무시됩니다.
///
/// # 응답
///
/// ## 성공 (200 OK)
/// ```json
/// { "id": "1", "name": "Ana", "age": 30, "email": "a@x.com" }
/// ```
///
/// ## 실패
/// - `400 Bad Request`: JSON 디코딩 실패
/// - `500 Internal Server Error`: 스토리지 오류
///
/// # 사용 예제
///
/// ```bash
/// curl -X POST http://localhost:7777/users \
///   -H "Content-Type: application/json" \
///   -d '{"name":"Ana","age":30,"email":"a@x.com"}'
/// ```
#[routes]
#[post("/users")]
#[post("/create")]
pub async fn create_user(
    user_service: web::Data<UserService>,
    payload: web::Json<UserRequest>,
) -> Result<HttpResponse, AppError> {
    let response = user_service.create_user(payload.into_inner()).await?;

    Ok(HttpResponse::Ok().json(response))
}

/// 전체 사용자 목록 핸들러
///
/// `GET /users/all`
///
/// 순서가 보장되지 않는 JSON 배열을 반환합니다. 레코드가 없으면 `[]`입니다.
/// `/users/{id}`보다 먼저 등록되어야 `all`이 ID로 해석되지 않습니다.
#[get("/users/all")]
pub async fn list_users(
    user_service: web::Data<UserService>,
) -> Result<HttpResponse, AppError> {
    let users = user_service.list_users().await?;

    Ok(HttpResponse::Ok().json(users))
}

/// 사용자 조회 핸들러
///
/// `GET /users/{id}` (별칭: `GET /user/{id}`)
///
/// 조회 시점에 레코드가 없으면 `404 Not Found`를 반환합니다.
#[routes]
#[get("/users/{id}")]
#[get("/user/{id}")]
pub async fn get_user(
    user_service: web::Data<UserService>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();
    let user = user_service.get_user_by_id(&id).await?;

    Ok(HttpResponse::Ok().json(user))
}

/// 사용자 수정 핸들러
///
/// `PUT /users/update/{id}`
///
/// 세 필드를 통째로 교체하고 요청 필드를 그대로 돌려줍니다 (`id` 제외).
/// 존재하지 않는 ID도 `200 OK`로 응답하며 레코드는 생성되지 않습니다.
///
/// ```json
/// { "name": "Ana B", "age": 31, "email": "b@x.com" }
/// ```
#[put("/users/update/{id}")]
pub async fn update_user(
    user_service: web::Data<UserService>,
    path: web::Path<String>,
    payload: web::Json<UserRequest>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();
    let response = user_service.update_user(&id, payload.into_inner()).await?;

    Ok(HttpResponse::Ok().json(response))
}

/// 사용자 삭제 핸들러
///
/// `DELETE /users/delete/{id}`
///
/// 멱등 연산입니다. 존재 여부와 관계없이 `204 No Content`를 반환합니다.
#[delete("/users/delete/{id}")]
pub async fn delete_user(
    user_service: web::Data<UserService>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();
    user_service.delete_user(&id).await?;

    Ok(HttpResponse::NoContent().finish())
}
