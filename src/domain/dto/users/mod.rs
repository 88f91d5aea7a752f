//! # User Data Transfer Objects Module
//!
//! 사용자 API의 요청/응답 데이터 구조를 정의합니다.
//!
//! ## 모듈 구조
//!
//! ```text
//! users/
//! ├── request/
//! │   └── user_request.rs    # 생성/수정 공용 요청 {name, age, email}
//! └── response/
//!     └── user_response.rs   # UserResponse {id, ...}, UpdateUserResponse {...}
//! ```
//!
//! ## 엔드포인트별 사용
//!
//! | 엔드포인트 | 요청 | 응답 |
//! |-----------|------|------|
//! | `POST /users` | `UserRequest` | `UserResponse` |
//! | `GET /users/{id}` | - | `UserResponse` |
//! | `GET /users/all` | - | `Vec<UserResponse>` |
//! | `PUT /users/update/{id}` | `UserRequest` | `UpdateUserResponse` |
//! | `DELETE /users/delete/{id}` | - | 204 No Content |

pub mod request;
pub mod response;

pub use request::*;
pub use response::*;
