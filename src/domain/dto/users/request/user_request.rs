//! 사용자 생성/수정 요청 DTO
//!
//! `POST /users`와 `PUT /users/update/{id}`가 공유하는 요청 본문입니다.
use serde::{Deserialize, Serialize};
use crate::domain::entities::users::UserData;

/// 사용자 생성/수정 요청 DTO
///
/// 누락된 필드는 기본값(`""`, `0`)으로 채워집니다. 업데이트는 통째로
/// 교체하므로 누락된 필드는 기존 값을 기본값으로 덮어씁니다.
/// 본문에 `id`가 있어도 무시됩니다.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserRequest {
    pub name: String,
    pub age: i32,
    pub email: String,
}

impl From<UserRequest> for UserData {
    fn from(request: UserRequest) -> Self {
        let UserRequest { name, age, email } = request;
        UserData { name, age, email }
    }
}
