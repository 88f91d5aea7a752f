use serde::{Deserialize, Serialize};
use crate::domain::entities::users::{User, UserData};

/// 사용자 응답 DTO
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserResponse {
    pub id: String,
    pub name: String,
    pub age: i32,
    pub email: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        let User { id, name, age, email } = user;

        Self { id, name, age, email }
    }
}

/// 사용자 수정 응답 DTO
///
/// 의도적으로 `id`를 포함하지 않습니다. 존재하지 않는 ID에 대한 수정도
/// 성공으로 응답하므로 본문은 요청 필드를 그대로 되돌려 줍니다.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateUserResponse {
    pub name: String,
    pub age: i32,
    pub email: String,
}

impl From<UserData> for UpdateUserResponse {
    fn from(data: UserData) -> Self {
        let UserData { name, age, email } = data;

        Self { name, age, email }
    }
}
