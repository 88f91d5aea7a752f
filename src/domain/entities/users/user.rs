//! User Entity Implementation
//!
//! 사용자 엔티티와 리포지토리 입력 모델을 정의합니다.

use serde::{Deserialize, Serialize};

/// 사용자 엔티티
///
/// 리포지토리에 저장된 완전한 레코드입니다. `id`는 생성 시 리포지토리가
/// 할당하며 이후 변경되거나 재사용되지 않습니다.
/// `name`, `age`, `email`에는 길이, 범위, 형식, 유일성 제약이 없습니다.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// 문자열로 표현된 불투명 식별자
    pub id: String,
    pub name: String,
    pub age: i32,
    pub email: String,
}

/// 사용자 필드 묶음 (ID 제외)
///
/// `create`/`update`의 입력입니다. 업데이트는 부분 갱신이 아니라
/// 세 필드를 통째로 교체합니다.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserData {
    pub name: String,
    pub age: i32,
    pub email: String,
}

impl User {
    /// 할당된 ID와 입력 필드로 엔티티를 구성합니다.
    pub fn with_id(id: impl Into<String>, data: UserData) -> Self {
        let UserData { name, age, email } = data;

        Self {
            id: id.into(),
            name,
            age,
            email,
        }
    }

    /// ID를 제외한 필드 사본
    pub fn data(&self) -> UserData {
        UserData {
            name: self.name.clone(),
            age: self.age,
            email: self.email.clone(),
        }
    }

    /// ID를 유지한 채 필드를 통째로 교체합니다.
    pub fn replace_data(&mut self, data: UserData) {
        self.name = data.name;
        self.age = data.age;
        self.email = data.email;
    }
}
