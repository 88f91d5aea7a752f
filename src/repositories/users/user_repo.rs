//! # 사용자 리포지토리 계약
//!
//! 사용자 레코드의 생성, 조회, 목록, 수정, 삭제를 담당하는 공통 인터페이스입니다.
//! 구현체는 두 가지이며 프로세스 시작 시 설정으로 하나가 선택됩니다.
//!
//! - [`SqlUserRepository`](super::sql_user_repo::SqlUserRepository): Postgres 영구 저장소.
//!   ID 할당을 `SERIAL` 자동 증가에 위임합니다.
//! - [`MemoryUserRepository`](super::memory_user_repo::MemoryUserRepository): 휘발성 저장소.
//!   단일 잠금 아래에서 ID를 직접 할당합니다.
//!
//! ## 공통 규칙
//!
//! - `create`가 반환되기 전에는 새 레코드가 `get`/`list`에 보이지 않습니다.
//! - 레코드는 완전히 존재하거나 완전히 없습니다. 쓰기 도중의 상태는 관찰되지 않습니다.
//! - `update`는 ID 존재 여부를 확인하지 않습니다. 없는 ID면 아무것도 하지 않고 성공합니다.
//!   레코드를 새로 만들지도 않습니다.
//! - `delete`는 멱등입니다. 없는 ID도 성공입니다.
//! - 리포지토리는 재시도, 복구, 로깅을 하지 않습니다. 에러는 그대로 호출자에게 전달됩니다.

use async_trait::async_trait;
use thiserror::Error;
use crate::domain::entities::users::{User, UserData};

/// 리포지토리 에러
///
/// 일시적 장애와 영구적 장애를 구분하지 않습니다.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    /// 조회 시점에 해당 ID의 레코드가 없음
    #[error("{0}")]
    NotFound(String),

    /// 백엔드에 접근할 수 없거나 쿼리가 실패함
    #[error("{0}")]
    StorageUnavailable(String),
}

impl RepositoryError {
    pub fn user_not_found(id: &str) -> Self {
        RepositoryError::NotFound(format!("user {} not found", id))
    }
}

pub type RepositoryResult<T> = Result<T, RepositoryError>;

/// 사용자 리포지토리
///
/// 여러 요청 워커가 동시에 호출하므로 구현체는 `Send + Sync`여야 합니다.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// 로그 및 헬스체크용 백엔드 이름
    fn backend(&self) -> &'static str;

    /// 시작 시 1회 호출되는 준비 작업. 여러 번 호출해도 안전해야 합니다.
    async fn init(&self) -> RepositoryResult<()> {
        Ok(())
    }

    /// 새 ID를 할당해 레코드를 저장하고, ID를 포함한 전체 레코드를 반환합니다.
    async fn create(&self, data: UserData) -> RepositoryResult<User>;

    /// 현재 저장된 레코드를 반환합니다. 없으면 `NotFound`.
    async fn get(&self, id: &str) -> RepositoryResult<User>;

    /// 호출 시점에 저장된 모든 레코드의 스냅샷. 순서는 보장하지 않습니다.
    async fn list(&self) -> RepositoryResult<Vec<User>>;

    /// 세 필드를 통째로 교체합니다. 없는 ID는 성공으로 처리되는 no-op입니다.
    async fn update(&self, id: &str, data: UserData) -> RepositoryResult<()>;

    /// 레코드를 삭제합니다. 없는 ID는 성공으로 처리되는 no-op입니다.
    async fn delete(&self, id: &str) -> RepositoryResult<()>;
}
