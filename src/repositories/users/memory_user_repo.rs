//! # 인메모리 사용자 리포지토리
//!
//! 데모나 임시 배포에서 사용하는 휘발성 저장소입니다. 프로세스가 재시작되면
//! 모든 데이터가 사라집니다.
//!
//! ## ID 할당
//!
//! 맵과 ID 카운터는 하나의 `Mutex` 안에 함께 있습니다. `create`는 한 번의
//! 잠금 구간에서 카운터 증가와 맵 삽입을 모두 수행하므로 동시에 생성해도
//! 두 호출이 같은 ID를 받지 않습니다.
//!
//! 카운터는 맵 크기와 무관하게 단조 증가합니다. 삭제 후에도 ID가 재사용되지 않습니다.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};
use async_trait::async_trait;
use crate::domain::entities::users::{User, UserData};
use super::user_repo::{RepositoryError, RepositoryResult, UserRepository};

#[derive(Default)]
struct MemoryState {
    users: HashMap<String, User>,
    last_id: u64,
}

/// 인메모리 사용자 리포지토리
///
/// 내부 맵은 외부에 노출되지 않으며 모든 공개 연산은 잠금을 스스로 획득하고 해제합니다.
/// 잠금은 `await` 지점을 넘어 유지되지 않습니다.
#[derive(Default)]
pub struct MemoryUserRepository {
    state: Mutex<MemoryState>,
}

impl MemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// 현재 저장된 레코드 수
    pub fn len(&self) -> RepositoryResult<usize> {
        Ok(self.lock()?.users.len())
    }

    pub fn is_empty(&self) -> RepositoryResult<bool> {
        Ok(self.len()? == 0)
    }

    fn lock(&self) -> RepositoryResult<MutexGuard<'_, MemoryState>> {
        self.state.lock().map_err(|_| {
            RepositoryError::StorageUnavailable("memory store lock poisoned".to_string())
        })
    }
}

#[async_trait]
impl UserRepository for MemoryUserRepository {
    fn backend(&self) -> &'static str {
        "memory"
    }

    async fn create(&self, data: UserData) -> RepositoryResult<User> {
        let mut state = self.lock()?;

        state.last_id += 1;
        let user = User::with_id(state.last_id.to_string(), data);
        state.users.insert(user.id.clone(), user.clone());

        Ok(user)
    }

    async fn get(&self, id: &str) -> RepositoryResult<User> {
        self.lock()?
            .users
            .get(id)
            .cloned()
            .ok_or_else(|| RepositoryError::user_not_found(id))
    }

    async fn list(&self) -> RepositoryResult<Vec<User>> {
        Ok(self.lock()?.users.values().cloned().collect())
    }

    async fn update(&self, id: &str, data: UserData) -> RepositoryResult<()> {
        if let Some(user) = self.lock()?.users.get_mut(id) {
            user.replace_data(data);
        }

        Ok(())
    }

    async fn delete(&self, id: &str) -> RepositoryResult<()> {
        self.lock()?.users.remove(id);

        Ok(())
    }
}
