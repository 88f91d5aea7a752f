//! # 사용자 관리 서비스 구현
//!
//! 핸들러와 리포지토리 사이에서 DTO 변환, 에러 변환, 로깅을 담당합니다.
//! 리포지토리는 스스로 로그를 남기지 않으므로 연산 단위의 로그는 이 계층에서 기록합니다.
//!
//! ```text
//! ┌──────────────┐   UserRequest    ┌──────────────┐   UserData   ┌────────────────────┐
//! │   Handlers   │ ───────────────▶ │ UserService  │ ───────────▶ │ dyn UserRepository │
//! │              │ ◀─────────────── │              │ ◀─────────── │ (postgres|memory)  │
//! └──────────────┘   UserResponse   └──────────────┘     User     └────────────────────┘
//! ```

use std::sync::Arc;
use async_trait::async_trait;
use log::{debug, error, info};
use crate::{
    core::{
        errors::{AppError, AppResult},
        registry::{Service, ServiceLocator},
    },
    domain::{
        dto::users::{
            request::UserRequest,
            response::{UpdateUserResponse, UserResponse},
        },
        entities::users::UserData,
    },
    repositories::users::{RepositoryError, UserRepository},
};

/// 사용자 관리 비즈니스 로직 서비스
///
/// 선택된 스토리지 백엔드를 `Arc<dyn UserRepository>`로 보유합니다.
/// 요청마다 하나의 리포지토리 연산만 호출하며 요청 간 파이프라인은 없습니다.
///
/// ## 사용 예제
///
/// ```rust,ignore
/// let service = UserService::new(Arc::new(MemoryUserRepository::new()));
///
/// let created = service.create_user(UserRequest { name: "Ana".into(), age: 30, email: "a@x.com".into() }).await?;
/// let fetched = service.get_user_by_id(&created.id).await?;
/// ```
pub struct UserService {
    user_repo: Arc<dyn UserRepository>,
}

impl UserService {
    pub fn new(user_repo: Arc<dyn UserRepository>) -> Self {
        Self { user_repo }
    }

    /// [`ServiceLocator`]에 등록된 싱글톤 인스턴스
    pub fn instance() -> Arc<Self> {
        ServiceLocator::get::<Self>()
    }

    /// 현재 사용 중인 스토리지 백엔드 이름
    pub fn backend(&self) -> &'static str {
        self.user_repo.backend()
    }

    /// 새 사용자 생성
    ///
    /// 리포지토리가 할당한 ID를 포함한 전체 레코드를 반환합니다.
    ///
    /// # 반환값
    ///
    /// * `Ok(UserResponse)` - 생성된 사용자
    /// * `Err(AppError::StorageUnavailable)` - 백엔드 오류
    pub async fn create_user(&self, request: UserRequest) -> AppResult<UserResponse> {
        let user = self
            .user_repo
            .create(UserData::from(request))
            .await
            .map_err(|e| self.failure("create", e))?;

        info!("User created: id={} backend={}", user.id, self.backend());

        Ok(UserResponse::from(user))
    }

    /// ID로 사용자 조회
    ///
    /// * `Err(AppError::NotFound)` - 조회 시점에 해당 ID가 없음
    pub async fn get_user_by_id(&self, id: &str) -> AppResult<UserResponse> {
        let user = self
            .user_repo
            .get(id)
            .await
            .map_err(|e| self.failure("get", e))?;

        debug!("User fetched: id={}", user.id);

        Ok(UserResponse::from(user))
    }

    /// 전체 사용자 목록
    ///
    /// 호출 시점의 스냅샷이며 순서는 백엔드에 따라 다릅니다.
    /// 동시에 생성/수정/삭제된 레코드의 포함 여부는 보장하지 않습니다.
    pub async fn list_users(&self) -> AppResult<Vec<UserResponse>> {
        let users = self
            .user_repo
            .list()
            .await
            .map_err(|e| self.failure("list", e))?;

        debug!("Users listed: count={}", users.len());

        Ok(users.into_iter().map(UserResponse::from).collect())
    }

    /// 사용자 정보 수정
    ///
    /// 세 필드를 통째로 교체합니다. ID 존재 여부를 확인하지 않으며,
    /// 없는 ID에 대한 수정도 성공으로 응답합니다(레코드는 생성되지 않음).
    /// 응답에는 `id`가 포함되지 않습니다.
    pub async fn update_user(&self, id: &str, request: UserRequest) -> AppResult<UpdateUserResponse> {
        let data = UserData::from(request);

        self.user_repo
            .update(id, data.clone())
            .await
            .map_err(|e| self.failure("update", e))?;

        info!("User update applied: id={}", id);

        Ok(UpdateUserResponse::from(data))
    }

    /// 사용자 삭제
    ///
    /// 멱등 연산입니다. 없는 ID도 성공입니다.
    pub async fn delete_user(&self, id: &str) -> AppResult<()> {
        self.user_repo
            .delete(id)
            .await
            .map_err(|e| self.failure("delete", e))?;

        info!("User delete applied: id={}", id);

        Ok(())
    }

    fn failure(&self, operation: &str, err: RepositoryError) -> AppError {
        match &err {
            RepositoryError::NotFound(msg) => debug!("{} → not found: {}", operation, msg),
            RepositoryError::StorageUnavailable(msg) => {
                error!("{} failed on {} backend: {}", operation, self.backend(), msg)
            }
        }

        AppError::from(err)
    }
}

#[async_trait]
impl Service for UserService {
    fn name(&self) -> &str {
        "user_service"
    }

    /// 리포지토리 준비 작업 (Postgres: `users` 테이블 생성)
    async fn init(&self) -> AppResult<()> {
        self.user_repo.init().await.map_err(AppError::from)?;

        info!("UserService ready (backend={})", self.backend());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::users::User;
    use crate::repositories::users::{MemoryUserRepository, RepositoryResult};

    fn service() -> UserService {
        UserService::new(Arc::new(MemoryUserRepository::new()))
    }

    fn ana() -> UserRequest {
        UserRequest {
            name: "Ana".to_string(),
            age: 30,
            email: "a@x.com".to_string(),
        }
    }

    /// 모든 연산이 실패하는 백엔드
    struct UnreachableRepository;

    #[async_trait]
    impl UserRepository for UnreachableRepository {
        fn backend(&self) -> &'static str {
            "unreachable"
        }

        async fn init(&self) -> RepositoryResult<()> {
            Err(RepositoryError::StorageUnavailable("connection refused".into()))
        }

        async fn create(&self, _data: UserData) -> RepositoryResult<User> {
            Err(RepositoryError::StorageUnavailable("connection refused".into()))
        }

        async fn get(&self, _id: &str) -> RepositoryResult<User> {
            Err(RepositoryError::StorageUnavailable("connection refused".into()))
        }

        async fn list(&self) -> RepositoryResult<Vec<User>> {
            Err(RepositoryError::StorageUnavailable("connection refused".into()))
        }

        async fn update(&self, _id: &str, _data: UserData) -> RepositoryResult<()> {
            Err(RepositoryError::StorageUnavailable("connection refused".into()))
        }

        async fn delete(&self, _id: &str) -> RepositoryResult<()> {
            Err(RepositoryError::StorageUnavailable("connection refused".into()))
        }
    }

    #[actix_web::test]
    async fn test_create_then_get_returns_same_fields() {
        let service = service();

        let created = service.create_user(ana()).await.unwrap();
        assert!(!created.id.is_empty());

        let fetched = service.get_user_by_id(&created.id).await.unwrap();
        assert_eq!(fetched, created);
        assert_eq!(fetched.name, "Ana");
        assert_eq!(fetched.age, 30);
        assert_eq!(fetched.email, "a@x.com");
    }

    #[actix_web::test]
    async fn test_update_echoes_request_without_id() {
        let service = service();
        let created = service.create_user(ana()).await.unwrap();

        let request = UserRequest { name: "Ana B".into(), age: 31, email: "b@x.com".into() };
        let updated = service.update_user(&created.id, request).await.unwrap();

        assert_eq!(updated, UpdateUserResponse { name: "Ana B".into(), age: 31, email: "b@x.com".into() });
        assert_eq!(service.get_user_by_id(&created.id).await.unwrap().name, "Ana B");
    }

    #[actix_web::test]
    async fn test_update_missing_id_reports_success_without_creating() {
        let service = service();

        service.update_user("12", ana()).await.unwrap();

        assert!(service.list_users().await.unwrap().is_empty());
        assert!(matches!(service.get_user_by_id("12").await, Err(AppError::NotFound(_))));
    }

    #[actix_web::test]
    async fn test_delete_is_idempotent() {
        let service = service();
        let created = service.create_user(ana()).await.unwrap();

        service.delete_user(&created.id).await.unwrap();
        service.delete_user(&created.id).await.unwrap();

        assert!(matches!(service.get_user_by_id(&created.id).await, Err(AppError::NotFound(_))));
    }

    #[actix_web::test]
    async fn test_storage_failures_surface_as_storage_unavailable() {
        let service = UserService::new(Arc::new(UnreachableRepository));

        assert!(matches!(service.create_user(ana()).await, Err(AppError::StorageUnavailable(_))));
        assert!(matches!(service.get_user_by_id("1").await, Err(AppError::StorageUnavailable(_))));
        assert!(matches!(service.list_users().await, Err(AppError::StorageUnavailable(_))));
        assert!(matches!(service.update_user("1", ana()).await, Err(AppError::StorageUnavailable(_))));
        assert!(matches!(service.delete_user("1").await, Err(AppError::StorageUnavailable(_))));
        assert!(matches!(Service::init(&service).await, Err(AppError::StorageUnavailable(_))));
    }

    #[actix_web::test]
    async fn test_memory_backend_init_is_noop() {
        let service = service();

        assert!(Service::init(&service).await.is_ok());
        assert_eq!(service.backend(), "memory");
    }
}
