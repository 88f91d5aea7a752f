//! # Service Registry
//!
//! 프로세스 전역 싱글톤을 보관하는 타입 기반 서비스 로케이터입니다.
//!
//! 스토리지 백엔드는 실행 시 설정으로 결정되기 때문에 컴파일 타임 자동 등록 대신
//! `main`에서 조립한 인스턴스를 명시적으로 등록합니다.
//!
//! ## 초기화 순서
//!
//! ```text
//! 1. Database (Postgres 백엔드일 때만)  → ServiceLocator::set
//! 2. UserService(리포지토리 주입)        → ServiceLocator::register_service
//! 3. ServiceLocator::initialize_all()   → 각 Service::init 호출 (스키마 생성 등)
//! ```
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use crate::core::registry::ServiceLocator;
//!
//! ServiceLocator::register_service(Arc::new(UserService::new(repo)));
//! ServiceLocator::initialize_all().await?;
//!
//! let user_service = ServiceLocator::get::<UserService>();
//! ```

use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};
use async_trait::async_trait;
use log::info;
use once_cell::sync::Lazy;
use crate::core::errors::AppResult;

/// 시작 시 초기화가 필요한 서비스
///
/// [`ServiceLocator::initialize_all`]이 등록 순서대로 `init`을 호출합니다.
#[async_trait]
pub trait Service: Send + Sync {
    /// 로그 출력용 서비스 이름
    fn name(&self) -> &str;

    /// 서비스 시작 전 1회 실행되는 초기화 훅
    async fn init(&self) -> AppResult<()>;
}

/// 타입 기반 싱글톤 저장소
pub struct ServiceLocator {
    instances: RwLock<HashMap<TypeId, Arc<dyn Any + Send + Sync>>>,
    services: RwLock<Vec<Arc<dyn Service>>>,
}

static LOCATOR: Lazy<ServiceLocator> = Lazy::new(ServiceLocator::new);

impl ServiceLocator {
    fn new() -> Self {
        Self {
            instances: RwLock::new(HashMap::new()),
            services: RwLock::new(Vec::new()),
        }
    }

    /// 인스턴스를 등록합니다. 같은 타입이 이미 있으면 교체됩니다.
    pub fn set<T: 'static + Send + Sync>(instance: Arc<T>) {
        let clean_name = Self::extract_clean_type_name(std::any::type_name::<T>());
        info!("📦 Registering: {}", clean_name);

        LOCATOR
            .instances
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(TypeId::of::<T>(), instance as Arc<dyn Any + Send + Sync>);
    }

    /// 인스턴스를 등록하고 [`initialize_all`](Self::initialize_all) 대상에 추가합니다.
    pub fn register_service<T: Service + 'static>(instance: Arc<T>) {
        Self::set(instance.clone());

        LOCATOR
            .services
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push(instance as Arc<dyn Service>);
    }

    /// 등록된 인스턴스를 조회합니다.
    pub fn try_get<T: 'static + Send + Sync>() -> Option<Arc<T>> {
        let instances = LOCATOR
            .instances
            .read()
            .unwrap_or_else(PoisonError::into_inner);

        instances
            .get(&TypeId::of::<T>())
            .cloned()
            .and_then(|instance| instance.downcast::<T>().ok())
    }

    /// 등록된 인스턴스를 조회합니다.
    ///
    /// # Panics
    ///
    /// 해당 타입이 등록되지 않은 경우. 시작 순서 오류이므로 즉시 실패시킵니다.
    pub fn get<T: 'static + Send + Sync>() -> Arc<T> {
        match Self::try_get::<T>() {
            Some(instance) => instance,
            None => panic!(
                "Service not found: {}. Register it with ServiceLocator::set() before use",
                std::any::type_name::<T>()
            ),
        }
    }

    /// 등록된 모든 서비스의 `init`을 순서대로 실행합니다.
    ///
    /// 하나라도 실패하면 즉시 에러를 반환합니다.
    pub async fn initialize_all() -> AppResult<()> {
        let services: Vec<Arc<dyn Service>> = LOCATOR
            .services
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone();

        info!("🔄 Initializing {} service(s)", services.len());

        for service in services {
            info!("  → {}: initializing", service.name());
            service.init().await?;
            info!("  ✓ {}: ready", service.name());
        }

        Ok(())
    }

    fn extract_clean_type_name(type_name: &str) -> &str {
        match type_name.rfind("::") {
            Some(pos) => &type_name[pos + 2..],
            None => type_name,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct RegistryProbe(u32);

    struct CountingService {
        calls: AtomicUsize,
    }

    #[async_trait]
    impl Service for CountingService {
        fn name(&self) -> &str {
            "counting"
        }

        async fn init(&self) -> AppResult<()> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }
    }

    #[test]
    fn test_set_and_get_roundtrip() {
        ServiceLocator::set(Arc::new(RegistryProbe(42)));

        assert_eq!(ServiceLocator::get::<RegistryProbe>().0, 42);
    }

    #[test]
    fn test_try_get_unregistered_type() {
        struct NeverRegistered;

        assert!(ServiceLocator::try_get::<NeverRegistered>().is_none());
    }

    #[test]
    fn test_clean_type_name() {
        assert_eq!(
            ServiceLocator::extract_clean_type_name("user_service_backend::services::users::user_service::UserService"),
            "UserService"
        );
        assert_eq!(ServiceLocator::extract_clean_type_name("u32"), "u32");
    }

    #[actix_web::test]
    async fn test_initialize_all_runs_service_init() {
        let service = Arc::new(CountingService { calls: AtomicUsize::new(0) });
        ServiceLocator::register_service(service.clone());

        ServiceLocator::initialize_all().await.unwrap();

        assert!(service.calls.load(Ordering::SeqCst) >= 1);
        assert!(ServiceLocator::try_get::<CountingService>().is_some());
    }
}
