//! 비즈니스 로직을 담당하는 서비스 계층 모듈
//!
//! 서비스는 `main`에서 조립되어 [`ServiceLocator`](crate::core::registry::ServiceLocator)에
//! 등록되고, 시작 시 [`Service::init`](crate::core::registry::Service::init)이 호출됩니다.

pub mod users;
