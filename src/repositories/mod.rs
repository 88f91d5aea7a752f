//! 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! 스토리지 백엔드는 시작 시 [`StorageConfig`](crate::config::StorageConfig)로
//! 한 번 선택되며, 이후 모든 요청은 `Arc<dyn UserRepository>`를 통해
//! 같은 구현체를 사용합니다.
//!
//! | 백엔드 | 구현체 | ID 할당 |
//! |--------|--------|---------|
//! | `postgres` | `SqlUserRepository` | `SERIAL` 자동 증가 |
//! | `memory` | `MemoryUserRepository` | 잠금 안의 단조 증가 카운터 |

pub mod users;
