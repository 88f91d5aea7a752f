//! Users Entity Module
//!
//! 사용자 도메인의 핵심 엔티티를 정의하는 모듈입니다.
//!
//! # 사용 예제
//!
//! ```rust,ignore
//! use crate::domain::entities::users::{User, UserData};
//!
//! let data = UserData { name: "Ana".into(), age: 30, email: "a@x.com".into() };
//! let user = User::with_id("1", data);
//! ```

pub mod user;

pub use user::{User, UserData};
