//! # Data Transfer Objects
//!
//! HTTP 경계에서 주고받는 JSON 구조체입니다. 직렬화는 `serde`가 담당합니다.

pub mod users;

pub use users::*;
