//! 사용자 요청 DTO 모듈

pub mod user_request;

pub use user_request::UserRequest;
