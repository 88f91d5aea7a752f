//! # Domain Entities Module
//!
//! 비즈니스 도메인의 핵심 엔티티를 정의합니다.
//! 시스템이 다루는 엔티티는 [`users::User`] 하나뿐입니다.
//!
//! ## 스토리지 매핑
//!
//! Postgres 백엔드에서는 다음 테이블과 1:1로 대응합니다:
//!
//! ```sql
//! CREATE TABLE IF NOT EXISTS users (
//!     id    SERIAL PRIMARY KEY,
//!     name  TEXT,
//!     age   INT,
//!     email TEXT
//! )
//! ```
//!
//! `SERIAL` 정수 ID는 애플리케이션 경계에서 항상 문자열로 다룹니다.
//! 인메모리 백엔드는 같은 엔티티를 `HashMap<String, User>`에 보관합니다.

pub mod users;
