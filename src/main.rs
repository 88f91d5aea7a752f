//! 사용자 관리 서비스 메인 애플리케이션
//!
//! Actix-web 기반의 HTTP 서버를 구동하고 모든 서비스를 초기화합니다.
//! `STORAGE_BACKEND` 설정에 따라 Postgres 또는 인메모리 저장소를 선택합니다.

use std::io;
use std::sync::Arc;
use actix_cors::Cors;
use actix_web::http::header;
use actix_web::{middleware, web, App, HttpServer};
use actix_governor::{Governor, GovernorConfigBuilder};
use dotenv::dotenv;
use env_logger::Env;
use log::{error, info, warn};
use user_service_backend::config::{
    CorsConfig, Environment, RateLimitConfig, ServerConfig, StorageBackend, StorageConfig,
};
use user_service_backend::core::errors::{AppError, AppResult, ErrorContext};
use user_service_backend::core::registry::ServiceLocator;
use user_service_backend::db::Database;
use user_service_backend::repositories::users::{
    MemoryUserRepository, SqlUserRepository, UserRepository,
};
use user_service_backend::routes::configure_all_routes;
use user_service_backend::services::users::UserService;

#[actix_web::main]
async fn main() -> io::Result<()> {
    // 환경 설정 및 로깅 초기화
    load_env_file();
    init_logging();

    info!("🚀 사용자 관리 서비스 시작중... ({:?})", Environment::current());

    // 스토리지 백엔드 선택
    let storage_config = StorageConfig::from_env();
    let user_repo = initialize_user_repository(&storage_config).await?;

    // ServiceLocator에 서비스 등록
    ServiceLocator::register_service(Arc::new(UserService::new(user_repo)));

    // 모든 서비스 초기화 (Postgres: 테이블 생성)
    if let Err(e) = ServiceLocator::initialize_all().await {
        error!("서비스 초기화 실패: {}", e);
        close_database().await;
        return Err(io::Error::other(e));
    }

    info!("✅ 모든 서비스가 성공적으로 초기화되었습니다!");

    // HTTP 서버 시작
    let result = start_http_server().await;

    close_database().await;
    info!("👋 서버 종료");

    result.map_err(|e| {
        error!("{}", e);
        io::Error::other(e)
    })
}

/// HTTP 서버를 구성하고 실행합니다
///
/// Rate Limiting, CORS, 로깅, 경로 정규화 미들웨어를 포함합니다.
///
/// # Errors
///
/// * `AppError::InternalError` - 포트 바인딩 실패, 잘못된 Rate Limiting 설정, 서버 실행 오류
async fn start_http_server() -> AppResult<()> {
    let bind_address = ServerConfig::bind_address();
    let workers = ServerConfig::workers();

    info!("🌐 서버가 http://{} 에서 실행중입니다", bind_address);
    info!("📍 Health check: http://{}/health", bind_address);

    // Rate Limiting 설정
    let rate_limit_config = RateLimitConfig::from_env();
    let governor_conf = GovernorConfigBuilder::default()
        .requests_per_second(rate_limit_config.per_second)
        .burst_size(rate_limit_config.burst_size)
        .use_headers()
        .finish()
        .ok_or_else(|| {
            AppError::InternalError(format!(
                "잘못된 Rate Limiting 설정: per_second={}, burst_size={}",
                rate_limit_config.per_second, rate_limit_config.burst_size
            ))
        })?;

    info!(
        "🛡️ Rate Limiting 활성화: 초당 {}요청, 버스트 {}개",
        rate_limit_config.per_second,
        rate_limit_config.burst_size
    );

    let allowed_origins = CorsConfig::allowed_origins();
    let user_service = UserService::instance();

    HttpServer::new(move || {
        App::new()
            // Rate Limiting 미들웨어 (가장 먼저 적용)
            .wrap(Governor::new(&governor_conf))

            .wrap(configure_cors(&allowed_origins))
            .wrap(middleware::Logger::default())
            .wrap(middleware::NormalizePath::trim())

            .app_data(web::Data::from(user_service.clone()))

            // 라우트 설정
            .configure(configure_all_routes)
    })
        .bind(&bind_address)
        .with_context(|| format!("{} 바인딩 실패", bind_address))?
        .workers(workers)
        .run()
        .await
        .context("HTTP 서버 실행 실패")
}

/// 환경별 설정 파일을 로드합니다
///
/// # Environment Variables
///
/// * `PROFILE=dev` - .env.dev 파일 로드
/// * `PROFILE=prod` - .env.prod 파일 로드
/// * 기타 또는 미설정 - 기본 .env 파일 로드
///
/// # Examples
///
/// ```bash
/// # 인메모리 백엔드로 개발 서버 실행
/// PROFILE=dev STORAGE_BACKEND=memory cargo run
/// ```
fn load_env_file() {
    let profile = std::env::var("PROFILE").unwrap_or_default();

    match profile.as_str() {
        "prod" => {
            if let Err(e) = dotenv::from_filename(".env.prod") {
                eprintln!(".env.prod 파일 로드 실패: {}", e);
            }
        }
        "dev" => {
            if let Err(e) = dotenv::from_filename(".env.dev") {
                eprintln!(".env.dev 파일 로드 실패: {}", e);
            }
        }
        _ => {
            dotenv().ok();
        }
    }
}

/// 로깅 시스템을 초기화합니다
///
/// * `RUST_LOG` - 로깅 레벨 설정 (기본값: "info,actix_web=info")
///
/// ```bash
/// RUST_LOG=user_service_backend=debug cargo run
/// ```
fn init_logging() {
    env_logger::init_from_env(Env::default().default_filter_or("info,actix_web=info"));
}

/// 설정된 백엔드로 사용자 리포지토리를 생성합니다
///
/// Postgres를 선택한 경우 커넥션 풀을 만들고 [`Database`]를 `ServiceLocator`에
/// 등록합니다. 연결 실패는 재시도하지 않고 시작을 중단합니다.
async fn initialize_user_repository(config: &StorageConfig) -> io::Result<Arc<dyn UserRepository>> {
    match config.backend {
        StorageBackend::Postgres => {
            info!("📡 데이터베이스 연결 중...");

            let database = Database::connect(config).await.map_err(|e| {
                error!("데이터베이스 연결 실패: {}", e);
                io::Error::other(e)
            })?;
            let repo = SqlUserRepository::new(database.pool().clone());

            ServiceLocator::set(Arc::new(database));

            Ok(Arc::new(repo))
        }
        StorageBackend::Memory => {
            warn!("⚠️ 인메모리 저장소 사용: 재시작 시 모든 데이터가 사라집니다");

            Ok(Arc::new(MemoryUserRepository::new()))
        }
    }
}

/// 등록된 커넥션 풀이 있으면 닫습니다
async fn close_database() {
    if let Some(database) = ServiceLocator::try_get::<Database>() {
        database.close().await;
    }
}

/// CORS 설정을 구성합니다
///
/// 허용 Origin은 `CORS_ALLOWED_ORIGINS`에서 읽습니다.
fn configure_cors(allowed_origins: &[String]) -> Cors {
    allowed_origins
        .iter()
        .fold(Cors::default(), |cors, origin| cors.allowed_origin(origin))
        .allowed_methods(vec!["GET", "POST", "PUT", "DELETE", "OPTIONS"])
        .allowed_headers(vec![header::ACCEPT, header::CONTENT_TYPE])
        .max_age(3600)
}
