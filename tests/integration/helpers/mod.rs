// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use async_trait::async_trait;
use axum::Extension;
use axum_test::TestServer;
use migration::{Migrator, MigratorTrait};
use sea_orm::DatabaseConnection;
use sitecheck::config::settings::DatabaseSettings;
use sitecheck::domain::services::task_lifecycle::TaskLifecycleService;
use sitecheck::engines::fetch_engine::FetchEngine;
use sitecheck::engines::traits::{AnalysisEngine, EngineError};
use sitecheck::infrastructure::database::connection;
use sitecheck::infrastructure::repositories::task_repo_impl::TaskRepositoryImpl;
use sitecheck::presentation::middleware::auth_middleware::{AuthState, API_KEY_HEADER};
use sitecheck::presentation::routes;
use sitecheck::utils::api_key;
use std::sync::Arc;
use std::time::Duration;

/// 测试应用
pub struct TestApp {
    pub server: TestServer,
    pub api_key: String,
    pub db: Arc<DatabaseConnection>,
}

impl TestApp {
    /// 轮询任务直到离开processing状态，返回最后一次响应体
    pub async fn poll_until_terminal(&self, task_id: &str) -> serde_json::Value {
        for _ in 0..200 {
            let response = self
                .server
                .get("/api/result")
                .add_query_param("task_id", task_id)
                .add_header(API_KEY_HEADER, self.api_key.as_str())
                .await;
            let body: serde_json::Value = response.json();
            if body["status"] != "processing" {
                return body;
            }
            tokio::time::sleep(Duration::from_millis(10)).await;
        }
        panic!("task {} never reached a terminal state", task_id);
    }
}

/// 永不返回的分析引擎，用于触发超时路径
pub struct HangingEngine;

#[async_trait]
impl AnalysisEngine for HangingEngine {
    async fn analyze(&self, _url: &str) -> Result<bool, EngineError> {
        std::future::pending().await
    }

    fn name(&self) -> &'static str {
        "hanging"
    }
}

/// 使用真实抓取引擎构建测试应用
///
/// 关键词固定为 example / domain，配合wiremock页面使用
pub async fn create_test_app() -> TestApp {
    let engine: Arc<dyn AnalysisEngine> = Arc::new(FetchEngine::new(
        "example".to_string(),
        "domain".to_string(),
        Duration::from_secs(5),
    ));
    create_test_app_with_engine(engine, Duration::from_secs(5)).await
}

/// 使用指定引擎与截止时间构建测试应用
pub async fn create_test_app_with_engine(
    engine: Arc<dyn AnalysisEngine>,
    deadline: Duration,
) -> TestApp {
    // A single pooled connection keeps the in-memory SQLite database alive
    // and shared across the whole test app
    let db_settings = DatabaseSettings {
        url: "sqlite::memory:".to_string(),
        max_connections: Some(1),
        min_connections: Some(1),
        connect_timeout: Some(5),
        idle_timeout: Some(300),
    };
    let db = Arc::new(
        connection::create_pool(&db_settings)
            .await
            .expect("Failed to open in-memory database"),
    );
    Migrator::up(db.as_ref(), None)
        .await
        .expect("Failed to run migrations");

    let task_repo = Arc::new(TaskRepositoryImpl::new(db.clone()));
    let lifecycle = Arc::new(TaskLifecycleService::new(task_repo, engine, deadline));

    let key = api_key::generate_api_key();
    let auth_state = AuthState {
        api_key: Arc::new(key.clone()),
    };

    let app = routes::routes(auth_state).layer(Extension(lifecycle));
    let server = TestServer::new(app).expect("Failed to start test server");

    TestApp {
        server,
        api_key: key,
        db,
    }
}
