// Copyright 2025 Kirky.X
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use axum::Extension;
use sitecheck::config::settings::Settings;
use sitecheck::domain::services::task_lifecycle::TaskLifecycleService;
use sitecheck::engines::fetch_engine::FetchEngine;
use sitecheck::engines::traits::AnalysisEngine;
use sitecheck::infrastructure::database::connection;
use sitecheck::infrastructure::repositories::task_repo_impl::TaskRepositoryImpl;
use sitecheck::presentation::middleware::auth_middleware::AuthState;
use sitecheck::presentation::routes;
use sitecheck::utils::{api_key, telemetry};
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::info;

use migration::{Migrator, MigratorTrait};

/// 主函数
///
/// 应用程序入口点，负责初始化所有组件并启动服务
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Initialize logging
    telemetry::init_telemetry();
    info!("Starting sitecheck...");

    // Initialize Prometheus Metrics
    sitecheck::infrastructure::metrics::init_metrics();

    // 2. Load configuration
    let settings = Arc::new(Settings::new()?);
    info!(
        "Watching for keywords \"{}\" and \"{}\"",
        settings.analysis.keyword1, settings.analysis.keyword2
    );

    // 3. Connect to database
    let db = connection::create_pool(&settings.database).await?;
    let db = Arc::new(db);
    info!("Database connection established");

    // Run database migrations
    info!("Running database migrations...");
    Migrator::up(db.as_ref(), None).await?;
    info!("Database migrations applied");

    // 4. Initialize Components
    let task_repo = Arc::new(TaskRepositoryImpl::new(db.clone()));
    let engine: Arc<dyn AnalysisEngine> = Arc::new(FetchEngine::new(
        settings.analysis.keyword1.clone(),
        settings.analysis.keyword2.clone(),
        Duration::from_secs(settings.analysis.fetch_timeout_secs),
    ));
    let lifecycle = Arc::new(TaskLifecycleService::new(
        task_repo,
        engine,
        Duration::from_secs(settings.analysis.timeout_secs),
    ));

    // 5. Setup Auth State
    // The key lives only in process memory and this log line
    let key = api_key::generate_api_key();
    info!("Server started with API Key: {}", key);
    let auth_state = AuthState {
        api_key: Arc::new(key),
    };

    // 6. Start HTTP server
    let app = routes::routes(auth_state)
        .layer(Extension(lifecycle))
        .layer(TraceLayer::new_for_http());

    let addr = format!("{}:{}", settings.server.host, settings.server.port);
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
