// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::presentation::handlers::task_handler;
use crate::presentation::middleware::auth_middleware::{auth_middleware, AuthState};
use axum::{
    routing::{get, post},
    Router,
};

/// 创建应用路由
///
/// # 参数
///
/// * `auth_state` - 认证状态
///
/// # 返回值
///
/// 返回配置好的路由
pub fn routes(auth_state: AuthState) -> Router {
    let public_routes = Router::new().route("/health", get(health_check));

    let protected_routes = Router::new()
        .route("/api/task", post(task_handler::submit_task))
        .route("/api/result", get(task_handler::get_task_result))
        .layer(axum::middleware::from_fn_with_state(
            auth_state,
            auth_middleware,
        ));

    Router::new().merge(public_routes).merge(protected_routes)
}

/// 健康检查端点
///
/// # 返回值
///
/// 返回"OK"字符串
pub async fn health_check() -> &'static str {
    "OK"
}
