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

use axum::{
    extract::{Request, State},
    http::StatusCode,
    middleware::Next,
    response::Response,
};
use std::sync::Arc;

/// X-API-KEY请求头名称
pub const API_KEY_HEADER: &str = "X-API-KEY";

/// 认证状态
///
/// 进程启动时生成的共享密钥，不持久化也不轮换
#[derive(Clone)]
pub struct AuthState {
    /// API密钥
    pub api_key: Arc<String>,
}

/// 认证中间件
///
/// 校验请求中的X-API-KEY请求头。密钥缺失或不匹配时在任何
/// 状态被创建或读取之前拒绝请求。
///
/// # 参数
///
/// * `state` - 认证状态
/// * `req` - HTTP请求
/// * `next` - 下一个中间件
///
/// # 返回值
///
/// * `Ok(Response)` - 认证成功的响应
/// * `Err(StatusCode)` - 认证失败的状态码
pub async fn auth_middleware(
    State(state): State<AuthState>,
    req: Request,
    next: Next,
) -> Result<Response, StatusCode> {
    let provided = req
        .headers()
        .get(API_KEY_HEADER)
        .and_then(|header| header.to_str().ok());

    match provided {
        Some(key) if key == state.api_key.as_str() => Ok(next.run(req).await),
        Some(_) => {
            tracing::warn!("Rejected request with invalid API key");
            Err(StatusCode::UNAUTHORIZED)
        }
        None => Err(StatusCode::UNAUTHORIZED),
    }
}

#[cfg(test)]
#[path = "auth_middleware_test.rs"]
mod tests;
