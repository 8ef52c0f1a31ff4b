// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::domain::repositories::task_repository::RepositoryError;

/// API错误类型
///
/// 封装API边界可能向客户端暴露的错误，提供统一的错误响应格式。
/// 分析失败和超时不在此列，它们表现为任务的终态而不是HTTP错误。
#[derive(Error, Debug)]
pub enum ApiError {
    /// 请求参数校验失败
    #[error("{0}")]
    InvalidRequest(String),

    /// 任务不存在
    #[error("Task not found")]
    NotFound,

    /// 内部错误
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl From<RepositoryError> for ApiError {
    fn from(err: RepositoryError) -> Self {
        Self::Internal(err.into())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::Internal(e) => {
                tracing::error!("Internal error: {}", e);
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        let body = Json(json!({ "error": self.to_string() }));
        (status, body).into_response()
    }
}
