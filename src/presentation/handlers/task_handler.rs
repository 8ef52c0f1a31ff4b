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
    extract::{Extension, Query},
    http::StatusCode,
    Json,
};
use std::sync::Arc;
use uuid::Uuid;
use validator::Validate;

use crate::application::dto::task_request::{TaskResultQueryDto, TaskSubmitRequestDto};
use crate::application::dto::task_response::{TaskResultResponseDto, TaskSubmitResponseDto};
use crate::domain::services::task_lifecycle::TaskLifecycleService;
use crate::infrastructure::repositories::task_repo_impl::TaskRepositoryImpl;
use crate::presentation::errors::ApiError;

/// 任务提交处理器
///
/// 校验URL后创建任务并立即返回任务ID，不等待分析完成。
pub async fn submit_task(
    Extension(lifecycle): Extension<Arc<TaskLifecycleService<TaskRepositoryImpl>>>,
    Json(payload): Json<TaskSubmitRequestDto>,
) -> Result<(StatusCode, Json<TaskSubmitResponseDto>), ApiError> {
    if payload.validate().is_err() {
        return Err(ApiError::InvalidRequest(
            "url must be a non-empty valid URL".to_string(),
        ));
    }

    let task = lifecycle.submit(payload.url).await?;

    Ok((
        StatusCode::CREATED,
        Json(TaskSubmitResponseDto { task_id: task.id }),
    ))
}

/// 任务结果查询处理器
///
/// 缺少task_id参数返回400；参数无法解析或任务不存在返回404。
pub async fn get_task_result(
    Extension(lifecycle): Extension<Arc<TaskLifecycleService<TaskRepositoryImpl>>>,
    Query(query): Query<TaskResultQueryDto>,
) -> Result<Json<TaskResultResponseDto>, ApiError> {
    let raw_id = query
        .task_id
        .ok_or_else(|| ApiError::InvalidRequest("Missing task_id".to_string()))?;

    let id = Uuid::parse_str(&raw_id).map_err(|_| ApiError::NotFound)?;

    match lifecycle.find(id).await? {
        Some(task) => Ok(Json(TaskResultResponseDto {
            task_id: task.id,
            status: task.status,
            result: task.result,
        })),
        None => Err(ApiError::NotFound),
    }
}
