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

use crate::domain::models::task::TaskStatus;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// 任务提交响应数据传输对象
#[derive(Debug, Serialize, Deserialize)]
pub struct TaskSubmitResponseDto {
    /// 新分配的任务ID
    pub task_id: Uuid,
}

/// 任务结果响应数据传输对象
#[derive(Debug, Serialize, Deserialize)]
pub struct TaskResultResponseDto {
    /// 任务ID
    pub task_id: Uuid,
    /// 任务当前状态
    pub status: TaskStatus,
    /// 检测结果，仅在状态为终态时有意义
    pub result: bool,
}
