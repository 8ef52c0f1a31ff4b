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

use serde::{Deserialize, Serialize};
use validator::Validate;

/// 任务提交请求数据传输对象
///
/// 封装客户端发起的URL检测请求的参数
#[derive(Debug, Deserialize, Serialize, Validate)]
pub struct TaskSubmitRequestDto {
    /// 要检测的网页URL
    #[serde(default)]
    #[validate(
        length(min = 1, message = "url cannot be empty"),
        url(message = "url must be a valid absolute URL")
    )]
    pub url: String,
}

/// 任务结果查询参数
#[derive(Debug, Deserialize)]
pub struct TaskResultQueryDto {
    /// 要查询的任务ID
    pub task_id: Option<String>,
}
