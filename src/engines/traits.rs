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

use async_trait::async_trait;
use thiserror::Error;

/// 引擎错误类型
#[derive(Error, Debug)]
pub enum EngineError {
    /// 请求失败
    #[error("Request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),
    /// 无效的URL
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
    /// 非成功的HTTP状态码
    #[error("Unexpected status code: {0}")]
    BadStatus(u16),
}

/// 分析引擎特质
///
/// 抓取目标页面并判断其内容是否命中配置的关键词。
/// 生命周期管理器只消费布尔结果，所有错误对它而言等价。
#[async_trait]
pub trait AnalysisEngine: Send + Sync {
    /// 执行分析
    ///
    /// # 参数
    ///
    /// * `url` - 目标URL
    ///
    /// # 返回值
    ///
    /// * `Ok(bool)` - 页面是否同时包含两个关键词
    /// * `Err(EngineError)` - 抓取或解析过程中出现的错误
    async fn analyze(&self, url: &str) -> Result<bool, EngineError>;

    /// 引擎名称
    fn name(&self) -> &'static str;
}
