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

use crate::engines::identity;
use crate::engines::matcher;
use crate::engines::traits::{AnalysisEngine, EngineError};
use async_trait::async_trait;
use reqwest::header;
use std::time::Duration;
use tracing::debug;
use url::Url;

/// 抓取分析引擎
///
/// 基于reqwest实现的HTTP抓取引擎，抓取目标页面后
/// 在正文中匹配配置的两个关键词。
pub struct FetchEngine {
    /// 关键词1
    keyword1: String,
    /// 关键词2
    keyword2: String,
    /// 单次抓取的网络超时
    fetch_timeout: Duration,
}

impl FetchEngine {
    /// 创建新的抓取分析引擎实例
    pub fn new(keyword1: String, keyword2: String, fetch_timeout: Duration) -> Self {
        Self {
            keyword1,
            keyword2,
            fetch_timeout,
        }
    }
}

#[async_trait]
impl AnalysisEngine for FetchEngine {
    /// 执行HTTP抓取并匹配关键词
    ///
    /// # 参数
    ///
    /// * `url` - 目标URL
    ///
    /// # 返回值
    ///
    /// * `Ok(bool)` - 页面正文是否同时包含两个关键词
    /// * `Err(EngineError)` - 抓取过程中出现的错误
    async fn analyze(&self, url: &str) -> Result<bool, EngineError> {
        let target = Url::parse(url)?;

        // Each request gets a fresh client and a fresh identity
        let user_agent = identity::random_user_agent();
        let client = reqwest::Client::builder()
            .user_agent(user_agent)
            .timeout(self.fetch_timeout)
            .cookie_store(true)
            .build()?;

        debug!("Requesting URL: {} with User-Agent: {}", target, user_agent);

        let response = client
            .get(target)
            .header(header::COOKIE, identity::forged_cookie_header())
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(EngineError::BadStatus(status.as_u16()));
        }

        let content = response.text().await?;

        Ok(matcher::contains_keywords(
            &content,
            &self.keyword1,
            &self.keyword2,
        ))
    }

    /// 获取引擎名称
    fn name(&self) -> &'static str {
        "fetch"
    }
}

#[cfg(test)]
#[path = "fetch_engine_test.rs"]
mod tests;
