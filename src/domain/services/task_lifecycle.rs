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

use crate::domain::models::task::Task;
use crate::domain::repositories::task_repository::{RepositoryError, TaskRepository};
use crate::engines::traits::AnalysisEngine;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::sleep;
use tracing::{error, info, warn};
use uuid::Uuid;

/// 分析结束的方式
///
/// 决定终态写入的内容以及计数指标的归类
#[derive(Debug, Clone, Copy)]
enum AnalysisOutcome {
    /// 分析在截止时间前返回了匹配结果
    Completed(bool),
    /// 分析在截止时间前出错
    Errored,
    /// 截止时间先到
    TimedOut,
}

/// 任务生命周期服务
///
/// 系统的核心：创建任务记录、把分析工作抛到请求路径之外、
/// 让分析完成与硬截止时间赛跑，并保证每个任务恰好被终结一次。
///
/// 每次提交派生一对tokio任务：分析任务独立运行，调度任务在
/// `select!`中等待分析的JoinHandle或截止时间，先到者决定终态。
/// 超时后分析任务不被中止，它的迟到结果无人观察，且仓库的
/// 条件化finalize保证它也无法覆盖已写入的终态。
pub struct TaskLifecycleService<R> {
    /// 任务仓库
    repository: Arc<R>,
    /// 分析引擎
    engine: Arc<dyn AnalysisEngine>,
    /// 从派发起算的硬截止时间
    deadline: Duration,
}

impl<R> TaskLifecycleService<R>
where
    R: TaskRepository + 'static,
{
    /// 创建新的任务生命周期服务实例
    ///
    /// # 参数
    ///
    /// * `repository` - 任务仓库
    /// * `engine` - 分析引擎
    /// * `deadline` - 单个任务的硬截止时间
    pub fn new(repository: Arc<R>, engine: Arc<dyn AnalysisEngine>, deadline: Duration) -> Self {
        Self {
            repository,
            engine,
            deadline,
        }
    }

    /// 提交任务
    ///
    /// 创建并持久化一条Processing状态的任务记录，随后立即派发
    /// 分析工作。调用方同步拿到新任务，无需等待分析。
    ///
    /// # 参数
    ///
    /// * `url` - 目标URL
    ///
    /// # 返回值
    ///
    /// * `Ok(Task)` - 新创建的任务
    /// * `Err(RepositoryError)` - 持久化失败
    pub async fn submit(&self, url: String) -> Result<Task, RepositoryError> {
        let task = self.repository.create(&Task::new(url)).await?;

        metrics::counter!("sitecheck_tasks_submitted_total").increment(1);
        info!("Task {} created for {}", task.id, task.url);

        self.dispatch(task.clone());
        Ok(task)
    }

    /// 查询任务
    ///
    /// # 参数
    ///
    /// * `id` - 任务ID
    ///
    /// # 返回值
    ///
    /// * `Ok(Some(Task))` - 当前存储的任务记录
    /// * `Ok(None)` - 任务不存在
    pub async fn find(&self, id: Uuid) -> Result<Option<Task>, RepositoryError> {
        self.repository.find_by_id(id).await
    }

    /// 派发分析工作
    ///
    /// 分析跑在自己的tokio任务里；超时后该任务保持分离状态
    /// 继续运行，结果被丢弃。
    fn dispatch(&self, task: Task) {
        let repository = Arc::clone(&self.repository);
        let engine = Arc::clone(&self.engine);
        let deadline = self.deadline;

        tokio::spawn(async move {
            let engine_name = engine.name();
            let mut analysis = {
                let engine = Arc::clone(&engine);
                let url = task.url.clone();
                tokio::spawn(async move { engine.analyze(&url).await })
            };

            let outcome = tokio::select! {
                joined = &mut analysis => match joined {
                    Ok(Ok(matched)) => AnalysisOutcome::Completed(matched),
                    Ok(Err(e)) => {
                        warn!(
                            "Analysis of task {} failed via {}: {}",
                            task.id, engine_name, e
                        );
                        AnalysisOutcome::Errored
                    }
                    Err(e) => {
                        error!("Analysis task for {} aborted: {}", task.id, e);
                        AnalysisOutcome::Errored
                    }
                },
                _ = sleep(deadline) => {
                    warn!(
                        "Task {} exceeded deadline of {:?}, forcing failure",
                        task.id, deadline
                    );
                    AnalysisOutcome::TimedOut
                }
            };

            let terminal = match outcome {
                AnalysisOutcome::Completed(matched) => task.clone().complete(matched),
                AnalysisOutcome::Errored | AnalysisOutcome::TimedOut => task.clone().fail(),
            };

            // The local copy is still Processing, so the transition is infallible
            let terminal = match terminal {
                Ok(terminal) => terminal,
                Err(e) => {
                    error!("Illegal state transition for task {}: {}", task.id, e);
                    return;
                }
            };

            match repository.finalize(&terminal).await {
                Ok(true) => {
                    match outcome {
                        AnalysisOutcome::Completed(_) => {
                            metrics::counter!("sitecheck_tasks_succeeded_total").increment(1);
                        }
                        AnalysisOutcome::Errored => {
                            metrics::counter!("sitecheck_tasks_failed_total").increment(1);
                        }
                        AnalysisOutcome::TimedOut => {
                            metrics::counter!("sitecheck_tasks_timed_out_total").increment(1);
                        }
                    }
                    info!(
                        "Task {} finalized as {} (result: {})",
                        task.id, terminal.status, terminal.result
                    );
                }
                Ok(false) => {
                    warn!(
                        "Task {} was already finalized, discarding {:?} outcome",
                        task.id, outcome
                    );
                }
                Err(e) => {
                    error!("Failed to finalize task {}: {}", task.id, e);
                }
            }
        });
    }
}

#[cfg(test)]
#[path = "task_lifecycle_test.rs"]
mod tests;
