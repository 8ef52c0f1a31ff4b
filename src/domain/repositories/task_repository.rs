// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::task::Task;
use async_trait::async_trait;
use sea_orm::DbErr;
use thiserror::Error;
use uuid::Uuid;

/// 仓库错误类型
#[derive(Error, Debug)]
pub enum RepositoryError {
    /// 数据库错误
    #[error("Database error: {0}")]
    Database(#[from] DbErr),
}

/// 任务仓库特质
///
/// 定义任务数据访问接口。写操作（create、finalize）在实现中
/// 通过一把覆盖整个存储的互斥锁串行化；读操作不加锁。
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// 创建新任务
    async fn create(&self, task: &Task) -> Result<Task, RepositoryError>;
    /// 根据ID查找任务
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Task>, RepositoryError>;
    /// 写入终态记录
    ///
    /// 仅当存储中的任务仍处于processing状态时写入生效，
    /// 保证每个任务只被终结一次。
    ///
    /// # 返回值
    ///
    /// * `Ok(true)` - 本次调用赢得了终态写入
    /// * `Ok(false)` - 任务已被其他路径终结，本次结果被丢弃
    async fn finalize(&self, task: &Task) -> Result<bool, RepositoryError>;
}
