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

use crate::domain::models::task::{Task, TaskStatus};
use crate::domain::repositories::task_repository::{RepositoryError, TaskRepository};
use crate::infrastructure::database::entities::task as task_entity;
use async_trait::async_trait;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter,
    Set,
};
use std::sync::Arc;
use tokio::sync::Mutex;
use uuid::Uuid;

/// 任务仓库实现
///
/// 基于SeaORM实现的任务数据访问层。所有写操作持有同一把
/// 覆盖整个存储的互斥锁，锁的粒度是存储而不是单个任务；
/// 读操作不加锁，整行替换的写入保证读不到半成品记录。
pub struct TaskRepositoryImpl {
    /// 数据库连接
    db: Arc<DatabaseConnection>,
    /// 全局写锁，在持久化调用期间持有
    write_lock: Mutex<()>,
}

impl TaskRepositoryImpl {
    /// 创建新的任务仓库实例
    ///
    /// # 参数
    ///
    /// * `db` - 数据库连接
    ///
    /// # 返回值
    ///
    /// 返回新的任务仓库实例
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self {
            db,
            write_lock: Mutex::new(()),
        }
    }
}

impl From<task_entity::Model> for Task {
    fn from(model: task_entity::Model) -> Self {
        Self {
            id: model.id,
            url: model.url,
            status: model.status.parse().unwrap_or_default(),
            result: model.result,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

impl From<Task> for task_entity::ActiveModel {
    fn from(task: Task) -> Self {
        Self {
            id: Set(task.id),
            url: Set(task.url.clone()),
            status: Set(task.status.to_string()),
            result: Set(task.result),
            created_at: Set(task.created_at),
            updated_at: Set(task.updated_at),
        }
    }
}

#[async_trait]
impl TaskRepository for TaskRepositoryImpl {
    async fn create(&self, task: &Task) -> Result<Task, RepositoryError> {
        let model: task_entity::ActiveModel = task.clone().into();

        let _guard = self.write_lock.lock().await;
        model.insert(self.db.as_ref()).await?;
        Ok(task.clone())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Task>, RepositoryError> {
        let model = task_entity::Entity::find_by_id(id)
            .one(self.db.as_ref())
            .await?;

        Ok(model.map(Into::into))
    }

    async fn finalize(&self, task: &Task) -> Result<bool, RepositoryError> {
        let _guard = self.write_lock.lock().await;

        // Conditional write: only a record still in processing may be finalized
        let result = task_entity::Entity::update_many()
            .col_expr(
                task_entity::Column::Status,
                Expr::value(task.status.to_string()),
            )
            .col_expr(task_entity::Column::Result, Expr::value(task.result))
            .col_expr(task_entity::Column::UpdatedAt, Expr::value(task.updated_at))
            .filter(task_entity::Column::Id.eq(task.id))
            .filter(task_entity::Column::Status.eq(TaskStatus::Processing.to_string()))
            .exec(self.db.as_ref())
            .await?;

        Ok(result.rows_affected == 1)
    }
}
