// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use chrono::{DateTime, FixedOffset, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use uuid::Uuid;

/// 任务实体
///
/// 表示一次提交的URL检测作业。任务在创建时处于处理中状态，
/// 分析完成或超时后恰好一次地进入终态，此后记录不再改变。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    /// 任务唯一标识符
    pub id: Uuid,
    /// 目标URL，任务要检测的具体网址
    pub url: String,
    /// 任务状态，跟踪任务在其生命周期中的当前阶段
    pub status: TaskStatus,
    /// 检测结果，仅在任务进入终态后有意义
    pub result: bool,
    /// 创建时间，任务创建的时间戳
    pub created_at: DateTime<FixedOffset>,
    /// 更新时间，任务信息最后更新的时间戳
    pub updated_at: DateTime<FixedOffset>,
}

/// 任务状态枚举
///
/// 表示任务在其生命周期中的不同状态。
/// 状态转换遵循以下流程：
/// Processing → Success/Failure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    /// 处理中，任务已创建且分析尚未结束
    #[default]
    Processing,
    /// 已成功，分析在截止时间前返回
    Success,
    /// 已失败，分析出错或超时
    Failure,
}

impl TaskStatus {
    /// 判断状态是否为终态
    pub fn is_terminal(&self) -> bool {
        matches!(self, TaskStatus::Success | TaskStatus::Failure)
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            TaskStatus::Processing => write!(f, "processing"),
            TaskStatus::Success => write!(f, "success"),
            TaskStatus::Failure => write!(f, "failure"),
        }
    }
}

impl FromStr for TaskStatus {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "processing" => Ok(TaskStatus::Processing),
            "success" => Ok(TaskStatus::Success),
            "failure" => Ok(TaskStatus::Failure),
            _ => Err(()),
        }
    }
}

/// 领域错误类型
#[derive(Error, Debug)]
pub enum DomainError {
    /// 无效的状态转换，当任务已处于终态时再次终结会触发
    #[error("Invalid state transition")]
    InvalidStateTransition,
}

impl Task {
    /// 创建一个新的任务
    ///
    /// # 参数
    ///
    /// * `url` - 目标URL
    ///
    /// # 返回值
    ///
    /// 返回处于Processing状态的新任务实例
    pub fn new(url: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            url,
            status: TaskStatus::Processing,
            result: false,
            created_at: Utc::now().into(),
            updated_at: Utc::now().into(),
        }
    }

    /// 完成任务
    ///
    /// 将任务状态从Processing变更为Success并记录匹配结果。
    /// 无论关键词是否命中，分析按时返回即视为成功。
    ///
    /// # 返回值
    ///
    /// * `Ok(Task)` - 成功终结的任务
    /// * `Err(DomainError)` - 状态转换失败
    pub fn complete(mut self, matched: bool) -> Result<Self, DomainError> {
        match self.status {
            TaskStatus::Processing => {
                self.status = TaskStatus::Success;
                self.result = matched;
                self.updated_at = Utc::now().into();
                Ok(self)
            }
            _ => Err(DomainError::InvalidStateTransition),
        }
    }

    /// 标记任务失败
    ///
    /// 将任务状态从Processing变更为Failure，结果固定为false。
    /// 分析出错和超时都走这条路径。
    ///
    /// # 返回值
    ///
    /// * `Ok(Task)` - 失败终结的任务
    /// * `Err(DomainError)` - 状态转换失败
    pub fn fail(mut self) -> Result<Self, DomainError> {
        match self.status {
            TaskStatus::Processing => {
                self.status = TaskStatus::Failure;
                self.result = false;
                self.updated_at = Utc::now().into();
                Ok(self)
            }
            _ => Err(DomainError::InvalidStateTransition),
        }
    }
}
