// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use migration::{Migrator, MigratorTrait};
use sitecheck::config::settings::DatabaseSettings;
use sitecheck::domain::models::task::{Task, TaskStatus};
use sitecheck::domain::repositories::task_repository::TaskRepository;
use sitecheck::infrastructure::database::connection;
use sitecheck::infrastructure::repositories::task_repo_impl::TaskRepositoryImpl;
use std::sync::Arc;
use uuid::Uuid;

async fn repository() -> TaskRepositoryImpl {
    let settings = DatabaseSettings {
        url: "sqlite::memory:".to_string(),
        max_connections: Some(1),
        min_connections: Some(1),
        connect_timeout: Some(5),
        idle_timeout: Some(300),
    };
    let db = Arc::new(connection::create_pool(&settings).await.unwrap());
    Migrator::up(db.as_ref(), None).await.unwrap();
    TaskRepositoryImpl::new(db)
}

#[tokio::test]
async fn test_create_and_find_round_trip() {
    let repo = repository().await;
    let task = Task::new("http://example.com".to_string());

    repo.create(&task).await.unwrap();
    let stored = repo.find_by_id(task.id).await.unwrap().unwrap();

    assert_eq!(stored.id, task.id);
    assert_eq!(stored.url, task.url);
    assert_eq!(stored.status, TaskStatus::Processing);
    assert!(!stored.result);
}

#[tokio::test]
async fn test_find_missing_task_returns_none() {
    let repo = repository().await;
    assert!(repo.find_by_id(Uuid::new_v4()).await.unwrap().is_none());
}

/// finalize是一次性的：第一个写入者胜出，之后的写入影响0行
#[tokio::test]
async fn test_finalize_is_single_shot() {
    let repo = repository().await;
    let task = Task::new("http://example.com".to_string());
    repo.create(&task).await.unwrap();

    let completed = task.clone().complete(true).unwrap();
    let timed_out = task.clone().fail().unwrap();

    assert!(repo.finalize(&completed).await.unwrap());
    // The losing writer must not overwrite the terminal record
    assert!(!repo.finalize(&timed_out).await.unwrap());

    let stored = repo.find_by_id(task.id).await.unwrap().unwrap();
    assert_eq!(stored.status, TaskStatus::Success);
    assert!(stored.result);
}

#[tokio::test]
async fn test_finalize_missing_task_affects_nothing() {
    let repo = repository().await;
    let ghost = Task::new("http://example.com".to_string())
        .fail()
        .unwrap();

    assert!(!repo.finalize(&ghost).await.unwrap());
}
