//! Integration tests for the `tasks` repository against PostgreSQL.
//!
//! These need a live database (`DATABASE_URL`) and are ignored by default:
//! run them with `cargo test -p taskrun-db -- --ignored`.

use std::sync::Arc;

use chrono::Utc;
use sqlx::PgPool;
use taskrun_core::execution::Execution;
use taskrun_db::models::task::CreateTask;
use taskrun_db::repositories::TaskRepo;
use taskrun_db::store::{PgTaskStore, TaskStore};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn new_task(name: &str, command: &str) -> CreateTask {
    CreateTask {
        name: name.to_string(),
        owner: "ada".to_string(),
        command: command.to_string(),
    }
}

fn execution(output: &str) -> Execution {
    let now = Utc::now();
    Execution {
        started_at: now,
        ended_at: now,
        output: output.to_string(),
        exit_code: Some(0),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires DATABASE_URL"]
async fn create_then_find_round_trips(pool: PgPool) {
    let created = TaskRepo::create(&pool, &new_task("Print Hello", "echo hello"))
        .await
        .unwrap();
    assert!(created.executions.is_empty());

    let found = TaskRepo::find_by_id(&pool, created.id)
        .await
        .unwrap()
        .expect("task should exist");
    assert_eq!(found, created);
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires DATABASE_URL"]
async fn list_all_is_in_insertion_order(pool: PgPool) {
    let a = TaskRepo::create(&pool, &new_task("a", "true")).await.unwrap();
    let b = TaskRepo::create(&pool, &new_task("b", "true")).await.unwrap();

    let ids: Vec<_> = TaskRepo::list_all(&pool)
        .await
        .unwrap()
        .into_iter()
        .map(|t| t.id)
        .collect();
    assert_eq!(ids, vec![a.id, b.id]);
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires DATABASE_URL"]
async fn search_is_case_insensitive_and_literal(pool: PgPool) {
    TaskRepo::create(&pool, &new_task("Hello World", "true"))
        .await
        .unwrap();
    TaskRepo::create(&pool, &new_task("100% done", "true"))
        .await
        .unwrap();

    let hello = TaskRepo::search_by_name(&pool, "LLO").await.unwrap();
    assert_eq!(hello.len(), 1);
    assert_eq!(hello[0].name, "Hello World");

    let percent = TaskRepo::search_by_name(&pool, "0%").await.unwrap();
    assert_eq!(percent.len(), 1);

    // `_` would match any single character if not escaped.
    assert!(TaskRepo::search_by_name(&pool, "Hello_World")
        .await
        .unwrap()
        .is_empty());
    assert!(TaskRepo::search_by_name(&pool, "zzz").await.unwrap().is_empty());
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires DATABASE_URL"]
async fn delete_is_idempotent(pool: PgPool) {
    let task = TaskRepo::create(&pool, &new_task("gone", "true"))
        .await
        .unwrap();

    assert!(TaskRepo::delete(&pool, task.id).await.unwrap());
    assert!(!TaskRepo::delete(&pool, task.id).await.unwrap());
    assert!(TaskRepo::find_by_id(&pool, task.id).await.unwrap().is_none());
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires DATABASE_URL"]
async fn append_execution_preserves_order(pool: PgPool) {
    let task = TaskRepo::create(&pool, &new_task("twice", "echo hi"))
        .await
        .unwrap();

    TaskRepo::append_execution(&pool, task.id, &execution("first\n"))
        .await
        .unwrap();
    let updated = TaskRepo::append_execution(&pool, task.id, &execution("second\n"))
        .await
        .unwrap()
        .expect("task should exist");

    let outputs: Vec<_> = updated.executions.iter().map(|e| e.output.as_str()).collect();
    assert_eq!(outputs, vec!["first\n", "second\n"]);
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires DATABASE_URL"]
async fn append_execution_to_missing_task_returns_none(pool: PgPool) {
    let result = TaskRepo::append_execution(&pool, 424242, &execution("x\n"))
        .await
        .unwrap();
    assert!(result.is_none());
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires DATABASE_URL"]
async fn concurrent_appends_do_not_lose_history(pool: PgPool) {
    let store = Arc::new(PgTaskStore::new(pool));
    let id = store
        .create(&new_task("busy", "true"))
        .await
        .unwrap()
        .id;

    let appends = (0..10).map(|i| {
        let store = Arc::clone(&store);
        async move {
            store
                .append_execution(id, &execution(&format!("{i}\n")))
                .await
                .unwrap()
        }
    });
    futures::future::join_all(appends).await;

    let stored = store.find_by_id(id).await.unwrap().unwrap();
    assert_eq!(stored.executions.len(), 10);
}
