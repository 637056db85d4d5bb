mod common;

use common::*;
use simple_bank::{Account, CreateEntryParams, Entry, ListParams, Queries, UpdateEntryParams};

async fn create_random_entry(q: &Queries, account: &Account) -> Entry {
    let arg = CreateEntryParams {
        account_id: Some(account.id),
        amount: random_int(-1000, 1000),
    };
    let entry = q.create_entry(arg).await.unwrap();

    assert_eq!(entry.account_id, arg.account_id);
    assert_eq!(entry.amount, arg.amount);
    assert_ne!(entry.id, 0);
    assert!(entry.created_at.timestamp() > 0);

    entry
}

#[tokio::test]
async fn create_entry() {
    let Some(q) = test_queries().await else { return };
    let account = create_random_account(&q).await;
    create_random_entry(&q, &account).await;
}

#[tokio::test]
async fn create_entry_without_account() {
    let Some(q) = test_queries().await else { return };
    let entry = q
        .create_entry(CreateEntryParams {
            account_id: None,
            amount: -25,
        })
        .await
        .unwrap();
    assert_eq!(entry.account_id, None);
    assert_eq!(entry.amount, -25);
}

#[tokio::test]
async fn create_entry_for_missing_account_is_a_constraint_violation() {
    let Some(q) = test_queries().await else { return };
    let err = q
        .create_entry(CreateEntryParams {
            account_id: Some(i64::MAX),
            amount: 10,
        })
        .await
        .unwrap_err();
    assert!(err.is_constraint_violation(), "got {err}");
}

#[tokio::test]
async fn get_entry() {
    let Some(q) = test_queries().await else { return };
    let account = create_random_account(&q).await;
    let entry = create_random_entry(&q, &account).await;

    let fetched = q.get_entry(entry.id).await.unwrap();
    assert_eq!(fetched.id, entry.id);
    assert_eq!(fetched.account_id, entry.account_id);
    assert_eq!(fetched.amount, entry.amount);
    assert_within_second(fetched.created_at, entry.created_at);
}

#[tokio::test]
async fn update_entry() {
    let Some(q) = test_queries().await else { return };
    let account = create_random_account(&q).await;
    let entry = create_random_entry(&q, &account).await;
    let arg = UpdateEntryParams {
        id: entry.id,
        amount: random_int(-1000, 1000),
    };

    let updated = q.update_entry(arg).await.unwrap();
    assert_eq!(updated.id, arg.id);
    assert_eq!(updated.account_id, entry.account_id);
    assert_eq!(updated.amount, arg.amount);
    assert_within_second(updated.created_at, entry.created_at);
}

#[tokio::test]
async fn update_missing_entry_is_not_found() {
    let Some(q) = test_queries().await else { return };
    let err = q
        .update_entry(UpdateEntryParams {
            id: i64::MAX,
            amount: 1,
        })
        .await
        .unwrap_err();
    assert!(err.is_not_found(), "got {err}");
}

#[tokio::test]
async fn delete_entry() {
    let Some(q) = test_queries().await else { return };
    let account = create_random_account(&q).await;
    let entry = create_random_entry(&q, &account).await;

    q.delete_entry(entry.id).await.unwrap();

    let err = q.get_entry(entry.id).await.unwrap_err();
    assert!(err.is_not_found(), "got {err}");
}

#[tokio::test]
async fn delete_missing_entry_succeeds() {
    let Some(q) = test_queries().await else { return };
    q.delete_entry(i64::MAX).await.unwrap();
}

#[tokio::test]
async fn list_entries() {
    let Some(q) = test_queries().await else { return };
    for _ in 0..10 {
        let account = create_random_account(&q).await;
        create_random_entry(&q, &account).await;
    }

    let entries = q.list_entries(ListParams::new(5, 5)).await.unwrap();
    assert_eq!(entries.len(), 5);
    assert!(entries.windows(2).all(|w| w[0].id < w[1].id));
    for entry in &entries {
        assert_ne!(entry.id, 0);
    }
}

#[tokio::test]
async fn list_entries_rejects_negative_offset() {
    let Some(q) = test_queries().await else { return };
    let err = q.list_entries(ListParams::new(5, -1)).await.unwrap_err();
    assert!(matches!(err, simple_bank::AppError::Validation(_)), "got {err}");
}
