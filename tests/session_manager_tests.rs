use std::time::Duration;
use tokio::time::sleep;

use vote_buddy::services::session_manager::{MessageRole, SessionManager};

#[tokio::test]
async fn basic_session_flow() {
    let mgr = SessionManager::new(Duration::from_secs(60));
    let sid = mgr.create_session().await;
    assert!(!sid.is_empty());
    let len = mgr.append_message(&sid, MessageRole::User, "hello").await;
    assert_eq!(len, 1);
    let history = mgr.get_history(&sid).await.unwrap();
    assert_eq!(history.len(), 1);
    assert!(mgr.remove_session(&sid).await);
}

#[tokio::test]
async fn session_expiration() {
    let mgr = SessionManager::new(Duration::from_millis(10));
    let sid = mgr.create_session().await;

    // Wait for expiration
    sleep(Duration::from_millis(20)).await;

    let removed = mgr.purge_expired().await;
    assert_eq!(removed, 1, "Should have removed 1 expired session");
    assert!(
        !mgr.remove_session(&sid).await,
        "Session should already be gone"
    );
}

#[tokio::test]
async fn ensure_session_is_idempotent() {
    let mgr = SessionManager::new(Duration::from_secs(60));
    let sid = mgr.create_session().await;
    mgr.append_message(&sid, MessageRole::User, "hello").await;

    let same = mgr.ensure_session(&sid).await;
    assert_eq!(same, sid);
    assert_eq!(mgr.get_history(&sid).await.unwrap().len(), 1);
    assert_eq!(mgr.len().await, 1);
}

#[tokio::test]
async fn clear_history_keeps_session_alive() {
    let mgr = SessionManager::new(Duration::from_secs(60));
    let sid = mgr.create_session().await;
    mgr.append_message(&sid, MessageRole::User, "hello").await;
    mgr.append_message(&sid, MessageRole::Assistant, "hi there")
        .await;

    assert!(mgr.clear_history(&sid).await);
    let history = mgr.get_history(&sid).await.unwrap();
    assert!(history.is_empty());
    assert!(!mgr.is_empty().await);

    // Clearing an unknown session reports failure.
    assert!(!mgr.clear_history("missing").await);
}
