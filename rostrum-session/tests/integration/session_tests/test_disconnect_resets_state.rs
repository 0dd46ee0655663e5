use crate::{create_connected_session, init_tracing};
use rostrum_session::SessionError;

#[tokio::test]
async fn test_disconnect_returns_to_disconnected() {
    init_tracing();

    let (coordinator, _transport, _capture, _scene) = create_connected_session(1).await;
    assert!(coordinator.is_connected().await);

    coordinator.disconnect().await;

    assert!(!coordinator.is_connected().await);
    assert_eq!(coordinator.peer_id().await, None);
    assert_eq!(coordinator.participant_count(), 0);

    let err = coordinator.point_presenter(0.5, 0.5).await.unwrap_err();
    assert!(matches!(err, SessionError::NotConnected));

    // Idempotent.
    coordinator.disconnect().await;
    assert!(!coordinator.is_connected().await);
}
