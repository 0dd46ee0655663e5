use crate::{LOCAL_PEER, create_connected_session, init_tracing};
use rostrum_core::PeerId;

#[tokio::test]
async fn test_local_echo_happens_even_when_send_fails() {
    init_tracing();

    let (coordinator, transport, _capture, scene) = create_connected_session(1).await;
    transport.handle().fail_send();

    coordinator
        .point_presenter(0.5, 0.5)
        .await
        .expect("a failed broadcast should not fail dispatch");

    // Send was issued first, then the echo was delivered anyway.
    assert_eq!(transport.handle().sent().await.len(), 1);
    let local = PeerId::from(LOCAL_PEER);
    assert_eq!(scene.marks_shown_for(&local).await.len(), 1);
}
