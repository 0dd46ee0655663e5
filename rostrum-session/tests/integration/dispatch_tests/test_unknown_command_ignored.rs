use crate::{create_connected_session, init_tracing};
use bytes::Bytes;
use rostrum_core::PeerId;
use rostrum_session::RoomEvent;
use std::time::Duration;

#[tokio::test(start_paused = true)]
async fn test_unknown_and_malformed_payloads_are_no_ops() {
    init_tracing();

    let (coordinator, transport, _capture, scene) = create_connected_session(1).await;
    let events = transport.event_sender();
    let baseline = scene.calls().await.len();

    events
        .send(RoomEvent::Data {
            src: PeerId::from("p2"),
            payload: Bytes::from_static(br#"{"command":"ping"}"#),
        })
        .await
        .unwrap();

    events
        .send(RoomEvent::Data {
            src: PeerId::from("p2"),
            payload: Bytes::from_static(b"not json at all"),
        })
        .await
        .unwrap();

    tokio::time::sleep(Duration::from_millis(10)).await;

    assert_eq!(scene.calls().await.len(), baseline);
    assert!(coordinator.is_connected().await);
}
