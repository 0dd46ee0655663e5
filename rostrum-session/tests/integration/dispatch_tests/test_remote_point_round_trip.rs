use crate::{create_connected_session, init_tracing};
use bytes::Bytes;
use rostrum_core::PeerId;
use rostrum_session::RoomEvent;
use std::time::Duration;

#[tokio::test(start_paused = true)]
async fn test_remote_point_message_lands_untransformed() {
    init_tracing();

    let (_coordinator, transport, _capture, scene) = create_connected_session(1).await;
    let events = transport.event_sender();
    let p1 = PeerId::from("p1");

    // Raw wire bytes, exactly as another participant's dispatch would
    // have produced them.
    events
        .send(RoomEvent::Data {
            src: p1.clone(),
            payload: Bytes::from_static(
                br#"{"command":"point-presenter-stream","peerId":"p1","x":0.25,"y":0.75}"#,
            ),
        })
        .await
        .unwrap();

    tokio::time::sleep(Duration::from_millis(10)).await;

    let marks = scene.marks_shown_for(&p1).await;
    assert_eq!(marks.len(), 1);
    assert_eq!(marks[0].x, 0.25);
    assert_eq!(marks[0].y, 0.75);
}
