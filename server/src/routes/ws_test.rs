use super::*;

use tokio::time::{Duration, timeout};

const VALID_SEGMENT: &str =
    r##"{"x0":1.0,"y0":2.0,"x1":3.0,"y1":4.0,"color":"#112233","size":5.0}"##;

async fn recv_forwarded(rx: &mut mpsc::Receiver<String>) -> String {
    timeout(Duration::from_millis(500), rx.recv())
        .await
        .expect("forward receive timed out")
        .expect("channel open")
}

async fn two_client_state() -> (AppState, Uuid, mpsc::Receiver<String>, Uuid, mpsc::Receiver<String>) {
    let state = AppState::new();
    let sender = Uuid::new_v4();
    let peer = Uuid::new_v4();
    let (sender_tx, sender_rx) = mpsc::channel(8);
    let (peer_tx, peer_rx) = mpsc::channel(8);
    state.register(sender, sender_tx).await;
    state.register(peer, peer_tx).await;
    (state, sender, sender_rx, peer, peer_rx)
}

#[tokio::test]
async fn valid_segment_is_forwarded_verbatim() {
    let (state, sender, mut sender_rx, _peer, mut peer_rx) = two_client_state().await;

    relay_text(&state, sender, VALID_SEGMENT).await;

    assert_eq!(recv_forwarded(&mut peer_rx).await, VALID_SEGMENT);
    assert!(sender_rx.try_recv().is_err(), "no echo to the sender");
}

#[tokio::test]
async fn unknown_fields_survive_the_relay() {
    let (state, sender, _sender_rx, _peer, mut peer_rx) = two_client_state().await;
    let with_extra =
        r##"{"x0":1.0,"y0":2.0,"x1":3.0,"y1":4.0,"color":"#112233","size":5.0,"tag":"v2"}"##;

    relay_text(&state, sender, with_extra).await;

    // Forward-compatibility hinges on relaying the original text.
    assert_eq!(recv_forwarded(&mut peer_rx).await, with_extra);
}

#[tokio::test]
async fn malformed_payloads_are_dropped() {
    let (state, sender, _sender_rx, _peer, mut peer_rx) = two_client_state().await;

    relay_text(&state, sender, "not json").await;
    relay_text(&state, sender, r#"{"x0":1.0}"#).await;
    relay_text(&state, sender, r##"{"x0":1.0,"y0":2.0,"x1":3.0,"y1":4.0,"color":"red","size":5.0}"##).await;
    relay_text(&state, sender, r##"{"x0":1.0,"y0":2.0,"x1":3.0,"y1":4.0,"color":"#112233","size":0.0}"##).await;

    assert!(peer_rx.try_recv().is_err(), "nothing malformed may reach peers");
}

#[tokio::test]
async fn relay_without_peers_accepts_valid_segments() {
    let state = AppState::new();
    let sender = Uuid::new_v4();
    let (tx, mut rx) = mpsc::channel(8);
    state.register(sender, tx).await;

    relay_text(&state, sender, VALID_SEGMENT).await;

    assert!(rx.try_recv().is_err());
}
