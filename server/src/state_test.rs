use super::*;

use tokio::time::{Duration, timeout};

async fn recv_forwarded(rx: &mut mpsc::Receiver<String>) -> String {
    timeout(Duration::from_millis(500), rx.recv())
        .await
        .expect("forward receive timed out")
        .expect("channel open")
}

#[tokio::test]
async fn register_and_unregister_track_the_roster() {
    let state = AppState::new();
    let id = Uuid::new_v4();
    let (tx, _rx) = mpsc::channel(4);

    state.register(id, tx).await;
    assert_eq!(state.client_count().await, 1);

    state.unregister(id).await;
    assert_eq!(state.client_count().await, 0);
}

#[tokio::test]
async fn broadcast_excludes_the_sender() {
    let state = AppState::new();
    let sender = Uuid::new_v4();
    let peer = Uuid::new_v4();
    let (sender_tx, mut sender_rx) = mpsc::channel(4);
    let (peer_tx, mut peer_rx) = mpsc::channel(4);
    state.register(sender, sender_tx).await;
    state.register(peer, peer_tx).await;

    state.broadcast("segment text", sender).await;

    assert_eq!(recv_forwarded(&mut peer_rx).await, "segment text");
    assert!(sender_rx.try_recv().is_err(), "sender must not hear its own stroke");
}

#[tokio::test]
async fn broadcast_skips_full_and_closed_peers() {
    let state = AppState::new();
    let sender = Uuid::new_v4();
    let full = Uuid::new_v4();
    let closed = Uuid::new_v4();
    let healthy = Uuid::new_v4();

    let (full_tx, _full_rx) = mpsc::channel(1);
    full_tx.try_send("backlog".to_owned()).expect("fill the channel");
    state.register(full, full_tx).await;

    let (closed_tx, closed_rx) = mpsc::channel(4);
    drop(closed_rx);
    state.register(closed, closed_tx).await;

    let (healthy_tx, mut healthy_rx) = mpsc::channel(4);
    state.register(healthy, healthy_tx).await;

    state.broadcast("segment text", sender).await;

    assert_eq!(recv_forwarded(&mut healthy_rx).await, "segment text");
}

#[tokio::test]
async fn broadcast_with_no_peers_is_a_no_op() {
    let state = AppState::new();
    let sender = Uuid::new_v4();
    let (tx, mut rx) = mpsc::channel(4);
    state.register(sender, tx).await;

    state.broadcast("segment text", sender).await;

    assert!(rx.try_recv().is_err());
}
