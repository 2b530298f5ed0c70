use super::*;

fn segment() -> StrokeSegment {
    StrokeSegment {
        x0: 1.0,
        y0: 2.0,
        x1: 3.0,
        y1: 4.0,
        color: "#336699".into(),
        size: 5.0,
    }
}

#[test]
fn starts_disconnected() {
    let channel = SyncChannel::new();
    assert_eq!(channel.status(), ConnectionStatus::Disconnected);
    assert!(!channel.is_connected());
}

#[test]
fn connecting_is_not_connected() {
    let mut channel = SyncChannel::new();
    channel.set_connecting();
    assert_eq!(channel.status(), ConnectionStatus::Connecting);
    assert!(!channel.is_connected());
}

#[test]
fn attach_then_detach_tracks_status() {
    let mut channel = SyncChannel::new();
    let (tx, _rx) = mpsc::unbounded_channel();
    channel.attach(tx);
    assert!(channel.is_connected());

    channel.detach();
    assert_eq!(channel.status(), ConnectionStatus::Disconnected);
}

#[test]
fn send_while_connected_transmits_encoded_segment() {
    let mut channel = SyncChannel::new();
    let (tx, mut rx) = mpsc::unbounded_channel();
    channel.attach(tx);

    channel.send(&segment());

    let text = rx.try_recv().expect("one message queued");
    let decoded = strokes::decode_segment(&text).expect("valid wire text");
    assert_eq!(decoded, segment());
}

#[test]
fn send_while_disconnected_is_a_silent_no_op() {
    let mut channel = SyncChannel::new();
    channel.send(&segment());
    assert!(!channel.is_connected());
}

#[test]
fn send_after_detach_transmits_nothing() {
    let mut channel = SyncChannel::new();
    let (tx, mut rx) = mpsc::unbounded_channel();
    channel.attach(tx);
    channel.detach();

    channel.send(&segment());

    assert!(rx.try_recv().is_err());
}

#[test]
fn send_into_dead_transport_detaches() {
    let mut channel = SyncChannel::new();
    let (tx, rx) = mpsc::unbounded_channel();
    channel.attach(tx);
    drop(rx);

    channel.send(&segment());

    assert_eq!(channel.status(), ConnectionStatus::Disconnected);
}
