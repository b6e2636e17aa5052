//! Integration tests for `TcpScaleDriver` against an in-process fake scale.
//!
//! Each test binds a listener on an ephemeral localhost port and scripts the
//! scale side of the exchange.

use std::time::Duration;

use scale_driver::{
    ConnectionError, DriverConfig, DriverError, ProtocolError, ScaleDriver, TcpScaleDriver,
    TransportError,
};
use scale_protocol::{build_command, CMD_GET_WEIGHT, COMMAND_FRAME_LEN};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use tokio::task::JoinHandle;

/// Build a scale reply with the given weight and optional tare.
fn reply(weight: i32, flags: [u8; 3], tare: Option<i32>) -> Vec<u8> {
    let mut raw = vec![0x01];
    raw.extend_from_slice(&weight.to_le_bytes());
    raw.push(2);
    raw.extend_from_slice(&flags);
    raw.extend_from_slice(&tare.unwrap_or(0).to_le_bytes());
    if tare.is_some() {
        // Pad to the extended length so the tare is decoded.
        raw.extend_from_slice(&[0; 4]);
    }
    raw
}

async fn listener() -> (TcpListener, String) {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind test listener");
    let address = listener.local_addr().expect("local addr").to_string();
    (listener, address)
}

/// Read one command frame and check it is "get weight".
async fn expect_get_weight(socket: &mut TcpStream) {
    let mut cmd = [0u8; COMMAND_FRAME_LEN];
    socket.read_exact(&mut cmd).await.expect("read command frame");
    assert_eq!(cmd.to_vec(), build_command(CMD_GET_WEIGHT));
}

/// Accept one connection, answer each command with the next reply, then
/// hold the socket open until the client hangs up.
fn serve(listener: TcpListener, replies: Vec<Vec<u8>>) -> JoinHandle<()> {
    tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.expect("accept");
        for response in replies {
            expect_get_weight(&mut socket).await;
            socket.write_all(&response).await.expect("write reply");
        }
        let mut rest = Vec::new();
        let _ = socket.read_to_end(&mut rest).await;
    })
}

fn fast_config(address: &str) -> DriverConfig {
    DriverConfig::new(address)
        .with_connect_timeout(Duration::from_secs(2))
        .with_write_timeout(Duration::from_secs(2))
        .with_read_timeout(Duration::from_millis(200))
}

#[tokio::test]
async fn test_read_weight_minimal_reply() {
    let (listener, address) = listener().await;
    let scale = serve(listener, vec![reply(12345, [1, 0, 1], None)]);

    let mut driver = TcpScaleDriver::with_config(fast_config(&address));
    driver.open_connection().await.expect("open");
    assert!(driver.is_connected());

    let reading = driver.read_weight().await.expect("reading");
    assert_eq!(reading.weight, 12345);
    assert_eq!(reading.division, 2);
    assert!(reading.stable);
    assert!(!reading.net);
    assert!(reading.zero);
    assert_eq!(reading.tare, None);

    driver.close_connection().await.expect("close");
    assert!(!driver.is_connected());
    scale.await.expect("scale task");
}

#[tokio::test]
async fn test_read_weight_extended_reply() {
    let (listener, address) = listener().await;
    let scale = serve(listener, vec![reply(-2500, [1, 1, 0], Some(-500))]);

    let mut driver = TcpScaleDriver::with_config(fast_config(&address));
    driver.open_connection().await.expect("open");

    let reading = driver.read_weight().await.expect("reading");
    assert_eq!(reading.weight, -2500);
    assert!(reading.net);
    assert_eq!(reading.tare, Some(-500));

    driver.close_connection().await.expect("close");
    scale.await.expect("scale task");
}

#[tokio::test]
async fn test_multiple_readings_on_one_connection() {
    let (listener, address) = listener().await;
    let scale = serve(
        listener,
        vec![reply(10, [0, 0, 0], None), reply(20, [1, 0, 0], None)],
    );

    let mut driver = TcpScaleDriver::with_config(fast_config(&address));
    driver.open_connection().await.expect("open");
    assert_eq!(driver.read_weight().await.expect("first").weight, 10);
    assert_eq!(driver.read_weight().await.expect("second").weight, 20);

    driver.close_connection().await.expect("close");
    scale.await.expect("scale task");
}

#[tokio::test]
async fn test_short_reply_is_protocol_error() {
    let (listener, address) = listener().await;
    let scale = serve(listener, vec![vec![0x01, 0x02, 0x03, 0x04, 0x05]]);

    let mut driver = TcpScaleDriver::with_config(fast_config(&address));
    driver.open_connection().await.expect("open");

    let err = driver.read_weight().await.unwrap_err();
    assert!(
        matches!(
            err,
            DriverError::Protocol(ProtocolError::ShortResponse { expected: 13, actual: 5 })
        ),
        "unexpected error: {err:?}"
    );
    // A protocol error does not drop the connection.
    assert!(driver.is_connected());

    driver.close_connection().await.expect("close");
    scale.await.expect("scale task");
}

#[tokio::test]
async fn test_silent_scale_times_out() {
    let (listener, address) = listener().await;
    let scale = tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.expect("accept");
        expect_get_weight(&mut socket).await;
        let mut rest = Vec::new();
        let _ = socket.read_to_end(&mut rest).await;
    });

    let mut driver = TcpScaleDriver::with_config(fast_config(&address));
    driver.open_connection().await.expect("open");

    let err = driver.read_weight().await.unwrap_err();
    assert!(err.is_timeout());
    assert!(matches!(
        err,
        DriverError::Transport(TransportError::ReadTimeout(d)) if d == Duration::from_millis(200)
    ));

    driver.close_connection().await.expect("close");
    scale.await.expect("scale task");
}

#[tokio::test]
async fn test_scale_hangs_up() {
    let (listener, address) = listener().await;
    let scale = tokio::spawn(async move {
        let (socket, _) = listener.accept().await.expect("accept");
        drop(socket);
    });

    let mut driver = TcpScaleDriver::with_config(fast_config(&address));
    driver.open_connection().await.expect("open");
    scale.await.expect("scale task");

    let err = driver.read_weight().await.unwrap_err();
    assert!(
        matches!(
            err,
            DriverError::Transport(
                TransportError::Closed | TransportError::Read(_) | TransportError::Write(_)
            )
        ),
        "unexpected error: {err:?}"
    );
    assert!(!err.is_timeout());

    // The socket is released even if the shutdown itself reports an error.
    let _ = driver.close_connection().await;
    assert!(!driver.is_connected());
}

#[tokio::test]
async fn test_refused_dial_is_connection_error() {
    let (listener, address) = listener().await;
    drop(listener);

    let mut driver = TcpScaleDriver::with_config(fast_config(&address));
    let err = driver.open_connection().await.unwrap_err();
    assert!(
        matches!(err, DriverError::Connection(ConnectionError::Dial { .. })),
        "unexpected error: {err:?}"
    );
    assert!(!driver.is_connected());
}

#[tokio::test]
async fn test_reopen_replaces_connection() {
    let (listener, address) = listener().await;
    let scale = tokio::spawn(async move {
        // First connection: the driver should close it when re-opening.
        let (mut first, _) = listener.accept().await.expect("accept first");
        let mut rest = Vec::new();
        let n = first.read_to_end(&mut rest).await.expect("first closed cleanly");
        assert_eq!(n, 0, "nothing should be sent on the replaced connection");

        let (mut second, _) = listener.accept().await.expect("accept second");
        expect_get_weight(&mut second).await;
        second
            .write_all(&reply(777, [1, 0, 0], None))
            .await
            .expect("write reply");
        let _ = second.read_to_end(&mut rest).await;
    });

    let mut driver = TcpScaleDriver::with_config(fast_config(&address));
    driver.open_connection().await.expect("first open");
    driver.open_connection().await.expect("second open");
    assert!(driver.is_connected());

    assert_eq!(driver.read_weight().await.expect("reading").weight, 777);

    driver.close_connection().await.expect("close");
    scale.await.expect("scale task");
}

#[tokio::test]
async fn test_close_is_idempotent() {
    let mut driver = TcpScaleDriver::new("127.0.0.1:9");
    driver.close_connection().await.expect("close before open");

    let (listener, address) = listener().await;
    let scale = serve(listener, Vec::new());

    let mut driver = TcpScaleDriver::with_config(fast_config(&address));
    driver.open_connection().await.expect("open");
    driver.close_connection().await.expect("close");
    driver.close_connection().await.expect("close again");
    assert!(!driver.is_connected());
    scale.await.expect("scale task");
}
