//! Integration tests for stormdist against a local HTTP server

use std::io::{Read, Write};
use std::net::TcpListener;
use std::thread::{self, JoinHandle};

use stormdist::config::AdvisoryConfig;
use stormdist::{
    BulletinSource, Coordinate, ErrorKind, HttpBulletinSource, StormError, StormTracker, geodesy,
    get_distance, get_summary,
};

const FIXTURE: &str = include_str!("fixtures/elsa_advisory.txt");

/// Serve one raw HTTP response on an ephemeral port, then close the connection
fn serve_raw(response: String) -> (String, JoinHandle<()>) {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind test listener");
    let url = format!(
        "http://{}/text/refresh/MIATCPAT5+shtml/advisory.shtml",
        listener.local_addr().unwrap()
    );

    let handle = thread::spawn(move || {
        let (mut stream, _) = listener.accept().expect("accept connection");

        // Read the request head before answering
        let mut request = Vec::new();
        let mut buf = [0_u8; 1024];
        while !request.windows(4).any(|w| w == b"\r\n\r\n") {
            let n = stream.read(&mut buf).expect("read request");
            if n == 0 {
                break;
            }
            request.extend_from_slice(&buf[..n]);
        }

        stream.write_all(response.as_bytes()).expect("write response");
        stream.flush().unwrap();
    });

    (url, handle)
}

/// Serve a single well-formed HTTP response and return its URL
fn serve_once(status_line: &'static str, body: &'static str) -> (String, JoinHandle<()>) {
    serve_raw(format!(
        "{status_line}\r\nContent-Type: text/html\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
        body.len()
    ))
}

fn tracker_for(url: &str) -> StormTracker {
    StormTracker::from_config(&AdvisoryConfig::with_url(url)).expect("build tracker")
}

#[test]
fn test_fetch_returns_full_body() {
    let (url, server) = serve_once("HTTP/1.1 200 OK", FIXTURE);
    let source = HttpBulletinSource::new(&AdvisoryConfig::with_url(&url)).unwrap();

    let text = source.fetch().unwrap();
    server.join().unwrap();

    assert_eq!(text, FIXTURE);
}

#[test]
fn test_summary_over_http() {
    let (url, server) = serve_once("HTTP/1.1 200 OK", FIXTURE);

    let summary = tracker_for(&url).summary().unwrap();
    server.join().unwrap();

    assert!(summary.starts_with("SUMMARY OF 1100 AM EDT"));
    assert!(summary.contains("LOCATION...27.5N 82.9W"));
    assert!(!summary.contains("WATCHES AND WARNINGS"));
}

#[test]
fn test_distance_over_http() {
    let (url, server) = serve_once("HTTP/1.1 200 OK", FIXTURE);

    let miles = tracker_for(&url).distance_from(41.0, -74.0).unwrap();
    server.join().unwrap();

    let expected = Coordinate::new(41.0, -74.0).distance_to(&Coordinate::new(27.5, -82.9));
    assert_eq!(miles, expected);
    assert_eq!(miles, geodesy::distance(41.0, -74.0, 27.5, -82.9));
}

#[test]
fn test_bulletin_without_location() {
    let (url, server) = serve_once(
        "HTTP/1.1 200 OK",
        "BULLETIN\nSUMMARY OF 1100 AM\nMAXIMUM SUSTAINED WINDS...65 MPH\nWATCHES AND WARNINGS\n",
    );

    let err = tracker_for(&url).distance_from(41.0, -74.0).unwrap_err();
    server.join().unwrap();

    assert_eq!(err.kind(), ErrorKind::NoLocationLine);
    assert!(err.to_string().contains("no LOCATION"));
}

#[test]
fn test_error_status_is_fetch_error() {
    let (url, server) = serve_once("HTTP/1.1 404 Not Found", "not here");

    let err = tracker_for(&url).summary().unwrap_err();
    server.join().unwrap();

    assert_eq!(err.kind(), ErrorKind::Fetch);
    assert!(matches!(err, StormError::Fetch { .. }));
}

#[test]
fn test_connection_refused_is_fetch_error() {
    // Grab a free port, then close it so nothing is listening
    let port = {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    };
    let url = format!("http://127.0.0.1:{port}/advisory.shtml");

    let err = tracker_for(&url).distance_from(41.0, -74.0).unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Fetch);
    assert!(err.to_string().starts_with("cannot get summary"));
    assert!(err.to_string().contains(&url));
}

#[test]
fn test_truncated_body_is_read_error() {
    let (url, server) = serve_raw(
        "HTTP/1.1 200 OK\r\nContent-Length: 1000\r\nConnection: close\r\n\r\nSUMMARY".to_string(),
    );

    let err = tracker_for(&url).distance_from(41.0, -74.0).unwrap_err();
    server.join().unwrap();

    assert_eq!(err.kind(), ErrorKind::Read);
    assert!(err.to_string().contains("cannot get body from"));
    assert!(err.to_string().starts_with("cannot get summary"));
}

/// Both free functions read the advisory URL from the environment, so they
/// share one test to keep the variable from leaking between threads.
#[test]
fn test_free_functions_follow_env_url() {
    let (url, server) = serve_once("HTTP/1.1 200 OK", FIXTURE);
    // SAFETY: no other test in this binary reads or writes STORMDIST_ variables
    unsafe {
        std::env::set_var("STORMDIST_ADVISORY__URL", &url);
    }
    let summary = get_summary();
    server.join().unwrap();

    let (url, server) = serve_once("HTTP/1.1 200 OK", FIXTURE);
    unsafe {
        std::env::set_var("STORMDIST_ADVISORY__URL", &url);
    }
    let miles = get_distance(27.5, -82.9);
    server.join().unwrap();

    // SAFETY: test cleanup
    unsafe {
        std::env::remove_var("STORMDIST_ADVISORY__URL");
    }

    let summary = summary.unwrap();
    assert!(summary.starts_with("SUMMARY OF 1100 AM EDT"));
    assert!(summary.contains("LOCATION...27.5N 82.9W"));
    assert!(!summary.contains("WATCHES AND WARNINGS"));
    assert_eq!(miles.unwrap(), 0.0);
}
