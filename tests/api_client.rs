// SPDX-License-Identifier: MPL-2.0
//! `ApiClient` against a one-shot local HTTP server.

use image_rs::{ImageBuffer, ImageFormat, Rgba};
use panotour::api::ApiClient;
use panotour::application::port::PlaceProvider;
use panotour::domain::{EventStatus, Language, PlaceId};
use panotour::error::FetchError;
use std::io::Cursor;
use std::time::Duration;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

/// Accepts a single connection, answers it with `status`, `content_type`
/// and `body`, and returns the request head it received.
async fn serve_once(
    status: &'static str,
    content_type: &'static str,
    body: Vec<u8>,
) -> (String, JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let base = format!("http://{}", listener.local_addr().expect("addr"));

    let handle = tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.expect("accept");

        let mut request = Vec::new();
        let mut buf = [0_u8; 1024];
        while !request.windows(4).any(|w| w == b"\r\n\r\n") {
            let read = socket.read(&mut buf).await.expect("read request");
            if read == 0 {
                break;
            }
            request.extend_from_slice(&buf[..read]);
        }

        let head = format!(
            "HTTP/1.1 {status}\r\nContent-Type: {content_type}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
            body.len()
        );
        socket.write_all(head.as_bytes()).await.expect("write head");
        socket.write_all(&body).await.expect("write body");
        socket.shutdown().await.ok();

        String::from_utf8_lossy(&request).into_owned()
    });

    (base, handle)
}

fn client(base: &str) -> ApiClient {
    ApiClient::new(base, Duration::from_secs(5)).expect("client builds")
}

#[tokio::test]
async fn fetches_place_record() {
    let body = br#"{"data":{"id":42,"name":"Mihrab","image":"mihrab.jpg"}}"#.to_vec();
    let (base, server) = serve_once("200 OK", "application/json", body).await;

    let api = client(&base);
    let place = api.place(&PlaceId::from(42)).await.expect("place");
    assert_eq!(place.name.get(Language::French), "Mihrab");
    assert_eq!(
        place.image_url(api.base_url()),
        format!("{base}/storage/images/mihrab.jpg")
    );

    let request = server.await.expect("server task");
    assert!(request.starts_with("GET /lieus/42 HTTP/1.1"), "{request}");
    assert!(
        request.to_ascii_lowercase().contains("accept: application/json"),
        "{request}"
    );
}

#[tokio::test]
async fn not_found_status_is_reported() {
    let (base, server) =
        serve_once("404 Not Found", "application/json", br#"{"message":"nope"}"#.to_vec()).await;

    let err = client(&base)
        .fetch_place(&PlaceId::from(9))
        .await
        .unwrap_err();
    assert_eq!(err, FetchError::Status(404));
    server.await.expect("server task");
}

#[tokio::test]
async fn empty_envelope_is_not_found() {
    let (base, server) = serve_once("200 OK", "application/json", br#"{"data":null}"#.to_vec()).await;

    let err = client(&base).place(&PlaceId::from(9)).await.unwrap_err();
    assert_eq!(err, FetchError::NotFound);
    server.await.expect("server task");
}

#[tokio::test]
async fn html_body_is_malformed() {
    let (base, server) = serve_once("200 OK", "text/html", b"<html></html>".to_vec()).await;

    let err = client(&base).place(&PlaceId::from(1)).await.unwrap_err();
    assert!(matches!(err, FetchError::Malformed(_)), "got {err:?}");
    server.await.expect("server task");
}

#[tokio::test]
async fn fetches_events_list() {
    let body = br#"{"data":[
        {"id":1,"title":"Gamou","date":"2026-09-04","time":"20:00","location":"Esplanade","type":"religieux","status":"upcoming"},
        {"id":"2","title":"Conference","date":"2025-01-10","status":"past"}
    ]}"#
    .to_vec();
    let (base, server) = serve_once("200 OK", "application/json", body).await;

    let events = client(&base).events().await.expect("events");
    assert_eq!(events.len(), 2);
    assert_eq!(events[0].title, "Gamou");
    assert_eq!(events[0].status, EventStatus::Upcoming);
    assert_eq!(events[1].id, "2");

    let request = server.await.expect("server task");
    assert!(request.starts_with("GET /evenements HTTP/1.1"), "{request}");
}

#[tokio::test]
async fn downloads_and_decodes_panorama() {
    let image: ImageBuffer<Rgba<u8>, Vec<u8>> =
        ImageBuffer::from_pixel(16, 8, Rgba([0, 128, 64, 255]));
    let mut png = Vec::new();
    image
        .write_to(&mut Cursor::new(&mut png), ImageFormat::Png)
        .expect("encode png");
    let (base, server) = serve_once("200 OK", "image/png", png).await;

    let url = format!("{base}/storage/images/cour.png");
    let panorama = client(&base).panorama(&url).await.expect("panorama");
    assert_eq!((panorama.width(), panorama.height()), (16, 8));
    assert_eq!(panorama.pixel(0, 0), [0, 128, 64, 255]);
    server.await.expect("server task");
}

#[tokio::test]
async fn undecodable_panorama_is_image_error() {
    let (base, server) = serve_once("200 OK", "image/jpeg", b"not a jpeg".to_vec()).await;

    let url = format!("{base}/storage/images/broken.jpg");
    let err = client(&base).fetch_image(&url).await.unwrap_err();
    assert!(matches!(err, FetchError::Image(_)), "got {err:?}");
    server.await.expect("server task");
}
