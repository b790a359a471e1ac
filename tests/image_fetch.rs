//! Image download and decoding tests.

use std::io::Cursor;

use pewnapi::{
    fetch_avatar, fetch_image, DynamicImage, ErrorKind, Image, ImageSize, PewnClient, User,
};
use wiremock::matchers::{method, path, query_param, query_param_is_missing};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn png_bytes(width: u32, height: u32) -> Vec<u8> {
    let mut buf = Cursor::new(Vec::new());
    DynamicImage::new_rgb8(width, height)
        .write_to(&mut buf, image::ImageFormat::Png)
        .unwrap();
    buf.into_inner()
}

#[tokio::test]
async fn test_fetch_scaled_image() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/image/projects/8568/files/title.png"))
        .and(query_param("width", "160"))
        .and(query_param("height", "90"))
        .and(query_param_is_missing("format"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("content-type", "image/png")
                .set_body_bytes(png_bytes(160, 90)),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = PewnClient::new(&mock_server.uri()).unwrap();
    let img = fetch_image(&client, 8568, "title.png", ImageSize::new(160, 90))
        .await
        .unwrap()
        .expect("decodable image");

    assert_eq!((img.width(), img.height()), (160, 90));
}

#[tokio::test]
async fn test_negative_dimension_requests_original_size() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/image/projects/8568/files/title.png"))
        .and(query_param_is_missing("width"))
        .and(query_param_is_missing("height"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(png_bytes(64, 48)))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = PewnClient::new(&mock_server.uri()).unwrap();
    let img = fetch_image(&client, 8568, "title.png", ImageSize::new(-1, 90))
        .await
        .unwrap()
        .expect("decodable image");

    assert_eq!(img.width(), 64);
}

#[tokio::test]
async fn test_undecodable_body_is_none() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/image/projects/8568/files/readme.txt"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not an image"))
        .mount(&mock_server)
        .await;

    let client = PewnClient::new(&mock_server.uri()).unwrap();
    let result = fetch_image(&client, 8568, "readme.txt", None).await.unwrap();

    assert!(result.is_none());
}

#[tokio::test]
async fn test_missing_image_is_request_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/image/projects/8568/files/gone.png"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&mock_server)
        .await;

    let client = PewnClient::new(&mock_server.uri()).unwrap();
    let err = fetch_image(&client, 8568, "gone.png", None).await.unwrap_err();

    assert!(err.is_not_found());
    assert_eq!(err.kind(), ErrorKind::Request);
}

#[tokio::test]
async fn test_file_name_is_percent_encoded() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/image/projects/1/files/my%20shot.png"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(png_bytes(2, 2)))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = PewnClient::new(&mock_server.uri()).unwrap();
    let img = fetch_image(&client, 1, "my shot.png", None).await.unwrap();

    assert!(img.is_some());
}

#[tokio::test]
async fn test_image_metadata_download() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/image/projects/8568/files/title.png"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(png_bytes(4, 3)))
        .mount(&mock_server)
        .await;

    let image: Image =
        serde_json::from_value(serde_json::json!({"id": 77, "fileName": "title.png"})).unwrap();
    let client = PewnClient::new(&mock_server.uri()).unwrap();
    let img = image.download(&client, 8568, None).await.unwrap();

    assert_eq!(img.map(|i| i.height()), Some(3));
}

#[tokio::test]
async fn test_user_avatar() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/download/users/damios/avatar/avatar.png"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(png_bytes(32, 32)))
        .expect(2)
        .mount(&mock_server)
        .await;

    let client = PewnClient::new(&mock_server.uri()).unwrap();

    let direct = fetch_avatar(&client, "damios", "avatar.png").await.unwrap();
    assert_eq!(direct.map(|i| i.width()), Some(32));

    let user: User = serde_json::from_value(serde_json::json!({
        "id": 1,
        "username": "damios",
        "profile": {"avatar": "avatar.png"}
    }))
    .unwrap();
    let via_user = user.avatar_image(&client).await.unwrap();
    assert!(via_user.is_some());
}
