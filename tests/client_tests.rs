/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
mod helpers;

#[cfg(test)]
mod test {
    use crate::helpers::{info_body, mock_client, mock_client_with, photos_body};
    use flickr_photo_urls::rest::{Creds, Extra, FlickrError, PhotoInfo, User};
    use futures::{StreamExt, pin_mut};
    use httpmock::prelude::*;
    use serde_json::json;

    #[tokio::test]
    async fn too_many_requests_reports_retry_after() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.query_param("method", "flickr.photos.getInfo");
                then.status(429).header("Retry-After", "30");
            })
            .await;

        let err = PhotoInfo::from_id(mock_client(&server), "1", None)
            .await
            .unwrap_err();
        assert!(matches!(err, FlickrError::ApiResponseTooManyRequests(30)));
    }

    #[tokio::test]
    async fn server_error_without_envelope() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.query_param("method", "flickr.photos.getInfo");
                then.status(503).body("<html>down</html>");
            })
            .await;

        let err = PhotoInfo::from_id(mock_client(&server), "1", None)
            .await
            .unwrap_err();
        match err {
            FlickrError::HttpStatus(status) => assert_eq!(status.as_u16(), 503),
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[tokio::test]
    async fn malformed_payload() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.query_param("method", "flickr.photos.getInfo");
                then.status(200)
                    .json_body(json!({"photo": "not an object", "stat": "ok"}));
            })
            .await;

        let err = PhotoInfo::from_id(mock_client(&server), "1", None)
            .await
            .unwrap_err();
        assert!(matches!(err, FlickrError::ApiResponseMalformed(_)));
    }

    #[tokio::test]
    async fn missing_payload() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.query_param("method", "flickr.people.getPublicPhotos");
                then.status(200).json_body(json!({"stat": "ok"}));
            })
            .await;

        let user = User::from_nsid(mock_client(&server), "158890375@N08");
        let photos = user.public_photos(&[Extra::UrlMedium]).unwrap();
        pin_mut!(photos);
        let first = photos.next().await.unwrap();
        assert!(matches!(first, Err(FlickrError::ResponseMissing())));
    }

    #[tokio::test]
    async fn photo_info_through_list_entry() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.query_param("method", "flickr.people.getPublicPhotos");
                then.status(200).json_body(photos_body(json!([
                    {"id": "7", "secret": "s7", "server": "65535", "farm": 66,
                     "title": "seven", "ispublic": 1, "isfriend": 0, "isfamily": 0},
                ])));
            })
            .await;
        let info = server
            .mock_async(|when, then| {
                when.query_param("method", "flickr.photos.getInfo")
                    .query_param("photo_id", "7")
                    .query_param("secret", "s7");
                then.status(200).json_body(info_body("7", "s7", "65535"));
            })
            .await;

        let user = User::from_nsid(mock_client(&server), "158890375@N08");
        let photos = user.public_photos(&[]).unwrap();
        pin_mut!(photos);
        let photo = photos.next().await.unwrap().unwrap();
        assert_eq!(photo.title, "seven");
        assert!(photo.is_public);
        assert!(photos.next().await.is_none());

        let details = photo.info().await.unwrap();
        assert_eq!(details.title, "photo 7");
        assert_eq!(details.date_uploaded.unwrap().timestamp(), 1_600_000_000);
        assert_eq!(
            details.url().unwrap(),
            "https://live.staticflickr.com/65535/7_s7.jpg"
        );
        info.assert_async().await;
    }

    #[tokio::test]
    async fn unknown_username() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.query_param("method", "flickr.people.findByUsername");
                then.status(200)
                    .json_body(json!({"stat": "fail", "code": 1, "message": "User not found"}));
            })
            .await;

        let err = User::from_username(mock_client(&server), "nobody")
            .await
            .unwrap_err();
        assert!(matches!(err, FlickrError::ApiResponse(1, _)));
    }

    #[tokio::test]
    async fn signed_requests_carry_oauth_params() {
        let server = MockServer::start_async().await;
        let signed = server
            .mock_async(|when, then| {
                when.query_param("method", "flickr.photos.getInfo")
                    .query_param("oauth_consumer_key", "test-key")
                    .query_param("oauth_token", "token")
                    .query_param("oauth_signature_method", "HMAC-SHA1")
                    .query_param_exists("oauth_nonce")
                    .query_param_exists("oauth_signature");
                then.status(200).json_body(info_body("1", "a", "65535"));
            })
            .await;

        let creds = Creds::from_tokens("test-key", Some("secret"), Some("token"), Some("ts"));
        let info = PhotoInfo::from_id(mock_client_with(&server, creds), "1", Some("a"))
            .await
            .unwrap();
        assert_eq!(info.id, "1");
        signed.assert_async().await;
    }
}
