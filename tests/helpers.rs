/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use flickr_photo_urls::rest::{Client, Creds};
use httpmock::MockServer;
use serde_json::{Value, json};

#[allow(dead_code)]
pub(crate) fn get_read_only_auth_tokens() -> anyhow::Result<Creds> {
    let api_key = std::env::var("FLICKR_API_KEY")?;
    Ok(Creds::from_api_key(&api_key))
}

#[allow(dead_code)]
pub(crate) fn mock_client(server: &MockServer) -> Client {
    mock_client_with(server, Creds::from_api_key("test-key"))
}

#[allow(dead_code)]
pub(crate) fn mock_client_with(server: &MockServer, creds: Creds) -> Client {
    Client::with_origin(creds, &server.base_url()).unwrap()
}

// A single page photo list response
#[allow(dead_code)]
pub(crate) fn photos_body(photos: Value) -> Value {
    let total = photos.as_array().map_or(0, |p| p.len());
    json!({
        "photos": {
            "page": 1,
            "pages": 1,
            "perpage": 100,
            "total": total,
            "photo": photos,
        },
        "stat": "ok",
    })
}

#[allow(dead_code)]
pub(crate) fn info_body(id: &str, secret: &str, server: &str) -> Value {
    json!({
        "photo": {
            "id": id,
            "secret": secret,
            "server": server,
            "farm": 66,
            "dateuploaded": "1600000000",
            "title": {"_content": format!("photo {id}")},
            "owner": {"nsid": "158890375@N08", "username": "someone"},
        },
        "stat": "ok",
    })
}

#[allow(dead_code)]
pub(crate) fn fail_body(code: u32, message: &str) -> Value {
    json!({"stat": "fail", "code": code, "message": message})
}
