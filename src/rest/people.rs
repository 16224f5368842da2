/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use crate::rest::errors::FlickrError;
use crate::rest::macros::{obj_from_method, stream_photos_from_method};
use crate::rest::parsers::from_content;
use crate::rest::photo::PhotosResponse;
use crate::rest::{Client, Extra, Photo};
use async_stream::try_stream;
use futures::Stream;
use serde::Deserialize;

/// The account whose photos are listed.
///
/// See [Flickr API Docs](https://www.flickr.com/services/api/flickr.people.findByUsername.html)
#[derive(Deserialize, Debug, Clone)]
pub struct User {
    #[serde(skip)]
    pub(crate) client: Option<Client>,

    pub nsid: String,

    #[serde(default, deserialize_with = "from_content")]
    pub username: String,
}

impl User {
    /// Creates the user for a known NSID without contacting the API
    pub fn from_nsid(client: Client, nsid: &str) -> Self {
        Self {
            client: Some(client),
            nsid: nsid.into(),
            username: String::new(),
        }
    }

    /// Looks up the user by username
    pub async fn from_username(client: Client, username: &str) -> Result<Self, FlickrError> {
        let params = vec![("username", username)];
        obj_from_method!(
            client,
            "flickr.people.findByUsername",
            &params,
            UserResponse,
            user
        )
    }

    fn client(&self) -> Result<Client, FlickrError> {
        self.client.clone().ok_or(FlickrError::ClientNotFound())
    }

    /// Lists the public photos of this user with the given extras inline.
    ///
    /// Nothing is requested until the stream is polled.
    pub fn public_photos(
        &self,
        extras: &[Extra],
    ) -> Result<impl Stream<Item = Result<Photo, FlickrError>> + use<>, FlickrError> {
        let client = self.client()?;
        let nsid = self.nsid.clone();
        let extras = Extra::join(extras);
        Ok(stream_photos_from_method!(
            client,
            "flickr.people.getPublicPhotos",
            vec![("user_id", nsid.as_str()), ("extras", extras.as_str())]
        ))
    }

    /// Lists the photos of this user, most recently posted first
    pub fn recent_photos(
        &self,
        extras: &[Extra],
    ) -> Result<impl Stream<Item = Result<Photo, FlickrError>> + use<>, FlickrError> {
        let client = self.client()?;
        let nsid = self.nsid.clone();
        let extras = Extra::join(extras);
        Ok(stream_photos_from_method!(
            client,
            "flickr.photos.search",
            vec![
                ("user_id", nsid.as_str()),
                ("sort", "date-posted-desc"),
                ("extras", extras.as_str()),
            ]
        ))
    }
}

// Expected response from a findByUsername request
#[derive(Deserialize, Debug)]
struct UserResponse {
    user: Option<User>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn find_by_username_payload() {
        let resp: UserResponse = serde_json::from_str(
            r#"{"user": {"id": "158890375@N08", "nsid": "158890375@N08",
                "username": {"_content": "someone"}}, "stat": "ok"}"#,
        )
        .unwrap();
        let user = resp.user.unwrap();
        assert_eq!(user.nsid, "158890375@N08");
        assert_eq!(user.username, "someone");
        assert!(user.client.is_none());
    }
}
