/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use crate::rest::errors::FlickrError;
use crate::rest::parsers::{
    from_content, from_empty_str_to_none, from_int_bool, from_num_or_str, from_unix_timestamp,
};
use crate::rest::{Client, Size};
use chrono::{DateTime, Utc};
use serde::Deserialize;

// Host serving the image files
pub const STATIC_ORIGIN: &str = "https://live.staticflickr.com";

/// Builds the url of an image file on the static host
pub fn static_url(server: &str, id: &str, secret: &str, size: Size, format: &str) -> String {
    match size.suffix() {
        Some(suffix) => format!("{STATIC_ORIGIN}/{server}/{id}_{secret}_{suffix}.{format}"),
        None => format!("{STATIC_ORIGIN}/{server}/{id}_{secret}.{format}"),
    }
}

/// Holds a single entry of a photo list response.
///
/// The `url_*` fields are only filled when the matching [`crate::rest::Extra`]
/// was requested and the service generated that size.
#[derive(Deserialize, Debug, Clone)]
pub struct Photo {
    #[serde(skip)]
    pub(crate) client: Option<Client>,

    pub id: String,

    pub secret: String,

    #[serde(default)]
    pub server: String,

    #[serde(default)]
    pub farm: u64,

    #[serde(default)]
    pub owner: String,

    #[serde(default)]
    pub title: String,

    #[serde(default, rename = "ispublic", deserialize_with = "from_int_bool")]
    pub is_public: bool,

    #[serde(default, rename = "isfriend", deserialize_with = "from_int_bool")]
    pub is_friend: bool,

    #[serde(default, rename = "isfamily", deserialize_with = "from_int_bool")]
    pub is_family: bool,

    #[serde(default, rename = "url_m")]
    pub url_medium: Option<String>,

    #[serde(default, rename = "url_k")]
    pub url_large: Option<String>,
}

impl Photo {
    /// Url of this photo at the given size, if it can be built from the list fields
    pub fn url(&self, size: Size) -> Option<String> {
        if size == Size::Original || self.server.is_empty() || self.secret.is_empty() {
            return None;
        }
        Some(static_url(&self.server, &self.id, &self.secret, size, "jpg"))
    }

    /// Retrieves the detailed information for this photo
    pub async fn info(&self) -> Result<PhotoInfo, FlickrError> {
        let client = self.client.clone().ok_or(FlickrError::ClientNotFound())?;
        PhotoInfo::from_id(client, &self.id, Some(&self.secret)).await
    }
}

/// Holds information returned from `flickr.photos.getInfo`.
///
/// See [Flickr API Docs](https://www.flickr.com/services/api/flickr.photos.getInfo.html) for more
/// details on the individual fields.
#[derive(Deserialize, Debug, Clone)]
pub struct PhotoInfo {
    pub id: String,

    #[serde(default)]
    pub secret: String,

    #[serde(default)]
    pub server: String,

    #[serde(default)]
    pub farm: u64,

    #[serde(default, rename = "originalsecret", deserialize_with = "from_empty_str_to_none")]
    pub original_secret: Option<String>,

    #[serde(default, rename = "originalformat", deserialize_with = "from_empty_str_to_none")]
    pub original_format: Option<String>,

    #[serde(default, deserialize_with = "from_content")]
    pub title: String,

    #[serde(default, deserialize_with = "from_content")]
    pub description: String,

    #[serde(default)]
    pub owner: Option<Owner>,

    #[serde(default, rename = "dateuploaded", deserialize_with = "from_unix_timestamp")]
    pub date_uploaded: Option<DateTime<Utc>>,

    #[serde(default, deserialize_with = "from_num_or_str")]
    pub views: u64,

    #[serde(default)]
    urls: PhotoUrls,
}

impl PhotoInfo {
    const GET_INFO: &'static str = "flickr.photos.getInfo";

    /// Returns information for the specified photo id.
    ///
    /// The secret is checked by the service when given which skips the permission check.
    pub async fn from_id(
        client: Client,
        id: &str,
        secret: Option<&str>,
    ) -> Result<Self, FlickrError> {
        let mut params = vec![("photo_id", id)];
        if let Some(secret) = secret {
            params.push(("secret", secret));
        }
        client
            .call::<PhotoInfoResponse>(Self::GET_INFO, Some(&params))
            .await?
            .photo
            .ok_or(FlickrError::ResponseMissing())
    }

    /// Display url of the photo at the default size
    pub fn url(&self) -> Option<String> {
        self.url_for(Size::Medium).ok()
    }

    /// Url for the photo at the requested size
    pub fn url_for(&self, size: Size) -> Result<String, FlickrError> {
        if self.server.is_empty() {
            return Err(FlickrError::MissingField("server".into()));
        }
        if size == Size::Original {
            let secret = self
                .original_secret
                .as_deref()
                .ok_or_else(|| FlickrError::MissingField("originalsecret".into()))?;
            let format = self
                .original_format
                .as_deref()
                .ok_or_else(|| FlickrError::MissingField("originalformat".into()))?;
            return Ok(static_url(&self.server, &self.id, secret, size, format));
        }
        if self.secret.is_empty() {
            return Err(FlickrError::MissingField("secret".into()));
        }
        Ok(static_url(&self.server, &self.id, &self.secret, size, "jpg"))
    }

    /// Page on flickr.com showing this photo
    pub fn photo_page_url(&self) -> Option<&str> {
        self.urls
            .url
            .iter()
            .find(|u| u.kind == "photopage")
            .map(|u| u.content.as_str())
    }
}

/// Owner section of a photo's information
#[derive(Deserialize, Debug, Clone)]
pub struct Owner {
    pub nsid: String,

    #[serde(default)]
    pub username: String,

    #[serde(default)]
    pub realname: String,
}

/// Paging information returned with every photo list
#[derive(Deserialize, Debug, Clone, Default)]
pub struct Pages {
    #[serde(default, deserialize_with = "from_num_or_str")]
    pub page: u64,

    #[serde(default, deserialize_with = "from_num_or_str")]
    pub pages: u64,

    #[serde(default, deserialize_with = "from_num_or_str")]
    pub perpage: u64,

    #[serde(default, deserialize_with = "from_num_or_str")]
    pub total: u64,
}

#[derive(Deserialize, Debug, Clone, Default)]
struct PhotoUrls {
    #[serde(default)]
    url: Vec<PhotoUrl>,
}

#[derive(Deserialize, Debug, Clone)]
struct PhotoUrl {
    #[serde(rename = "type")]
    kind: String,

    #[serde(rename = "_content")]
    content: String,
}

// One page of a photo list
#[derive(Deserialize, Debug)]
pub(crate) struct PhotoPage {
    #[serde(flatten)]
    pub(crate) pages: Pages,

    #[serde(default, rename = "photo")]
    pub(crate) photos: Vec<Photo>,
}

// Expected response for any of the photo list methods
#[derive(Deserialize, Debug)]
pub(crate) struct PhotosResponse {
    pub(crate) photos: Option<PhotoPage>,
}

// Expected response for a photo info request
#[derive(Deserialize, Debug)]
struct PhotoInfoResponse {
    photo: Option<PhotoInfo>,
}
