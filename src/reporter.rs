/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use crate::rest::{Client, Extra, FlickrError, Photo, PhotoInfo, User};
use async_stream::try_stream;
use futures::{Stream, StreamExt, pin_mut};
use std::io::Write;
use strum_macros::{Display, EnumString};

// Extras requested inline by the bulk strategy
const BULK_EXTRAS: &[Extra] = &[Extra::UrlMedium, Extra::UrlLarge2048];

/// How the photo urls are retrieved
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumString)]
pub enum Strategy {
    /// One list call with the urls requested as extras
    #[default]
    #[strum(serialize = "bulk")]
    BulkExtras,

    /// One list call then one info call per photo
    #[strum(serialize = "detail")]
    PerPhotoDetail,
}

/// Names the account whose photos are reported
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserIdentifier {
    Nsid(String),
    Username(String),
}

// NSIDs look like 12345678@N00
fn is_nsid(value: &str) -> bool {
    let is_digits = |s: &str| !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit());
    value
        .split_once("@N")
        .is_some_and(|(account, shard)| is_digits(account) && is_digits(shard))
}

impl From<&str> for UserIdentifier {
    // Anything that is not shaped like an NSID is taken as a username
    fn from(value: &str) -> Self {
        if is_nsid(value) {
            UserIdentifier::Nsid(value.into())
        } else {
            UserIdentifier::Username(value.into())
        }
    }
}

/// A single block of the report
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputLine {
    Pair { medium: String, large: String },
    Single(String),
}

impl OutputLine {
    /// Builds the line from the extras of a list entry.
    ///
    /// Missing extras are rendered as empty strings.
    pub fn from_extras(photo: &Photo) -> Self {
        OutputLine::Pair {
            medium: or_empty(photo.url_medium.clone(), &photo.id, "url_m"),
            large: or_empty(photo.url_large.clone(), &photo.id, "url_k"),
        }
    }

    /// Builds the line from the default display url of a photo
    pub fn from_info(info: &PhotoInfo) -> Self {
        OutputLine::Single(or_empty(info.url(), &info.id, "display url"))
    }
}

fn or_empty(value: Option<String>, photo_id: &str, field: &str) -> String {
    value.unwrap_or_else(|| {
        log::warn!("Photo {photo_id} has no {field}");
        String::new()
    })
}

impl std::fmt::Display for OutputLine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputLine::Pair { medium, large } => write!(f, "- m: {medium}\n  l: {large}"),
            OutputLine::Single(url) => write!(f, "- {url}"),
        }
    }
}

/// Settings for [`PhotoUrlReporter`]
#[derive(Debug, Clone)]
pub struct ReporterConfig {
    pub strategy: Strategy,

    /// Number of info requests in flight for [`Strategy::PerPhotoDetail`]
    pub concurrency: usize,
}

impl Default for ReporterConfig {
    fn default() -> Self {
        Self {
            strategy: Strategy::default(),
            concurrency: 1,
        }
    }
}

/// Lists a user's photos and reports their urls
#[derive(Debug, Clone)]
pub struct PhotoUrlReporter {
    client: Client,
    config: ReporterConfig,
}

impl PhotoUrlReporter {
    pub fn new(client: Client, config: ReporterConfig) -> Self {
        Self { client, config }
    }

    async fn user(&self, user: &UserIdentifier) -> Result<User, FlickrError> {
        match user {
            UserIdentifier::Nsid(nsid) => Ok(User::from_nsid(self.client.clone(), nsid)),
            UserIdentifier::Username(name) => {
                let user = User::from_username(self.client.clone(), name).await?;
                log::debug!("Resolved {name} to {}", user.nsid);
                Ok(user)
            }
        }
    }

    /// Produces one line per photo, in the order returned by the service.
    ///
    /// The stream is single pass and stops at the first error.
    pub fn lines(
        &self,
        user: &UserIdentifier,
    ) -> impl Stream<Item = Result<OutputLine, FlickrError>> {
        try_stream! {
            let user = self.user(user).await?;
            match self.config.strategy {
                Strategy::BulkExtras => {
                    let photos = user.public_photos(BULK_EXTRAS)?;
                    pin_mut!(photos);
                    while let Some(photo) = photos.next().await {
                        yield OutputLine::from_extras(&photo?);
                    }
                }
                Strategy::PerPhotoDetail => {
                    // buffered() keeps the listing order whatever the completion order
                    let infos = user
                        .recent_photos(&[])?
                        .map(|photo| async move {
                            let photo = photo?;
                            photo.info().await
                        })
                        .buffered(self.config.concurrency.max(1));
                    pin_mut!(infos);
                    while let Some(info) = infos.next().await {
                        yield OutputLine::from_info(&info?);
                    }
                }
            }
        }
    }

    /// Writes every line to `out` as soon as it is produced.
    ///
    /// Returns the number of photos reported. Lines written before a failure stay written.
    pub async fn run<W: Write>(
        &self,
        user: &UserIdentifier,
        out: &mut W,
    ) -> Result<usize, FlickrError> {
        log::info!(
            "Reporting photos of {user:?} using the {} strategy",
            self.config.strategy
        );
        let lines = self.lines(user);
        pin_mut!(lines);

        let mut count = 0;
        while let Some(line) = lines.next().await {
            writeln!(out, "{}", line?)?;
            out.flush()?;
            count += 1;
        }
        log::info!("Reported {count} photos");
        Ok(count)
    }
}
