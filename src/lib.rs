/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */

//! # Flickr Photo URLs
//!
//! Lists the public photos of a Flickr user and reports their image URLs.
//!
//! For further details on the Rest API refer to the [Flickr API Docs](https://www.flickr.com/services/api/)
//!
//! ## Features
//!
//! - Public photo listing with the URLs requested inline as extras (one request)
//! - Recent photo listing with one `flickr.photos.getInfo` per photo, optionally fetched
//!   several at a time while keeping the listing order
//! - Username to NSID lookup
//! - Lower level interface for handling the raw communication ([`rest::Client::call`])
//!
//! *The API key is enough for public photos. If an API secret, access token and token
//! secret are provided the requests are signed with OAuth1. Getting the Access
//! Token/Secret is left up to the consumer of this library*
//!
//! ## Usage
//!
//! ```rust,no_run
//! use flickr_photo_urls::rest::{Client, Creds};
//! use flickr_photo_urls::{PhotoUrlReporter, ReporterConfig, Strategy, UserIdentifier};
//!
//! async fn report(api_key: &str) -> anyhow::Result<()> {
//!     let client = Client::new(Creds::from_api_key(api_key));
//!     let reporter = PhotoUrlReporter::new(
//!         client,
//!         ReporterConfig {
//!             strategy: Strategy::BulkExtras,
//!             concurrency: 1,
//!         },
//!     );
//!
//!     let user = UserIdentifier::from("158890375@N08");
//!     let mut out = std::io::stdout();
//!     let count = reporter.run(&user, &mut out).await?;
//!     eprintln!("{count} photos");
//!     Ok(())
//! }
//! ```
//!
pub mod config;
pub mod reporter;
pub mod rest;

pub use config::Config;
pub use reporter::*;
