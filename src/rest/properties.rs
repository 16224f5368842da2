/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use strum_macros::{EnumString, IntoStaticStr};

/// Image sizes served from the static photo host.
///
/// See [Flickr URL docs](https://www.flickr.com/services/api/misc.urls.html)
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString)]
pub enum Size {
    Square,
    LargeSquare,
    Thumbnail,
    Small,
    Small320,
    Medium,
    Medium640,
    Medium800,
    Large,
    Large1600,
    Large2048,
    Original,
}

impl Size {
    /// Suffix appended to `{id}_{secret}` in the image file name
    pub fn suffix(self) -> Option<&'static str> {
        match self {
            Size::Square => Some("s"),
            Size::LargeSquare => Some("q"),
            Size::Thumbnail => Some("t"),
            Size::Small => Some("m"),
            Size::Small320 => Some("n"),
            Size::Medium => None,
            Size::Medium640 => Some("z"),
            Size::Medium800 => Some("c"),
            Size::Large => Some("b"),
            Size::Large1600 => Some("h"),
            Size::Large2048 => Some("k"),
            Size::Original => Some("o"),
        }
    }
}

/// Extra fields that list methods can return inline
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, IntoStaticStr)]
pub enum Extra {
    #[strum(serialize = "url_sq")]
    UrlSquare,
    #[strum(serialize = "url_t")]
    UrlThumbnail,
    #[strum(serialize = "url_s")]
    UrlSmall,
    #[strum(serialize = "url_m")]
    UrlMedium,
    #[strum(serialize = "url_z")]
    UrlMedium640,
    #[strum(serialize = "url_l")]
    UrlLarge,
    #[strum(serialize = "url_k")]
    UrlLarge2048,
    #[strum(serialize = "url_o")]
    UrlOriginal,
    #[strum(serialize = "date_upload")]
    DateUpload,
    #[strum(serialize = "owner_name")]
    OwnerName,
}

impl Extra {
    /// Joins extras into the comma separated form the API expects
    pub fn join(extras: &[Extra]) -> String {
        extras
            .iter()
            .map(|e| -> &'static str { (*e).into() })
            .collect::<Vec<_>>()
            .join(",")
    }
}
