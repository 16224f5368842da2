/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */

macro_rules! obj_from_method {
    ( $c:expr, $method:expr, $params:expr, $rt: ty, $r: ident) => {{
        $c.call::<$rt>($method, Some($params))
            .await?
            .$r
            .ok_or(FlickrError::ResponseMissing())
            .map(|mut v| {
                v.client = Some($c.clone());
                v
            })
    }};
}

macro_rules! stream_photos_from_method {
    ( $c:expr, $method:expr, $params:expr) => {{
        try_stream! {
            let params = $params;
            let page = $c.call::<PhotosResponse>($method, Some(&params))
                .await?
                .photos
                .ok_or(FlickrError::ResponseMissing())?;

            // Only the first page is read
            if page.pages.pages > 1 {
                log::debug!(
                    "{} returned page {} of {} ({} photos total)",
                    $method, page.pages.page, page.pages.pages, page.pages.total
                );
            }
            for mut photo in page.photos {
                photo.client = Some($c.clone());
                yield photo
            }
        }
    }};
}

pub(crate) use {obj_from_method, stream_photos_from_method};
