/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use crate::rest::errors::FlickrError;
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use hmac::{Hmac, Mac};
use sha1::Sha1;
use url::Url;
use urlencoding::encode;

/// Credentials used for every request.
///
/// The API key alone is enough for reading public photos. When the API secret,
/// access token and token secret are all present the requests are signed with
/// OAuth 1.0a (HMAC-SHA1).
#[derive(Default, Clone)]
pub struct Creds {
    api_key: String,
    api_secret: Option<String>,
    access_token: Option<String>,
    token_secret: Option<String>,
}

impl Creds {
    /// Creates the credentials from the provided tokens
    pub fn from_tokens(
        api_key: &str,
        api_secret: Option<&str>,
        access_token: Option<&str>,
        token_secret: Option<&str>,
    ) -> Self {
        Self {
            api_key: api_key.into(),
            api_secret: api_secret.map(Into::into),
            access_token: access_token.map(Into::into),
            token_secret: token_secret.map(Into::into),
        }
    }

    /// Credentials for anonymous read only access
    pub fn from_api_key(api_key: &str) -> Self {
        Self::from_tokens(api_key, None, None, None)
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// True if an access token was provided and requests need signing
    pub fn is_authenticated(&self) -> bool {
        self.access_token.is_some()
    }

    /// Signs the url in place if an access token is present
    pub(crate) fn sign(&self, url: &mut Url) -> Result<(), FlickrError> {
        if !self.is_authenticated() {
            return Ok(());
        }
        let nonce = format!("{:016x}", rand::random::<u64>());
        let timestamp = chrono::Utc::now().timestamp();
        self.sign_with(url, &nonce, timestamp)
    }

    fn sign_with(&self, url: &mut Url, nonce: &str, timestamp: i64) -> Result<(), FlickrError> {
        let (Some(api_secret), Some(access_token), Some(token_secret)) = (
            self.api_secret.as_deref(),
            self.access_token.as_deref(),
            self.token_secret.as_deref(),
        ) else {
            return Err(FlickrError::Auth(
                "OAuth signing needs the API secret, access token and token secret".into(),
            ));
        };

        let timestamp = timestamp.to_string();
        url.query_pairs_mut().extend_pairs([
            ("oauth_consumer_key", self.api_key.as_str()),
            ("oauth_nonce", nonce),
            ("oauth_signature_method", "HMAC-SHA1"),
            ("oauth_timestamp", timestamp.as_str()),
            ("oauth_token", access_token),
            ("oauth_version", "1.0"),
        ]);

        // Parameters are sorted after encoding
        let mut pairs: Vec<(String, String)> = url
            .query_pairs()
            .map(|(k, v)| (encode(&k).into_owned(), encode(&v).into_owned()))
            .collect();
        pairs.sort();
        let normalized = pairs
            .iter()
            .map(|(k, v)| format!("{k}={v}"))
            .collect::<Vec<_>>()
            .join("&");

        let mut base_url = url.clone();
        base_url.set_query(None);
        base_url.set_fragment(None);
        let base_string = format!(
            "GET&{}&{}",
            encode(base_url.as_str()),
            encode(&normalized)
        );

        let signing_key = format!("{}&{}", encode(api_secret), encode(token_secret));
        let mut mac = Hmac::<Sha1>::new_from_slice(signing_key.as_bytes())
            .map_err(|e| FlickrError::Auth(e.to_string()))?;
        mac.update(base_string.as_bytes());
        let signature = STANDARD.encode(mac.finalize().into_bytes());

        url.query_pairs_mut()
            .append_pair("oauth_signature", &signature);
        Ok(())
    }
}

impl std::fmt::Debug for Creds {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Creds")
            .field("api_key", &"xxx")
            .field("api_secret", &self.api_secret.as_ref().map(|_| "xxx"))
            .field("access_token", &self.access_token.as_ref().map(|_| "xxx"))
            .field("token_secret", &self.token_secret.as_ref().map(|_| "xxx"))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_creds(token_secret: &str) -> Creds {
        Creds::from_tokens("key", Some("secret"), Some("token"), Some(token_secret))
    }

    fn rest_url() -> Url {
        Url::parse_with_params(
            "https://api.flickr.com/services/rest/",
            &[("method", "flickr.photos.getInfo"), ("photo_id", "1")],
        )
        .unwrap()
    }

    fn signature_of(url: &Url) -> String {
        url.query_pairs()
            .find(|(k, _)| k == "oauth_signature")
            .map(|(_, v)| v.into_owned())
            .unwrap()
    }

    #[test]
    fn key_only_leaves_url_untouched() {
        let creds = Creds::from_api_key("key");
        let mut url = rest_url();
        let before = url.clone();
        creds.sign(&mut url).unwrap();
        assert_eq!(url, before);
    }

    #[test]
    fn signing_is_deterministic() {
        let creds = full_creds("token-secret");
        let mut first = rest_url();
        let mut second = rest_url();
        creds.sign_with(&mut first, "abc", 1_700_000_000).unwrap();
        creds.sign_with(&mut second, "abc", 1_700_000_000).unwrap();
        assert_eq!(first, second);

        let keys: Vec<String> = first.query_pairs().map(|(k, _)| k.into_owned()).collect();
        for expected in [
            "method",
            "photo_id",
            "oauth_consumer_key",
            "oauth_nonce",
            "oauth_signature_method",
            "oauth_timestamp",
            "oauth_token",
            "oauth_version",
            "oauth_signature",
        ] {
            assert!(keys.iter().any(|k| k == expected), "missing {expected}");
        }
    }

    #[test]
    fn signature_depends_on_secret_and_params() {
        let mut a = rest_url();
        let mut b = rest_url();
        full_creds("one").sign_with(&mut a, "abc", 1).unwrap();
        full_creds("two").sign_with(&mut b, "abc", 1).unwrap();
        assert_ne!(signature_of(&a), signature_of(&b));

        let mut c = Url::parse_with_params(
            "https://api.flickr.com/services/rest/",
            &[("method", "flickr.photos.getInfo"), ("photo_id", "2")],
        )
        .unwrap();
        full_creds("one").sign_with(&mut c, "abc", 1).unwrap();
        assert_ne!(signature_of(&a), signature_of(&c));
    }

    #[test]
    fn incomplete_tokens_are_rejected() {
        let creds = Creds::from_tokens("key", None, Some("token"), None);
        let err = creds.sign(&mut rest_url()).unwrap_err();
        assert!(err.is_auth());
    }

    #[test]
    fn debug_redacts_secrets() {
        let printed = format!("{:?}", full_creds("token-secret"));
        assert!(!printed.contains("token-secret"));
        assert!(!printed.contains("\"key\""));
    }
}
