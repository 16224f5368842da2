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
    use crate::helpers;
    use dotenvy::dotenv;
    use flickr_photo_urls::rest::Client;
    use flickr_photo_urls::{PhotoUrlReporter, ReporterConfig, Strategy, UserIdentifier};

    // Needs FLICKR_API_KEY and network access
    #[ignore]
    #[tokio::test]
    async fn bulk_report_for_public_account() {
        dotenv().ok();
        let creds = helpers::get_read_only_auth_tokens().unwrap();
        let reporter = PhotoUrlReporter::new(
            Client::new(creds),
            ReporterConfig {
                strategy: Strategy::BulkExtras,
                concurrency: 1,
            },
        );
        let mut out = Vec::new();
        let count = reporter
            .run(&UserIdentifier::from("158890375@N08"), &mut out)
            .await
            .unwrap();
        let out = String::from_utf8(out).unwrap();
        println!("{out}");
        assert_eq!(out.matches("- m: ").count(), count);
    }
}
