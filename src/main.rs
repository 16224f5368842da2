/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */

use anyhow::Result;
use dotenvy::dotenv;
use flickr_photo_urls::rest::Client;
use flickr_photo_urls::{Config, PhotoUrlReporter};

// Configuration comes from the environment (or a .env file); see the config module.
#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let config = Config::from_env()?;
    log::debug!("Using {:?}", config);

    let reporter = PhotoUrlReporter::new(Client::new(config.creds), config.reporter);
    let mut out = std::io::stdout().lock();
    reporter.run(&config.user, &mut out).await?;
    Ok(())
}
