/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */

pub mod api;
pub mod client;
pub mod creds;
pub mod errors;
mod macros;
mod parsers;
pub mod people;
pub mod photo;
pub mod properties;

pub use api::*;
pub use client::*;
pub use creds::*;
pub use errors::*;
pub use people::*;
pub use photo::*;
pub use properties::*;
