// Copyright (c) 2025 Zensical and contributors

// SPDX-License-Identifier: MIT
// Third-party contributions licensed under DCO

// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"), to
// deal in the Software without restriction, including without limitation the
// rights to use, copy, modify, merge, publish, distribute, sublicense, and/or
// sell copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:

// The above copyright notice and this permission notice shall be included in
// all copies or substantial portions of the Software.

// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NON-INFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING
// FROM, OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS
// IN THE SOFTWARE.

// ----------------------------------------------------------------------------

//! URL construction, resolution and signed links.
//!
//! This crate provides a mutable [`Url`] value, which accepts URLs in all the
//! shapes a web application deals with, i.e., full external URLs, paths that
//! are relative to the configured base URL, absolute project paths, as well as
//! bare query strings and fragments. URLs are always created from a [`Context`],
//! which holds the deployment's base URL, the default secret used for signing,
//! an optional reverse routing strategy and the current request, if any.
//!
//! Signed URLs carry a `hash` query parameter, which is an HMAC over the
//! canonical, absolute form of the URL, so links handed out to clients can't
//! be tampered with without detection.
//!
//! # Examples
//!
//! ```
//! # use std::error::Error;
//! # fn main() -> Result<(), Box<dyn Error>> {
//! use waymark::{Context, Secret};
//!
//! // Create context
//! let context = Context::builder()
//!     .base_url("http://example.com/app/")
//!     .secret("s3cr3t")
//!     .build();
//!
//! // Create URL and add query parameters
//! let mut url = context.url("page?x=1");
//! url.add_vars([("y", "2")], true);
//! assert_eq!(url.absolute(), "http://example.com/app/page?x=1&y=2");
//!
//! // Create signed URL and validate it
//! let signed = url.absolute_with("&", Some(Secret::Default))?;
//! assert!(context.url(&signed).is_valid(Secret::Default)?);
//! # Ok(())
//! # }
//! ```

#![allow(clippy::doc_markdown)]
#![allow(clippy::missing_errors_doc)]

pub mod context;
mod error;
pub mod redirect;
pub mod request;
pub mod route;
pub mod url;

pub use context::Context;
pub use error::{Error, Result};
pub use redirect::{Redirect, Status};
pub use request::{Environment, Request};
pub use route::ReverseRoute;
pub use url::{Query, Secret, Url, Vars};
