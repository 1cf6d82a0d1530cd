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

//! Settings.

use serde::Deserialize;

use super::BaseUrl;

// ----------------------------------------------------------------------------
// Structs
// ----------------------------------------------------------------------------

/// Settings.
///
/// Settings are the serializable part of a [`Context`][], which can be loaded
/// from any configuration format supported by [`serde`]. The base URL can be
/// given as a string or as individual components.
///
/// [`Context`]: crate::Context
///
/// # Examples
///
/// ```
/// # use std::error::Error;
/// # fn main() -> Result<(), Box<dyn Error>> {
/// use waymark::context::Settings;
/// use waymark::Context;
///
/// // Load settings from JSON
/// let settings: Settings = serde_json::from_str(r#"{
///     "base_url": "https://example.com/app/",
///     "secret": "s3cr3t"
/// }"#)?;
///
/// // Create context from settings
/// let context = Context::from_settings(settings);
/// assert_eq!(context.base_url().host, "example.com");
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Base URL.
    pub base_url: Option<BaseUrlSetting>,
    /// Default secret.
    pub secret: Option<String>,
    /// Whether redirects are prevented.
    pub prevent_redirect: bool,
}

// ----------------------------------------------------------------------------
// Enums
// ----------------------------------------------------------------------------

/// Base URL setting.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum BaseUrlSetting {
    /// Base URL as string.
    Url(String),
    /// Base URL as components.
    Components(BaseUrl),
}

// ----------------------------------------------------------------------------
// Trait implementations
// ----------------------------------------------------------------------------

impl From<BaseUrlSetting> for BaseUrl {
    /// Creates a base URL from a setting.
    fn from(value: BaseUrlSetting) -> Self {
        match value {
            BaseUrlSetting::Url(url) => BaseUrl::parse(url),
            BaseUrlSetting::Components(base) => base,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_as_string() {
        let settings: Settings =
            serde_json::from_str(r#"{ "base_url": "http://example.com/" }"#)
                .expect("valid json");
        let base = settings.base_url.map(BaseUrl::from).unwrap_or_default();
        assert_eq!(base.host, "example.com");
        assert_eq!(base.path, "/");
    }

    #[test]
    fn test_base_url_as_components() {
        let settings: Settings = serde_json::from_str(
            r#"{ "base_url": { "scheme": "https", "host": "example.com" } }"#,
        )
        .expect("valid json");
        let base = settings.base_url.map(BaseUrl::from).unwrap_or_default();
        assert_eq!(base.scheme, "https");
        assert_eq!(base.path, "");
    }

    #[test]
    fn test_defaults() {
        let settings: Settings = serde_json::from_str("{}").expect("valid json");
        assert_eq!(settings, Settings::default());
        assert!(!settings.prevent_redirect);
    }
}
