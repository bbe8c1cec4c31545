// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Anti-forgery token echoed back to the server on every request.

use wasm_bindgen::JsCast;
use web_sys::HtmlDocument;

/// Value of the CSRF cookie. An absent cookie is represented by an empty
/// token, which the server is expected to reject.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CsrfToken(String);

impl CsrfToken {
    pub fn new(token: impl Into<String>) -> Self {
        CsrfToken(token.into())
    }

    /// Find the cookie `name` in a `document.cookie` style string.
    pub fn from_cookies(cookies: &str, name: &str) -> Option<Self> {
        cookies
            .split(';')
            .map(str::trim)
            .find_map(|cookie| cookie.strip_prefix(name)?.strip_prefix('='))
            .map(CsrfToken::new)
    }

    /// Read the cookie `name` from the current document.
    pub fn from_document(name: &str) -> Option<Self> {
        let cookies = web_sys::window()?
            .document()?
            .dyn_into::<HtmlDocument>()
            .ok()?
            .cookie()
            .ok()?;

        Self::from_cookies(&cookies, name)
    }

    /// Value to send in the CSRF header.
    pub fn header_value(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
