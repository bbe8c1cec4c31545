// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Sending the state-changing request.

use std::future::Future;

use gloo_net::http::Request;

use crate::csrf::CsrfToken;
use crate::endpoint::ActionEndpoint;
use crate::error::Result;
use crate::reply::Reply;

/// Something that can POST an empty body to an endpoint. Any HTTP status is a
/// successful `Reply`, only failures to get a response at all are errors.
pub trait Transport {
    fn post(&self, url: &ActionEndpoint, csrf: &CsrfToken) -> impl Future<Output = Result<Reply>>;
}

/// Browser `fetch` transport.
#[derive(Clone, Debug)]
pub struct Fetch {
    header: String,
}

impl Fetch {
    /// Create a transport that sends the CSRF token in the `header` header.
    pub fn new(header: impl Into<String>) -> Self {
        Fetch {
            header: header.into(),
        }
    }
}

impl Default for Fetch {
    fn default() -> Self {
        Fetch::new("X-CSRFToken")
    }
}

impl Transport for Fetch {
    async fn post(&self, url: &ActionEndpoint, csrf: &CsrfToken) -> Result<Reply> {
        let response = Request::post(url.as_str())
            .header(&self.header, csrf.header_value())
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        Ok(Reply { status, body })
    }
}
