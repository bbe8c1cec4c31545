// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::state::Toggle;

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Everything that can go wrong between a click and a DOM update. None of
/// these are fatal: the displayed state is simply left as it was.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("no action URL configured while {0}")]
    MissingEndpoint(Toggle),

    #[error("a request for this button is already in flight")]
    Busy,

    #[error("request failed: {0}")]
    Request(String),

    #[error("rejected by server: status {status}")]
    Rejected { status: u16 },

    #[error("malformed reply: {0}")]
    MalformedReply(String),

    #[error("invalid configuration: {0}")]
    Config(String),
}

impl Error {
    /// Errors that happen before any request is sent. These leave the DOM
    /// completely untouched.
    pub fn is_inert(&self) -> bool {
        matches!(self, Error::MissingEndpoint(_) | Error::Busy)
    }
}

impl From<gloo_net::Error> for Error {
    fn from(err: gloo_net::Error) -> Self {
        Error::Request(err.to_string())
    }
}
