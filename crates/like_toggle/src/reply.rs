// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The server's answer to a like or unlike request.

use serde::Deserialize;

use crate::error::{Error, Result};

/// Raw HTTP reply as seen by a [`Transport`](crate::transport::Transport).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Reply {
    pub status: u16,
    pub body: String,
}

impl Reply {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Reply {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Extract the updated count. Non-2xx statuses are rejections regardless
    /// of what the body contains.
    pub fn like_count(&self) -> Result<u32> {
        if !self.is_success() {
            return Err(Error::Rejected {
                status: self.status,
            });
        }

        let body: LikeBody = serde_json::from_str(&self.body)
            .map_err(|err| Error::MalformedReply(err.to_string()))?;

        Ok(body.like_num)
    }
}

/// JSON body of a successful reply, e.g. `{"like_num": 3}`. Unknown fields
/// are ignored.
#[derive(Debug, Deserialize)]
struct LikeBody {
    like_num: u32,
}
