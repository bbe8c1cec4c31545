// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Server-supplied action URLs.

use std::fmt;

use crate::state::Toggle;

/// A URL that performs one transition of the toggle when POSTed to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ActionEndpoint(Box<str>);

impl ActionEndpoint {
    /// Read an endpoint out of an attribute value. Missing, empty and
    /// whitespace-only values are not endpoints.
    pub fn parse(attr: Option<&str>) -> Option<Self> {
        let url = attr?.trim();

        if url.is_empty() {
            return None;
        }

        Some(ActionEndpoint(url.into()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for ActionEndpoint {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ActionEndpoint {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Both endpoints of a single widget. Either can be absent, in which case
/// clicking in the corresponding state does nothing.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Endpoints {
    pub like: Option<ActionEndpoint>,
    pub unlike: Option<ActionEndpoint>,
}

impl Endpoints {
    pub fn new(like: Option<&str>, unlike: Option<&str>) -> Self {
        Endpoints {
            like: ActionEndpoint::parse(like),
            unlike: ActionEndpoint::parse(unlike),
        }
    }

    /// Endpoint a click performs while the widget displays `toggle`.
    pub fn target(&self, toggle: Toggle) -> Option<&ActionEndpoint> {
        match toggle {
            Toggle::Unliked => self.like.as_ref(),
            Toggle::Liked => self.unlike.as_ref(),
        }
    }
}
