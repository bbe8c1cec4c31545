// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The two-state toggle and the count that travels with it.

use std::fmt;
use std::ops::Not;

/// Which side of the toggle is currently displayed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Toggle {
    /// The user has liked the item, a click will unlike it.
    Liked,
    /// The user has not liked the item, a click will like it.
    Unliked,
}

impl Toggle {
    pub fn from_liked(liked: bool) -> Self {
        if liked {
            Toggle::Liked
        } else {
            Toggle::Unliked
        }
    }

    pub fn is_liked(self) -> bool {
        self == Toggle::Liked
    }

    /// The state a successful click moves to.
    pub fn flip(self) -> Self {
        !self
    }
}

impl Not for Toggle {
    type Output = Toggle;

    fn not(self) -> Toggle {
        match self {
            Toggle::Liked => Toggle::Unliked,
            Toggle::Unliked => Toggle::Liked,
        }
    }
}

impl fmt::Display for Toggle {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match self {
            Toggle::Liked => "liked",
            Toggle::Unliked => "unliked",
        })
    }
}

/// Client-side copy of the server's like state. Possibly stale.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LikeState {
    pub toggle: Toggle,
    pub count: u32,
}

impl LikeState {
    pub fn new(toggle: Toggle, count: u32) -> Self {
        LikeState { toggle, count }
    }

    /// Apply a successful server reply: the toggle flips and the count is
    /// replaced wholesale, never incremented locally.
    pub fn advance(self, count: u32) -> Self {
        LikeState {
            toggle: self.toggle.flip(),
            count,
        }
    }

    pub fn liked(&self) -> bool {
        self.toggle.is_liked()
    }
}

/// Parse the text of a count element. Whitespace is ignored, anything else
/// that isn't a non-negative integer yields `None`.
pub fn parse_count(text: &str) -> Option<u32> {
    text.trim().parse().ok()
}
