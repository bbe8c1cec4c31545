// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Names of the attributes, classes and labels the widget reads and writes.
//!
//! Defaults match the markup the server renders out of the box:
//!
//! ```html
//! <div>
//!     <button class="like-btn btn btn-outline-primary"
//!             data-like-url="/posts/3/like/"
//!             data-unlike-url="/posts/3/unlike/">Like</button>
//!     <span class="like-num">2</span>
//! </div>
//! ```
//!
//! Any subset of fields can be overridden from JSON:
//!
//! ```
//! let config = like_toggle::Config::from_json(r#"{ "like_label": "いいね" }"#).unwrap();
//!
//! assert_eq!(config.like_label, "いいね");
//! assert_eq!(config.unlike_label, "Unlike");
//! ```

use serde::Deserialize;

use crate::error::{Error, Result};
use crate::state::Toggle;

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Attribute holding the "like" endpoint.
    pub like_url_attr: String,
    /// Attribute holding the "unlike" endpoint.
    pub unlike_url_attr: String,
    /// Attribute the widget writes with the endpoint of the next click.
    pub action_url_attr: String,
    /// Marker attribute set on buttons that already have a listener.
    pub bound_attr: String,
    /// Class of a button in the unliked state.
    pub like_class: String,
    /// Class of a button in the liked state.
    pub unlike_class: String,
    /// Style class of a button in the unliked state.
    pub like_style: String,
    /// Style class of a button in the liked state.
    pub unlike_style: String,
    /// Transient class added to a button whose last request failed.
    pub error_class: String,
    /// Selector of the count element, relative to the button's parent.
    pub count_selector: String,
    pub like_label: String,
    pub unlike_label: String,
    pub cookie_name: String,
    pub header_name: String,
    /// Disable the button while its request is in flight.
    pub disable_while_pending: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            like_url_attr: "data-like-url".into(),
            unlike_url_attr: "data-unlike-url".into(),
            action_url_attr: "data-action-url".into(),
            bound_attr: "data-like-bound".into(),
            like_class: "like-btn".into(),
            unlike_class: "unlike-btn".into(),
            like_style: "btn-outline-primary".into(),
            unlike_style: "btn-outline-danger".into(),
            error_class: "like-error".into(),
            count_selector: ".like-num".into(),
            like_label: "Like".into(),
            unlike_label: "Unlike".into(),
            cookie_name: "csrftoken".into(),
            header_name: "X-CSRFToken".into(),
            disable_while_pending: true,
        }
    }
}

impl Config {
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|err| Error::Config(err.to_string()))
    }

    pub fn with_labels(mut self, like: impl Into<String>, unlike: impl Into<String>) -> Self {
        self.like_label = like.into();
        self.unlike_label = unlike.into();
        self
    }

    /// Label shown on the button while it displays `toggle`, naming the
    /// action a click performs.
    pub fn label(&self, toggle: Toggle) -> &str {
        match toggle {
            Toggle::Unliked => &self.like_label,
            Toggle::Liked => &self.unlike_label,
        }
    }

    pub fn state_class(&self, toggle: Toggle) -> &str {
        match toggle {
            Toggle::Unliked => &self.like_class,
            Toggle::Liked => &self.unlike_class,
        }
    }

    pub fn style_class(&self, toggle: Toggle) -> &str {
        match toggle {
            Toggle::Unliked => &self.like_style,
            Toggle::Liked => &self.unlike_style,
        }
    }

    /// CSS selector matching buttons in either state.
    pub fn button_selector(&self) -> String {
        format!(".{}, .{}", self.like_class, self.unlike_class)
    }
}
