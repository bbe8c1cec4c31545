// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! # like_toggle
//!
//! _Like/unlike buttons for server-rendered pages._
//!
//! Each toggle is a button with two data attributes, one URL per direction,
//! and a count element next to it:
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
//! Clicking the button sends `POST /posts/3/like/` with the `csrftoken` cookie
//! in the `X-CSRFToken` header. The server answers with `{"like_num": 3}`, and
//! the button turns into an "Unlike" button whose next click goes to
//! `/posts/3/unlike/`.
//!
//! Hydrating every button on the page is one call:
//!
//! ```no_run
//! fn main() {
//!     like_toggle::start();
//! }
//! ```
//!
//! For finer control, [`initialize`](initialize) binds buttons under any root
//! element with an explicit [`Config`](Config) and [`CsrfToken`](CsrfToken), and
//! [`component::LikeButton`](component::LikeButton) renders a toggle from
//! scratch inside a kobold app.

use std::rc::Rc;

use log::warn;
use wasm_bindgen::UnwrapThrowExt;

mod internal;

pub mod component;
pub mod config;
pub mod csrf;
pub mod endpoint;
pub mod error;
pub mod mount;
pub mod reply;
pub mod state;
pub mod transport;
pub mod view;
pub mod widget;

pub use config::Config;
pub use csrf::CsrfToken;
pub use endpoint::{ActionEndpoint, Endpoints};
pub use error::{Error, Result};
pub use mount::{initialize, Bindings};
pub use state::{LikeState, Toggle};
pub use widget::LikeToggle;

/// The prelude module with most commonly used types.
pub mod prelude {
    pub use crate::component::LikeButton;
    pub use crate::transport::{Fetch, Transport};
    pub use crate::view::{ButtonView, ToggleView};
    pub use crate::{initialize, Config, CsrfToken, Error, LikeState, LikeToggle, Toggle};
}

/// Attribute on `<body>` that may hold a JSON [`Config`](Config).
pub const CONFIG_ATTR: &str = "data-like-config";

/// Bind every toggle button in the document body and keep the listeners for
/// the lifetime of the page. Returns the number of buttons bound.
///
/// The CSRF token is read from `document.cookie` once, here. Pages that
/// rotate the token should call [`initialize`](initialize) instead and hand
/// the new token to [`Bindings::set_csrf`](Bindings::set_csrf).
pub fn start() -> usize {
    init_panic_hook();

    let body = web_sys::window()
        .expect_throw("no window")
        .document()
        .expect_throw("no document")
        .body()
        .expect_throw("no body");

    let config = match body.get_attribute(CONFIG_ATTR) {
        Some(json) => Config::from_json(&json).unwrap_or_else(|err| {
            warn!("ignoring {CONFIG_ATTR}: {err}");
            Config::default()
        }),
        None => Config::default(),
    };

    let csrf = CsrfToken::from_document(&config.cookie_name).unwrap_or_else(|| {
        warn!("no {} cookie, requests will be sent without a token", config.cookie_name);
        CsrfToken::default()
    });

    let bindings = initialize(&body, Rc::new(config), &csrf);
    let bound = bindings.len();

    bindings.forget();

    bound
}

fn init_panic_hook() {
    // Only enable console hook on debug builds
    #[cfg(debug_assertions)]
    {
        use std::sync::Once;

        static INIT: Once = Once::new();

        INIT.call_once(|| std::panic::set_hook(Box::new(console_error_panic_hook::hook)));
    }
}
