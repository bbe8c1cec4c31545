// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! A [kobold](https://docs.rs/kobold) component for apps that render the
//! toggle themselves rather than hydrating server markup.
//!
//! ```no_run
//! use kobold::prelude::*;
//! use like_toggle::component::LikeButton;
//!
//! kobold::start(view! {
//!     <LikeButton liked={false} count={2} like_url="/posts/3/like/" unlike_url="/posts/3/unlike/" csrf="abc123" />
//! });
//! ```
//!
//! Labels and class names come from an optional `config`:
//!
//! ```no_run
//! use std::rc::Rc;
//!
//! use kobold::prelude::*;
//! use like_toggle::component::LikeButton;
//! use like_toggle::Config;
//!
//! let config = Rc::new(Config::default().with_labels("いいね", "いいね解除"));
//!
//! kobold::start(view! {
//!     <LikeButton liked={true} count={5} like_url="/posts/4/like/" unlike_url="/posts/4/unlike/" csrf="abc123" config={config} />
//! });
//! ```

use std::rc::Rc;

use kobold::branching::Branch2;
use kobold::prelude::*;
use web_sys::HtmlElement;

use crate::config::Config;
use crate::csrf::CsrfToken;
use crate::endpoint::{ActionEndpoint, Endpoints};
use crate::state::{LikeState, Toggle};
use crate::transport::Fetch;
use crate::view::ToggleView;
use crate::widget::LikeToggle;

struct Model {
    like: LikeState,
    pending: bool,
    failed: bool,
    endpoints: Endpoints,
    csrf: CsrfToken,
    config: Rc<Config>,
}

/// Routes widget updates into the component's state, triggering a render.
struct SignalView(Signal<Model>);

impl ToggleView for SignalView {
    fn render(&self, state: LikeState, _: Option<&ActionEndpoint>, _: &Config) {
        self.0.update(move |model| model.like = state);
    }

    fn set_pending(&self, pending: bool, _: &Config) {
        self.0.update(move |model| model.pending = pending);
    }

    fn set_failed(&self, failed: bool, _: &Config) {
        self.0.update(move |model| model.failed = failed);
    }
}

/// Classes of the rendered button, the same set `initialize` expects on
/// server-rendered markup.
fn button_class(config: &Config, toggle: Toggle, failed: bool) -> String {
    let mut class = format!("{} btn {}", config.state_class(toggle), config.style_class(toggle));

    if failed {
        class.push(' ');
        class.push_str(&config.error_class);
    }

    class
}

/// Claim the pending flag and build a widget for the current state, unless
/// a request is already in flight or there is nothing to call.
fn begin_click(signal: &Signal<Model>) -> Option<LikeToggle<SignalView, Fetch>> {
    let mut request = None;

    signal.update_silent(|model| {
        if model.pending || model.endpoints.target(model.like.toggle).is_none() {
            return;
        }

        model.pending = true;

        request = Some(LikeToggle::new(
            SignalView(signal.clone()),
            Fetch::new(model.config.header_name.clone()),
            model.endpoints.clone(),
            model.like,
            model.csrf.clone(),
            model.config.clone(),
        ));
    });

    request
}

#[component(config?)]
pub fn LikeButton(
    liked: bool,
    count: u32,
    like_url: &str,
    unlike_url: &str,
    csrf: &str,
    config: Option<Rc<Config>>,
) -> impl View {
    let model = Model {
        like: LikeState::new(Toggle::from_liked(liked), count),
        pending: false,
        failed: false,
        endpoints: Endpoints::new(Some(like_url), Some(unlike_url)),
        csrf: CsrfToken::new(csrf),
        config: config.unwrap_or_default(),
    };

    stateful(move || model, |model| {
        let onclick = model.bind_async(|signal, _: MouseEvent<HtmlElement>| async move {
            if let Some(toggle) = begin_click(&signal) {
                toggle.click_logged().await;
            }
        });

        let class = button_class(&model.config, model.like.toggle, model.failed);
        let label = model.config.label(model.like.toggle);
        let count = model.like.count;

        // Literal `disabled` sets the DOM property, and a rebuilt button
        // starts enabled
        let button = if model.pending && model.config.disable_while_pending {
            Branch2::A(view! {
                <button type="button" class={class} disabled=true {onclick}>{ label }</button>
            })
        } else {
            Branch2::B(view! {
                <button type="button" class={class} {onclick}>{ label }</button>
            })
        };

        view! {
            <span .like-toggle>
                { button }
                " "
                <span .like-num>{ count }</span>
            </span>
        }
    })
}
