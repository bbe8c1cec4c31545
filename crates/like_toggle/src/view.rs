// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Reflecting [`LikeState`](LikeState) in the DOM.

use log::warn;
use web_sys::Element;

use crate::config::Config;
use crate::endpoint::ActionEndpoint;
use crate::internal;
use crate::state::{LikeState, Toggle};

/// Display side of a widget. Implementations only ever touch the nodes
/// belonging to their own widget.
pub trait ToggleView {
    /// Show `state`. `next` is the endpoint the following click will call.
    fn render(&self, state: LikeState, next: Option<&ActionEndpoint>, config: &Config);

    /// Mark the widget as waiting for a reply.
    fn set_pending(&self, pending: bool, config: &Config);

    /// Mark or unmark the last request as failed.
    fn set_failed(&self, failed: bool, config: &Config);
}

/// A server-rendered button and the count element next to it. Both handles
/// are captured once, when the widget is created.
#[derive(Clone, Debug)]
pub struct ButtonView {
    button: Element,
    count: Option<Element>,
}

impl ButtonView {
    pub fn new(button: Element, count: Option<Element>) -> Self {
        ButtonView { button, count }
    }

    /// Attach to `button`, looking up the count element among its siblings.
    pub fn attach(button: Element, config: &Config) -> Self {
        let count = internal::count_node(&button, &config.count_selector);

        ButtonView { button, count }
    }

    pub fn button(&self) -> &Element {
        &self.button
    }

    /// Text of the count element, if there is one.
    pub fn count_text(&self) -> Option<String> {
        self.count.as_ref()?.text_content()
    }
}

impl ToggleView for ButtonView {
    fn render(&self, state: LikeState, next: Option<&ActionEndpoint>, config: &Config) {
        if let Some(count) = &self.count {
            internal::set_text_num(count, state.count);
        }

        internal::set_text(&self.button, config.label(state.toggle));

        for toggle in [Toggle::Liked, Toggle::Unliked] {
            let on = toggle == state.toggle;

            internal::toggle_class(&self.button, config.state_class(toggle), on);
            internal::toggle_class(&self.button, config.style_class(toggle), on);
        }

        // The widget keeps its own copy of the endpoint, the attribute only
        // mirrors it for the page
        let mirrored = match next {
            Some(url) => self.button.set_attribute(&config.action_url_attr, url.as_str()),
            None => self.button.remove_attribute(&config.action_url_attr),
        };

        if let Err(err) = mirrored {
            warn!("could not update {}: {err:?}", config.action_url_attr);
        }
    }

    fn set_pending(&self, pending: bool, config: &Config) {
        if config.disable_while_pending {
            internal::set_disabled(&self.button, pending);
        }
    }

    fn set_failed(&self, failed: bool, config: &Config) {
        internal::toggle_class(&self.button, &config.error_class, failed);
    }
}
