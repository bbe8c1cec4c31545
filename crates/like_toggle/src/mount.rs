// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Binding widgets to server-rendered markup.

use std::rc::Rc;

use gloo_events::EventListener;
use log::{debug, warn};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::Element;

use crate::config::Config;
use crate::csrf::CsrfToken;
use crate::endpoint::Endpoints;
use crate::state::{parse_count, LikeState, Toggle};
use crate::transport::Fetch;
use crate::view::ButtonView;
use crate::widget::LikeToggle;

/// A widget living in the browser DOM.
pub type DomToggle = LikeToggle<ButtonView, Fetch>;

/// Widgets registered by a call to [`initialize`](initialize), along with
/// their click listeners.
///
/// Dropping this removes the listeners and the bound marker from each button,
/// so a later [`initialize`](initialize) binds them again. Use
/// [`forget`](Bindings::forget) to keep the buttons bound for good.
#[derive(Default)]
#[must_use = "dropping Bindings unbinds every button"]
pub struct Bindings {
    widgets: Vec<Rc<DomToggle>>,
    listeners: Vec<EventListener>,
}

impl Bindings {
    pub fn widgets(&self) -> &[Rc<DomToggle>] {
        &self.widgets
    }

    pub fn len(&self) -> usize {
        self.widgets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.widgets.is_empty()
    }

    /// Send `csrf` with every request from now on.
    pub fn set_csrf(&self, csrf: &CsrfToken) {
        for widget in &self.widgets {
            widget.set_csrf(csrf.clone());
        }
    }

    /// Keep the listeners alive for the rest of the page's lifetime.
    pub fn forget(mut self) {
        for listener in std::mem::take(&mut self.listeners) {
            listener.forget();
        }

        // Leaked listeners still own their widgets, the markers must stay
        self.widgets.clear();
    }
}

impl Drop for Bindings {
    fn drop(&mut self) {
        for widget in &self.widgets {
            let button = widget.view().button();

            if let Err(err) = button.remove_attribute(&widget.config().bound_attr) {
                warn!("could not unmark button: {err:?}");
            }
        }
    }
}

/// Find every toggle button inside `root` and register a click listener on
/// each of them.
///
/// Buttons already bound by a previous call are skipped, so calling this
/// repeatedly on the same root (e.g. after injecting more markup) never
/// registers a button twice.
#[must_use = "dropping Bindings unbinds every button"]
pub fn initialize(root: &Element, config: Rc<Config>, csrf: &CsrfToken) -> Bindings {
    let mut bindings = Bindings::default();

    let buttons = match root.query_selector_all(&config.button_selector()) {
        Ok(buttons) => buttons,
        Err(err) => {
            warn!("invalid button selector {:?}: {err:?}", config.button_selector());
            return bindings;
        }
    };

    for idx in 0..buttons.length() {
        let Some(button) = buttons.item(idx).and_then(|node| node.dyn_into::<Element>().ok()) else {
            continue;
        };

        if button.has_attribute(&config.bound_attr) {
            continue;
        }

        if button.set_attribute(&config.bound_attr, "").is_err() {
            warn!("could not mark button as bound, skipping it");
            continue;
        }

        let widget = Rc::new(hydrate(button, config.clone(), csrf.clone()));

        let listener = {
            let target = widget.view().button().clone();
            let widget = widget.clone();

            EventListener::new(&target, "click", move |_| {
                let widget = widget.clone();

                spawn_local(async move { widget.click_logged().await });
            })
        };

        bindings.widgets.push(widget);
        bindings.listeners.push(listener);
    }

    debug!("bound {} like buttons", bindings.len());

    bindings
}

/// Build a widget from the state the server rendered into `button`.
pub fn hydrate(button: Element, config: Rc<Config>, csrf: CsrfToken) -> DomToggle {
    let toggle = Toggle::from_liked(button.class_list().contains(&config.unlike_class));

    let endpoints = Endpoints::new(
        button.get_attribute(&config.like_url_attr).as_deref(),
        button.get_attribute(&config.unlike_url_attr).as_deref(),
    );

    let view = ButtonView::attach(button, &config);

    let count = match view.count_text() {
        Some(text) => parse_count(&text).unwrap_or_else(|| {
            warn!("unreadable like count {text:?}, assuming 0");
            0
        }),
        None => 0,
    };

    if let Some(url) = endpoints.target(toggle) {
        if let Err(err) = view.button().set_attribute(&config.action_url_attr, url.as_str()) {
            warn!("could not set {}: {err:?}", config.action_url_attr);
        }
    }

    let transport = Fetch::new(config.header_name.clone());

    LikeToggle::new(view, transport, endpoints, LikeState::new(toggle, count), csrf, config)
}
