// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Precompiled JavaScript helpers for the DOM writes the widget performs.

use wasm_bindgen::prelude::*;
use web_sys::{Element, Node};

#[wasm_bindgen(module = "/js/util.js")]
extern "C" {
    #[wasm_bindgen(js_name = "__like_set_text")]
    pub(crate) fn set_text(node: &Node, t: &str);
    #[wasm_bindgen(js_name = "__like_set_text")]
    pub(crate) fn set_text_num(node: &Node, t: u32);

    #[wasm_bindgen(js_name = "__like_toggle_class")]
    pub(crate) fn toggle_class(node: &Node, class: &str, value: bool);

    #[wasm_bindgen(js_name = "__like_set_disabled")]
    pub(crate) fn set_disabled(node: &Node, value: bool);

    #[wasm_bindgen(js_name = "__like_count_node")]
    pub(crate) fn count_node(button: &Node, selector: &str) -> Option<Element>;
}
