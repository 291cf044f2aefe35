// Copyright 2022 Jeremy Wall
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
use sycamore::{easing, motion, prelude::*};
use tracing::{debug, error};
use wasm_bindgen::UnwrapThrowExt;

const SECTION_ID: &'static str = "toast-container";
const DEFAULT_TIMEOUT_SECS: i64 = 3;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ToastKind {
    Info,
    Error,
}

impl ToastKind {
    fn class(&self) -> &'static str {
        match self {
            ToastKind::Info => "toast",
            ToastKind::Error => "toast error",
        }
    }
}

#[component]
pub fn Container<G: Html>(cx: Scope) -> View<G> {
    view! {cx,
        section(id=SECTION_ID, aria-live="polite") { }
    }
}

fn get_container() -> Option<web_sys::HtmlElement> {
    match crate::js_lib::get_element_by_id::<web_sys::HtmlElement>(SECTION_ID) {
        Ok(Some(container)) => Some(container),
        Ok(None) => {
            error!("No toast-container in the document");
            None
        }
        Err(el) => {
            error!(?el, "toast-container is not an html element");
            None
        }
    }
}

fn create_output_element(msg: &str, kind: ToastKind) -> Option<web_sys::Element> {
    let document = web_sys::window()?.document()?;
    let output = document.create_element("output").ok()?;
    let message_node = document.create_text_node(msg);
    output.set_attribute("class", kind.class()).unwrap_throw();
    output.set_attribute("role", "status").unwrap_throw();
    output.append_child(&message_node).unwrap_throw();
    Some(output)
}

pub fn show_toast<'a>(cx: Scope<'a>, msg: &str, kind: ToastKind, timeout: Option<chrono::Duration>) {
    let timeout = timeout
        .unwrap_or_else(|| chrono::Duration::seconds(DEFAULT_TIMEOUT_SECS))
        .to_std()
        .unwrap_or_else(|_| std::time::Duration::from_secs(DEFAULT_TIMEOUT_SECS as u64));
    let (container, output_element) = match (get_container(), create_output_element(msg, kind)) {
        (Some(container), Some(output)) => (container, output),
        _ => return,
    };
    let tweened = motion::create_tweened_signal(cx, 0.0 as f32, timeout, easing::quad_in);
    tweened.set(1.0);
    create_effect_scoped(cx, {
        let container = container.clone();
        move |_cx| {
            if !tweened.is_tweening() {
                debug!("Detected message timeout.");
                // Toasts expire in the order they were shown.
                if let Some(node_to_remove) = container.first_element_child() {
                    container.remove_child(&node_to_remove).unwrap_throw();
                }
            }
        }
    });
    container.append_child(&output_element).unwrap_throw();
}

pub fn message<'a>(cx: Scope<'a>, msg: &str, timeout: Option<chrono::Duration>) {
    show_toast(cx, msg, ToastKind::Info, timeout);
}

pub fn error_message<'a>(cx: Scope<'a>, msg: &str, timeout: Option<chrono::Duration>) {
    show_toast(cx, msg, ToastKind::Error, timeout);
}
