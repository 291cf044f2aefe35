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
use anyhow::anyhow;
use listing::{NavigationState, UploadedImage};
use wasm_bindgen::JsCast;
use web_sys::{window, Element, Event, HtmlInputElement, HtmlTextAreaElement};

pub fn get_element_by_id<E>(id: &str) -> Result<Option<E>, Element>
where
    E: JsCast,
{
    match window()
        .expect("No window present")
        .document()
        .expect("No document in window")
        .get_element_by_id(id)
    {
        Some(e) => e.dyn_into::<E>().map(|e| Some(e)),
        None => Ok(None),
    }
}

/// Read the state the previous page pushed onto the history entry for us.
pub fn navigation_state() -> anyhow::Result<NavigationState> {
    let history = window()
        .ok_or_else(|| anyhow!("No window present"))?
        .history()
        .map_err(|e| anyhow!("{:?}", e))?;
    let state = history.state().map_err(|e| anyhow!("{:?}", e))?;
    if state.is_null() || state.is_undefined() {
        return Ok(NavigationState::default());
    }
    serde_wasm_bindgen::from_value(state).map_err(|e| anyhow!("{}", e))
}

/// The current text of the input or textarea an event fired on.
pub fn event_value(evt: &Event) -> Option<String> {
    let target = evt.target()?;
    if let Some(input) = target.dyn_ref::<HtmlInputElement>() {
        return Some(input.value());
    }
    target
        .dyn_ref::<HtmlTextAreaElement>()
        .map(|textarea| textarea.value())
}

/// Take the file picked in a file input. The input is reset so picking the
/// same file again still fires a change.
pub fn selected_file(evt: &Event) -> Option<UploadedImage> {
    let input = evt.target()?.dyn_into::<HtmlInputElement>().ok()?;
    let file = input.files()?.get(0)?;
    let image = UploadedImage::new(file.name(), file.size() as u64);
    input.set_value("");
    Some(image)
}
