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
use sycamore::prelude::*;
use tracing::debug;
use web_sys::Event;

use crate::app_state::{Message, StateHandler};
use crate::js_lib;

#[derive(Prop)]
pub struct ImagePickerProps<'ctx> {
    sh: StateHandler<'ctx>,
}

#[component]
pub fn ImagePicker<'ctx, G: Html>(cx: Scope<'ctx>, props: ImagePickerProps<'ctx>) -> View<G> {
    let ImagePickerProps { sh } = props;
    let initial_link = sh.get_selector(cx, |state| {
        state.get().image_link().unwrap_or_default().to_owned()
    });
    let link = create_signal(cx, initial_link.get_untracked().as_ref().clone());
    let uploaded = sh.get_selector(cx, |state| {
        state.get().uploaded_image().map(|file| file.name.clone())
    });

    view! {cx,
        label(for="image_link") { "Recipe Image" }
        div(class="image-picker") {
            input(type="text", id="image_link", placeholder="Enter image link", bind:value=link, on:input=move |evt: Event| {
                if let Some(value) = js_lib::event_value(&evt) {
                    sh.dispatch(cx, Message::SetImageLink(value));
                }
            })
            label(for="image-upload", role="button") { "Upload Image" }
            input(type="file", id="image-upload", class="sr-only", accept="image/*", on:change=move |evt: Event| {
                let file = js_lib::selected_file(&evt);
                debug!(?file, "image file picked");
                if file.is_some() {
                    link.set(String::new());
                }
                sh.dispatch(cx, Message::SetUploadedImage(file));
            })
            span(role="button", class="secondary", on:click=move |_| {
                link.set(String::new());
                sh.dispatch(cx, Message::ClearImage);
            }) { "Clear" }
        }
        (match uploaded.get().as_ref() {
            Some(name) => {
                let name = name.clone();
                view! {cx, p(class="upload-name") { (name) } }
            }
            None => View::empty(),
        })
        small { "You can either provide an image link or upload an image." }
    }
}
