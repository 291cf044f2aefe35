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
use tracing::instrument;
use web_sys::Event;

use crate::{
    app_state::{Message, StateHandler},
    components::{FeeBreakdownView, ImagePicker},
    js_lib,
};

#[derive(Prop)]
pub struct ListingPageProps<'ctx> {
    sh: StateHandler<'ctx>,
}

#[component]
fn ListingEditor<'ctx, G: Html>(cx: Scope<'ctx>, props: ListingPageProps<'ctx>) -> View<G> {
    let ListingPageProps { sh } = props;
    let title = sh.get_selector(cx, |state| state.get().title().to_owned());
    let title = title.get_untracked().as_ref().clone();
    let breakdown = sh.get_selector(cx, |state| state.get().breakdown().cloned());

    view! {cx,
        form(class="listing-form", on:submit=move |evt: Event| {
            evt.prevent_default();
            sh.dispatch(cx, Message::Submit);
        }) {
            label(for="listing_title") { "Listing Title" }
            input(type="text", id="listing_title", name="title", value=title, on:input=move |evt: Event| {
                if let Some(value) = js_lib::event_value(&evt) {
                    sh.dispatch(cx, Message::SetTitle(value));
                }
            })
            label(for="listing_description") { "Description" }
            textarea(id="listing_description", name="description", rows=4, on:input=move |evt: Event| {
                if let Some(value) = js_lib::event_value(&evt) {
                    sh.dispatch(cx, Message::SetDescription(value));
                }
            })
            label(for="listing_price") { "Price (₹)" }
            input(type="number", id="listing_price", name="price", min="0", on:input=move |evt: Event| {
                if let Some(value) = js_lib::event_value(&evt) {
                    sh.dispatch(cx, Message::SetPrice(value));
                }
            })
            FeeBreakdownView(breakdown=breakdown)
            ImagePicker(sh=sh)
            button(type="submit") { "List Recipe" }
        }
    }
}

#[instrument(skip_all)]
#[component]
pub fn CreateListingPage<'ctx, G: Html>(cx: Scope<'ctx>, props: ListingPageProps<'ctx>) -> View<G> {
    let ListingPageProps { sh } = props;
    // NOTE(jwall): The recipe only arrives with navigation so this never
    // changes after the page is mounted.
    let has_recipe = *sh.get_selector(cx, |state| state.get().has_recipe()).get_untracked();
    let body = if has_recipe {
        view! {cx, ListingEditor(sh=sh) }
    } else {
        view! {cx,
            p(class="notice") { "No recipe data available to create a listing." }
        }
    };
    view! {cx,
        article(class="create-listing") {
            h2 { "Create Recipe Listing" }
            (body)
        }
    }
}
