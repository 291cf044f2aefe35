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
use listing::{ListingForm, NavigationState};
use sycamore::prelude::*;
use tracing::{info, instrument, warn};

use crate::{app_state, components::toast::Container, js_lib, pages::CreateListingPage};

#[instrument(skip_all)]
#[component]
pub fn UI<G: Html>(cx: Scope) -> View<G> {
    info!("Starting UI");
    let state = match js_lib::navigation_state() {
        Ok(state) => state,
        Err(err) => {
            warn!(?err, "Unable to read navigation state");
            NavigationState::default()
        }
    };
    let sh = app_state::get_state_handler(cx, ListingForm::new(state));

    view! {cx,
        div(class="app") {
            main(class="container") {
                CreateListingPage(sh=sh)
            }
            Container()
        }
    }
}
