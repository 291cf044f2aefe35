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
use listing::FeeBreakdown;
use sycamore::prelude::*;

#[derive(Prop)]
pub struct FeeBreakdownProps<'ctx> {
    breakdown: &'ctx ReadSignal<Option<FeeBreakdown>>,
}

/// Shows what a seller keeps from the price they entered. Nothing is shown
/// until the price parses.
#[component]
pub fn FeeBreakdownView<'ctx, G: Html>(cx: Scope<'ctx>, props: FeeBreakdownProps<'ctx>) -> View<G> {
    let FeeBreakdownProps { breakdown } = props;
    let lines = create_memo(cx, move || match breakdown.get().as_ref() {
        Some(breakdown) => breakdown
            .lines()
            .into_iter()
            .map(|(label, amount)| (label, amount.to_string(), amount.is_negative()))
            .collect::<Vec<(&'static str, String, bool)>>(),
        None => Vec::new(),
    });
    view! {cx,
        (if breakdown.get().is_some() {
            view! {cx,
                div(class="fee-breakdown") {
                    Indexed(
                        iterable=lines,
                        view=|cx, (label, amount, negative)| {
                            let class = if negative { "amount negative" } else { "amount" };
                            view! {cx,
                                p { strong { (label) ":" } " " span(class=class) { "₹" (amount) } }
                            }
                        }
                    )
                }
            }
        } else {
            View::empty()
        })
    }
}
