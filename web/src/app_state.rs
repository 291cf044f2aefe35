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
use listing::{ListingForm, UploadedImage};
use sycamore::prelude::*;
use sycamore_state::{Handler, MessageMapper};
use tracing::{debug, instrument};

use crate::components::toast;

const SUCCESS_MESSAGE: &'static str = "Listing created successfully! (Data logged to console)";

#[derive(Debug)]
pub enum Message {
    SetTitle(String),
    SetDescription(String),
    SetPrice(String),
    SetImageLink(String),
    SetUploadedImage(Option<UploadedImage>),
    ClearImage,
    Submit,
}

/// Apply a message to the form. A submit reports what to tell the user, a
/// success message or the reason it failed.
pub fn apply_message(
    form: &mut ListingForm,
    msg: Message,
) -> Option<Result<&'static str, String>> {
    match msg {
        Message::SetTitle(title) => {
            form.set_title(title);
        }
        Message::SetDescription(description) => {
            form.set_description(description);
        }
        Message::SetPrice(price) => {
            form.set_price(price);
            debug!(breakdown=?form.breakdown(), "recomputed fee breakdown");
        }
        Message::SetImageLink(link) => {
            form.set_image_link(link);
        }
        Message::SetUploadedImage(file) => {
            form.set_uploaded_image(file);
        }
        Message::ClearImage => {
            form.clear_image();
        }
        Message::Submit => {
            return Some(form.submit().map(|_| SUCCESS_MESSAGE).map_err(|e| e.to_string()));
        }
    }
    None
}

pub struct FormMachine;

impl MessageMapper<Message, ListingForm> for FormMachine {
    #[instrument(skip_all, fields(?msg))]
    fn map<'ctx>(&self, cx: Scope<'ctx>, msg: Message, original: &'ctx Signal<ListingForm>) {
        let mut form = original.get_untracked().as_ref().clone();
        let outcome = apply_message(&mut form, msg);
        original.set(form);
        match outcome {
            Some(Ok(msg)) => toast::message(cx, msg, None),
            Some(Err(err)) => toast::error_message(cx, &err, None),
            None => (),
        }
    }
}

pub type StateHandler<'ctx> = &'ctx Handler<'ctx, FormMachine, ListingForm, Message>;

pub fn get_state_handler<'ctx>(cx: Scope<'ctx>, initial: ListingForm) -> StateHandler<'ctx> {
    Handler::new(cx, initial, FormMachine)
}

#[cfg(test)]
mod test {
    use super::*;
    use listing::{NavigationState, Recipe};
    use serde_json::json;

    fn form() -> ListingForm {
        ListingForm::new(NavigationState::new(
            Some(Recipe::new(json!({"title": "Pancakes"}))),
            Some("Pancakes".to_owned()),
        ))
    }

    #[test]
    fn test_field_messages_update_form() {
        let mut form = form();
        assert_eq!(apply_message(&mut form, Message::SetTitle("Fluffy".to_owned())), None);
        assert_eq!(
            apply_message(&mut form, Message::SetDescription("Stacked".to_owned())),
            None
        );
        assert_eq!(apply_message(&mut form, Message::SetPrice("100".to_owned())), None);
        assert_eq!(form.title(), "Fluffy");
        assert_eq!(form.description(), "Stacked");
        assert_eq!(
            form.breakdown().map(|b| b.net_revenue.to_string()),
            Some("37.42".to_owned())
        );

        apply_message(&mut form, Message::SetPrice("abc".to_owned()));
        assert!(form.breakdown().is_none());
    }

    #[test]
    fn test_image_messages_update_form() {
        let mut form = form();
        apply_message(&mut form, Message::SetImageLink("http://img/p.png".to_owned()));
        assert_eq!(form.image_link(), Some("http://img/p.png"));

        apply_message(&mut form, Message::SetUploadedImage(None));
        assert_eq!(form.image_link(), Some("http://img/p.png"));

        apply_message(
            &mut form,
            Message::SetUploadedImage(Some(UploadedImage::new("p.png", 42))),
        );
        assert!(form.image_link().is_none());
        assert_eq!(form.uploaded_image().map(|f| f.size), Some(42));

        apply_message(&mut form, Message::ClearImage);
        assert!(form.image().is_none());
    }

    #[test]
    fn test_submit_reports_outcome() {
        let mut form = form();
        assert_eq!(
            apply_message(&mut form, Message::Submit),
            Some(Err("Please fill in all the listing details.".to_owned()))
        );

        apply_message(&mut form, Message::SetDescription("Stacked".to_owned()));
        apply_message(&mut form, Message::SetPrice("1.234".to_owned()));
        assert_eq!(apply_message(&mut form, Message::Submit), Some(Ok(SUCCESS_MESSAGE)));

        let mut form = ListingForm::new(NavigationState::default());
        assert_eq!(
            apply_message(&mut form, Message::Submit),
            Some(Err("No recipe data to list.".to_owned()))
        );
    }
}
