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
pub mod fees;
pub mod form;
pub mod parse;

use std::fmt::Display;

use serde::{Deserialize, Serialize, Serializer};

pub use fees::{Amount, FeeBreakdown};
pub use form::{ImageSource, ListingForm, UploadedImage};

/// Placeholder written into a draft's image field when the image is a local
/// upload that has not been stored anywhere yet.
pub const UPLOADED_IMAGE_MARKER: &'static str = "uploaded";

/// A recipe as handed to us by the recipe service. We never look inside it,
/// it is only forwarded along with the listing.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(transparent)]
pub struct Recipe(serde_json::Value);

impl Recipe {
    pub fn new(value: serde_json::Value) -> Self {
        Self(value)
    }

    pub fn as_value(&self) -> &serde_json::Value {
        &self.0
    }
}

/// The state passed along when navigating to the listing page.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NavigationState {
    #[serde(default)]
    pub recipe: Option<Recipe>,
    #[serde(default)]
    pub recipe_name: Option<String>,
}

impl NavigationState {
    pub fn new(recipe: Option<Recipe>, recipe_name: Option<String>) -> Self {
        Self {
            recipe,
            recipe_name,
        }
    }
}

/// The listing payload produced by a successful submit.
#[derive(Serialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ListingDraft {
    pub title: String,
    pub description: String,
    #[serde(serialize_with = "price_as_number")]
    pub price: Amount,
    pub image: Option<String>,
    pub recipe_name: String,
    pub recipe: Recipe,
}

fn price_as_number<S>(price: &Amount, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_f64(price.approx_f64())
}

/// A draft along with the breakdown computed for its price.
#[derive(Clone, Debug, PartialEq)]
pub struct Submission {
    pub draft: ListingDraft,
    pub breakdown: FeeBreakdown,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ListingError {
    MissingRecipe,
    MissingDetails,
    InvalidPrice(String),
}

impl Display for ListingError {
    fn fmt(&self, w: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ListingError::MissingRecipe => write!(w, "No recipe data to list."),
            ListingError::MissingDetails => write!(w, "Please fill in all the listing details."),
            ListingError::InvalidPrice(msg) => write!(w, "Invalid price: {}", msg),
        }
    }
}

impl std::error::Error for ListingError {}

impl From<String> for ListingError {
    fn from(msg: String) -> Self {
        ListingError::InvalidPrice(msg)
    }
}
