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
use serde::Serialize;
use tracing::{debug, error, info, instrument};

use crate::{
    fees::FeeBreakdown, parse, ListingDraft, ListingError, NavigationState, Recipe, Submission,
    UPLOADED_IMAGE_MARKER,
};

/// A file the user picked from their machine. Only the metadata is kept.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct UploadedImage {
    pub name: String,
    pub size: u64,
}

impl UploadedImage {
    pub fn new<S: Into<String>>(name: S, size: u64) -> Self {
        Self {
            name: name.into(),
            size,
        }
    }
}

/// Where a listing's image comes from. A link and an upload are exclusive.
#[derive(Clone, Debug, PartialEq)]
pub enum ImageSource {
    Link(String),
    Upload(UploadedImage),
}

/// The state of a listing form for a single recipe.
#[derive(Debug, Clone, PartialEq)]
pub struct ListingForm {
    recipe: Option<Recipe>,
    recipe_name: String,
    title: String,
    description: String,
    price: String,
    image: Option<ImageSource>,
    breakdown: Option<FeeBreakdown>,
}

impl ListingForm {
    pub fn new(state: NavigationState) -> Self {
        let recipe_name = state.recipe_name.unwrap_or_default();
        Self {
            recipe: state.recipe,
            title: recipe_name.clone(),
            recipe_name,
            description: String::new(),
            price: String::new(),
            image: None,
            breakdown: None,
        }
    }

    pub fn has_recipe(&self) -> bool {
        self.recipe.is_some()
    }

    pub fn recipe_name(&self) -> &str {
        &self.recipe_name
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn set_title<S: Into<String>>(&mut self, title: S) {
        self.title = title.into();
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn set_description<S: Into<String>>(&mut self, description: S) {
        self.description = description.into();
    }

    /// The price exactly as it was entered.
    pub fn price_text(&self) -> &str {
        &self.price
    }

    /// Store the entered price and recompute the breakdown for it. Text that
    /// isn't a price clears the breakdown.
    pub fn set_price<S: Into<String>>(&mut self, price: S) {
        self.price = price.into();
        self.breakdown = match parse::as_price(&self.price) {
            Ok(amount) => Some(FeeBreakdown::calculate(amount)),
            Err(e) => {
                debug!(price = %self.price, err = %e, "price does not parse");
                None
            }
        };
    }

    pub fn breakdown(&self) -> Option<&FeeBreakdown> {
        self.breakdown.as_ref()
    }

    pub fn image(&self) -> Option<&ImageSource> {
        self.image.as_ref()
    }

    pub fn image_link(&self) -> Option<&str> {
        match &self.image {
            Some(ImageSource::Link(link)) => Some(link.as_str()),
            _ => None,
        }
    }

    pub fn uploaded_image(&self) -> Option<&UploadedImage> {
        match &self.image {
            Some(ImageSource::Upload(file)) => Some(file),
            _ => None,
        }
    }

    /// Use a link for the image. Any uploaded file is dropped.
    pub fn set_image_link<S: Into<String>>(&mut self, link: S) {
        self.image = Some(ImageSource::Link(link.into()));
    }

    /// Use an uploaded file for the image. Any link is dropped. Picking no
    /// file leaves the current image alone.
    pub fn set_uploaded_image(&mut self, file: Option<UploadedImage>) {
        if let Some(file) = file {
            self.image = Some(ImageSource::Upload(file));
        }
    }

    pub fn clear_image(&mut self) {
        self.image = None;
    }

    /// What the draft's image field will hold.
    pub fn resolved_image(&self) -> Option<String> {
        match &self.image {
            Some(ImageSource::Link(link)) if !link.is_empty() => Some(link.clone()),
            Some(ImageSource::Link(_)) | None => None,
            Some(ImageSource::Upload(_)) => Some(UPLOADED_IMAGE_MARKER.to_owned()),
        }
    }

    /// Check the form and build the listing draft for it.
    pub fn validate(&self) -> Result<Submission, ListingError> {
        let recipe = self.recipe.as_ref().ok_or(ListingError::MissingRecipe)?;
        if self.title.trim().is_empty()
            || self.description.trim().is_empty()
            || self.price.trim().is_empty()
        {
            return Err(ListingError::MissingDetails);
        }
        let price = parse::as_price(&self.price)?;
        let breakdown = FeeBreakdown::calculate(price);
        let draft = ListingDraft {
            title: self.title.clone(),
            description: self.description.clone(),
            price,
            image: self.resolved_image(),
            recipe_name: self.recipe_name.clone(),
            recipe: recipe.clone(),
        };
        Ok(Submission { draft, breakdown })
    }

    /// Validate the form and hand off the draft. There is no listing backend
    /// yet so the draft is only logged.
    #[instrument(skip_all, fields(title = %self.title))]
    pub fn submit(&mut self) -> Result<Submission, ListingError> {
        let submission = match self.validate() {
            Ok(submission) => submission,
            Err(err) => {
                error!(%err, "Listing failed validation");
                return Err(err);
            }
        };
        self.breakdown = Some(submission.breakdown.clone());
        match serde_json::to_string(&submission.draft) {
            Ok(json) => info!(listing = %json, "Listing Data"),
            Err(err) => error!(?err, "Unable to serialize listing"),
        }
        Ok(submission)
    }
}
