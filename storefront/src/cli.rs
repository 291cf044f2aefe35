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
use std::fmt::{Display, Write};
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use listing::{
    parse, FeeBreakdown, ListingError, ListingForm, NavigationState, Recipe, Submission,
    UploadedImage,
};
use tracing::{debug, instrument};

#[derive(Debug)]
pub enum CliError {
    IO(std::io::Error),
    Json(serde_json::Error),
    Listing(ListingError),
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        CliError::IO(err)
    }
}

impl From<serde_json::Error> for CliError {
    fn from(err: serde_json::Error) -> Self {
        CliError::Json(err)
    }
}

impl From<ListingError> for CliError {
    fn from(err: ListingError) -> Self {
        CliError::Listing(err)
    }
}

impl Display for CliError {
    fn fmt(&self, w: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CliError::IO(err) => write!(w, "IO Error: {}", err),
            CliError::Json(err) => write!(w, "Invalid json: {}", err),
            CliError::Listing(err) => write!(w, "{}", err),
        }
    }
}

pub struct DraftArgs {
    pub recipe: Option<PathBuf>,
    pub name: Option<String>,
    pub title: Option<String>,
    pub description: String,
    pub price: String,
    pub image_link: Option<String>,
    pub image_file: Option<PathBuf>,
}

pub fn read_recipe<P>(path: P) -> Result<Recipe, CliError>
where
    P: AsRef<Path>,
{
    let br = BufReader::new(File::open(path)?);
    Ok(serde_json::from_reader(br)?)
}

fn uploaded_image<P>(path: P) -> Result<UploadedImage, CliError>
where
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let size = std::fs::metadata(path)?.len();
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default();
    Ok(UploadedImage::new(name, size))
}

pub fn fees(price: &str) -> Result<FeeBreakdown, CliError> {
    let price = parse::as_price(price).map_err(ListingError::InvalidPrice)?;
    Ok(FeeBreakdown::calculate(price))
}

pub fn format_breakdown(breakdown: &FeeBreakdown) -> String {
    let mut out = String::new();
    for (label, amount) in breakdown.lines() {
        // Writing to a String can't fail.
        let _ = writeln!(out, "{}: ₹{}", label, amount);
    }
    out
}

#[instrument(skip_all, fields(recipe=?args.recipe))]
pub fn draft(args: DraftArgs) -> Result<Submission, CliError> {
    let recipe = match &args.recipe {
        Some(path) => Some(read_recipe(path)?),
        None => None,
    };
    let mut form = ListingForm::new(NavigationState::new(recipe, args.name));
    if let Some(title) = args.title {
        form.set_title(title);
    }
    form.set_description(args.description);
    form.set_price(args.price);
    if let Some(link) = args.image_link {
        form.set_image_link(link);
    }
    if let Some(path) = args.image_file {
        form.set_uploaded_image(Some(uploaded_image(path)?));
    }
    debug!(?form, "built listing form");
    Ok(form.submit()?)
}

pub fn output_submission(submission: &Submission) -> Result<(), CliError> {
    println!("{}", serde_json::to_string_pretty(&submission.draft)?);
    print!("{}", format_breakdown(&submission.breakdown));
    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;

    use std::io::Write;

    fn draft_args(recipe: Option<PathBuf>) -> DraftArgs {
        DraftArgs {
            recipe,
            name: Some("Lemon Tart".to_owned()),
            title: None,
            description: "Sharp and sweet".to_owned(),
            price: "100".to_owned(),
            image_link: None,
            image_file: None,
        }
    }

    fn write_temp(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("storefront-{}-{}", std::process::id(), name));
        let mut f = File::create(&path).expect("Unable to create temp file");
        f.write_all(contents.as_bytes()).expect("Unable to write temp file");
        path
    }

    #[test]
    fn test_format_breakdown() {
        let breakdown = fees("100").expect("price should parse");
        assert_eq!(
            format_breakdown(&breakdown),
            "Net Revenue: ₹37.42\nGST: ₹15.25\nCommission: ₹8.47\nShipping Fee: ₹35.40\nPayment Gateway Fee: ₹2.45\nTCS: ₹1.00\n"
        );
    }

    #[test]
    fn test_fees_rejects_bad_price() {
        match fees("ten") {
            Err(CliError::Listing(ListingError::InvalidPrice(_))) => {}
            other => assert!(false, "expected an invalid price got {:?}", other),
        }
    }

    #[test]
    fn test_draft_without_recipe() {
        match draft(draft_args(None)) {
            Err(CliError::Listing(ListingError::MissingRecipe)) => {}
            other => assert!(false, "expected a missing recipe got {:?}", other),
        }
    }

    #[test]
    fn test_draft_from_recipe_file() {
        let recipe = write_temp("tart.json", r#"{"title": "Lemon Tart"}"#);
        let image = write_temp("tart.png", "not really a png");
        let mut args = draft_args(Some(recipe.clone()));
        args.image_file = Some(image.clone());
        let submission = draft(args).expect("draft should build");
        assert_eq!(submission.draft.title, "Lemon Tart");
        assert_eq!(submission.draft.image.as_deref(), Some("uploaded"));
        assert_eq!(
            submission.draft.recipe.as_value(),
            &serde_json::json!({"title": "Lemon Tart"})
        );
        let _ = std::fs::remove_file(recipe);
        let _ = std::fs::remove_file(image);
    }

    #[test]
    fn test_draft_with_bad_recipe_json() {
        let recipe = write_temp("broken.json", "{ not json");
        match draft(draft_args(Some(recipe.clone()))) {
            Err(CliError::Json(_)) => {}
            other => assert!(false, "expected a json error got {:?}", other),
        }
        let _ = std::fs::remove_file(recipe);
    }
}
