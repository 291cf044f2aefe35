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
mod cli;

use std::path::PathBuf;
use std::process::exit;

use clap::{arg, crate_authors, crate_version, Command};
use tracing::{error, Level};

fn create_app<'a>() -> Command<'a> {
    Command::new("storefront")
        .version(crate_version!())
        .author(crate_authors!())
        .about("Recipe Listing CLI")
        .arg(arg!(-v --verbose "Log at debug level").global(true))
        .subcommand(
            Command::new("fees")
                .about("print the fee breakdown for a tax inclusive price")
                .arg(arg!(<PRICE> "Listing price")),
        )
        .subcommand(
            Command::new("draft")
                .about("build a listing draft for a recipe")
                .arg(arg!(--recipe [FILE] "Recipe json file to list"))
                .arg(arg!(--name [NAME] "Suggested name for the recipe"))
                .arg(arg!(--title [TITLE] "Listing title, defaults to the recipe name"))
                .arg(arg!(--description <DESCRIPTION> "Listing description"))
                .arg(arg!(--price <PRICE> "Listing price"))
                .arg(arg!(--"image-link" [URL] "Link to an image for the listing"))
                .arg(
                    arg!(--"image-file" [PATH] "Local image file for the listing")
                        .conflicts_with("image-link"),
                ),
        )
        .subcommand_required(true)
        .arg_required_else_help(true)
}

fn main() {
    let matches = create_app().get_matches();
    let level = if matches.is_present("verbose") {
        Level::DEBUG
    } else {
        Level::INFO
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(level)
        .init();

    let result = match matches.subcommand() {
        Some(("fees", matches)) => {
            // The PRICE argument is required so if we made it here then it's present.
            let price = matches.value_of("PRICE").unwrap_or_default();
            cli::fees(price).map(|breakdown| print!("{}", cli::format_breakdown(&breakdown)))
        }
        Some(("draft", matches)) => {
            let args = cli::DraftArgs {
                recipe: matches.value_of("recipe").map(PathBuf::from),
                name: matches.value_of("name").map(str::to_owned),
                title: matches.value_of("title").map(str::to_owned),
                description: matches.value_of("description").unwrap_or_default().to_owned(),
                price: matches.value_of("price").unwrap_or_default().to_owned(),
                image_link: matches.value_of("image-link").map(str::to_owned),
                image_file: matches.value_of("image-file").map(PathBuf::from),
            };
            cli::draft(args).and_then(|submission| cli::output_submission(&submission))
        }
        _ => unreachable!("clap requires a subcommand"),
    };
    if let Err(err) = result {
        error!(%err, "storefront command failed");
        eprintln!("{}", err);
        exit(1);
    }
}
