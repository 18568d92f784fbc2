use structopt::StructOpt;

use std::path::PathBuf;

use crate::markup::MissingVariantPolicy;
use crate::media::AssetId;

#[derive(Debug, StructOpt)]
#[structopt(
    name = "Responsive srcset",
    about = "A tool to render responsive srcset image tags from a media library snapshot"
)]
pub enum Options {
    /// Render the <img> tag for an image
    Tag(TagOptions),

    /// List the size tiers that feed srcset
    Variants {
        /// The path to the JSON media library snapshot
        #[structopt(short = "l", long = "library", parse(from_os_str))]
        library: PathBuf,
    },

    /// Patch editor settings so image attributes are not stripped
    Sanitizer {
        /// The path to the editor settings JSON. Starts from empty settings when omitted
        #[structopt(short = "c", long = "config", parse(from_os_str))]
        config: Option<PathBuf>,
    },

    /// Print the script tag for the srcset polyfill
    Script {
        /// The URL the plugin's static files are served from
        #[structopt(short = "b", long = "base-url", default_value = "")]
        base_url: String,
    },
}

#[derive(Debug, StructOpt)]
pub struct TagOptions {
    /// The path to the JSON media library snapshot
    #[structopt(short = "l", long = "library", parse(from_os_str))]
    pub library: PathBuf,

    /// The id of the image in the media library
    #[structopt(short = "i", long = "id")]
    pub id: AssetId,

    /// The size the image is inserted at. Its rendition becomes the fallback src
    #[structopt(short = "s", long = "size", default_value = "full")]
    pub size: String,

    /// The alignment of the image: left, right, center or none
    #[structopt(short = "a", long = "align", default_value = "none")]
    pub align: String,

    /// Alternative text. Left out of the tag when empty
    #[structopt(long = "alt", default_value = "")]
    pub alt: String,

    /// Title text. Left out of the tag when empty
    #[structopt(short = "t", long = "title", default_value = "")]
    pub title: String,

    /// Extra classes to append to the class attribute
    #[structopt(short = "c", long = "class")]
    pub classes: Vec<String>,

    /// What to do with size tiers the image has no rendition for
    #[structopt(
        long = "on-missing-variant",
        default_value = "skip",
        possible_values = &["skip", "warn"]
    )]
    pub on_missing_variant: MissingVariantPolicy,
}
