#![warn(clippy::all, clippy::pedantic)]
extern crate env_logger;
#[macro_use]
extern crate log;

use anyhow::{Context, Result};
use env_logger::Env;
use itertools::Itertools;
use structopt::StructOpt;

use responsive_srcset::command_line::Options;
use responsive_srcset::script::PICTUREFILL;

///
/// This program renders WordPress style `<img>` tags that carry a `srcset` of every
/// generated rendition of an image, read from a JSON snapshot of the media library.
/// It can also print the editor settings patch and polyfill script tag that those
/// tags need to survive editing and to work in older browsers.
///
fn main() -> Result<()> {
    env_logger::Builder::from_env(Env::new().filter_or("RESPONSIVE_SRCSET_LOG", "info")).init();

    match Options::from_args() {
        Options::Tag(options) => {
            debug!("Rendering tag for image {}", options.id);
            let tag = responsive_srcset::render_tag(&options).with_context(|| {
                format!(
                    "Failed to render tag for image {} from {}",
                    options.id,
                    options.library.to_string_lossy()
                )
            })?;
            println!("{}", tag);
        }
        Options::Variants { library } => {
            let variants = responsive_srcset::list_variants(&library).with_context(|| {
                format!("Failed to read sizes from {}", library.to_string_lossy())
            })?;
            if variants.is_empty() {
                info!("No sizes registered");
            }
            println!(
                "{}",
                variants
                    .iter()
                    .map(|v| format!("{} {}", v.name, v.width))
                    .join("\n")
            );
        }
        Options::Sanitizer { config } => {
            let settings = responsive_srcset::patch_sanitizer_config(config.as_deref())
                .context("Failed to patch editor settings")?;
            println!("{}", serde_json::to_string_pretty(&settings)?);
        }
        Options::Script { base_url } => {
            println!("{}", PICTUREFILL.tag(&base_url));
        }
    }
    Ok(())
}
