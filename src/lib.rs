#![warn(clippy::all)]

#[macro_use]
extern crate log;

#[macro_use]
extern crate serde_derive;

pub mod class_hook;
pub mod command_line;
pub mod data;
pub mod error;
pub mod escape;
pub mod markup;
pub mod media;
pub mod metrics;
pub mod sanitizer;
pub mod script;
pub mod source;
pub mod variant;

use crate::class_hook::ExtraClasses;
use crate::command_line::TagOptions;
use crate::data::HostSnapshot;
use crate::error::AppError;
use crate::markup::MarkupBuilder;
use crate::metrics::Metrics;
use crate::variant::{ResolutionVariant, VariantEnumerator};

use serde_json::{Map, Value};
use std::fs::read_to_string;
use std::path::Path;

/// Render the responsive tag described by the command line options
pub fn render_tag(options: &TagOptions) -> Result<String, AppError> {
    let snapshot = HostSnapshot::from_path(&options.library)?;
    let registry = snapshot.variant_registry();
    let class_hook = ExtraClasses(options.classes.clone());
    let builder = MarkupBuilder::new(&snapshot, &registry, &class_hook)
        .with_missing_variant_policy(options.on_missing_variant);

    let mut m = Metrics::default();
    let tag = builder.build_tag_with_metrics(
        options.id,
        &options.alt,
        &options.title,
        &options.align,
        &options.size,
        &mut m,
    )?;
    debug!("{:?}", m);
    Ok(tag)
}

/// The size tiers a snapshot's registry enumerates
pub fn list_variants(library: &Path) -> Result<Vec<ResolutionVariant>, AppError> {
    let snapshot = HostSnapshot::from_path(library)?;
    Ok(snapshot.variant_registry().enumerate_variants())
}

/// Read editor settings (empty when no path is given) and apply the image
/// attribute allowlist
pub fn patch_sanitizer_config(config: Option<&Path>) -> Result<Map<String, Value>, AppError> {
    let settings = match config {
        Some(path) => {
            debug!("Reading editor settings from {}", path.to_string_lossy());
            serde_json::from_str(&read_to_string(path)?)?
        }
        None => Map::new(),
    };
    sanitizer::allow_all_image_attributes(settings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::markup::MissingVariantPolicy;
    use std::path::PathBuf;
    use std::str::FromStr;

    const LIBRARY: &str = "./test/library.json";

    fn init() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    fn tag_options(id: u64, size: &str) -> TagOptions {
        TagOptions {
            library: PathBuf::from_str(LIBRARY).unwrap(),
            id,
            size: size.to_owned(),
            align: "left".to_owned(),
            alt: "A dog".to_owned(),
            title: "".to_owned(),
            classes: vec![],
            on_missing_variant: MissingVariantPolicy::Warn,
        }
    }

    #[test]
    fn test_render_tag_happy_path() {
        init();
        let tag = render_tag(&tag_options(42, "medium")).unwrap();
        assert_eq!(
            tag,
            "<img src=\"https://example.com/uploads/dog-300x200.jpg\" \
             srcset=\"https://example.com/uploads/dog-150x150.jpg 150w, https://example.com/uploads/dog-300x200.jpg 300w, https://example.com/uploads/dog-1024x683.jpg 1024w, https://example.com/uploads/dog-1600x1067.jpg 1600w\" \
             sizes=\"100vw\" class=\"alignleft size-medium wp-image-42\" alt=\"A dog\" />"
        );
    }

    #[test]
    fn test_render_tag_partial_renditions() {
        init();
        let tag = render_tag(&tag_options(7, "full")).unwrap();
        assert!(tag.contains(
            "srcset=\"https://example.com/uploads/cat-150x150.jpg 150w, https://example.com/uploads/cat-300x225.jpg 300w\""
        ));
        assert!(tag.contains("src=\"https://example.com/uploads/cat.jpg\""));
    }

    #[test]
    fn test_render_tag_not_found() {
        init();
        assert!(matches!(
            render_tag(&tag_options(7, "large")),
            Err(AppError::AssetNotFound { .. })
        ));
        assert!(matches!(
            render_tag(&tag_options(999, "full")),
            Err(AppError::AssetNotFound { .. })
        ));
    }

    #[test]
    fn test_list_variants() {
        let variants = list_variants(Path::new(LIBRARY)).unwrap();
        let names: Vec<&str> = variants.iter().map(|v| v.name.as_str()).collect();
        assert_eq!(names, vec!["thumbnail", "medium", "large", "hero"]);
    }

    #[test]
    fn test_patch_sanitizer_config_without_file() {
        let config = patch_sanitizer_config(None).unwrap();
        assert_eq!(
            config.get("extended_valid_elements"),
            Some(&Value::String("img[*]".to_owned()))
        );
    }

    #[test]
    fn test_patch_sanitizer_config_error() {
        assert!(patch_sanitizer_config(Some(Path::new("/tmp/bad/path_again"))).is_err());
    }
}
