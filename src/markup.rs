use crate::class_hook::ClassHook;
use crate::error::AppError;
use crate::escape::escape_attribute;
use crate::media::{AssetId, MediaLibrary};
use crate::metrics::Metrics;
use crate::source::SourceDescriptor;
use crate::variant::VariantEnumerator;

use itertools::Itertools;

/// Every tag is sized against the full viewport width
pub const SIZES: &str = "100vw";

/// What to do when a size tier has no usable rendition for an asset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MissingVariantPolicy {
    /// Drop the candidate without a word
    #[default]
    Skip,
    /// Drop the candidate and log a warning
    Warn,
}

impl std::str::FromStr for MissingVariantPolicy {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "skip" => Ok(Self::Skip),
            "warn" => Ok(Self::Warn),
            _ => Err(AppError::InvalidPolicy(s.to_owned())),
        }
    }
}

/// Attribute name/value pairs, serialized in insertion order
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct MarkupAttributes(Vec<(&'static str, String)>);

impl MarkupAttributes {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: &'static str, value: String) {
        self.0.push((name, value));
    }

    /// Insert only when `value` is non-empty
    pub fn insert_non_empty(&mut self, name: &'static str, value: &str) {
        if !value.is_empty() {
            self.insert(name, value.to_owned());
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.0.iter().map(|(n, _)| *n).collect()
    }

    /// Render as a self-closing `<img>` element, escaping every value
    pub fn to_img_tag(&self) -> String {
        let attributes = self
            .0
            .iter()
            .map(|(name, value)| format!("{}=\"{}\"", name, escape_attribute(value)))
            .join(" ");
        format!("<img {} />", attributes)
    }
}

/// Builds responsive `<img>` tags from an asset and its available renditions.
///
/// The builder holds no state of its own; each call reads the collaborators
/// it was given and nothing else.
pub struct MarkupBuilder<'a> {
    library: &'a dyn MediaLibrary,
    variants: &'a dyn VariantEnumerator,
    class_hook: &'a dyn ClassHook,
    missing_variant: MissingVariantPolicy,
}

impl<'a> MarkupBuilder<'a> {
    pub fn new(
        library: &'a dyn MediaLibrary,
        variants: &'a dyn VariantEnumerator,
        class_hook: &'a dyn ClassHook,
    ) -> Self {
        Self {
            library,
            variants,
            class_hook,
            missing_variant: MissingVariantPolicy::default(),
        }
    }

    pub fn with_missing_variant_policy(self, missing_variant: MissingVariantPolicy) -> Self {
        Self {
            missing_variant,
            ..self
        }
    }

    /// Render the tag for `asset_id` displayed at `size`.
    ///
    /// Fails with [`AppError::AssetNotFound`] when the asset has no rendition
    /// at `size`. Empty `alt` or `title` values leave the attribute out.
    pub fn build_tag(
        &self,
        asset_id: AssetId,
        alt: &str,
        title: &str,
        align: &str,
        size: &str,
    ) -> Result<String, AppError> {
        self.build_tag_with_metrics(asset_id, alt, title, align, size, &mut Metrics::default())
    }

    pub fn build_tag_with_metrics(
        &self,
        asset_id: AssetId,
        alt: &str,
        title: &str,
        align: &str,
        size: &str,
        m: &mut Metrics,
    ) -> Result<String, AppError> {
        let attributes = self.build_attributes(asset_id, alt, title, align, size, m)?;
        m.count += 1;
        Ok(attributes.to_img_tag())
    }

    /// The unescaped attributes for a tag, in serialization order
    pub fn build_attributes(
        &self,
        asset_id: AssetId,
        alt: &str,
        title: &str,
        align: &str,
        size: &str,
        m: &mut Metrics,
    ) -> Result<MarkupAttributes, AppError> {
        let fallback = self
            .library
            .resolve_asset_at_size(asset_id, size)
            .filter(|image| !image.url.is_empty())
            .ok_or_else(|| AppError::AssetNotFound {
                asset_id,
                size: size.to_owned(),
            })?;

        let sources = self.sources(asset_id, m);
        m.sources += sources.len();

        let class = format!("align{} size-{} wp-image-{}", align, size, asset_id);
        let class = self.class_hook.extend_class(&class, asset_id, align, size);

        let mut attributes = MarkupAttributes::new();
        attributes.insert("src", fallback.url);
        attributes.insert("srcset", sources.iter().join(", "));
        attributes.insert("sizes", SIZES.to_owned());
        attributes.insert("class", class);
        attributes.insert_non_empty("alt", alt);
        attributes.insert_non_empty("title", title);
        Ok(attributes)
    }

    fn sources(&self, asset_id: AssetId, m: &mut Metrics) -> Vec<SourceDescriptor> {
        self.variants
            .enumerate_variants()
            .into_iter()
            .filter_map(|variant| {
                let source = self
                    .library
                    .resolve_asset_at_size(asset_id, &variant.name)
                    .and_then(SourceDescriptor::from_resolved);
                if source.is_none() {
                    m.skipped += 1;
                    match self.missing_variant {
                        MissingVariantPolicy::Skip => debug!(
                            "Image {} has no \"{}\" rendition",
                            asset_id, variant.name
                        ),
                        MissingVariantPolicy::Warn => warn!(
                            "Image {} has no \"{}\" rendition ({}w), leaving it out of srcset",
                            asset_id, variant.name, variant.width
                        ),
                    }
                }
                source
            })
            .collect()
    }
}
