mod attachment;
mod settings;

pub use attachment::Attachment;
pub use settings::{AdditionalSize, SizeSettings};

use crate::error::AppError;
use crate::media::{AssetId, MediaLibrary, ResolvedImage};
use crate::variant::VariantRegistry;

use std::collections::HashMap;
use std::fs::read_to_string;
use std::path::Path;

/// Everything the tag builder needs from the host, read once from JSON
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct HostSnapshot {
    #[serde(default)]
    pub options: SizeSettings,
    /// Registered size names, in registration order
    #[serde(default)]
    pub intermediate_sizes: Vec<String>,
    #[serde(default)]
    pub additional_sizes: HashMap<String, AdditionalSize>,
    #[serde(default)]
    pub attachments: HashMap<AssetId, Attachment>,
}

impl HostSnapshot {
    pub fn from_path(path: &Path) -> Result<Self, AppError> {
        debug!("Reading host snapshot from {}", path.to_string_lossy());
        let snapshot: Self = serde_json::from_str(&read_to_string(path)?)?;
        debug!(
            "Loaded {} attachments and {} registered sizes",
            snapshot.attachments.len(),
            snapshot.intermediate_sizes.len()
        );
        Ok(snapshot)
    }

    pub fn variant_registry(&self) -> VariantRegistry {
        VariantRegistry::new(
            self.intermediate_sizes.clone(),
            self.options.standard_widths(),
            self.additional_sizes
                .iter()
                .map(|(name, size)| (name.to_owned(), size.width))
                .collect(),
        )
    }
}

impl MediaLibrary for HostSnapshot {
    fn resolve_asset_at_size(&self, asset_id: AssetId, size: &str) -> Option<ResolvedImage> {
        self.attachments
            .get(&asset_id)
            .and_then(|attachment| attachment.resolve(size))
    }
}
