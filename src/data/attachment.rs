use std::collections::HashMap;

use crate::media::ResolvedImage;

/// Size name that always refers to the original upload
pub const FULL_SIZE: &str = "full";

/// An uploaded image and the renditions generated from it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Attachment {
    pub full: ResolvedImage,
    #[serde(default)]
    pub sizes: HashMap<String, ResolvedImage>,
}

impl Attachment {
    pub fn resolve(&self, size: &str) -> Option<ResolvedImage> {
        if size == FULL_SIZE {
            Some(self.full.clone())
        } else {
            self.sizes.get(size).cloned()
        }
    }
}
