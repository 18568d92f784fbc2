use std::collections::HashMap;

/// Widths of the standard size tiers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SizeSettings {
    pub thumbnail_size_w: u32,
    pub medium_size_w: u32,
    pub large_size_w: u32,
}

impl Default for SizeSettings {
    fn default() -> Self {
        Self {
            thumbnail_size_w: 150,
            medium_size_w: 300,
            large_size_w: 1024,
        }
    }
}

impl SizeSettings {
    pub fn standard_widths(&self) -> HashMap<String, u32> {
        [
            ("thumbnail", self.thumbnail_size_w),
            ("medium", self.medium_size_w),
            ("large", self.large_size_w),
        ]
        .iter()
        .map(|(name, width)| (name.to_string(), *width))
        .collect()
    }
}

/// A custom size registration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdditionalSize {
    pub width: u32,
    #[serde(default)]
    pub height: u32,
    #[serde(default)]
    pub crop: bool,
}
