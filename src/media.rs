/// Identifier of an image stored in the host's media library
pub type AssetId = u64;

/// A single rendition of an asset, as reported by the media library.
///
/// `width` is the real width of the file on disk, which can differ from the
/// width configured for the size it was generated for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedImage {
    pub url: String,
    pub width: u32,
    pub height: u32,
}

impl ResolvedImage {
    pub fn new(url: String, width: u32, height: u32) -> Self {
        Self { url, width, height }
    }
}

/// Read-only lookup of asset renditions
pub trait MediaLibrary {
    /// Resolve `asset_id` at the named size. `None` when either the asset or
    /// that rendition is unknown.
    fn resolve_asset_at_size(&self, asset_id: AssetId, size: &str) -> Option<ResolvedImage>;
}

impl<F> MediaLibrary for F
where
    F: Fn(AssetId, &str) -> Option<ResolvedImage>,
{
    fn resolve_asset_at_size(&self, asset_id: AssetId, size: &str) -> Option<ResolvedImage> {
        self(asset_id, size)
    }
}
