use crate::media::ResolvedImage;

/// One `srcset` candidate: a rendition URL and its real width
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceDescriptor {
    pub url: String,
    pub width: u32,
}

impl SourceDescriptor {
    pub fn new(url: String, width: u32) -> Self {
        Self { url, width }
    }

    /// `None` for renditions that would produce a malformed candidate
    pub fn from_resolved(image: ResolvedImage) -> Option<Self> {
        if image.url.is_empty() || image.width == 0 {
            None
        } else {
            Some(Self::new(image.url, image.width))
        }
    }
}

impl std::fmt::Display for SourceDescriptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}w", self.url, self.width)
    }
}
