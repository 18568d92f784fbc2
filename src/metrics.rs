/// Running totals across tag builds
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Metrics {
    /// Tags rendered
    pub count: usize,
    /// `srcset` candidates written
    pub sources: usize,
    /// Size tiers dropped because the asset had no usable rendition
    pub skipped: usize,
}
