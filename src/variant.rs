use std::collections::HashMap;

use itertools::Itertools;

/// The size tiers whose widths live in scalar settings rather than in the
/// custom size registrations.
pub const STANDARD_SIZES: &[&str] = &["thumbnail", "medium", "large"];

/// A named size tier and the width it was configured with
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolutionVariant {
    pub name: String,
    pub width: u32,
}

impl ResolutionVariant {
    pub fn new(name: String, width: u32) -> Self {
        Self { name, width }
    }
}

pub trait VariantEnumerator {
    /// All usable size tiers, in registration order
    fn enumerate_variants(&self) -> Vec<ResolutionVariant>;
}

/// Immutable copy of the host's size configuration taken at call time.
#[derive(Debug, Clone, Default)]
pub struct VariantRegistry {
    registered: Vec<String>,
    standard_widths: HashMap<String, u32>,
    custom_widths: HashMap<String, u32>,
}

impl VariantRegistry {
    pub fn new(
        registered: Vec<String>,
        standard_widths: HashMap<String, u32>,
        custom_widths: HashMap<String, u32>,
    ) -> Self {
        Self {
            registered,
            standard_widths,
            custom_widths,
        }
    }

    fn width_for(&self, name: &str) -> Option<u32> {
        if STANDARD_SIZES.contains(&name) {
            // Standard tiers always exist; an unset width reads as zero
            Some(self.standard_widths.get(name).copied().unwrap_or_default())
        } else {
            self.custom_widths.get(name).copied()
        }
    }
}

impl VariantEnumerator for VariantRegistry {
    fn enumerate_variants(&self) -> Vec<ResolutionVariant> {
        self.registered
            .iter()
            .unique()
            .filter_map(|name| match self.width_for(name) {
                Some(width) => Some(ResolutionVariant::new(name.to_owned(), width)),
                None => {
                    debug!("Ignoring size \"{}\" with no known width", name);
                    None
                }
            })
            .collect()
    }
}

impl VariantEnumerator for Vec<ResolutionVariant> {
    fn enumerate_variants(&self) -> Vec<ResolutionVariant> {
        self.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn init() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    fn registry(registered: &[&str]) -> VariantRegistry {
        let standard = [("thumbnail", 150), ("medium", 300), ("large", 1024)]
            .iter()
            .map(|(k, v)| (k.to_string(), *v))
            .collect();
        let custom = [("hero", 1600), ("card", 640)]
            .iter()
            .map(|(k, v)| (k.to_string(), *v))
            .collect();
        VariantRegistry::new(
            registered.iter().map(|s| s.to_string()).collect(),
            standard,
            custom,
        )
    }

    #[test]
    fn test_enumerate_standard_and_custom_in_order() {
        init();
        let variants = registry(&["thumbnail", "hero", "medium", "large", "card"]).enumerate_variants();
        assert_eq!(
            variants,
            vec![
                ResolutionVariant::new("thumbnail".to_owned(), 150),
                ResolutionVariant::new("hero".to_owned(), 1600),
                ResolutionVariant::new("medium".to_owned(), 300),
                ResolutionVariant::new("large".to_owned(), 1024),
                ResolutionVariant::new("card".to_owned(), 640),
            ]
        );
    }

    #[test]
    fn test_unknown_names_are_skipped() {
        init();
        let variants = registry(&["medium", "post-thumbnail", "large"]).enumerate_variants();
        let names: Vec<&str> = variants.iter().map(|v| v.name.as_str()).collect();
        assert_eq!(names, vec!["medium", "large"]);
    }

    #[test]
    fn test_empty_registry_is_empty() {
        assert!(registry(&[]).enumerate_variants().is_empty());
        assert!(VariantRegistry::default().enumerate_variants().is_empty());
    }

    #[test]
    fn test_duplicate_names_keep_first_position() {
        let variants = registry(&["large", "medium", "large"]).enumerate_variants();
        let names: Vec<&str> = variants.iter().map(|v| v.name.as_str()).collect();
        assert_eq!(names, vec!["large", "medium"]);
    }

    #[test]
    fn test_standard_size_without_setting_reads_zero() {
        let registry = VariantRegistry::new(
            vec!["medium".to_owned()],
            HashMap::new(),
            HashMap::new(),
        );
        assert_eq!(
            registry.enumerate_variants(),
            vec![ResolutionVariant::new("medium".to_owned(), 0)]
        );
    }
}
