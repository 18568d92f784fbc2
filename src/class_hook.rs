use crate::media::AssetId;

/// Extension point for the `class` attribute of a generated tag.
///
/// Receives the composed base class along with the inputs it was built from
/// and returns the value to use. Whatever it returns is used verbatim.
pub trait ClassHook {
    fn extend_class(&self, class: &str, asset_id: AssetId, align: &str, size: &str) -> String;
}

/// Leaves the class untouched
#[derive(Debug, Default, Clone, Copy)]
pub struct NoClassHook;

impl ClassHook for NoClassHook {
    fn extend_class(&self, class: &str, _: AssetId, _: &str, _: &str) -> String {
        class.to_owned()
    }
}

/// Appends a fixed list of classes
#[derive(Debug, Default, Clone)]
pub struct ExtraClasses(pub Vec<String>);

impl ClassHook for ExtraClasses {
    fn extend_class(&self, class: &str, _: AssetId, _: &str, _: &str) -> String {
        std::iter::once(class)
            .chain(self.0.iter().map(String::as_str).filter(|c| !c.is_empty()))
            .collect::<Vec<&str>>()
            .join(" ")
    }
}

impl<F> ClassHook for F
where
    F: Fn(&str, AssetId, &str, &str) -> String,
{
    fn extend_class(&self, class: &str, asset_id: AssetId, align: &str, size: &str) -> String {
        self(class, asset_id, align, size)
    }
}
