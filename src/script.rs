use crate::escape::escape_attribute;

/// A client-side script the rendered pages depend on
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptAsset {
    pub handle: &'static str,
    pub path: &'static str,
    pub version: &'static str,
    /// Load after the page content instead of in the document head
    pub in_footer: bool,
}

/// Polyfill that lets browsers without `srcset` support pick a candidate
pub const PICTUREFILL: ScriptAsset = ScriptAsset {
    handle: "picturefill",
    path: "js/picturefill.min.js",
    version: "2.1.0",
    in_footer: true,
};

impl ScriptAsset {
    /// Versioned URL of the script under `base_url`
    pub fn url(&self, base_url: &str) -> String {
        let base_url = base_url.trim_end_matches('/');
        if base_url.is_empty() {
            format!("{}?ver={}", self.path, self.version)
        } else {
            format!("{}/{}?ver={}", base_url, self.path, self.version)
        }
    }

    pub fn tag(&self, base_url: &str) -> String {
        format!(
            "<script type=\"text/javascript\" src=\"{}\"{}></script>",
            escape_attribute(&self.url(base_url)),
            if self.in_footer { " defer" } else { "" }
        )
    }
}
