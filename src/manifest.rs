use serde::{Deserialize, Serialize};

use crate::generator::GeneratedIcon;

/// An entry of the `icons` array in a web app manifest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManifestIcon {
    pub src: String,
    pub sizes: String,
    #[serde(rename = "type")]
    pub mime_type: String,
}

pub fn manifest_icons(icons: &[GeneratedIcon], prefix: &str) -> Vec<ManifestIcon> {
    let prefix = prefix.trim_end_matches('/');
    icons
        .iter()
        .map(|icon| ManifestIcon {
            src: format!("{}/{}", prefix, icon.file_name()),
            sizes: format!("{}x{}", icon.size, icon.size),
            mime_type: "image/png".to_string(),
        })
        .collect()
}

pub fn to_json(entries: &[ManifestIcon]) -> String {
    serde_json::to_string_pretty(entries).unwrap_or_else(|_| "[]".into())
}
