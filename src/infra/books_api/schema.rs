//! Response schema of the volumes search endpoint and its mapping into `SearchResult`.
//!
//! Every field is optional on the wire; absent pieces map to empty strings.

use crate::domain::book::SearchResult;
use serde::Deserialize;

const ISBN_13: &str = "ISBN_13";
const ISBN_10: &str = "ISBN_10";

#[derive(Deserialize, Debug, Default)]
pub struct VolumesResponse {
    #[serde(default)]
    pub items: Vec<Volume>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct Volume {
    #[serde(default)]
    pub volume_info: VolumeInfo,
}

#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct VolumeInfo {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub authors: Vec<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub industry_identifiers: Vec<IndustryIdentifier>,
    #[serde(default)]
    pub image_links: Option<ImageLinks>,
}

#[derive(Deserialize, Debug)]
pub struct IndustryIdentifier {
    #[serde(rename = "type")]
    pub kind: String,
    pub identifier: String,
}

#[derive(Deserialize, Debug, Default)]
pub struct ImageLinks {
    #[serde(default)]
    pub thumbnail: Option<String>,
}

impl VolumeInfo {
    /// First ISBN-13, else first ISBN-10, else empty.
    pub fn preferred_isbn(&self) -> String {
        let first_of = |kind: &str| {
            self.industry_identifiers
                .iter()
                .find(|id| id.kind == kind)
                .map(|id| id.identifier.clone())
        };
        first_of(ISBN_13)
            .or_else(|| first_of(ISBN_10))
            .unwrap_or_default()
    }
}

pub fn map_volume(volume: &Volume) -> SearchResult {
    let info = &volume.volume_info;
    SearchResult {
        title: info.title.clone().unwrap_or_default(),
        author: info.authors.join(", "),
        isbn: info.preferred_isbn(),
        summary: info.description.clone().unwrap_or_default(),
        thumbnail_url: info
            .image_links
            .as_ref()
            .and_then(|links| links.thumbnail.clone())
            .unwrap_or_default(),
    }
}

/// Maps every item, dropping results without a usable title.
pub fn map_response(response: &VolumesResponse) -> Vec<SearchResult> {
    response
        .items
        .iter()
        .map(map_volume)
        .filter(|r| !r.title.trim().is_empty())
        .collect()
}
