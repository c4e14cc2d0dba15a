use serde::{Deserialize, Serialize};

use super::common::ElementCommon;

/// An image placed by reference. The editor never fetches or decodes the
/// bytes; `image_url` is carried through to whatever renders the final
/// design.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageElement {
    #[serde(flatten)]
    pub common: ElementCommon,
    pub image_url: String,
}

impl ImageElement {
    pub(crate) fn validate(&self) -> Result<(), String> {
        self.common.validate()
    }
}
