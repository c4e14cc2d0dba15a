use std::fs;
use std::path::PathBuf;

use thiserror::Error;

use crate::error::EditorError;
use crate::template::Template;

/// Errors from the persistence collaborator.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("template `{0}` not found")]
    NotFound(String),

    #[error("no template loaded")]
    NothingToSave,

    #[error("failed to serialize template: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("storage i/o failed: {0}")]
    Io(#[from] std::io::Error),
}

/// The persistence boundary. The hosted backend lives behind this trait; the
/// editor core only ever hands immutable template snapshots across it.
pub trait TemplateStore {
    fn load(&self, id: &str) -> Result<Template, StoreError>;
    fn save(&self, template: &Template) -> Result<(), StoreError>;
}

/// One pretty-printed JSON file per template id under a base directory.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    dir: PathBuf,
}

impl JsonFileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn path_for(&self, id: &str) -> PathBuf {
        self.dir.join(format!("{id}.json"))
    }
}

impl TemplateStore for JsonFileStore {
    fn load(&self, id: &str) -> Result<Template, StoreError> {
        let path = self.path_for(id);
        if !path.exists() {
            return Err(StoreError::NotFound(id.to_owned()));
        }
        let json = fs::read_to_string(&path)?;
        Ok(serde_json::from_str(&json)?)
    }

    fn save(&self, template: &Template) -> Result<(), StoreError> {
        fs::create_dir_all(&self.dir)?;
        let json = serde_json::to_string_pretty(template)?;
        fs::write(self.path_for(&template.id), json)?;
        log::info!("saved template `{}` ({})", template.name, template.id);
        Ok(())
    }
}

/// Decode an inbound JSON template payload (e.g. one supplied out-of-band
/// when no persisted id is available).
///
/// Element kinds are checked before the full decode so an unknown tag
/// surfaces as [`EditorError::InvalidElementKind`] rather than a generic
/// serde message, and the whole document is rejected. Nothing is applied on
/// failure; the caller's state stays as it was.
pub fn decode_template_payload(json: &str) -> Result<Template, EditorError> {
    let value: serde_json::Value =
        serde_json::from_str(json).map_err(|e| EditorError::MalformedPayload(e.to_string()))?;

    if let Some(elements) = value.get("elements").and_then(|v| v.as_array()) {
        for element in elements {
            let kind = element.get("kind").and_then(|k| k.as_str()).unwrap_or("");
            if !crate::element::KNOWN_KINDS.contains(&kind) {
                return Err(EditorError::InvalidElementKind(kind.to_owned()));
            }
        }
    }

    let mut template: Template =
        serde_json::from_value(value).map_err(|e| EditorError::MalformedPayload(e.to_string()))?;
    template.normalize()?;
    Ok(template)
}
