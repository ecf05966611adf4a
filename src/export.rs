use crate::error::ExportError;
use crate::form::{BotSettings, slugify};
use crate::workflow::WorkflowDocument;
use std::fs;
use std::path::{Path, PathBuf};

/// Serializes the document to two-space-indented JSON, the shape n8n's own
/// editor exports.
pub fn to_pretty_json(document: &WorkflowDocument) -> Result<String, ExportError> {
    Ok(serde_json::to_string_pretty(document)?)
}

/// The download filename: the automation-name slug (or `workflow` when the slug
/// is empty) with a `.json` extension.
pub fn export_filename(settings: &BotSettings) -> String {
    let slug = slugify(&settings.automation_name);
    if slug.is_empty() {
        "workflow.json".to_string()
    } else {
        format!("{slug}.json")
    }
}

/// Writes the serialized document into `dir` under the derived filename and
/// returns the full path.
pub fn write_workflow_file(
    document: &WorkflowDocument,
    dir: &Path,
    settings: &BotSettings,
) -> Result<PathBuf, ExportError> {
    let path = dir.join(export_filename(settings));
    let json = to_pretty_json(document)?;
    fs::write(&path, json).map_err(|e| ExportError::Io {
        path: path.display().to_string(),
        source: e,
    })?;
    Ok(path)
}
