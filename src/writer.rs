use crate::error::BridgeError;
use crate::model::Model;
use std::fs;
use std::path::PathBuf;
use tracing::debug;

/// Cosmetic comment line at the top of every artifact; the engine treats
/// `#` lines as comments.
const MODEL_COMMENT: &str = "# Auto-generated combinatorial model";

/// Produces one fresh, collision-free path per model artifact. Injectable
/// so tests can control and inspect artifact naming.
pub trait PathProvider {
    fn provide(&self) -> std::io::Result<PathBuf>;
}

/// Default provider: a uniquely named file under the system temp directory,
/// persisted so the artifact outlives the engine invocation that follows.
/// Nothing here deletes it; reclamation is the host environment's concern.
pub struct TempPathProvider;

impl PathProvider for TempPathProvider {
    fn provide(&self) -> std::io::Result<PathBuf> {
        let file = tempfile::Builder::new()
            .prefix("pict-model-")
            .suffix(".txt")
            .tempfile()?;
        // keep() disables delete-on-drop; the engine reads this path after
        // the writer returns.
        let (_, path) = file.keep().map_err(|e| e.error)?;
        Ok(path)
    }
}

/// Serializes models into the engine's flat model-file grammar.
pub struct ModelWriter {
    paths: Box<dyn PathProvider>,
}

impl ModelWriter {
    pub fn new() -> Self {
        ModelWriter::with_provider(Box::new(TempPathProvider))
    }

    pub fn with_provider(paths: Box<dyn PathProvider>) -> Self {
        ModelWriter { paths }
    }

    /// Write `model` to a freshly provided path and return that path.
    /// Categories and values land in exactly the order they were supplied.
    pub fn write(&self, model: &Model) -> Result<PathBuf, BridgeError> {
        let path = self.paths.provide()?;
        fs::write(&path, render(model))?;
        debug!(
            path = %path.display(),
            categories = model.categories().len(),
            "wrote model file"
        );
        Ok(path)
    }
}

impl Default for ModelWriter {
    fn default() -> Self {
        ModelWriter::new()
    }
}

/// Render the model grammar: the comment line, then one
/// `<name>: <v1>,<v2>,...,<vN>` line per category.
pub fn render(model: &Model) -> String {
    let mut out = String::from(MODEL_COMMENT);
    out.push('\n');
    for category in model.categories() {
        out.push_str(&category.name);
        out.push_str(": ");
        out.push_str(&category.values.join(","));
        out.push('\n');
    }
    out
}
