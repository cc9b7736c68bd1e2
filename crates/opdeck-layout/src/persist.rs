//! Panel widths persisted as a flat JSON object of panel id to pixels.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use opdeck_common::PersistError;
use tracing::{debug, warn};

use crate::geometry::WidthSink;

/// The widths file, mirrored in memory. Each committed width rewrites it.
#[derive(Debug, Clone)]
pub struct PanelWidthFile {
    path: PathBuf,
    widths: BTreeMap<String, f64>,
}

impl PanelWidthFile {
    /// Read the file at `path`. A missing file yields an empty set.
    pub fn load(path: impl Into<PathBuf>) -> Result<Self, PersistError> {
        let path = path.into();
        let widths = match std::fs::read_to_string(&path) {
            Ok(content) => serde_json::from_str(&content)?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "no persisted panel widths");
                BTreeMap::new()
            }
            Err(e) => return Err(e.into()),
        };
        Ok(Self { path, widths })
    }

    /// Like [`load`](Self::load), but an unreadable or corrupt file is
    /// logged and treated as empty so the layout still comes up.
    pub fn load_or_empty(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        match Self::load(path.clone()) {
            Ok(file) => file,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "discarding unreadable panel widths");
                Self {
                    path,
                    widths: BTreeMap::new(),
                }
            }
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn widths(&self) -> &BTreeMap<String, f64> {
        &self.widths
    }

    pub fn save(&self) -> Result<(), PersistError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(&self.widths)?;
        std::fs::write(&self.path, json)?;
        Ok(())
    }
}

impl WidthSink for PanelWidthFile {
    fn width_committed(&mut self, panel_id: &str, width: f64) {
        self.widths.insert(panel_id.to_string(), width);
        if let Err(e) = self.save() {
            warn!(path = %self.path.display(), error = %e, "failed to persist panel widths");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::PanelGeometryStore;
    use opdeck_config::schema::{PanelDescriptor, PanelPosition};

    #[test]
    fn missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let file = PanelWidthFile::load(dir.path().join("widths.json")).unwrap();
        assert!(file.widths().is_empty());
    }

    #[test]
    fn corrupt_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("widths.json");
        std::fs::write(&path, "{not json").unwrap();
        assert!(matches!(
            PanelWidthFile::load(&path),
            Err(PersistError::Serde(_))
        ));
        assert!(PanelWidthFile::load_or_empty(&path).widths().is_empty());
    }

    #[test]
    fn committed_widths_survive_reload() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("widths.json");
        let panels = vec![
            PanelDescriptor::sized("file-explorer", PanelPosition::Left, 280.0, 200.0, 600.0),
            PanelDescriptor::main("main"),
        ];

        let file = PanelWidthFile::load(&path).unwrap();
        let mut store = PanelGeometryStore::new(&panels)
            .unwrap()
            .with_persisted(file.widths())
            .with_sink(Box::new(file));
        store.begin_drag("file-explorer", 0.0).unwrap();
        store.pointer_move(60.0);
        store.pointer_up();

        let reloaded = PanelWidthFile::load(&path).unwrap();
        assert_eq!(reloaded.widths().get("file-explorer"), Some(&340.0));

        let store = PanelGeometryStore::new(&panels)
            .unwrap()
            .with_persisted(reloaded.widths());
        assert_eq!(store.width("file-explorer"), Some(340.0));
    }
}
