//! Test helpers for writing solution documents into a scratch directory.

use camino::{Utf8Path, Utf8PathBuf};
use routecheck_core::Document;
use tempfile::TempDir;

pub(super) fn write_utf8(path: &Utf8Path, contents: &[u8]) {
    std::fs::write(path.as_std_path(), contents).expect("write fixture file");
}

/// Scratch directory removed when dropped.
#[derive(Debug)]
pub(super) struct Workspace {
    _dir: TempDir,
    root: Utf8PathBuf,
}

impl Workspace {
    pub(super) fn new() -> Self {
        let dir = TempDir::new().expect("tempdir");
        let root = Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).expect("utf-8 workspace");
        Self { _dir: dir, root }
    }

    pub(super) fn path(&self, name: &str) -> Utf8PathBuf {
        self.root.join(name)
    }

    pub(super) fn write_document(&self, name: &str, document: &Document) -> Utf8PathBuf {
        let path = self.path(name);
        let payload = serde_json::to_vec_pretty(document).expect("serialise document");
        write_utf8(&path, &payload);
        path
    }
}
