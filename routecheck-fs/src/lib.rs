//! Filesystem helpers for reading solution documents, built on `cap-std`
//! and `camino`.
#![forbid(unsafe_code)]

use camino::Utf8Path;
use cap_std::{ambient_authority, fs_utf8};
use std::io;

/// Open a UTF-8 file path using ambient authority.
///
/// # Errors
/// Propagates the I/O error raised while opening `path`.
pub fn open_utf8_file(path: &Utf8Path) -> io::Result<fs_utf8::File> {
    fs_utf8::File::open_ambient(path, ambient_authority())
}

/// Open the directory holding `path` and return it with the file name.
///
/// A bare file name resolves against the current directory.
///
/// # Errors
/// Fails when `path` has no file name or its parent cannot be opened.
pub fn open_dir_and_file(path: &Utf8Path) -> io::Result<(fs_utf8::Dir, String)> {
    let parent = match path.parent() {
        Some(parent) if !parent.as_str().is_empty() => parent,
        _ => Utf8Path::new("."),
    };
    let file_name = path
        .file_name()
        .ok_or_else(|| io::Error::other("document path should include a file name"))?
        .to_owned();
    let dir = fs_utf8::Dir::open_ambient_dir(parent, ambient_authority())?;
    Ok((dir, file_name))
}

/// Return whether a path exists and is a regular file using capability-based IO.
///
/// # Errors
/// Returns [`io::ErrorKind::NotFound`] when the file or its parent directory
/// is missing, and any other error raised while reading metadata.
pub fn file_is_file(path: &Utf8Path) -> io::Result<bool> {
    let (dir, name) = open_dir_and_file(path)?;
    dir.metadata(name.as_str()).map(|meta| meta.is_file())
}

#[cfg(test)]
mod tests {
    use super::*;
    use camino::Utf8PathBuf;
    use rstest::{fixture, rstest};
    use std::io::Read;
    use tempfile::TempDir;

    #[fixture]
    fn workdir() -> (TempDir, Utf8PathBuf) {
        let dir = TempDir::new().expect("create temp dir");
        let root = Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).expect("utf-8 temp dir");
        (dir, root)
    }

    #[rstest]
    fn reads_existing_documents(workdir: (TempDir, Utf8PathBuf)) {
        let (_guard, root) = workdir;
        let path = root.join("solution.json");
        std::fs::write(&path, "{}").expect("write document");

        assert!(file_is_file(&path).expect("inspect document"));
        let mut contents = String::new();
        open_utf8_file(&path)
            .expect("open document")
            .read_to_string(&mut contents)
            .expect("read document");
        assert_eq!(contents, "{}");
    }

    #[rstest]
    fn directories_are_not_files(workdir: (TempDir, Utf8PathBuf)) {
        let (_guard, root) = workdir;
        let nested = root.join("nested");
        std::fs::create_dir(&nested).expect("create directory");
        assert!(!file_is_file(&nested).expect("inspect directory"));
    }

    #[rstest]
    fn missing_files_report_not_found(workdir: (TempDir, Utf8PathBuf)) {
        let (_guard, root) = workdir;
        let err = file_is_file(&root.join("absent.json")).expect_err("missing document");
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }

    #[rstest]
    fn bare_names_resolve_in_the_current_directory() {
        let (_dir, name) = open_dir_and_file(Utf8Path::new("solution.json"))
            .expect("current directory is readable");
        assert_eq!(name, "solution.json");
    }
}
