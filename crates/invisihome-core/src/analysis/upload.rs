use std::path::{Path, PathBuf};

use thiserror::Error;

/// Extensions offered by the upload picker.
pub const ACCEPTED_EXTENSIONS: [&str; 4] = ["csv", "json", "xlsx", "xls"];

#[derive(Error, Debug)]
pub enum UploadError {
    #[error("No file path given")]
    EmptyPath,

    #[error("Unsupported file type: {0} (use CSV, JSON or Excel)")]
    UnsupportedType(String),

    #[error("Not a file: {0}")]
    NotAFile(String),

    #[error("Cannot read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// A selected data file. Only its name and size are known; the content is
/// never opened.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadedFile {
    pub name: String,
    pub path: PathBuf,
    pub size_bytes: u64,
}

impl UploadedFile {
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, UploadError> {
        let path = path.as_ref();
        let display = path.display().to_string();
        if display.trim().is_empty() {
            return Err(UploadError::EmptyPath);
        }

        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase())
            .unwrap_or_default();
        if !ACCEPTED_EXTENSIONS.contains(&extension.as_str()) {
            return Err(UploadError::UnsupportedType(display));
        }

        let metadata = std::fs::metadata(path).map_err(|source| UploadError::Io {
            path: display.clone(),
            source,
        })?;
        if !metadata.is_file() {
            return Err(UploadError::NotAFile(display));
        }

        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or(display);

        Ok(Self {
            name,
            path: path.to_path_buf(),
            size_bytes: metadata.len(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_from_path_reads_metadata_only() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("wards.csv");
        let mut file = std::fs::File::create(&path).expect("create");
        file.write_all(&[b'x'; 2048]).expect("write");

        let upload = UploadedFile::from_path(&path).expect("upload");
        assert_eq!(upload.name, "wards.csv");
        assert_eq!(upload.size_bytes, 2048);
        assert_eq!(crate::utils::format_kb(upload.size_bytes), "2.0 KB");
    }

    #[test]
    fn test_extension_case_insensitive() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("survey.XLSX");
        std::fs::write(&path, b"").expect("write");
        assert!(UploadedFile::from_path(&path).is_ok());
    }

    #[test]
    fn test_rejects_unsupported_extension() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("notes.txt");
        std::fs::write(&path, b"hello").expect("write");
        assert!(matches!(
            UploadedFile::from_path(&path),
            Err(UploadError::UnsupportedType(_))
        ));
    }

    #[test]
    fn test_rejects_missing_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("missing.json");
        assert!(matches!(UploadedFile::from_path(&path), Err(UploadError::Io { .. })));
    }

    #[test]
    fn test_rejects_directory_and_empty() {
        let dir = tempfile::tempdir().expect("tempdir");
        let sub = dir.path().join("data.csv");
        std::fs::create_dir(&sub).expect("mkdir");
        assert!(matches!(UploadedFile::from_path(&sub), Err(UploadError::NotAFile(_))));
        assert!(matches!(UploadedFile::from_path(""), Err(UploadError::EmptyPath)));
    }
}
