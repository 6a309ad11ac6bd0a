use std::path::Path;

use tempfile::NamedTempFile;
use uuid::Uuid;

use crate::domain::common::entities::app_errors::CoreError;

/// Local copy of an upload, named `{file_id}_{file_name}`.
///
/// The file is removed when the guard is dropped. `discard` removes it
/// eagerly and logs a failed removal.
#[derive(Debug)]
pub struct TransientUpload {
    file: NamedTempFile,
}

impl TransientUpload {
    pub async fn persist(
        dir: &Path,
        file_id: Uuid,
        file_name: &str,
        data: &[u8],
    ) -> Result<Self, CoreError> {
        let file = tempfile::Builder::new()
            .prefix(&format!("{}_", file_id))
            .suffix(file_name)
            .rand_bytes(0)
            .tempfile_in(dir)
            .map_err(|e| {
                tracing::error!(dir = %dir.display(), "Failed to create transient file: {}", e);
                CoreError::TransientFileError(format!("Failed to create transient file: {}", e))
            })?;

        tokio::fs::write(file.path(), data).await.map_err(|e| {
            tracing::error!(path = %file.path().display(), "Failed to write transient file: {}", e);
            CoreError::TransientFileError(format!("Failed to write transient file: {}", e))
        })?;

        tracing::debug!(path = %file.path().display(), size = data.len(), "Transient file written");

        Ok(Self { file })
    }

    pub fn path(&self) -> &Path {
        self.file.path()
    }

    pub fn discard(self) {
        let path = self.file.path().to_path_buf();
        match self.file.close() {
            Ok(()) => tracing::debug!(path = %path.display(), "Transient file removed"),
            Err(e) => tracing::warn!(path = %path.display(), "Failed to remove transient file: {}", e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_persist_writes_named_file() {
        let dir = tempfile::tempdir().unwrap();
        let file_id = Uuid::new_v4();

        let upload = TransientUpload::persist(dir.path(), file_id, "apple.png", b"png-bytes")
            .await
            .unwrap();

        assert_eq!(
            upload.path().file_name().unwrap().to_str().unwrap(),
            format!("{}_apple.png", file_id)
        );
        assert_eq!(std::fs::read(upload.path()).unwrap(), b"png-bytes");
    }

    #[tokio::test]
    async fn test_discard_and_drop_remove_file() {
        let dir = tempfile::tempdir().unwrap();

        let upload = TransientUpload::persist(dir.path(), Uuid::new_v4(), "a.png", b"a")
            .await
            .unwrap();
        let path = upload.path().to_path_buf();
        upload.discard();
        assert!(!path.exists());

        let upload = TransientUpload::persist(dir.path(), Uuid::new_v4(), "b.png", b"b")
            .await
            .unwrap();
        let path = upload.path().to_path_buf();
        drop(upload);
        assert!(!path.exists());
    }

    #[tokio::test]
    async fn test_persist_into_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing");

        let err = TransientUpload::persist(&missing, Uuid::new_v4(), "a.png", b"a")
            .await
            .unwrap_err();
        assert!(matches!(err, CoreError::TransientFileError(_)));
    }
}
