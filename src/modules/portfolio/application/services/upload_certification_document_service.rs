use async_trait::async_trait;
use std::sync::Arc;
use tracing::{info, warn};
use uuid::Uuid;

use crate::media::application::domain::upload_policy::is_image_extension;
use crate::media::application::domain::{UploadKind, UploadPolicy};
use crate::media::application::ports::outgoing::{MediaStorage, ThumbnailGenerator};
use crate::portfolio::application::domain::entities::Certification;
use crate::portfolio::application::ports::{
    incoming::use_cases::{UploadCertificationDocumentError, UploadCertificationDocumentUseCase},
    outgoing::{CertificationDocumentRepository, ContentRepositoryError},
};
use crate::shared::multipart::UploadedFile;

const THUMBNAIL_FOLDER: &str = "certifications/thumbnails";

#[derive(Clone)]
pub struct UploadCertificationDocumentService<R>
where
    R: CertificationDocumentRepository + Send + Sync,
{
    repository: R,
    storage: Arc<dyn MediaStorage + Send + Sync>,
    thumbnails: Arc<dyn ThumbnailGenerator + Send + Sync>,
}

impl<R> UploadCertificationDocumentService<R>
where
    R: CertificationDocumentRepository + Send + Sync,
{
    pub fn new(
        repository: R,
        storage: Arc<dyn MediaStorage + Send + Sync>,
        thumbnails: Arc<dyn ThumbnailGenerator + Send + Sync>,
    ) -> Self {
        Self {
            repository,
            storage,
            thumbnails,
        }
    }

    /// A thumbnail failure leaves the document without one.
    async fn thumbnail_for(&self, file: &UploadedFile) -> Option<String> {
        let png = match self.thumbnails.generate(file.bytes.clone()).await {
            Ok(png) => png,
            Err(e) => {
                warn!(file = %file.file_name, error = %e, "Thumbnail generation failed");
                return None;
            }
        };

        let stem = file
            .file_name
            .rsplit_once('.')
            .map_or(file.file_name.as_str(), |(stem, _)| stem);

        match self
            .storage
            .store(THUMBNAIL_FOLDER, &format!("{stem}.png"), &png)
            .await
        {
            Ok(path) => Some(path),
            Err(e) => {
                warn!(file = %file.file_name, error = %e, "Thumbnail could not be stored");
                None
            }
        }
    }

    async fn discard(&self, path: &str) {
        if let Err(e) = self.storage.delete(path).await {
            warn!(path = %path, error = %e, "Failed to delete media file");
        }
    }
}

fn map_repo_err(err: ContentRepositoryError) -> UploadCertificationDocumentError {
    match err {
        ContentRepositoryError::NotFound => UploadCertificationDocumentError::NotFound,
        other => UploadCertificationDocumentError::RepositoryError(other.to_string()),
    }
}

#[async_trait]
impl<R> UploadCertificationDocumentUseCase for UploadCertificationDocumentService<R>
where
    R: CertificationDocumentRepository + Send + Sync,
{
    async fn execute(
        &self,
        certification_id: Uuid,
        file: UploadedFile,
    ) -> Result<Certification, UploadCertificationDocumentError> {
        let existing = self
            .repository
            .find(certification_id)
            .await
            .map_err(map_repo_err)?;

        let policy = UploadPolicy::for_kind(UploadKind::CertificationDocument);
        let extension = policy
            .validate(&file.file_name, file.bytes.len() as u64)
            .map_err(UploadCertificationDocumentError::InvalidUpload)?;

        let document = self
            .storage
            .store(policy.folder, &file.file_name, &file.bytes)
            .await
            .map_err(|e| UploadCertificationDocumentError::StorageFailed(e.to_string()))?;

        let thumbnail = if is_image_extension(&extension) {
            self.thumbnail_for(&file).await
        } else {
            None
        };

        let updated = match self
            .repository
            .set_document(certification_id, &document, thumbnail.as_deref())
            .await
        {
            Ok(updated) => updated,
            Err(e) => {
                let live = [existing.document.as_deref(), existing.thumbnail.as_deref()];
                for fresh in [Some(document.as_str()), thumbnail.as_deref()].into_iter().flatten() {
                    if !live.contains(&Some(fresh)) {
                        self.discard(fresh).await;
                    }
                }
                return Err(map_repo_err(e));
            }
        };

        for old in [existing.document, existing.thumbnail].into_iter().flatten() {
            if Some(&old) != updated.document.as_ref() && Some(&old) != updated.thumbnail.as_ref() {
                self.discard(&old).await;
            }
        }

        info!(
            certification_id = %certification_id,
            document = %document,
            has_thumbnail = thumbnail.is_some(),
            "Certification document uploaded"
        );
        Ok(updated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use std::sync::Mutex;

    use crate::media::adapter::outgoing::in_memory_storage::InMemoryMediaStorage;
    use crate::media::application::domain::UploadPolicyError;
    use crate::media::application::ports::outgoing::ThumbnailError;

    #[derive(Clone)]
    struct InMemoryCertificationRepo {
        row: Arc<Mutex<Option<Certification>>>,
    }

    #[async_trait]
    impl CertificationDocumentRepository for InMemoryCertificationRepo {
        async fn find(&self, _id: Uuid) -> Result<Certification, ContentRepositoryError> {
            self.row
                .lock()
                .unwrap()
                .clone()
                .ok_or(ContentRepositoryError::NotFound)
        }

        async fn set_document(
            &self,
            _id: Uuid,
            document: &str,
            thumbnail: Option<&str>,
        ) -> Result<Certification, ContentRepositoryError> {
            let mut guard = self.row.lock().unwrap();
            let row = guard.as_mut().ok_or(ContentRepositoryError::NotFound)?;
            row.document = Some(document.to_string());
            row.thumbnail = thumbnail.map(str::to_string);
            Ok(row.clone())
        }
    }

    /// Finds the row but rejects every write.
    struct ReadOnlyCertificationRepo(Certification);

    #[async_trait]
    impl CertificationDocumentRepository for ReadOnlyCertificationRepo {
        async fn find(&self, _id: Uuid) -> Result<Certification, ContentRepositoryError> {
            Ok(self.0.clone())
        }

        async fn set_document(
            &self,
            _id: Uuid,
            _document: &str,
            _thumbnail: Option<&str>,
        ) -> Result<Certification, ContentRepositoryError> {
            Err(ContentRepositoryError::DatabaseError("connection reset".to_string()))
        }
    }

    struct FixedThumbnail(Result<Vec<u8>, ThumbnailError>);

    #[async_trait]
    impl ThumbnailGenerator for FixedThumbnail {
        async fn generate(&self, _image_bytes: Vec<u8>) -> Result<Vec<u8>, ThumbnailError> {
            self.0.clone()
        }
    }

    fn certification(document: Option<&str>, thumbnail: Option<&str>) -> Certification {
        Certification {
            id: Uuid::new_v4(),
            name: "CKA".to_string(),
            issuer: "CNCF".to_string(),
            issue_date: None,
            credential_url: None,
            document: document.map(str::to_string),
            thumbnail: thumbnail.map(str::to_string),
            created_at: Utc::now(),
        }
    }

    fn upload(name: &str) -> UploadedFile {
        UploadedFile {
            file_name: name.to_string(),
            content_type: None,
            bytes: b"document".to_vec(),
        }
    }

    fn service(
        row: Option<Certification>,
        storage: InMemoryMediaStorage,
        thumbnail: Result<Vec<u8>, ThumbnailError>,
    ) -> UploadCertificationDocumentService<InMemoryCertificationRepo> {
        UploadCertificationDocumentService::new(
            InMemoryCertificationRepo {
                row: Arc::new(Mutex::new(row)),
            },
            Arc::new(storage),
            Arc::new(FixedThumbnail(thumbnail)),
        )
    }

    #[tokio::test]
    async fn test_image_document_gets_thumbnail() {
        let storage = InMemoryMediaStorage::new();
        let cert = certification(None, None);

        let updated = service(Some(cert.clone()), storage.clone(), Ok(b"png".to_vec()))
            .execute(cert.id, upload("badge.jpg"))
            .await
            .unwrap();

        assert_eq!(updated.document.as_deref(), Some("certifications/badge.jpg"));
        assert_eq!(
            updated.thumbnail.as_deref(),
            Some("certifications/thumbnails/badge.png")
        );
    }

    #[tokio::test]
    async fn test_pdf_document_has_no_thumbnail() {
        let storage = InMemoryMediaStorage::new();
        let cert = certification(None, None);

        let updated = service(Some(cert.clone()), storage.clone(), Ok(b"png".to_vec()))
            .execute(cert.id, upload("certificate.pdf"))
            .await
            .unwrap();

        assert_eq!(updated.thumbnail, None);
        assert_eq!(storage.paths(), vec!["certifications/certificate.pdf".to_string()]);
    }

    #[tokio::test]
    async fn test_disallowed_extension_rejected() {
        let storage = InMemoryMediaStorage::new();
        let cert = certification(None, None);

        let result = service(Some(cert.clone()), storage.clone(), Ok(Vec::new()))
            .execute(cert.id, upload("certificate.docx"))
            .await;

        assert!(matches!(
            result,
            Err(UploadCertificationDocumentError::InvalidUpload(
                UploadPolicyError::UnsupportedExtension(_)
            ))
        ));
        assert!(storage.paths().is_empty());
    }

    #[tokio::test]
    async fn test_previous_files_are_replaced() {
        let storage = InMemoryMediaStorage::new()
            .with_file("certifications/old.png", b"old")
            .with_file("certifications/thumbnails/old.png", b"thumb");
        let cert = certification(
            Some("certifications/old.png"),
            Some("certifications/thumbnails/old.png"),
        );

        service(Some(cert.clone()), storage.clone(), Ok(b"png".to_vec()))
            .execute(cert.id, upload("new.pdf"))
            .await
            .unwrap();

        assert_eq!(
            storage.deleted(),
            vec![
                "certifications/old.png".to_string(),
                "certifications/thumbnails/old.png".to_string()
            ]
        );
        assert_eq!(storage.paths(), vec!["certifications/new.pdf".to_string()]);
    }

    #[tokio::test]
    async fn test_thumbnail_failure_still_stores_document() {
        let cert = certification(None, None);

        let updated = service(
            Some(cert.clone()),
            InMemoryMediaStorage::new(),
            Err(ThumbnailError::Decode("corrupt".to_string())),
        )
        .execute(cert.id, upload("scan.png"))
        .await
        .unwrap();

        assert!(updated.document.is_some());
        assert!(updated.thumbnail.is_none());
    }

    #[tokio::test]
    async fn test_unknown_certification() {
        let result = service(None, InMemoryMediaStorage::new(), Ok(Vec::new()))
            .execute(Uuid::new_v4(), upload("scan.png"))
            .await;

        assert_eq!(result.unwrap_err(), UploadCertificationDocumentError::NotFound);
    }

    #[tokio::test]
    async fn test_failed_update_keeps_live_files() {
        // Same-name storage returns the path the record already points at.
        let storage = InMemoryMediaStorage::new()
            .with_file("certifications/cert.png", b"document")
            .with_file("certifications/thumbnails/cert.png", b"png");
        let cert = certification(
            Some("certifications/cert.png"),
            Some("certifications/thumbnails/cert.png"),
        );
        let service = UploadCertificationDocumentService::new(
            ReadOnlyCertificationRepo(cert.clone()),
            Arc::new(storage.clone()),
            Arc::new(FixedThumbnail(Ok(b"png".to_vec()))),
        );

        let result = service.execute(cert.id, upload("cert.png")).await;

        assert!(matches!(
            result,
            Err(UploadCertificationDocumentError::RepositoryError(_))
        ));
        assert!(storage.deleted().is_empty());
        assert_eq!(
            storage.paths(),
            vec![
                "certifications/cert.png".to_string(),
                "certifications/thumbnails/cert.png".to_string()
            ]
        );
    }

    #[tokio::test]
    async fn test_failed_update_discards_new_files() {
        let storage = InMemoryMediaStorage::new();
        let cert = certification(None, None);
        let service = UploadCertificationDocumentService::new(
            ReadOnlyCertificationRepo(cert.clone()),
            Arc::new(storage.clone()),
            Arc::new(FixedThumbnail(Ok(b"png".to_vec()))),
        );

        assert!(service.execute(cert.id, upload("badge.jpg")).await.is_err());

        assert!(storage.paths().is_empty());
        assert_eq!(storage.deleted().len(), 2);
    }
}
