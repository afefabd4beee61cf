//! Storage service implementation using Apache OpenDAL.

use opendal::{Operator, services};
use tracing::debug;

use curio_shared::StorageProvider;

use super::error::StorageError;

/// Capability to determine the size of a stored file.
///
/// Implemented by [`StorageService`]; tests substitute in-memory fakes.
pub trait SizeProbe: Send + Sync {
    /// Size in bytes of the file at `location`.
    fn size_of(
        &self,
        location: &str,
    ) -> impl std::future::Future<Output = Result<u64, StorageError>> + Send;
}

/// Storage service for stored content.
pub struct StorageService {
    operator: Operator,
    provider: StorageProvider,
}

impl StorageService {
    /// Create a new storage service for a provider.
    ///
    /// # Errors
    ///
    /// Returns an error if the storage provider cannot be initialized.
    pub fn from_provider(provider: StorageProvider) -> Result<Self, StorageError> {
        let operator = Self::create_operator(&provider)?;
        Ok(Self { operator, provider })
    }

    /// Create OpenDAL operator from provider config.
    fn create_operator(provider: &StorageProvider) -> Result<Operator, StorageError> {
        let operator = match provider {
            StorageProvider::S3 {
                endpoint,
                bucket,
                access_key_id,
                secret_access_key,
                region,
            } => {
                let builder = services::S3::default()
                    .endpoint(endpoint)
                    .bucket(bucket)
                    .access_key_id(access_key_id)
                    .secret_access_key(secret_access_key)
                    .region(region);
                Operator::new(builder).map(|b| b.finish())
            }
            StorageProvider::AzureBlob {
                account,
                access_key,
                container,
            } => {
                let builder = services::Azblob::default()
                    .account_name(account)
                    .account_key(access_key)
                    .container(container);
                Operator::new(builder).map(|b| b.finish())
            }
            StorageProvider::LocalFs { root } => {
                let builder = services::Fs::default().root(
                    root.to_str()
                        .ok_or_else(|| StorageError::configuration("invalid path"))?,
                );
                Operator::new(builder).map(|b| b.finish())
            }
        };

        operator.map_err(|e| StorageError::configuration(e.to_string()))
    }

    /// Look up the size of a stored file.
    ///
    /// External URLs are not stored objects and are rejected with `InvalidKey`,
    /// as are locations with `..` segments that would escape the storage root.
    ///
    /// # Errors
    ///
    /// Returns an error if the location is not a stored file or cannot be accessed.
    pub async fn stat_size(&self, location: &str) -> Result<u64, StorageError> {
        if is_external_url(location) {
            return Err(StorageError::invalid_key(format!(
                "external URL cannot be probed: {location}"
            )));
        }

        if escapes_root(location) {
            return Err(StorageError::invalid_key(format!(
                "location escapes storage root: {location}"
            )));
        }

        let meta = self.operator.stat(location).await?;
        if meta.is_dir() {
            return Err(StorageError::invalid_key(format!(
                "location is a directory: {location}"
            )));
        }

        debug!(
            provider = self.provider_name(),
            location,
            bytes = meta.content_length(),
            "Probed content size"
        );
        Ok(meta.content_length())
    }

    /// Get the storage provider name.
    #[must_use]
    pub fn provider_name(&self) -> &'static str {
        self.provider.name()
    }
}

impl SizeProbe for StorageService {
    async fn size_of(&self, location: &str) -> Result<u64, StorageError> {
        self.stat_size(location).await
    }
}

/// Whether a location points at a remote resource rather than a stored object.
fn is_external_url(location: &str) -> bool {
    location
        .split_once("://")
        .is_some_and(|(scheme, _)| {
            !scheme.is_empty() && scheme.chars().all(|c| c.is_ascii_alphanumeric() || c == '+')
        })
}

/// Whether a location contains a parent-directory segment.
fn escapes_root(location: &str) -> bool {
    location.split(['/', '\\']).any(|segment| segment == "..")
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn local_service(dir: &TempDir) -> StorageService {
        StorageService::from_provider(StorageProvider::local_fs(dir.path()))
            .expect("should create service")
    }

    #[test]
    fn test_is_external_url() {
        assert!(is_external_url("https://example.com/a.pdf"));
        assert!(is_external_url("http://localhost:3000/uploads/test.pdf"));
        assert!(is_external_url("s3://bucket/key"));
        assert!(!is_external_url("uploads/test.pdf"));
        assert!(!is_external_url("/srv/uploads/test.pdf"));
        assert!(!is_external_url("odd/dir://name"));
    }

    #[tokio::test]
    async fn test_stat_size_existing_file() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("test.pdf"), vec![0u8; 1024]).unwrap();
        let service = local_service(&dir);

        assert_eq!(service.stat_size("test.pdf").await.unwrap(), 1024);
    }

    #[tokio::test]
    async fn test_stat_size_missing_file() {
        let dir = TempDir::new().unwrap();
        let service = local_service(&dir);

        let err = service.stat_size("missing.pdf").await.unwrap_err();
        assert!(matches!(err, StorageError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_stat_size_rejects_urls() {
        let dir = TempDir::new().unwrap();
        let service = local_service(&dir);

        let err = service
            .size_of("https://example.com/video.mp4")
            .await
            .unwrap_err();
        assert!(matches!(err, StorageError::InvalidKey(_)));
    }

    #[test]
    fn test_escapes_root() {
        assert!(escapes_root("../x.pdf"));
        assert!(escapes_root("uploads/../../etc/passwd"));
        assert!(escapes_root("uploads\\..\\x.pdf"));
        assert!(escapes_root(".."));
        assert!(!escapes_root("uploads/..hidden/x.pdf"));
        assert!(!escapes_root("uploads/x..pdf"));
    }

    #[tokio::test]
    async fn test_stat_size_rejects_parent_segments() {
        let dir = TempDir::new().unwrap();
        let root = dir.path().join("sub");
        std::fs::create_dir(&root).unwrap();
        std::fs::write(dir.path().join("outside.pdf"), vec![0u8; 777]).unwrap();
        let service = StorageService::from_provider(StorageProvider::local_fs(&root))
            .expect("should create service");

        let err = service.stat_size("../outside.pdf").await.unwrap_err();
        assert!(matches!(err, StorageError::InvalidKey(_)));

        let err = service.stat_size("nested/../../outside.pdf").await.unwrap_err();
        assert!(matches!(err, StorageError::InvalidKey(_)));
    }

    #[tokio::test]
    async fn test_stat_size_rejects_directories() {
        let dir = TempDir::new().unwrap();
        std::fs::create_dir(dir.path().join("nested")).unwrap();
        let service = local_service(&dir);

        let err = service.stat_size("nested/").await.unwrap_err();
        assert!(matches!(err, StorageError::InvalidKey(_)));
    }

    #[test]
    fn test_provider_name() {
        let dir = TempDir::new().unwrap();
        assert_eq!(local_service(&dir).provider_name(), "local");
    }
}
