use std::path::Path;
use std::time::Duration;
use log::{debug, info};
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, Url};
use crate::config::config::{FaceDetectionConfig, USAGE};
use crate::error::FaceDetectError;

const DETECT_PATH: &str = "/face/v1.0/detect/";

/// validate_inputs checks the command-line inputs before anything is sent.
///
/// # Arguments
/// * `api_key` - must contain a non-whitespace character
/// * `image_path` - must reference an existing file
///
/// # Returns
/// * `Result<(), FaceDetectError>`
pub fn validate_inputs(api_key: &str, image_path: &Path) -> Result<(), FaceDetectError> {
    if api_key.trim().is_empty() {
        return Err(FaceDetectError::InvalidArgument(USAGE.to_string()))
    }
    if !image_path.is_file() {
        return Err(FaceDetectError::FileNotFound {
            path: image_path.to_path_buf(),
            message: USAGE.to_string(),
        })
    }
    Ok(())
}

/// Source of face api detect responses for one image.
#[allow(async_fn_in_trait)]
pub trait FaceDetectionService {
    /// detect submits the image and returns the raw response body.
    async fn detect(&self, api_key: &str, image_path: &Path) -> Result<String, FaceDetectError>;
}

#[derive(Debug, Clone)]
pub struct FaceDetectionClient {
    http_client: Client,
    base_url: String,
}

impl FaceDetectionClient {
    pub fn new(config: &FaceDetectionConfig) -> Result<Self, FaceDetectError> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(Duration::from_secs(timeout));
        }

        Ok(FaceDetectionClient {
            http_client: builder.build()?,
            base_url: config.base_url(),
        })
    }

    /// request_url builds the detect url carrying the subscription key.
    ///
    /// # Arguments
    /// * `api_key` - the face api subscription key
    ///
    /// # Returns
    /// * `Result<Url, FaceDetectError>`
    pub fn request_url(&self, api_key: &str) -> Result<Url, FaceDetectError> {
        Url::parse_with_params(
            &format!("{}{}", self.base_url, DETECT_PATH),
            &[("subscription-key", api_key)],
        ).map_err(|e| FaceDetectError::InvalidArgument(format!("bad face api url: {e}")))
    }
}

impl FaceDetectionService for FaceDetectionClient {
    async fn detect(&self, api_key: &str, image_path: &Path) -> Result<String, FaceDetectError> {
        validate_inputs(api_key, image_path)?;

        let image_bytes = tokio::fs::read(image_path).await?;
        let url = self.request_url(api_key)?;
        info!("submitting {} bytes from {} to {}", image_bytes.len(), image_path.display(), self.base_url);

        let response = self.http_client
            .post(url)
            .header(CONTENT_TYPE, "application/octet-stream")
            .body(image_bytes)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        debug!("face api answered {status}: {body}");

        if !status.is_success() {
            return Err(FaceDetectError::RemoteError { status: status.as_u16(), body })
        }
        Ok(body)
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;
    use crate::config::config::FaceDetectionConfig;
    use crate::error::FaceDetectError;
    use crate::modules::face_detection_client::{validate_inputs, FaceDetectionClient, FaceDetectionService};

    #[test]
    fn test_request_url() {
        let client = FaceDetectionClient::new(&FaceDetectionConfig::new()).unwrap();
        let url = client.request_url("abc123").unwrap();
        assert_eq!(
            url.as_str(),
            "https://germanywestcentral.api.cognitive.microsoft.com/face/v1.0/detect/?subscription-key=abc123"
        );
    }

    #[test]
    fn test_request_url_encodes_key() {
        let client = FaceDetectionClient::new(&FaceDetectionConfig::new()).unwrap();
        let url = client.request_url("a&b c").unwrap();
        assert_eq!(url.query(), Some("subscription-key=a%26b+c"));
    }

    #[test]
    fn test_validate_inputs() {
        assert!(validate_inputs("key", Path::new("Cargo.toml")).is_ok());
        assert!(matches!(validate_inputs("", Path::new("Cargo.toml")), Err(FaceDetectError::InvalidArgument(_))));
        assert!(matches!(validate_inputs("key", Path::new("src")), Err(FaceDetectError::FileNotFound { .. })));
    }

    #[tokio::test]
    async fn test_detect_blank_key() {
        let client = FaceDetectionClient::new(&FaceDetectionConfig::new()).unwrap();
        let result = client.detect("   ", Path::new("Cargo.toml")).await;
        assert!(matches!(result, Err(FaceDetectError::InvalidArgument(_))));
    }

    #[tokio::test]
    async fn test_detect_missing_file() {
        let client = FaceDetectionClient::new(&FaceDetectionConfig::new()).unwrap();
        let result = client.detect("key", Path::new("does/not/exist.jpg")).await;
        assert!(matches!(result, Err(FaceDetectError::FileNotFound { .. })));
    }
}
