use serde::{Deserialize, Serialize};

/// Printed whenever the command-line arguments cannot be used.
pub const USAGE: &str = "Please provide the API key as the first command-line parameter, followed by the filename of the image to be submitted for processing.";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FaceDetectionConfig {
    pub region: String,
    pub host: String,
    /// Base url used instead of `https://{region}.{host}` when set.
    pub endpoint: Option<String>,
    /// Request timeout in seconds. `None` waits for the server indefinitely.
    pub timeout: Option<u64>,
    /// Outline color in OpenCV BGR order.
    pub outline_color: (u8, u8, u8),
    pub thickness: i32,
    pub output_suffix: String,
}

impl FaceDetectionConfig {
    pub fn new() -> Self {
        FaceDetectionConfig {
            region: "germanywestcentral".to_string(),
            host: "api.cognitive.microsoft.com".to_string(),
            endpoint: None,
            timeout: None,
            // #ff69b4
            outline_color: (180, 105, 255),
            thickness: 7,
            output_suffix: "-2".to_string(),
        }
    }

    /// with_endpoint points the client at another base url, e.g. a local stub server.
    pub fn with_endpoint(mut self, endpoint: &str) -> Self {
        self.endpoint = Some(endpoint.trim_end_matches('/').to_string());
        self
    }

    /// base_url returns the scheme and authority the detect request is sent to.
    pub fn base_url(&self) -> String {
        match &self.endpoint {
            Some(endpoint) => endpoint.to_owned(),
            None => format!("https://{}.{}", self.region, self.host),
        }
    }
}

impl Default for FaceDetectionConfig {
    fn default() -> Self {
        FaceDetectionConfig::new()
    }
}
