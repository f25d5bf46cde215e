use std::path::Path;
use log::info;
use crate::config::config::FaceDetectionConfig;
use crate::error::FaceDetectError;
use crate::helper::face_helper::get_face_rectangles;
use crate::modules::face_annotator::{Annotation, FaceAnnotator};
use crate::modules::face_detection_client::{validate_inputs, FaceDetectionClient, FaceDetectionService};

#[derive(Debug, Clone)]
pub struct FaceDetectPipeline<S> {
    detector: S,
    annotator: FaceAnnotator,
}

impl FaceDetectPipeline<FaceDetectionClient> {
    /// from_config builds the pipeline backed by the face api http client.
    pub fn from_config(config: &FaceDetectionConfig) -> Result<Self, FaceDetectError> {
        Ok(FaceDetectPipeline::new(FaceDetectionClient::new(config)?, FaceAnnotator::new(config)))
    }
}

impl<S: FaceDetectionService> FaceDetectPipeline<S> {

    /// new initializes new instance of the pipeline
    pub fn new(detector: S, annotator: FaceAnnotator) -> Self {
        FaceDetectPipeline {
            detector,
            annotator,
        }
    }

    /// run detects the faces of one image and writes the annotated copy.
    ///
    /// The response is parsed once; the same rectangles are drawn and counted.
    ///
    /// # Arguments
    /// * `api_key` - the face api subscription key
    /// * `image_path` - the image to submit
    /// * `output_dir` - where the annotated copy is written
    ///
    /// # Returns
    /// * `Result<Annotation, FaceDetectError>`
    pub async fn run(&self, api_key: &str, image_path: &Path, output_dir: &Path) -> Result<Annotation, FaceDetectError> {
        validate_inputs(api_key, image_path)?;

        let data = self.detector.detect(api_key, image_path).await?;
        let rectangles = get_face_rectangles(&data)?;
        info!("face api found {} face(s) in {}", rectangles.len(), image_path.display());

        self.annotator.annotate(image_path, &rectangles, output_dir)
    }
}
