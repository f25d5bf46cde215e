use std::path::{Path, PathBuf};
use log::info;
use opencv::core::Scalar;
use crate::config::config::FaceDetectionConfig;
use crate::error::FaceDetectError;
use crate::utils::coordinate::FaceRectangle;
use crate::utils::image::{bgr_to_scalar, decode_image, draw_face_rectangles, encode_jpeg, output_file_name};

/// Outcome of annotating one image.
#[derive(Debug, Clone, PartialEq)]
pub struct Annotation {
    pub face_count: usize,
    pub output_path: PathBuf,
}

#[derive(Debug, Clone)]
pub struct FaceAnnotator {
    color: Scalar,
    thickness: i32,
    output_suffix: String,
}

impl FaceAnnotator {
    pub fn new(config: &FaceDetectionConfig) -> Self {
        FaceAnnotator {
            color: bgr_to_scalar(config.outline_color),
            thickness: config.thickness,
            output_suffix: config.output_suffix.to_owned(),
        }
    }

    /// annotate outlines the faces on a copy of the image and writes it as jpeg.
    ///
    /// # Arguments
    /// * `image_path` - the source image, left untouched
    /// * `rectangles` - the detected faces
    /// * `output_dir` - the directory the annotated copy is written to
    ///
    /// # Returns
    /// * `Result<Annotation, FaceDetectError>`
    pub fn annotate(
        &self,
        image_path: &Path,
        rectangles: &[FaceRectangle],
        output_dir: &Path,
    ) -> Result<Annotation, FaceDetectError> {
        let im_bytes = std::fs::read(image_path)?;
        let mut img = decode_image(&im_bytes)?;

        let face_count = draw_face_rectangles(&mut img, rectangles, self.color, self.thickness)?;
        let encoded = encode_jpeg(&img)?;

        let output_path = output_dir.join(output_file_name(image_path, &self.output_suffix)?);
        std::fs::write(&output_path, encoded)?;
        info!("wrote {} face outline(s) to {}", face_count, output_path.display());

        Ok(Annotation { face_count, output_path })
    }
}
