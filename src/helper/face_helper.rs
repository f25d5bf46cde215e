use log::debug;
use crate::error::FaceDetectError;
use crate::utils::coordinate::{DetectedFace, FaceRectangle};

/// get_face_rectangles parses the face api response into face rectangles.
///
/// The rectangles keep the order of the faces in the response. Any entry
/// without a complete integer `faceRectangle` fails the whole response.
///
/// # Arguments
/// * `data` - the raw response body, a json array
///
/// # Returns
/// * `Result<Vec<FaceRectangle>, FaceDetectError>`
pub fn get_face_rectangles(data: &str) -> Result<Vec<FaceRectangle>, FaceDetectError> {
    let faces: Vec<DetectedFace> = serde_json::from_str(data)?;

    let mut rectangles: Vec<FaceRectangle> = Vec::with_capacity(faces.len());
    for face in faces {
        debug!(
            "face {} at {:?}",
            face.face_id.as_ref().map(|id| id.to_string()).unwrap_or_else(|| "<none>".to_string()),
            face.face_rectangle
        );
        rectangles.push(face.face_rectangle);
    }
    Ok(rectangles)
}
