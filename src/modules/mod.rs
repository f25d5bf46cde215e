pub mod face_annotator;
pub mod face_detection_client;
