use std::path::{Path, PathBuf};
use opencv::core::{Mat, MatTraitConst, Point, Scalar, Vector};
use opencv::imgcodecs::{imdecode, imencode, IMREAD_COLOR};
use opencv::imgproc::{polylines, LINE_8};
use crate::error::FaceDetectError;
use crate::utils::coordinate::FaceRectangle;

/// decode_image decodes an encoded image (jpeg, png, ...) into a BGR matrix.
pub fn decode_image(im_bytes: &[u8]) -> Result<Mat, FaceDetectError> {
    let buf = Vector::<u8>::from_slice(im_bytes);

    let img = match imdecode(&buf, IMREAD_COLOR) {
        Ok(img) => img,
        Err(e) => return Err(FaceDetectError::DecodeError(e.to_string()))
    };

    if img.empty() {
        return Err(FaceDetectError::DecodeError("unsupported or corrupt image data".to_string()))
    }
    Ok(img)
}

/// encode_jpeg encodes the matrix as jpeg, whatever the source format was.
pub fn encode_jpeg(img: &Mat) -> Result<Vec<u8>, FaceDetectError> {
    let mut buf = Vector::<u8>::new();
    let encoded = imencode(".jpg", img, &mut buf, &Vector::new())
        .map_err(|e| FaceDetectError::EncodeError(e.to_string()))?;

    if !encoded {
        return Err(FaceDetectError::EncodeError("jpeg encoder rejected the image".to_string()))
    }
    Ok(buf.to_vec())
}

/// bgr_to_scalar converts a BGR triple into an OpenCV color.
pub fn bgr_to_scalar(color: (u8, u8, u8)) -> Scalar {
    Scalar::new(color.0 as f64, color.1 as f64, color.2 as f64, 0.0)
}

/// draw_face_rectangles outlines every rectangle as a closed quadrilateral.
///
/// # Arguments
/// * `img` - OpenCV matrix, drawn on in place
/// * `rectangles` - the faces to outline
/// * `color` - outline color
/// * `thickness` - stroke width in pixels
///
/// # Returns
/// * `Result<usize, FaceDetectError>` - the number of outlines drawn
pub fn draw_face_rectangles(
    img: &mut Mat,
    rectangles: &[FaceRectangle],
    color: Scalar,
    thickness: i32,
) -> Result<usize, FaceDetectError> {
    let mut count = 0;
    for rectangle in rectangles {
        let corners: Vector<Point> = rectangle
            .corners()
            .iter()
            .map(|c| Point::new(c.x, c.y))
            .collect();
        let mut outline = Vector::<Vector<Point>>::with_capacity(1);
        outline.push(corners);

        polylines(img, &outline, true, color, thickness, LINE_8, 0)
            .map_err(|e| FaceDetectError::EncodeError(format!("failed to draw {rectangle:?}: {e}")))?;
        count += 1;
    }
    Ok(count)
}

/// output_file_name inserts the suffix between the file stem and its extension.
///
/// `photo.jpg` with suffix `-2` becomes `photo-2.jpg`; the directory part is dropped.
pub fn output_file_name(input: &Path, suffix: &str) -> Result<PathBuf, FaceDetectError> {
    let stem = match input.file_stem() {
        Some(stem) => stem.to_string_lossy(),
        None => {
            return Err(FaceDetectError::InvalidArgument(format!("{} has no file name", input.display())))
        }
    };

    let name = match input.extension() {
        Some(ext) => format!("{stem}{suffix}.{}", ext.to_string_lossy()),
        None => format!("{stem}{suffix}"),
    };
    Ok(PathBuf::from(name))
}

#[cfg(test)]
mod tests {
    use std::path::{Path, PathBuf};
    use opencv::core::{Mat, MatTraitConst, Scalar, Vec3b, CV_8UC3};
    use crate::error::FaceDetectError;
    use crate::utils::coordinate::FaceRectangle;
    use crate::utils::image::{bgr_to_scalar, decode_image, draw_face_rectangles, encode_jpeg, output_file_name};

    fn pixel(img: &Mat, x: i32, y: i32) -> (u8, u8, u8) {
        let px = img.at_2d::<Vec3b>(y, x).unwrap();
        (px[0], px[1], px[2])
    }

    #[test]
    fn test_draw_face_rectangles() {
        let mut img = Mat::new_rows_cols_with_default(100, 100, CV_8UC3, Scalar::all(0.0)).unwrap();
        let rect = FaceRectangle { top: 10, left: 20, width: 30, height: 40 };

        let count = draw_face_rectangles(&mut img, &[rect], bgr_to_scalar((180, 105, 255)), 7).unwrap();
        assert_eq!(count, 1);

        // every corner and edge midpoint is on the outline
        for (x, y) in [(20, 10), (50, 10), (50, 50), (20, 50), (35, 10), (50, 30), (35, 50), (20, 30)] {
            assert_eq!(pixel(&img, x, y), (180, 105, 255), "expected outline at ({x}, {y})");
        }
        assert_eq!(pixel(&img, 35, 30), (0, 0, 0));
        assert_eq!(pixel(&img, 80, 80), (0, 0, 0));
    }

    #[test]
    fn test_draw_no_rectangles() {
        let mut img = Mat::new_rows_cols_with_default(8, 8, CV_8UC3, Scalar::all(7.0)).unwrap();
        let count = draw_face_rectangles(&mut img, &[], bgr_to_scalar((180, 105, 255)), 7).unwrap();
        assert_eq!(count, 0);
        assert_eq!(pixel(&img, 4, 4), (7, 7, 7));
    }

    #[test]
    fn test_encode_then_decode_jpeg() {
        let img = Mat::new_rows_cols_with_default(16, 24, CV_8UC3, Scalar::all(128.0)).unwrap();
        let data = encode_jpeg(&img).unwrap();
        assert_eq!(&data[0..2], &[0xFF, 0xD8]);

        let decoded = decode_image(&data).unwrap();
        assert_eq!((decoded.cols(), decoded.rows()), (24, 16));
    }

    #[test]
    fn test_decode_garbage() {
        let result = decode_image(b"definitely not an image");
        assert!(matches!(result, Err(FaceDetectError::DecodeError(_))));
    }

    #[test]
    fn test_output_file_name() {
        assert_eq!(output_file_name(Path::new("photo.jpg"), "-2").unwrap(), PathBuf::from("photo-2.jpg"));
        assert_eq!(output_file_name(Path::new("/tmp/in/group.png"), "-2").unwrap(), PathBuf::from("group-2.png"));
        assert_eq!(output_file_name(Path::new("scan"), "-2").unwrap(), PathBuf::from("scan-2"));
        assert_eq!(output_file_name(Path::new("a.b.jpeg"), "-2").unwrap(), PathBuf::from("a.b-2.jpeg"));
    }

    #[test]
    fn test_output_file_name_without_name() {
        assert!(matches!(output_file_name(Path::new("/"), "-2"), Err(FaceDetectError::InvalidArgument(_))));
    }
}
