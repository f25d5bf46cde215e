use std::path::PathBuf;
use clap::Parser;
use log::warn;
use rs_face_detect::config::config::FaceDetectionConfig;
use rs_face_detect::pipeline::pipeline::FaceDetectPipeline;
use rs_face_detect::utils::viewer::open_with_default_app;

/// Detect faces with the face api and open a copy of the image with the faces outlined.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Face api subscription key
    api_key: String,

    /// Image file to submit
    image_path: PathBuf,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();

    let args = Args::parse();
    let config = FaceDetectionConfig::new();
    let pipeline = FaceDetectPipeline::from_config(&config)?;

    let output_dir = std::env::current_dir()?;
    let annotation = pipeline.run(&args.api_key, &args.image_path, &output_dir).await?;
    println!("Number of faces detected: {}", annotation.face_count);

    if let Err(e) = open_with_default_app(&annotation.output_path) {
        warn!("could not open {}: {e}", annotation.output_path.display());
    }
    Ok(())
}
