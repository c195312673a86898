extern crate image as image_rs;
extern crate marker_vision;
extern crate color_eyre;

use std::path::Path;

use color_eyre::eyre::Result;

use marker_vision::detector::{CornerDetector, detector_runtime_parameters::DetectorRuntimeParameters, hessian_laplacian::HessianLaplacianDetector};
use marker_vision::descriptor::rotated_brief::RotatedBriefExtractor;
use marker_vision::image::Image;
use marker_vision::training::{train_marker, training_runtime_parameters::TrainingRuntimeParameters};
use marker_vision::visualize::draw_corners;
use marker_vision::{Corner, Float};

fn main() -> Result<()> {
    color_eyre::install()?;

    let image_name = "marker";
    let image_format = "png";
    let image_folder = "images/";
    let image_out_folder = "output/";
    let image_path = format!("{}{}.{}",image_folder,image_name,image_format);

    let gray_image = image_rs::open(&Path::new(&image_path))?.to_luma8();

    let mut corner_detector = CornerDetector::new(
        HessianLaplacianDetector::default(),
        RotatedBriefExtractor::default(),
        DetectorRuntimeParameters::default()
    );

    let marker = train_marker(&mut corner_detector, &gray_image, &TrainingRuntimeParameters::default())?;
    println!("trained {} levels, {} corners", marker.level_count(), marker.corner_count());

    for (level_idx, level) in marker.levels.iter().enumerate() {
        let mut display = Image::from_gray_image(&gray_image);

        // level corners live in level coordinates, map them back to the base image
        let scaled_corners = level.corners.iter()
            .map(|corner| {
                let mut scaled = *corner;
                scaled.location.x = (corner.x() as Float*level.scale).round() as usize;
                scaled.location.y = (corner.y() as Float*level.scale).round() as usize;
                scaled
            })
            .collect::<Vec<Corner>>();
        draw_corners(&mut display, &scaled_corners, 3);

        let file_path = format!("{}{}_level_{}.{}",image_out_folder,image_name,level_idx,image_format);
        display.to_image().save(file_path)?;
    }

    Ok(())
}
