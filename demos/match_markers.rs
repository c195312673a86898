extern crate image as image_rs;
extern crate marker_vision;

use std::path::Path;

use marker_vision::detector::{CornerDetector, detector_runtime_parameters::DetectorRuntimeParameters, hessian_laplacian::HessianLaplacianDetector};
use marker_vision::descriptor::rotated_brief::RotatedBriefExtractor;
use marker_vision::image::Image;
use marker_vision::matching::match_descriptor_sets;
use marker_vision::visualize::display_matches;

fn main() {
    let image_name = "marker";
    let image_name_2 = "marker_rotated";
    let image_format = "png";
    let image_folder = "images/";
    let image_out_folder = "output/";
    let image_path = format!("{}{}.{}",image_folder,image_name,image_format);
    let image_path_2 = format!("{}{}.{}",image_folder,image_name_2,image_format);

    let gray_image = image_rs::open(&Path::new(&image_path)).unwrap().to_luma8();
    let gray_image_2 = image_rs::open(&Path::new(&image_path_2)).unwrap().to_luma8();

    let frame = Image::from_gray_image(&gray_image);
    let frame_2 = Image::from_gray_image(&gray_image_2);

    let mut corner_detector = CornerDetector::new(
        HessianLaplacianDetector::default(),
        RotatedBriefExtractor::default(),
        DetectorRuntimeParameters::default()
    );

    let (corners, descriptors) = corner_detector.detect_corners(&frame).unwrap();
    let (corners_2, descriptors_2) = corner_detector.detect_corners(&frame_2).unwrap();

    let pairs = match_descriptor_sets(&descriptors, &descriptors_2, 64);
    println!("{} corners / {} corners, {} matches", corners.len(), corners_2.len(), pairs.len());

    let composite = display_matches(&frame, &frame_2, &corners, &corners_2, &pairs);

    let file_path = format!("{}{}_matches.{}",image_out_folder,image_name,image_format);
    composite.to_image().save(file_path).unwrap();
}
