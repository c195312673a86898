extern crate image as image_rs;

use image_rs::GrayImage;
use serde::{Serialize, Deserialize};

use crate::image::Image;
use crate::pyramid::Pyramid;
use crate::detector::{CornerDetector, KeypointDetector, DescriptorExtractor};
use crate::descriptor::BinaryDescriptor;
use crate::{Corner, FeatureError, Float};

use self::training_runtime_parameters::TrainingRuntimeParameters;

pub mod training_runtime_parameters;

/// Corners and descriptors of one trained level. `scale` maps level
/// coordinates back onto the base image.
#[derive(Debug,Clone,Serialize,Deserialize)]
pub struct TrainedLevel {
    pub corners: Vec<Corner>,
    pub descriptors: Vec<BinaryDescriptor>,
    pub scale: Float
}

#[derive(Debug,Clone,Serialize,Deserialize)]
pub struct TrainedMarker {
    pub levels: Vec<TrainedLevel>
}

impl TrainedMarker {

    pub fn level_count(&self) -> usize {
        self.levels.len()
    }

    pub fn corner_count(&self) -> usize {
        self.levels.iter().map(|level| level.corners.len()).sum()
    }
}

/// Half-downsampled levels of the reference image. Stops early once the next
/// level would fall below the minimum dimensions, so the pyramid always holds
/// at least the base image.
pub fn build_image_pyramid(base_gray_image: &GrayImage, runtime_parameters: &TrainingRuntimeParameters) -> Pyramid<Image> {
    let mut octaves: Vec<Image> = Vec::with_capacity(runtime_parameters.level_count);
    octaves.push(Image::from_gray_image(base_gray_image));

    for i in 1..runtime_parameters.level_count {
        match Image::downsample_half(&octaves[i-1], runtime_parameters.min_image_dimensions) {
            Ok(next) => octaves.push(next),
            Err(_) => break
        }
    }

    Pyramid {octaves}
}

/// Trains a marker: runs the detection pipeline over every pyramid level and
/// stores the per-level corners and descriptors.
pub fn train_marker<D: KeypointDetector, E: DescriptorExtractor>(corner_detector: &mut CornerDetector<D,E>, base_gray_image: &GrayImage, runtime_parameters: &TrainingRuntimeParameters) -> Result<TrainedMarker, FeatureError> {
    let pyramid = build_image_pyramid(base_gray_image, runtime_parameters);

    let mut levels = Vec::<TrainedLevel>::with_capacity(pyramid.octaves.len());
    for (level_idx, level_image) in pyramid.octaves.iter().enumerate() {
        let (corners, descriptors) = corner_detector.detect_corners(level_image)?;
        levels.push(TrainedLevel {
            corners,
            descriptors,
            scale: (2.0 as Float).powi(level_idx as i32)
        });
    }

    Ok(TrainedMarker{levels})
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pyramid_keeps_the_base_image_when_small() {
        let gray_image = GrayImage::new(40, 40);
        let runtime_parameters = TrainingRuntimeParameters {
            level_count: 4,
            min_image_dimensions: (50,50)
        };

        let pyramid = build_image_pyramid(&gray_image, &runtime_parameters);
        assert_eq!(pyramid.octaves.len(), 1);
    }

    #[test]
    fn pyramid_halves_until_minimum() {
        let gray_image = GrayImage::new(400, 400);
        let runtime_parameters = TrainingRuntimeParameters {
            level_count: 4,
            min_image_dimensions: (50,50)
        };

        let pyramid = build_image_pyramid(&gray_image, &runtime_parameters);
        assert_eq!(pyramid.octaves.len(), 4);
        assert_eq!(pyramid.octaves[3].cols(), 50);
    }
}
