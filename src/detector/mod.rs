use log::debug;

use crate::image::Image;
use crate::image::image_encoding::ImageEncoding;
use crate::filter::{gauss_kernel::GaussKernel1D, gaussian_2_d_convolution_into};
use crate::features::intensity_centroid;
use crate::descriptor::BinaryDescriptor;
use crate::{Corner, FeatureError};

use self::detector_runtime_parameters::DetectorRuntimeParameters;

pub mod detector_runtime_parameters;
pub mod hessian_laplacian;

/// Produces unordered corner candidates with scores. Implementations must not
/// return corners closer than `border` pixels to any image edge.
pub trait KeypointDetector {
    fn detect(&self, image: &Image, border: usize) -> Vec<Corner>;
}

/// Produces one fixed-length binary descriptor per corner, index-aligned
/// with the input slice.
pub trait DescriptorExtractor {
    fn describe(&self, image: &Image, corners: &[Corner]) -> Vec<BinaryDescriptor>;
}

/// One-frame detection pipeline: smooth, detect, keep the strongest corners,
/// assign each survivor its dominant orientation, describe.
pub struct CornerDetector<D: KeypointDetector, E: DescriptorExtractor> {
    keypoint_detector: D,
    descriptor_extractor: E,
    runtime_parameters: DetectorRuntimeParameters,
    smoothing_kernel: GaussKernel1D,
    smoothed_image: Image,
    smoothing_scratch: Image
}

impl<D: KeypointDetector, E: DescriptorExtractor> CornerDetector<D,E> {

    pub fn new(keypoint_detector: D, descriptor_extractor: E, runtime_parameters: DetectorRuntimeParameters) -> CornerDetector<D,E> {
        let smoothing_kernel = GaussKernel1D::new(0.0, runtime_parameters.blur_sigma, runtime_parameters.blur_radius);
        CornerDetector {
            keypoint_detector,
            descriptor_extractor,
            runtime_parameters,
            smoothing_kernel,
            smoothed_image: Image::empty(0, 0, ImageEncoding::U8),
            smoothing_scratch: Image::empty(0, 0, ImageEncoding::U8)
        }
    }

    pub fn runtime_parameters(&self) -> &DetectorRuntimeParameters {
        &self.runtime_parameters
    }

    // The smoothing buffers survive across frames; they are rebuilt only when
    // absent or when the frame size changed.
    fn prepare_smoothing_buffers(&mut self, cols: usize, rows: usize) -> () {
        if self.smoothed_image.cols() != cols || self.smoothed_image.rows() != rows {
            self.smoothed_image = Image::empty(cols, rows, ImageEncoding::U8);
            self.smoothing_scratch = Image::empty(cols, rows, ImageEncoding::U8);
        }
    }

    pub fn detect_corners(&mut self, image: &Image) -> Result<(Vec<Corner>, Vec<BinaryDescriptor>), FeatureError> {
        let cols = image.cols();
        let rows = image.rows();

        self.prepare_smoothing_buffers(cols, rows);
        gaussian_2_d_convolution_into(image, &self.smoothing_kernel, &mut self.smoothing_scratch, &mut self.smoothed_image);

        let mut corners = self.keypoint_detector.detect(&self.smoothed_image, self.runtime_parameters.detection_border);

        corners.sort_unstable_by(|a,b| b.score.partial_cmp(&a.score).unwrap());
        corners.truncate(self.runtime_parameters.max_corners);

        for corner in corners.iter_mut() {
            corner.angle = intensity_centroid::orientation(&self.smoothed_image, corner.x(), corner.y())?;
        }

        let descriptors = self.descriptor_extractor.describe(&self.smoothed_image, &corners);

        debug!("detected {}x{} corners: {}", cols, rows, corners.len());

        Ok((corners, descriptors))
    }
}
