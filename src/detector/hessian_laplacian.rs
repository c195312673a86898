extern crate nalgebra as na;

use na::Matrix2;

use crate::image::Image;
use crate::filter::{FilterDirection, filter_1d_convolution, laplace_kernel::LaplaceKernel, prewitt_kernel::PrewittKernel};
use crate::{Corner, Float};
use super::KeypointDetector;

/// Reference corner detector: second-derivative responses thresholded on the
/// Laplacian magnitude and on the smaller Hessian eigenvalue, with 3x3
/// non-maximum suppression. The thresholds are the two knobs the reference
/// pipeline exposes.
pub struct HessianLaplacianDetector {
    pub laplacian_threshold: Float,
    pub min_eigen_threshold: Float
}

impl Default for HessianLaplacianDetector {
    fn default() -> HessianLaplacianDetector {
        HessianLaplacianDetector {
            laplacian_threshold: 30.0,
            min_eigen_threshold: 25.0
        }
    }
}

impl HessianLaplacianDetector {

    fn corner_score(hessian: &Matrix2<Float>) -> Float {
        let trace = hessian.trace();
        let determinant = hessian.determinant();
        let discriminant = (trace.powi(2)/4.0 - determinant).max(0.0).sqrt();

        let eigen_a = trace/2.0 + discriminant;
        let eigen_b = trace/2.0 - discriminant;

        eigen_a.abs().min(eigen_b.abs())
    }
}

impl KeypointDetector for HessianLaplacianDetector {

    fn detect(&self, image: &Image, border: usize) -> Vec<Corner> {
        let cols = image.cols();
        let rows = image.rows();

        if cols <= 2*border || rows <= 2*border {
            return Vec::new();
        }

        let laplace_kernel = LaplaceKernel::new();
        let prewitt_kernel = PrewittKernel::new();

        let dxx = filter_1d_convolution(image, FilterDirection::Horizontal, &laplace_kernel);
        let dyy = filter_1d_convolution(image, FilterDirection::Vertical, &laplace_kernel);
        let dx = filter_1d_convolution(image, FilterDirection::Horizontal, &prewitt_kernel);
        let dxy = filter_1d_convolution(&dx, FilterDirection::Vertical, &prewitt_kernel);

        let mut scores = na::DMatrix::<Float>::zeros(rows, cols);
        for y in border..rows-border {
            for x in border..cols-border {
                let laplacian = dxx.buffer[(y,x)] + dyy.buffer[(y,x)];
                if laplacian.abs() < self.laplacian_threshold {
                    continue;
                }

                let hessian = Matrix2::new(dxx.buffer[(y,x)], dxy.buffer[(y,x)],
                                           dxy.buffer[(y,x)], dyy.buffer[(y,x)]);
                let score = HessianLaplacianDetector::corner_score(&hessian);
                if score >= self.min_eigen_threshold {
                    scores[(y,x)] = score;
                }
            }
        }

        let mut corners = Vec::<Corner>::new();
        for y in border..rows-border {
            for x in border..cols-border {
                let score = scores[(y,x)];
                if score <= 0.0 {
                    continue;
                }

                let mut is_maximum = true;
                for dy in -1..2 as isize {
                    for dx_off in -1..2 as isize {
                        if dy == 0 && dx_off == 0 {
                            continue;
                        }
                        let neighbour = scores[((y as isize + dy) as usize, (x as isize + dx_off) as usize)];
                        if neighbour > score {
                            is_maximum = false;
                        }
                    }
                }

                if is_maximum {
                    corners.push(Corner::new(x, y, score));
                }
            }
        }

        corners
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::image::image_encoding::ImageEncoding;

    fn blob_image(width: usize, height: usize, centers: &[(usize,usize)]) -> Image {
        let mut image = Image::empty(width, height, ImageEncoding::U8);
        for &(cx,cy) in centers {
            for y in 0..height {
                for x in 0..width {
                    let du = x as Float - cx as Float;
                    let dv = y as Float - cy as Float;
                    let value = 255.0*(-(du*du + dv*dv)/8.0).exp();
                    if value > image.buffer[(y,x)] {
                        image.buffer[(y,x)] = value;
                    }
                }
            }
        }
        image
    }

    #[test]
    fn finds_an_isolated_blob() {
        let image = blob_image(64, 64, &[(32,32)]);
        let detector = HessianLaplacianDetector::default();

        let corners = detector.detect(&image, 17);
        assert!(!corners.is_empty());

        let best = corners.iter().max_by(|a,b| a.score.partial_cmp(&b.score).unwrap()).unwrap();
        assert!((best.x() as isize - 32).abs() <= 1);
        assert!((best.y() as isize - 32).abs() <= 1);
    }

    #[test]
    fn respects_the_border() {
        let image = blob_image(64, 64, &[(10,10), (32,32)]);
        let detector = HessianLaplacianDetector::default();

        let corners = detector.detect(&image, 17);
        for corner in &corners {
            assert!(corner.x() >= 17 && corner.x() < 64-17);
            assert!(corner.y() >= 17 && corner.y() < 64-17);
        }
    }

    #[test]
    fn flat_images_have_no_corners() {
        let image = Image::empty(64, 64, ImageEncoding::U8);
        let detector = HessianLaplacianDetector::default();
        assert!(detector.detect(&image, 17).is_empty());
    }

    #[test]
    fn small_images_are_skipped() {
        let image = Image::empty(20, 20, ImageEncoding::U8);
        let detector = HessianLaplacianDetector::default();
        assert!(detector.detect(&image, 17).is_empty());
    }
}
