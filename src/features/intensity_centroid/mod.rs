use crate::image::Image;
use crate::{Float, FeatureError};

/// Margin the patch needs on every side of the sample point.
pub const HALF_PATCH_SIZE: usize = 15;

// Horizontal half-width of the patch at each vertical offset. The table makes
// the patch a disk instead of a square; descriptors computed against these
// orientations assume exactly this shape, so it is never recomputed.
pub const U_MAX: [isize; 17] = [15, 15, 15, 15, 14, 14, 14, 13, 13, 12, 11, 10, 9, 8, 6, 3, 0];

/// Dominant orientation at (x,y) from the first-order intensity moments over
/// a circular patch of radius 15. Returns the raw atan2 of the moments, range
/// (-π, π]; the y axis grows downward, so a patch that is brighter below its
/// center yields a positive angle.
///
/// The sample point must keep a margin of [HALF_PATCH_SIZE] pixels to every
/// image border; violating coordinates are rejected with
/// [FeatureError::OutOfRange].
pub fn orientation(image: &Image, x: usize, y: usize) -> Result<Float, FeatureError> {
    let buffer = &image.buffer;
    let cols = buffer.ncols();
    let rows = buffer.nrows();

    if x < HALF_PATCH_SIZE || x + HALF_PATCH_SIZE >= cols || y < HALF_PATCH_SIZE || y + HALF_PATCH_SIZE >= rows {
        return Err(FeatureError::OutOfRange {x, y, cols, rows, margin: HALF_PATCH_SIZE});
    }

    let half_k = HALF_PATCH_SIZE as isize;
    let x_signed = x as isize;
    let y_signed = y as isize;

    let mut m_01 = 0.0;
    let mut m_10 = 0.0;

    // The center line only contributes to the x moment
    for u in -half_k..half_k+1 {
        m_10 += (u as Float)*buffer[(y,(x_signed+u) as usize)];
    }

    // Remaining lines are walked in mirrored pairs
    for v in 1..half_k+1 {
        let mut v_sum = 0.0;
        let d = U_MAX[v as usize];
        for u in -d..d+1 {
            let col = (x_signed+u) as usize;
            let val_plus = buffer[((y_signed+v) as usize,col)];
            let val_minus = buffer[((y_signed-v) as usize,col)];
            v_sum += val_plus - val_minus;
            m_10 += (u as Float)*(val_plus + val_minus);
        }
        m_01 += (v as Float)*v_sum;
    }

    Ok(m_01.atan2(m_10))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::image::image_encoding::ImageEncoding;
    use crate::{Float, float};

    extern crate nalgebra as na;
    use na::DMatrix;

    fn image_from_fn<F: Fn(usize,usize) -> Float>(width: usize, height: usize, f: F) -> Image {
        let buffer = DMatrix::<Float>::from_fn(height, width, |r,c| f(c,r));
        Image{buffer, original_encoding: ImageEncoding::U8}
    }

    #[test]
    fn flat_patch_has_zero_moments() {
        let image = image_from_fn(64, 64, |_,_| 128.0);
        let angle = orientation(&image, 32, 32).unwrap();
        assert_eq!(angle, (0.0 as Float).atan2(0.0));
        assert_eq!(angle, 0.0);
    }

    #[test]
    fn horizontal_ramp_points_along_x() {
        let image = image_from_fn(64, 64, |x,_| x as Float);
        let angle = orientation(&image, 32, 32).unwrap();
        assert_eq!(angle, 0.0);
    }

    #[test]
    fn vertical_ramp_points_along_positive_y() {
        // y grows downward, so brighter-below is +π/2
        let image = image_from_fn(64, 64, |_,y| y as Float);
        let angle = orientation(&image, 32, 32).unwrap();
        assert_eq!(angle, float::consts::FRAC_PI_2);
    }

    #[test]
    fn rotated_ramp_shifts_the_estimate() {
        let theta: Float = 0.6;
        let image = image_from_fn(80, 80, |x,y| {
            let u = x as Float - 40.0;
            let v = y as Float - 40.0;
            128.0 + 2.0*(u*theta.cos() + v*theta.sin())
        });
        let angle = orientation(&image, 40, 40).unwrap();
        assert!((angle - theta).abs() < 0.05, "expected ~{}, got {}", theta, angle);
    }

    #[test]
    fn repeated_evaluation_is_bit_identical() {
        let image = image_from_fn(64, 64, |x,y| ((x*7 + y*13) % 256) as Float);
        let first = orientation(&image, 30, 30).unwrap();
        let second = orientation(&image, 30, 30).unwrap();
        assert_eq!(first.to_bits(), second.to_bits());
    }

    #[test]
    fn minimum_margin_is_accepted() {
        let image = image_from_fn(31, 31, |x,y| ((x + y) % 256) as Float);
        let angle = orientation(&image, 15, 15).unwrap();
        assert!(angle.is_finite());
    }

    #[test]
    fn margin_violations_are_rejected() {
        let image = image_from_fn(31, 31, |_,_| 0.0);
        assert!(matches!(orientation(&image, 14, 15), Err(FeatureError::OutOfRange{..})));
        assert!(matches!(orientation(&image, 15, 16), Err(FeatureError::OutOfRange{..})));
        assert!(matches!(orientation(&image, 16, 15), Err(FeatureError::OutOfRange{..})));
    }
}
