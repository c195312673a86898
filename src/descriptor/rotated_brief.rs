extern crate nalgebra as na;
extern crate rand;
extern crate rand_distr;

use na::{Matrix2, Vector2};
use rand::prelude::*;
use rand_distr::{Normal, Distribution};

use crate::detector::DescriptorExtractor;
use crate::features::geometry::point::Point;
use crate::image::Image;
use crate::{Corner, Float, float};
use super::{BinaryDescriptor, bit_vector::BitVector};

const SAMPLING_SEED: u64 = 0xA5EED0FCA11B5u64;

/// BRIEF-style extractor with pre-rotated sampling tables. Each corner is
/// described with the table bin closest to its estimated orientation, which
/// is what makes the descriptor invariant to in-plane rotation.
pub struct RotatedBriefExtractor {
    rotated_patterns: Vec<Vec<(Point<Float>,Point<Float>)>>,
    descriptor_size: usize
}

impl RotatedBriefExtractor {

    pub fn new(descriptor_size: usize, patch_size: usize, rotation_bins: usize) -> RotatedBriefExtractor {
        assert!(patch_size % 2 == 1);
        assert!(rotation_bins > 0);

        let std_dev = (patch_size as Float)/5.0;
        let mut sampling_rng = rand::rngs::SmallRng::seed_from_u64(SAMPLING_SEED);
        let normal_distribution = Normal::new(0.0, std_dev).unwrap();

        let mut base_pattern = Vec::<(Point<Float>,Point<Float>)>::with_capacity(descriptor_size);
        for _ in 0..descriptor_size {
            let (sample_a, sample_b) = RotatedBriefExtractor::generate_sample_pair(&mut sampling_rng, &normal_distribution);
            base_pattern.push((sample_a, sample_b));
        }

        let table_inc = 2.0*float::consts::PI/(rotation_bins as Float);
        let mut rotated_patterns = Vec::<Vec<(Point<Float>,Point<Float>)>>::with_capacity(rotation_bins);
        for j in 0..rotation_bins {
            let angle = table_inc*(j as Float);
            // y grows downward here, same convention as the orientation estimate
            let rotation_matrix = Matrix2::new(angle.cos(), -angle.sin(),
                                               angle.sin(),  angle.cos());

            let pattern = base_pattern.iter()
                .map(|(sample_a, sample_b)| (RotatedBriefExtractor::rotate(&rotation_matrix, sample_a),
                                             RotatedBriefExtractor::rotate(&rotation_matrix, sample_b)))
                .collect::<Vec<(Point<Float>,Point<Float>)>>();
            rotated_patterns.push(pattern);
        }

        RotatedBriefExtractor{rotated_patterns, descriptor_size}
    }

    fn generate_sample_pair(sampling_rng: &mut dyn RngCore, normal_distribution: &Normal<Float>) -> (Point<Float>,Point<Float>) {
        let a_x = normal_distribution.sample(sampling_rng);
        let a_y = normal_distribution.sample(sampling_rng);

        let b_x = normal_distribution.sample(sampling_rng);
        let b_y = normal_distribution.sample(sampling_rng);

        (Point{x: a_x, y: a_y},Point{x: b_x, y: b_y})
    }

    fn rotate(rotation_matrix: &Matrix2<Float>, p: &Point<Float>) -> Point<Float> {
        let rotated = rotation_matrix*Vector2::<Float>::new(p.x, p.y);
        Point::new(rotated[0], rotated[1])
    }

    fn pattern_for_angle(&self, angle: Float) -> &Vec<(Point<Float>,Point<Float>)> {
        let bins = self.rotated_patterns.len();
        let two_pi = 2.0*float::consts::PI;
        // the estimator hands out (-π, π]
        let positive = match angle {
            angle if angle < 0.0 => angle + two_pi,
            angle => angle
        };
        let idx = ((positive/two_pi)*(bins as Float)).round() as usize % bins;
        &self.rotated_patterns[idx]
    }

    fn clamp_to_image(image: &Image, p: &Point<Float>) -> Point<usize> {
        let y = match p.y.trunc() {
            r if r < 0.0 => 0,
            r if r as usize >= image.rows() => image.rows()-1,
            r => r as usize
        };
        let x = match p.x.trunc() {
            c if c < 0.0 => 0,
            c if c as usize >= image.cols() => image.cols()-1,
            c => c as usize
        };

        Point::<usize>{x,y}
    }

    fn bit_value(image: &Image, a: &Point<usize>, b: &Point<usize>) -> u64 {
        let intensity_a = image.buffer[(a.y,a.x)];
        let intensity_b = image.buffer[(b.y,b.x)];

        match intensity_a < intensity_b {
            true => 1,
            _ => 0
        }
    }

    fn describe_corner(&self, image: &Image, corner: &Corner) -> BinaryDescriptor {
        let mut bit_vector = BitVector::new(self.descriptor_size);
        let pattern = self.pattern_for_angle(corner.angle);

        for (sample_a, sample_b) in pattern {
            let a_float = Point::<Float>{x: corner.x() as Float + sample_a.x, y: corner.y() as Float + sample_a.y};
            let b_float = Point::<Float>{x: corner.x() as Float + sample_b.x, y: corner.y() as Float + sample_b.y};

            let a = RotatedBriefExtractor::clamp_to_image(image, &a_float);
            let b = RotatedBriefExtractor::clamp_to_image(image, &b_float);

            bit_vector.add_value(RotatedBriefExtractor::bit_value(image, &a, &b));
        }

        BinaryDescriptor::new(bit_vector)
    }
}

impl Default for RotatedBriefExtractor {
    fn default() -> RotatedBriefExtractor {
        RotatedBriefExtractor::new(256, 31, 30)
    }
}

impl DescriptorExtractor for RotatedBriefExtractor {
    fn describe(&self, image: &Image, corners: &[Corner]) -> Vec<BinaryDescriptor> {
        corners.iter().map(|corner| self.describe_corner(image, corner)).collect::<Vec<BinaryDescriptor>>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::image::image_encoding::ImageEncoding;

    fn checker_image(width: usize, height: usize) -> Image {
        let mut image = Image::empty(width, height, ImageEncoding::U8);
        for y in 0..height {
            for x in 0..width {
                if (x/4 + y/4) % 2 == 0 {
                    image.buffer[(y,x)] = 255.0;
                }
            }
        }
        image
    }

    #[test]
    fn sampling_pattern_is_deterministic() {
        let image = checker_image(64, 64);
        let corner = Corner::new(32, 32, 1.0);

        let first = RotatedBriefExtractor::default().describe(&image, &[corner]);
        let second = RotatedBriefExtractor::default().describe(&image, &[corner]);

        assert_eq!(first[0], second[0]);
        assert_eq!(first[0].len(), 256);
    }

    #[test]
    fn negative_angles_select_the_wrapped_bin() {
        let extractor = RotatedBriefExtractor::default();
        let two_pi = 2.0*float::consts::PI;

        let negative = extractor.pattern_for_angle(-float::consts::FRAC_PI_6);
        let wrapped = extractor.pattern_for_angle(two_pi - float::consts::FRAC_PI_6);
        assert_eq!(negative[0].0, wrapped[0].0);

        // table bin 0 serves angles around zero from either side
        let below = extractor.pattern_for_angle(-0.01);
        let above = extractor.pattern_for_angle(0.01);
        assert_eq!(below[0].0, above[0].0);
    }

    #[test]
    fn descriptors_follow_corner_count() {
        let image = checker_image(64, 64);
        let corners = vec![Corner::new(20, 20, 1.0), Corner::new(40, 40, 0.5)];

        let descriptors = RotatedBriefExtractor::default().describe(&image, &corners);
        assert_eq!(descriptors.len(), corners.len());
    }
}
