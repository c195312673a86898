use crate::image::Image;
use crate::features::geometry::point::Point;
use crate::{Corner, Float, float};

// Debug overlay drawing. Everything here paints directly into the grayscale
// buffer; callers convert with Image::to_image and save.

pub fn draw_square(image: &mut Image, x: usize, y: usize, side_length: usize, intensity: Float) -> () {
    if x < side_length || y < side_length || y + side_length >= image.rows() || x + side_length >= image.cols() {
        return;
    }

    for i in x-side_length..x+side_length+1 {
        image.buffer[(y + side_length,i)] = intensity;
        image.buffer[(y - side_length,i)] = intensity;
    }

    for j in y-side_length+1..y+side_length {
        image.buffer[(j,x + side_length)] = intensity;
        image.buffer[(j,x - side_length)] = intensity;
    }
}

pub fn draw_circle(image: &mut Image, x_center: usize, y_center: usize, radius: usize, intensity: Float) -> () {
    let steps = 8*radius.max(1);
    for i in 0..steps {
        let angle = 2.0*float::consts::PI*(i as Float)/(steps as Float);
        let x = x_center as Float + (radius as Float)*angle.cos();
        let y = y_center as Float + (radius as Float)*angle.sin();

        if x >= 0.0 && y >= 0.0 && (x as usize) < image.cols() && (y as usize) < image.rows() {
            image.buffer[(y as usize, x as usize)] = intensity;
        }
    }
}

pub fn draw_line(image: &mut Image, start: &Point<usize>, end: &Point<usize>, intensity: Float) -> () {
    let dx = end.x as Float - start.x as Float;
    let dy = end.y as Float - start.y as Float;
    let steps = dx.abs().max(dy.abs()) as usize;

    for i in 0..steps+1 {
        let t = match steps {
            0 => 0.0,
            _ => i as Float/steps as Float
        };
        let x = (start.x as Float + t*dx).round() as usize;
        let y = (start.y as Float + t*dy).round() as usize;

        if x < image.cols() && y < image.rows() {
            image.buffer[(y,x)] = intensity;
        }
    }
}

/// Circles at corner locations, brightest for the strongest corner. Expects
/// the corners sorted by score descending, which is how the detection
/// pipeline hands them out.
pub fn draw_corners(image: &mut Image, corners: &[Corner], radius: usize) -> () {
    let count = corners.len().max(1);
    for (idx, corner) in corners.iter().enumerate() {
        let intensity = 255.0 - 160.0*(idx as Float)/(count as Float);
        draw_circle(image, corner.x(), corner.y(), radius, intensity);
    }
}

/// Closed polyline through the marker outline points.
pub fn draw_contour(image: &mut Image, contour: &[Point<usize>], intensity: Float) -> () {
    if contour.len() < 2 {
        return;
    }

    for i in 0..contour.len() {
        let start = &contour[i];
        let end = &contour[(i+1)%contour.len()];
        draw_line(image, start, end, intensity);
    }
}

/// Side-by-side composite of two images with match endpoints marked and
/// connected.
pub fn display_matches(image_a: &Image, image_b: &Image, corners_a: &[Corner], corners_b: &[Corner], pairs: &[(usize,usize)]) -> Image {
    let height = image_a.rows().max(image_b.rows());
    let width = image_a.cols() + image_b.cols();

    let mut target_image = Image::empty(width, height, image_a.original_encoding);

    for x in 0..image_a.cols() {
        for y in 0..image_a.rows() {
            target_image.buffer[(y,x)] = image_a.buffer[(y,x)];
        }
    }
    for x in 0..image_b.cols() {
        for y in 0..image_b.rows() {
            target_image.buffer[(y,x+image_a.cols())] = image_b.buffer[(y,x)];
        }
    }

    for &(a_idx, b_idx) in pairs {
        let corner_a = &corners_a[a_idx];
        let corner_b = &corners_b[b_idx];

        let start = Point::new(corner_a.x(), corner_a.y());
        let end = Point::new(corner_b.x() + image_a.cols(), corner_b.y());

        draw_square(&mut target_image, start.x, start.y, 2, 255.0);
        draw_square(&mut target_image, end.x, end.y, 2, 255.0);
        draw_line(&mut target_image, &start, &end, 255.0);
    }

    target_image
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::image::image_encoding::ImageEncoding;

    #[test]
    fn line_covers_both_endpoints() {
        let mut image = Image::empty(32, 32, ImageEncoding::U8);
        draw_line(&mut image, &Point::new(2,3), &Point::new(20,17), 255.0);

        assert_eq!(image.buffer[(3,2)], 255.0);
        assert_eq!(image.buffer[(17,20)], 255.0);
    }

    #[test]
    fn composite_holds_both_images() {
        let mut image_a = Image::empty(16, 16, ImageEncoding::U8);
        let mut image_b = Image::empty(16, 16, ImageEncoding::U8);
        image_a.buffer[(5,5)] = 100.0;
        image_b.buffer[(6,6)] = 200.0;

        let composite = display_matches(&image_a, &image_b, &[], &[], &[]);
        assert_eq!(composite.cols(), 32);
        assert_eq!(composite.rows(), 16);
        assert_eq!(composite.buffer[(5,5)], 100.0);
        assert_eq!(composite.buffer[(6,22)], 200.0);
    }

    #[test]
    fn squares_near_the_border_are_skipped() {
        let mut image = Image::empty(16, 16, ImageEncoding::U8);
        draw_square(&mut image, 0, 0, 3, 255.0);

        for elem in image.buffer.iter() {
            assert_eq!(*elem, 0.0);
        }
    }
}
