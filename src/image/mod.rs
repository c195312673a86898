extern crate image as image_rs;
extern crate nalgebra as na;

use image_rs::{GrayImage, DynamicImage, Pixel, Luma};
use na::DMatrix;

use crate::{Float, FeatureError};
use self::image_encoding::ImageEncoding;

pub mod image_encoding;

/// Single-channel intensity buffer. Samples hold integral values in 0-255
/// so that moment accumulation over the buffer stays exact in f64.
#[derive(Debug,Clone)]
pub struct Image {
    pub buffer: DMatrix<Float>,
    pub original_encoding: ImageEncoding
}

impl Image {

    pub fn empty(width: usize, height: usize, image_encoding: ImageEncoding) -> Image {
        let buffer = DMatrix::<Float>::from_element(height,width,0.0);
        Image{ buffer, original_encoding: image_encoding}
    }

    pub fn cols(&self) -> usize {
        self.buffer.ncols()
    }

    pub fn rows(&self) -> usize {
        self.buffer.nrows()
    }

    pub fn from_matrix(matrix: &DMatrix<Float>, original_encoding: ImageEncoding) -> Image {
        Image{ buffer: matrix.clone(), original_encoding}
    }

    pub fn from_gray_image(image: &GrayImage) -> Image {
        let (width, height) = image.dimensions();
        let size = (width * height) as usize;
        let mut vec_column_major: Vec<Float> = Vec::with_capacity(size);
        for x in 0..width {
            for y in 0..height {
                let pixel = image.get_pixel(x, y);
                let pixel_value = pixel.channels()[0];
                vec_column_major.push(pixel_value as Float);
            }
        }
        let buffer = DMatrix::<Float>::from_vec(height as usize, width as usize, vec_column_major);
        Image{ buffer, original_encoding: ImageEncoding::U8}
    }

    pub fn to_image(&self) -> GrayImage {
        let (rows, cols) = self.buffer.shape();

        let mut gray_image = DynamicImage::new_luma8(cols as u32, rows as u32).to_luma8();
        let max = self.buffer.max();
        let min = self.buffer.min();
        for c in 0..cols {
            for r in 0..rows {
                let val = *self.buffer.index((r, c));
                let pixel_value = self.original_encoding.normalize_to_gray(max,min,val);
                gray_image.put_pixel(c as u32, r as u32, Luma([pixel_value]));
            }
        }
        gray_image
    }

    pub fn downsample_half(image: &Image, (min_cols,min_rows): (usize,usize)) -> Result<Image, FeatureError> {
        let width = image.buffer.ncols();
        let height = image.buffer.nrows();

        let new_width = width/2;
        let new_height = height/2;

        if new_width < min_cols || new_height < min_rows {
            return Err(FeatureError::ImageTooSmall {
                cols: new_width, rows: new_height, min_cols, min_rows
            });
        }

        let mut new_buffer = DMatrix::<Float>::from_element(new_height,new_width,0.0);
        for x in 0..new_width {
            for y in 0..new_height {
                new_buffer[(y,x)] = image.buffer[(2*y,2*x)];
            }
        }

        Ok(Image{
            buffer: new_buffer,
            original_encoding: image.original_encoding
        })
    }

}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn downsample_half_dimensions() {
        let image = Image::empty(64, 48, ImageEncoding::U8);
        let half = Image::downsample_half(&image, (16,16)).unwrap();
        assert_eq!(half.cols(), 32);
        assert_eq!(half.rows(), 24);
    }

    #[test]
    fn downsample_half_respects_minimum() {
        let image = Image::empty(20, 20, ImageEncoding::U8);
        assert!(Image::downsample_half(&image, (16,16)).is_err());
    }
}
