use crate::image::Image;
use self::kernel::Kernel;
use self::gauss_kernel::GaussKernel1D;

pub mod kernel;
pub mod gauss_kernel;
pub mod laplace_kernel;
pub mod prewitt_kernel;

#[derive(Debug,Copy,Clone)]
pub enum FilterDirection {
    Horizontal,
    Vertical
}

/// Separable 1D convolution along one axis with clamp-to-edge borders.
/// Source and target must have the same dimensions.
pub fn filter_1d_convolution_into(source: &Image, filter_direction: FilterDirection, filter_kernel: &dyn Kernel, target: &mut Image) -> () {
    let kernel = filter_kernel.kernel();
    let kernel_radius = filter_kernel.radius();
    let kernel_radius_signed = kernel_radius as isize;

    let buffer = &source.buffer;
    let width = buffer.ncols();
    let height = buffer.nrows();

    assert_eq!(width, target.buffer.ncols());
    assert_eq!(height, target.buffer.nrows());

    for y in 0..height {
        for x in 0..width {
            let mut acc = 0.0;
            for kernel_idx in -kernel_radius_signed..kernel_radius_signed+1 {

                let sample_value = match filter_direction {
                    FilterDirection::Horizontal => {
                        let sample_idx = (x as isize)+kernel_idx;
                        match sample_idx {
                            sample_idx if sample_idx < 0 => buffer.index((y,0)),
                            sample_idx if sample_idx >= width as isize => buffer.index((y,width-1)),
                            _ => buffer.index((y,sample_idx as usize))
                        }
                    },
                    FilterDirection::Vertical => {
                        let sample_idx = (y as isize)+kernel_idx;
                        match sample_idx {
                            sample_idx if sample_idx < 0 => buffer.index((0,x)),
                            sample_idx if sample_idx >= height as isize => buffer.index((height-1,x)),
                            _ => buffer.index((sample_idx as usize,x))
                        }
                    }
                };

                let kernel_value = kernel[(kernel_idx + kernel_radius_signed) as usize];
                acc += sample_value*kernel_value;
            }

            target.buffer[(y,x)] = acc/filter_kernel.normalizing_constant();
        }
    }
}

pub fn filter_1d_convolution(source: &Image, filter_direction: FilterDirection, filter_kernel: &dyn Kernel) -> Image {
    let mut target = Image::empty(source.cols(), source.rows(), source.original_encoding);
    filter_1d_convolution_into(source, filter_direction, filter_kernel, &mut target);
    target
}

pub fn gaussian_2_d_convolution(image: &Image, filter_kernel: &GaussKernel1D) -> Image {
    let blur_hor = filter_1d_convolution(image, FilterDirection::Horizontal, filter_kernel);
    filter_1d_convolution(&blur_hor, FilterDirection::Vertical, filter_kernel)
}

/// Smoothing variant writing into caller-owned buffers so the detection
/// pipeline can reuse its scratch across frames.
pub fn gaussian_2_d_convolution_into(image: &Image, filter_kernel: &GaussKernel1D, scratch: &mut Image, target: &mut Image) -> () {
    filter_1d_convolution_into(image, FilterDirection::Horizontal, filter_kernel, scratch);
    filter_1d_convolution_into(scratch, FilterDirection::Vertical, filter_kernel, target);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::image::image_encoding::ImageEncoding;

    #[test]
    fn gaussian_preserves_flat_image() {
        let mut image = Image::empty(32, 32, ImageEncoding::U8);
        for elem in image.buffer.iter_mut() {
            *elem = 100.0;
        }

        let kernel = GaussKernel1D::new(0.0, 1.1, 2);
        let smoothed = gaussian_2_d_convolution(&image, &kernel);

        for elem in smoothed.buffer.iter() {
            assert!((elem - 100.0).abs() < 1e-9);
        }
    }

    #[test]
    fn into_variant_matches_allocating_variant() {
        let mut image = Image::empty(16, 16, ImageEncoding::U8);
        image.buffer[(8,8)] = 255.0;

        let kernel = GaussKernel1D::new(0.0, 1.1, 2);
        let smoothed = gaussian_2_d_convolution(&image, &kernel);

        let mut scratch = Image::empty(16, 16, ImageEncoding::U8);
        let mut target = Image::empty(16, 16, ImageEncoding::U8);
        gaussian_2_d_convolution_into(&image, &kernel, &mut scratch, &mut target);

        assert_eq!(smoothed.buffer, target.buffer);
    }
}
