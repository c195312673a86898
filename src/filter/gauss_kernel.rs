use crate::{Float,float};
use float::consts::PI;
use super::kernel::Kernel;

pub struct GaussKernel1D {
    kernel: Vec<Float>,
    normalizing_constant: Float
}

impl GaussKernel1D {
    fn sample(mean: Float, std: Float, x: Float) -> Float {
        let exponent = (-0.5*((x-mean)/std).powi(2)).exp();
        let factor = 1.0/(std*(2.0*PI).sqrt());
        factor*exponent
    }

    pub fn new(mean: Float, std: Float, radius: usize) -> GaussKernel1D {
        let start = -(radius as isize);
        let end_exclusive = radius as isize + 1;
        let kernel = (start..end_exclusive).map(|x| GaussKernel1D::sample(mean,std,x as Float)).collect::<Vec<Float>>();
        let normalizing_constant = kernel.iter().sum();
        GaussKernel1D {
            kernel,
            normalizing_constant
        }
    }
}

impl Kernel for GaussKernel1D {
    fn kernel(&self) -> &[Float] {
        &self.kernel
    }

    fn normalizing_constant(&self) -> Float {
        self.normalizing_constant
    }
}
