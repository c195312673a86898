use serde::{Serialize, Deserialize};
use crate::Float;

#[derive(Debug,Clone,Serialize,Deserialize)]
pub struct DetectorRuntimeParameters {
    pub max_corners: usize,
    pub blur_sigma: Float,
    pub blur_radius: usize,
    pub detection_border: usize
}

impl Default for DetectorRuntimeParameters {
    fn default() -> DetectorRuntimeParameters {
        DetectorRuntimeParameters {
            max_corners: 100,
            // the 5-wide kernel of the reference pipeline: sigma follows the
            // 0.3*((size-1)*0.5 - 1) + 0.8 rule
            blur_sigma: 1.1,
            blur_radius: 2,
            detection_border: 17
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parameters_load_from_yaml() {
        let yaml = "max_corners: 50\nblur_sigma: 2.0\nblur_radius: 3\ndetection_border: 20\n";
        let parameters: DetectorRuntimeParameters = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(parameters.max_corners, 50);
        assert_eq!(parameters.blur_radius, 3);
    }

    #[test]
    fn default_border_covers_the_orientation_margin() {
        let parameters = DetectorRuntimeParameters::default();
        assert!(parameters.detection_border >= crate::features::intensity_centroid::HALF_PATCH_SIZE);
    }
}
