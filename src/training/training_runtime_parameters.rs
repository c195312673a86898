use serde::{Serialize, Deserialize};

#[derive(Debug,Clone,Serialize,Deserialize)]
pub struct TrainingRuntimeParameters {
    pub level_count: usize,
    pub min_image_dimensions: (usize,usize)
}

impl Default for TrainingRuntimeParameters {
    fn default() -> TrainingRuntimeParameters {
        TrainingRuntimeParameters {
            level_count: 3,
            min_image_dimensions: (50,50)
        }
    }
}
