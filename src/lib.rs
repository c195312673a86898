
use serde::{Serialize, Deserialize};
use thiserror::Error;

use self::features::geometry::point::Point;

pub mod image;
pub mod filter;
pub mod features;
pub mod descriptor;
pub mod detector;
pub mod pyramid;
pub mod training;
pub mod matching;
pub mod visualize;

macro_rules! define_float {
    ($f:tt) => {
        pub use std::$f as float;
        pub type Float = $f;
    }
}

define_float!(f64);

/// A detected corner: pixel location, detector score and dominant
/// orientation angle in radians, range (-π, π].
#[derive(Debug,Clone,Copy,Serialize,Deserialize)]
pub struct Corner {
    pub location: Point<usize>,
    pub score: Float,
    pub angle: Float
}

impl Corner {

    pub fn new(x: usize, y: usize, score: Float) -> Corner {
        Corner {location: Point::new(x,y), score, angle: 0.0}
    }

    pub fn x(&self) -> usize {
        self.location.x
    }

    pub fn y(&self) -> usize {
        self.location.y
    }
}

#[derive(Error,Debug)]
pub enum FeatureError {
    #[error("sample at ({x},{y}) needs a margin of {margin} pixels inside a {cols}x{rows} image")]
    OutOfRange { x: usize, y: usize, cols: usize, rows: usize, margin: usize },

    #[error("image of {cols}x{rows} is below the minimum of {min_cols}x{min_rows}")]
    ImageTooSmall { cols: usize, rows: usize, min_cols: usize, min_rows: usize }
}
