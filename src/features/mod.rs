pub mod geometry;
pub mod intensity_centroid;
