use serde::{Serialize, Deserialize};

use self::bit_vector::BitVector;

pub mod bit_vector;
pub mod rotated_brief;

/// Fixed-length binary descriptor of the local appearance around a corner.
/// Compared by Hamming distance.
#[derive(Debug,Clone,PartialEq,Serialize,Deserialize)]
pub struct BinaryDescriptor {
    bit_vector: BitVector
}

impl BinaryDescriptor {

    pub fn new(bit_vector: BitVector) -> BinaryDescriptor {
        BinaryDescriptor{bit_vector}
    }

    pub fn len(&self) -> usize {
        self.bit_vector.len()
    }

    pub fn hamming_distance(&self, other: &BinaryDescriptor) -> u64 {
        self.bit_vector.hamming_distance(&other.bit_vector)
    }
}
