use serde::{Serialize, Deserialize};

#[derive(Debug,Clone,PartialEq,Serialize,Deserialize)]
pub struct BitVector {
    data: Vec<u64>,
    entries: usize,
    bits: usize
}

impl BitVector {

    pub fn new(n: usize) -> BitVector {
        assert!(n == 128 || n == 256 || n == 512);

        BitVector{data: vec![0; n/64], entries: 0, bits: n}
    }

    pub fn len(&self) -> usize {
        self.bits
    }

    pub fn add_value(&mut self, new_val: u64) -> () {
        assert!(new_val == 0 || new_val == 1);
        assert!(self.entries < self.bits);

        let word = self.entries/64;
        let bit = self.entries%64;
        self.data[word] |= new_val << bit;
        self.entries += 1;
    }

    pub fn hamming_distance(&self, other: &BitVector) -> u64 {
        assert_eq!(self.bits, other.bits);

        self.data.iter()
            .zip(other.data.iter())
            .map(|(a,b)| (a ^ b).count_ones() as u64)
            .sum()
    }

}
