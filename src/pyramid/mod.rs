#[derive(Debug,Clone)]
pub struct Pyramid<T> {
    pub octaves: Vec<T>
}

impl<T> Pyramid<T> {
    pub fn empty(octave_count: usize) -> Pyramid<T> {
        Pyramid {octaves: Vec::<T>::with_capacity(octave_count)}
    }
}
