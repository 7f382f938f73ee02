/// Fixed-size read/write byte store.
///
/// Indices are relative to the start of the store; an out-of-range index
/// is a caller bug and panics.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Ram {
    data: Box<[u8]>,
}

impl Ram {
    pub fn new(size: usize) -> Self {
        Self {
            data: vec![0; size].into_boxed_slice(),
        }
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.data.len()
    }

    #[inline]
    pub fn read(&self, index: usize) -> u8 {
        assert!(index < self.data.len(), "RAM index {index} out of range");
        self.data[index]
    }

    #[inline]
    pub fn write(&mut self, index: usize, value: u8) {
        assert!(index < self.data.len(), "RAM index {index} out of range");
        self.data[index] = value;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_zeroed_and_keeps_writes() {
        let mut ram = Ram::new(4);
        assert_eq!(ram.size(), 4);
        assert_eq!(ram.read(3), 0);
        ram.write(3, 0xAB);
        assert_eq!(ram.read(3), 0xAB);
    }

    #[test]
    #[should_panic]
    fn index_past_the_end_panics() {
        Ram::new(4).read(4);
    }
}
