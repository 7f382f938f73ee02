/// Read-only byte store holding a copy of its initial contents.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Rom {
    data: Box<[u8]>,
}

impl Rom {
    pub fn new(data: &[u8]) -> Self {
        Self { data: data.into() }
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.data.len()
    }

    #[inline]
    pub fn read(&self, index: usize) -> u8 {
        assert!(index < self.data.len(), "ROM index {index} out of range");
        self.data[index]
    }
}

impl From<Vec<u8>> for Rom {
    fn from(data: Vec<u8>) -> Self {
        Self {
            data: data.into_boxed_slice(),
        }
    }
}
