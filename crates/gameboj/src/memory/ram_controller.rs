use std::cell::RefCell;
use std::rc::Rc;

use super::Ram;
use crate::component::Component;

/// Maps a [`Ram`] onto the bus window `[start, end)`.
///
/// Several controllers may share one store; work RAM and its echo do.
#[derive(Debug)]
pub struct RamController {
    ram: Rc<RefCell<Ram>>,
    start: u16,
    end: u32,
}

impl RamController {
    /// Maps the whole store starting at `start`.
    pub fn new(ram: Rc<RefCell<Ram>>, start: u16) -> Self {
        let end = start as u32 + ram.borrow().size() as u32;
        Self::with_range(ram, start, end)
    }

    /// Maps the first `end - start` bytes of the store.
    ///
    /// `end` is exclusive and may be 0x10000. Panics if the window is
    /// inverted, leaves the address space, or is larger than the store.
    pub fn with_range(ram: Rc<RefCell<Ram>>, start: u16, end: u32) -> Self {
        assert!(start as u32 <= end, "inverted RAM window 0x{start:04X}..0x{end:04X}");
        assert!(end <= 0x1_0000, "RAM window end 0x{end:X} past the address space");
        let len = (end - start as u32) as usize;
        let size = ram.borrow().size();
        assert!(len <= size, "RAM window of {len} bytes exceeds a {size}-byte store");
        Self { ram, start, end }
    }

    #[inline]
    fn index(&self, address: u16) -> Option<usize> {
        let address = address as u32;
        (self.start as u32 <= address && address < self.end)
            .then(|| (address - self.start as u32) as usize)
    }
}

impl Component for RamController {
    fn read(&self, address: u16) -> Option<u8> {
        self.index(address).map(|i| self.ram.borrow().read(i))
    }

    fn write(&mut self, address: u16, data: u8) {
        if let Some(i) = self.index(address) {
            self.ram.borrow_mut().write(i, data);
        }
    }
}
