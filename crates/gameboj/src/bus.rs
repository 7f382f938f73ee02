use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use crate::component::Component;
use crate::cpu::AddressSpace;

/// Value returned by a read that no component answered (open bus pull-ups).
pub const OPEN_BUS: u8 = 0xFF;

/// Shared handle to an attached component.
///
/// The machine keeps its own typed handle to components it also needs to
/// clock or poke directly (timer, joypad, ...); the bus only holds a
/// type-erased clone of it.
pub type ComponentHandle = Rc<RefCell<dyn Component>>;

/// Ordered collection of memory-mapped components.
///
/// Attach order is read priority: the first component that answers a read
/// wins. Writes go to every component.
#[derive(Default)]
pub struct Bus {
    components: Vec<ComponentHandle>,
}

impl Bus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn attach(&mut self, component: ComponentHandle) {
        self.components.push(component);
    }

    pub fn len(&self) -> usize {
        self.components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    /// Returns the first answer to a read of `address`, if any component
    /// claims it.
    pub fn try_read(&self, address: u16) -> Option<u8> {
        self.components
            .iter()
            .find_map(|component| component.borrow().read(address))
    }

    pub fn read(&self, address: u16) -> u8 {
        self.try_read(address).unwrap_or(OPEN_BUS)
    }

    pub fn write(&mut self, address: u16, data: u8) {
        for component in &self.components {
            component.borrow_mut().write(address, data);
        }
    }
}

impl fmt::Debug for Bus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Bus")
            .field("components", &self.components.len())
            .finish()
    }
}

impl AddressSpace for Bus {
    fn read8(&mut self, addr: u16) -> u8 {
        self.read(addr)
    }

    fn write8(&mut self, addr: u16, value: u8) {
        self.write(addr, value)
    }
}
