/// Memory as seen from the CPU during dispatch.
///
/// The machine's [`Bus`](crate::Bus) implements this; CPU tests use a flat
/// 64 KiB array.
pub trait AddressSpace {
    fn read8(&mut self, addr: u16) -> u8;
    fn write8(&mut self, addr: u16, value: u8);
}
