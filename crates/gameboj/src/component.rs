/// A memory-mapped piece of hardware attached to the [`Bus`](crate::Bus).
///
/// Every component sees every access: reads are offered to components in
/// attach order, writes are broadcast. A component answers `None` from
/// `read` for addresses that are not its own, and ignores writes to them.
pub trait Component {
    fn read(&self, address: u16) -> Option<u8>;
    fn write(&mut self, address: u16, data: u8);
}
