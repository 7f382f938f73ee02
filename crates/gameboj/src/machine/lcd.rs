use crate::address_map::{
    OAM_END, OAM_SIZE, OAM_START, REG_BGP, REG_DMA, REG_LCDC, REG_LY, REG_LYC, REG_OBP0,
    REG_OBP1, REG_SCX, REG_SCY, REG_STAT, REG_WX, REG_WY, VIDEO_RAM_END, VIDEO_RAM_SIZE,
    VIDEO_RAM_START,
};
use crate::bits;
use crate::component::Component;
use crate::cpu::{Interrupt, InterruptSink};
use crate::memory::Ram;

pub const LCD_HEIGHT: u8 = 144;

/// Lines per frame, the last ten in VBLANK.
const FRAME_LINES: u8 = 154;

const LINE_CYCLES: u32 = 114;
const MODE2_CYCLES: u32 = 20;
const MODE3_CYCLES: u32 = 43;
const MODE0_CYCLES: u32 = 51;

const LCDC_ENABLE: u32 = 7;

/// STAT interrupt enable bits. Bits 3..6 select HBLANK, VBLANK, OAM scan
/// and LY=LYC.
const STAT_ENABLES: u8 = 0x78;
const STAT_LYC_ENABLE: u32 = 6;
const STAT_LYC_EQUAL: u32 = 2;

/// Bytes copied by one OAM DMA transfer.
const DMA_LENGTH: u16 = OAM_SIZE as u16;

/// PPU mode, as reported in the low two bits of STAT.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    HBlank = 0,
    VBlank = 1,
    OamScan = 2,
    Transfer = 3,
}

impl Mode {
    /// STAT bit enabling the interrupt raised when this mode starts.
    fn stat_enable_bit(self) -> Option<u32> {
        match self {
            Mode::HBlank => Some(3),
            Mode::VBlank => Some(4),
            Mode::OamScan => Some(5),
            Mode::Transfer => None,
        }
    }
}

#[derive(Clone, Copy, Debug)]
struct OamDma {
    source: u16,
    copied: u16,
}

/// LCD controller without pixel output.
///
/// Owns video RAM and OAM, the 0xFF40..0xFF4B register block and the line
/// timing: 144 visible lines of mode 2, 3 and 0 (20, 43 and 51 machine
/// cycles), then ten VBLANK lines of 114 cycles. It raises VBLANK on entering
/// line 144 and LCD_STAT for enabled mode changes and LY=LYC matches, and
/// runs OAM DMA one byte per machine cycle.
#[derive(Clone, Debug)]
pub struct Lcd {
    vram: Ram,
    oam: Ram,
    lcdc: u8,
    stat: u8,
    scy: u8,
    scx: u8,
    ly: u8,
    lyc: u8,
    dma: u8,
    bgp: u8,
    obp0: u8,
    obp1: u8,
    wy: u8,
    wx: u8,
    mode: Mode,
    /// Machine cycles left in the current mode; `None` until the display
    /// starts after being switched on.
    wait: Option<u32>,
    transfer: Option<OamDma>,
    /// LCD_STAT caused by a register write, reported on the next cycle.
    stat_pending: bool,
}

impl Default for Lcd {
    fn default() -> Self {
        Self::new()
    }
}

impl Lcd {
    /// Power-on state: display off, memory cleared.
    pub fn new() -> Self {
        Self {
            vram: Ram::new(VIDEO_RAM_SIZE),
            oam: Ram::new(OAM_SIZE),
            lcdc: 0,
            stat: 0,
            scy: 0,
            scx: 0,
            ly: 0,
            lyc: 0,
            dma: 0,
            bgp: 0,
            obp0: 0,
            obp1: 0,
            wy: 0,
            wx: 0,
            mode: Mode::HBlank,
            wait: None,
            transfer: None,
            stat_pending: false,
        }
    }

    /// Display switched on with the palette the DMG boot ROM sets up.
    pub fn post_boot() -> Self {
        Self {
            lcdc: 0x91,
            bgp: 0xFC,
            ..Self::new()
        }
    }

    #[inline]
    pub fn is_on(&self) -> bool {
        bits::test(self.lcdc as u32, LCDC_ENABLE)
    }

    #[inline]
    pub fn ly(&self) -> u8 {
        self.ly
    }

    #[inline]
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Advances one machine cycle.
    pub fn cycle(&mut self, sink: &mut impl InterruptSink) {
        if std::mem::take(&mut self.stat_pending) {
            sink.request_interrupt(Interrupt::LcdStat);
        }
        if !self.is_on() {
            return;
        }
        let cost = match self.wait {
            None => self.enter_mode(Mode::OamScan, sink),
            Some(0) => self.next_mode(sink),
            Some(left) => {
                self.wait = Some(left - 1);
                return;
            }
        };
        self.wait = Some(cost - 1);
    }

    /// Address the running OAM DMA reads next, if a transfer is running.
    pub fn oam_dma_source(&self) -> Option<u16> {
        self.transfer
            .map(|transfer| transfer.source.wrapping_add(transfer.copied))
    }

    /// Stores the byte read from [`Lcd::oam_dma_source`].
    pub fn oam_dma_store(&mut self, data: u8) {
        let Some(mut transfer) = self.transfer else {
            return;
        };
        self.oam.write(transfer.copied as usize, data);
        transfer.copied += 1;
        self.transfer = (transfer.copied < DMA_LENGTH).then_some(transfer);
    }

    /// Ends the current mode and starts the following one. Returns its
    /// length in machine cycles.
    fn next_mode(&mut self, sink: &mut impl InterruptSink) -> u32 {
        match self.mode {
            Mode::OamScan => self.enter_mode(Mode::Transfer, sink),
            Mode::Transfer => self.enter_mode(Mode::HBlank, sink),
            Mode::HBlank => {
                self.set_ly(self.ly + 1, sink);
                if self.ly == LCD_HEIGHT {
                    sink.request_interrupt(Interrupt::VBlank);
                    self.enter_mode(Mode::VBlank, sink)
                } else {
                    self.enter_mode(Mode::OamScan, sink)
                }
            }
            Mode::VBlank if self.ly == FRAME_LINES - 1 => {
                self.set_ly(0, sink);
                self.enter_mode(Mode::OamScan, sink)
            }
            Mode::VBlank => {
                self.set_ly(self.ly + 1, sink);
                LINE_CYCLES
            }
        }
    }

    fn enter_mode(&mut self, mode: Mode, sink: &mut impl InterruptSink) -> u32 {
        self.mode = mode;
        if let Some(bit) = mode.stat_enable_bit() {
            if bits::test(self.stat as u32, bit) {
                sink.request_interrupt(Interrupt::LcdStat);
            }
        }
        match mode {
            Mode::OamScan => MODE2_CYCLES,
            Mode::Transfer => MODE3_CYCLES,
            Mode::HBlank => MODE0_CYCLES,
            Mode::VBlank => LINE_CYCLES,
        }
    }

    fn set_ly(&mut self, ly: u8, sink: &mut impl InterruptSink) {
        self.ly = ly;
        if self.lyc_interrupt() {
            sink.request_interrupt(Interrupt::LcdStat);
        }
    }

    #[inline]
    fn lyc_interrupt(&self) -> bool {
        self.ly == self.lyc && bits::test(self.stat as u32, STAT_LYC_ENABLE)
    }

    fn read_stat(&self) -> u8 {
        let equal = bits::set(0, STAT_LYC_EQUAL, self.ly == self.lyc) as u8;
        0x80 | (self.stat & STAT_ENABLES) | equal | self.mode as u8
    }

    fn switch_off(&mut self) {
        if self.is_on() {
            log::debug!("GB LCD off at LY={}", self.ly);
        }
        self.ly = 0;
        self.mode = Mode::HBlank;
        self.wait = None;
        self.stat_pending |= self.lyc_interrupt();
    }
}

impl Component for Lcd {
    fn read(&self, address: u16) -> Option<u8> {
        match address {
            a if (VIDEO_RAM_START..VIDEO_RAM_END).contains(&a) => {
                Some(self.vram.read((a - VIDEO_RAM_START) as usize))
            }
            a if (OAM_START..OAM_END).contains(&a) => Some(self.oam.read((a - OAM_START) as usize)),
            REG_LCDC => Some(self.lcdc),
            REG_STAT => Some(self.read_stat()),
            REG_SCY => Some(self.scy),
            REG_SCX => Some(self.scx),
            REG_LY => Some(self.ly),
            REG_LYC => Some(self.lyc),
            REG_DMA => Some(self.dma),
            REG_BGP => Some(self.bgp),
            REG_OBP0 => Some(self.obp0),
            REG_OBP1 => Some(self.obp1),
            REG_WY => Some(self.wy),
            REG_WX => Some(self.wx),
            _ => None,
        }
    }

    fn write(&mut self, address: u16, data: u8) {
        match address {
            a if (VIDEO_RAM_START..VIDEO_RAM_END).contains(&a) => {
                self.vram.write((a - VIDEO_RAM_START) as usize, data)
            }
            a if (OAM_START..OAM_END).contains(&a) => self.oam.write((a - OAM_START) as usize, data),
            REG_LCDC => {
                if !bits::test(data as u32, LCDC_ENABLE) {
                    self.switch_off();
                }
                self.lcdc = data;
            }
            REG_STAT => self.stat = data & STAT_ENABLES,
            REG_SCY => self.scy = data,
            REG_SCX => self.scx = data,
            // LY is read-only.
            REG_LY => {}
            REG_LYC => {
                self.lyc = data;
                self.stat_pending |= self.lyc_interrupt();
            }
            REG_DMA => {
                self.dma = data;
                self.transfer = Some(OamDma {
                    source: (data as u16) << 8,
                    copied: 0,
                });
                log::trace!("GB OAM DMA from 0x{:04X}", (data as u16) << 8);
            }
            REG_BGP => self.bgp = data,
            REG_OBP0 => self.obp0 = data,
            REG_OBP1 => self.obp1 = data,
            REG_WY => self.wy = data,
            REG_WX => self.wx = data,
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cpu::{Cpu, Interrupts};

    fn switched_on() -> (Lcd, Cpu) {
        let mut lcd = Lcd::new();
        lcd.write(REG_LCDC, 0x80);
        (lcd, Cpu::new())
    }

    fn run(lcd: &mut Lcd, cpu: &mut Cpu, cycles: u32) {
        for _ in 0..cycles {
            lcd.cycle(cpu);
        }
    }

    fn requested(cpu: &Cpu, interrupt: Interrupts) -> bool {
        cpu.interrupt_flags().contains(interrupt)
    }

    #[test]
    fn video_ram_and_oam_keep_writes() {
        let mut lcd = Lcd::new();
        lcd.write(0x8000, 0x12);
        lcd.write(0x9FFF, 0x34);
        lcd.write(0xFE9F, 0x56);
        assert_eq!(lcd.read(0x8000), Some(0x12));
        assert_eq!(lcd.read(0x9FFF), Some(0x34));
        assert_eq!(lcd.read(0xFE9F), Some(0x56));
        assert_eq!(lcd.read(0xA000), None);
        assert_eq!(lcd.read(0xFEA0), None);
        assert_eq!(lcd.read(0xFF4C), None);
    }

    #[test]
    fn registers_read_back() {
        let mut lcd = Lcd::new();
        for (address, value) in [
            (REG_SCY, 0x11),
            (REG_SCX, 0x22),
            (REG_LYC, 0x33),
            (REG_BGP, 0xE4),
            (REG_OBP0, 0xD2),
            (REG_OBP1, 0x1B),
            (REG_WY, 0x40),
            (REG_WX, 0x07),
        ] {
            lcd.write(address, value);
            assert_eq!(lcd.read(address), Some(value), "0x{address:04X}");
        }

        lcd.write(REG_LY, 0x20);
        assert_eq!(lcd.read(REG_LY), Some(0));

        // Mode and match bits are not writable; bit 7 always reads 1.
        lcd.write(REG_STAT, 0xFF);
        assert_eq!(lcd.read(REG_STAT), Some(0xF8));
        lcd.write(REG_LYC, 0);
        assert_eq!(lcd.read(REG_STAT), Some(0xFC));
    }

    #[test]
    fn off_display_does_not_count() {
        let mut lcd = Lcd::new();
        let mut cpu = Cpu::new();
        run(&mut lcd, &mut cpu, 1000);
        assert_eq!(lcd.ly(), 0);
        assert_eq!(lcd.mode(), Mode::HBlank);
        assert!(cpu.interrupt_flags().is_empty());
    }

    #[test]
    fn visible_line_timing() {
        let (mut lcd, mut cpu) = switched_on();
        run(&mut lcd, &mut cpu, 1);
        assert_eq!(lcd.mode(), Mode::OamScan);
        assert_eq!(lcd.read(REG_STAT), Some(0x86));

        run(&mut lcd, &mut cpu, 19);
        assert_eq!(lcd.mode(), Mode::OamScan);
        run(&mut lcd, &mut cpu, 1);
        assert_eq!(lcd.mode(), Mode::Transfer);

        run(&mut lcd, &mut cpu, 42);
        assert_eq!(lcd.mode(), Mode::Transfer);
        run(&mut lcd, &mut cpu, 1);
        assert_eq!(lcd.mode(), Mode::HBlank);

        run(&mut lcd, &mut cpu, 50);
        assert_eq!((lcd.ly(), lcd.mode()), (0, Mode::HBlank));
        run(&mut lcd, &mut cpu, 1);
        assert_eq!((lcd.ly(), lcd.mode()), (1, Mode::OamScan));
    }

    #[test]
    fn vblank_starts_at_line_144_and_frame_wraps() {
        let (mut lcd, mut cpu) = switched_on();
        let vblank_start = LCD_HEIGHT as u32 * LINE_CYCLES;

        run(&mut lcd, &mut cpu, vblank_start);
        assert_eq!(lcd.ly(), 143);
        assert!(!requested(&cpu, Interrupts::VBLANK));

        run(&mut lcd, &mut cpu, 1);
        assert_eq!((lcd.ly(), lcd.mode()), (144, Mode::VBlank));
        assert!(requested(&cpu, Interrupts::VBLANK));
        assert!(!requested(&cpu, Interrupts::LCD_STAT));

        let frame = FRAME_LINES as u32 * LINE_CYCLES;
        run(&mut lcd, &mut cpu, frame - vblank_start - 1);
        assert_eq!((lcd.ly(), lcd.mode()), (153, Mode::VBlank));
        run(&mut lcd, &mut cpu, 1);
        assert_eq!((lcd.ly(), lcd.mode()), (0, Mode::OamScan));
    }

    #[test]
    fn mode_interrupts_follow_stat_enables() {
        let (mut lcd, mut cpu) = switched_on();
        // HBLANK only.
        lcd.write(REG_STAT, 0x08);
        run(&mut lcd, &mut cpu, 63);
        assert!(!requested(&cpu, Interrupts::LCD_STAT));
        run(&mut lcd, &mut cpu, 1);
        assert!(requested(&cpu, Interrupts::LCD_STAT));

        let (mut lcd, mut cpu) = switched_on();
        // OAM scan, raised as soon as the display starts.
        lcd.write(REG_STAT, 0x20);
        run(&mut lcd, &mut cpu, 1);
        assert!(requested(&cpu, Interrupts::LCD_STAT));
    }

    #[test]
    fn ly_match_raises_stat() {
        let (mut lcd, mut cpu) = switched_on();
        lcd.write(REG_LYC, 2);
        lcd.write(REG_STAT, 0x40);

        run(&mut lcd, &mut cpu, 2 * LINE_CYCLES);
        assert_eq!(lcd.ly(), 1);
        assert!(!requested(&cpu, Interrupts::LCD_STAT));
        assert!(!bits::test(lcd.read(REG_STAT).unwrap_or(0) as u32, STAT_LYC_EQUAL));

        run(&mut lcd, &mut cpu, 1);
        assert_eq!(lcd.ly(), 2);
        assert!(requested(&cpu, Interrupts::LCD_STAT));
        assert!(bits::test(lcd.read(REG_STAT).unwrap_or(0) as u32, STAT_LYC_EQUAL));
    }

    #[test]
    fn lyc_write_match_is_reported_next_cycle() {
        let mut lcd = Lcd::new();
        let mut cpu = Cpu::new();
        lcd.write(REG_LYC, 5);
        lcd.write(REG_STAT, 0x40);
        lcd.write(REG_LYC, 0);
        assert!(!requested(&cpu, Interrupts::LCD_STAT));
        lcd.cycle(&mut cpu);
        assert!(requested(&cpu, Interrupts::LCD_STAT));
    }

    #[test]
    fn switching_off_resets_the_line() {
        let (mut lcd, mut cpu) = switched_on();
        run(&mut lcd, &mut cpu, 3 * LINE_CYCLES);
        assert_eq!(lcd.ly(), 2);

        lcd.write(REG_LCDC, 0x00);
        assert_eq!((lcd.ly(), lcd.mode()), (0, Mode::HBlank));
        run(&mut lcd, &mut cpu, LINE_CYCLES);
        assert_eq!(lcd.ly(), 0);

        lcd.write(REG_LCDC, 0x80);
        run(&mut lcd, &mut cpu, 1);
        assert_eq!(lcd.mode(), Mode::OamScan);
    }

    #[test]
    fn oam_dma_copies_one_byte_per_store() {
        let mut lcd = Lcd::new();
        assert_eq!(lcd.oam_dma_source(), None);
        lcd.write(REG_DMA, 0xC1);
        assert_eq!(lcd.read(REG_DMA), Some(0xC1));

        let mut copied = 0;
        while let Some(source) = lcd.oam_dma_source() {
            assert_eq!(source, 0xC100 + copied);
            lcd.oam_dma_store(source as u8 ^ 0xFF);
            copied += 1;
        }
        assert_eq!(copied, DMA_LENGTH);
        assert_eq!(lcd.read(OAM_START), Some(0xFF));
        assert_eq!(lcd.read(OAM_END - 1), Some(0x60));
    }

    #[test]
    fn post_boot_display_is_on() {
        let lcd = Lcd::post_boot();
        assert!(lcd.is_on());
        assert_eq!(lcd.read(REG_LCDC), Some(0x91));
        assert_eq!(lcd.read(REG_BGP), Some(0xFC));
    }
}
