use std::cell::{Ref, RefCell};
use std::rc::Rc;

use typed_builder::TypedBuilder;

use super::{Cartridge, Joypad, Key, Lcd, Serial, Timer, TICKS_PER_CYCLE};
use crate::address_map::{ECHO_RAM_END, ECHO_RAM_START, WORK_RAM_SIZE, WORK_RAM_START};
use crate::bus::Bus;
use crate::component::Component;
use crate::cpu::Cpu;
use crate::error::CpuError;
use crate::memory::{BootRomController, Ram, RamController, Rom};

/// How to start the machine.
#[derive(TypedBuilder, Debug)]
pub struct MachineConfig {
    pub cartridge: Cartridge,
    /// 256-byte DMG boot ROM. Without one the machine starts in the state
    /// the boot ROM leaves behind.
    #[builder(default, setter(strip_option))]
    pub boot_rom: Option<Vec<u8>>,
}

/// High-level Game Boy machine.
///
/// Owns the CPU and the bus, and keeps typed handles on the peripherals it
/// clocks or feeds input to. Components are attached to the bus in this
/// order: work RAM, echo RAM, boot ROM and cartridge, timer, joypad,
/// serial, LCD controller.
pub struct GameBoy {
    cpu: Cpu,
    bus: Bus,
    timer: Rc<RefCell<Timer>>,
    joypad: Rc<RefCell<Joypad>>,
    serial: Rc<RefCell<Serial>>,
    lcd: Rc<RefCell<Lcd>>,
    boot_rom: Rc<RefCell<BootRomController>>,
    ticks: u64,
}

impl GameBoy {
    /// Panics if a boot ROM is given that is not 256 bytes long.
    pub fn new(config: MachineConfig) -> Self {
        let MachineConfig {
            cartridge,
            boot_rom,
        } = config;

        let (cpu, timer, lcd) = if boot_rom.is_some() {
            (Cpu::new(), Timer::new(), Lcd::new())
        } else {
            (Cpu::post_boot(), Timer::post_boot(), Lcd::post_boot())
        };

        let work_ram = Rc::new(RefCell::new(Ram::new(WORK_RAM_SIZE)));
        let boot_rom = Rc::new(RefCell::new(BootRomController::new(
            boot_rom.map(Rom::from),
            cartridge,
        )));
        let timer = Rc::new(RefCell::new(timer));
        let joypad = Rc::new(RefCell::new(Joypad::new()));
        let serial = Rc::new(RefCell::new(Serial::new()));
        let lcd = Rc::new(RefCell::new(lcd));

        let mut bus = Bus::new();
        bus.attach(Rc::new(RefCell::new(RamController::new(
            work_ram.clone(),
            WORK_RAM_START,
        ))));
        bus.attach(Rc::new(RefCell::new(RamController::with_range(
            work_ram,
            ECHO_RAM_START,
            ECHO_RAM_END as u32,
        ))));
        bus.attach(boot_rom.clone());
        bus.attach(timer.clone());
        bus.attach(joypad.clone());
        bus.attach(serial.clone());
        bus.attach(lcd.clone());

        Self {
            cpu,
            bus,
            timer,
            joypad,
            serial,
            lcd,
            boot_rom,
            ticks: 0,
        }
    }

    /// Runs the machine until the raw clock reaches `tick`.
    ///
    /// Every fourth tick is a machine cycle: the timer, the LCD controller
    /// (OAM DMA first), the serial port and then the CPU are advanced, in
    /// that order. On error the clock stops at the failing tick.
    pub fn run_until(&mut self, tick: u64) -> Result<(), CpuError> {
        assert!(
            tick >= self.ticks,
            "cannot run backwards from tick {} to {tick}",
            self.ticks
        );
        while self.ticks < tick {
            if self.ticks % TICKS_PER_CYCLE == 0 {
                let cycle = self.ticks / TICKS_PER_CYCLE;
                self.timer.borrow_mut().cycle(&mut self.cpu);
                self.run_oam_dma();
                self.lcd.borrow_mut().cycle(&mut self.cpu);
                self.serial.borrow_mut().cycle(&mut self.cpu);
                self.cpu.advance(cycle, &mut self.bus)?;
            }
            self.ticks += 1;
        }
        Ok(())
    }

    /// Copies the next OAM DMA byte. The source is read as the CPU sees it.
    fn run_oam_dma(&mut self) {
        let source = self.lcd.borrow().oam_dma_source();
        if let Some(source) = source {
            let data = self.peek(source);
            self.lcd.borrow_mut().oam_dma_store(data);
        }
    }

    /// Raw clock ticks elapsed.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Machine cycles started so far.
    pub fn cycles(&self) -> u64 {
        self.ticks.div_ceil(TICKS_PER_CYCLE)
    }

    pub fn cpu(&self) -> &Cpu {
        &self.cpu
    }

    pub fn cpu_mut(&mut self) -> &mut Cpu {
        &mut self.cpu
    }

    /// The bus without the CPU's own surface: IE, IF and high RAM read as
    /// open bus here. Use [`GameBoy::peek`] for the CPU's view.
    pub fn bus(&self) -> &Bus {
        &self.bus
    }

    /// Reads `address` the way the CPU would see it.
    pub fn peek(&self, address: u16) -> u8 {
        self.cpu
            .read(address)
            .unwrap_or_else(|| self.bus.read(address))
    }

    pub fn key_pressed(&mut self, key: Key) {
        self.joypad.borrow_mut().key_pressed(key, &mut self.cpu);
    }

    pub fn key_released(&mut self, key: Key) {
        self.joypad.borrow_mut().key_released(key);
    }

    /// Bytes the program sent over the serial port.
    pub fn serial_output(&self) -> Vec<u8> {
        self.serial.borrow().output().to_vec()
    }

    pub fn lcd(&self) -> Ref<'_, Lcd> {
        self.lcd.borrow()
    }

    pub fn boot_rom_mapped(&self) -> bool {
        self.boot_rom.borrow().is_mapped()
    }
}
