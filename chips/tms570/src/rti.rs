// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2025.

//! Real Time Interrupt (RTI) and Digital Windowed Watchdog (DWWD) registers.
//!
//! The block is described three ways, all derived from the same offsets:
//!
//! - `*_OFFSET` and absolute address constants for code that computes bus
//!   addresses directly,
//! - [`RtiRegisters`], a typed view whose layout is checked at compile time,
//! - [`REGISTERS`], a descriptor table used for lookups and state dumps.
//!
//! No bit-field definitions exist for this block yet, so every register is
//! exposed as a plain `u32` value.

use core::fmt::Write;

use tock_registers::interfaces::Readable;
use tock_registers::registers::{ReadOnly, ReadWrite};
use tock_registers::register_structs;

use crate::config::CONFIG;
use crate::memory_map::{RTIDWWD_BASE, RTIDWWD_SIZE};
use crate::register::{AccessError, RegisterDescriptor};
use crate::static_ref::StaticRef;

// Register offsets

pub const GCTRL_OFFSET: u32 = 0x0000; // RTI Global Control Register
// 0x0004 RTITBCTRL Reserved. Do NOT use.
pub const CAPCTRL_OFFSET: u32 = 0x0008; // RTI Capture Control Register
pub const COMPCTRL_OFFSET: u32 = 0x000c; // RTI Compare Control Register
pub const FRC0_OFFSET: u32 = 0x0010; // RTI Free Running Counter 0 Register
pub const UC0_OFFSET: u32 = 0x0014; // RTI Up Counter 0 Register
pub const CPUC0_OFFSET: u32 = 0x0018; // RTI Compare Up Counter 0 Register
pub const CAFRC0_OFFSET: u32 = 0x0020; // RTI Capture Free Running Counter 0 Register
pub const CAUC0_OFFSET: u32 = 0x0024; // RTI Capture Up Counter 0 Register
pub const FRC1_OFFSET: u32 = 0x0030; // RTI Free Running Counter 1 Register
pub const UC1_OFFSET: u32 = 0x0034; // RTI Up Counter 1 Register
pub const CPUC1_OFFSET: u32 = 0x0038; // RTI Compare Up Counter 1 Register
pub const CAFRC1_OFFSET: u32 = 0x0040; // RTI Capture Free Running Counter 1 Register
pub const CAUC1_OFFSET: u32 = 0x0044; // RTI Capture Up Counter 1 Register
pub const COMP0_OFFSET: u32 = 0x0050; // RTI Compare 0 Register
pub const UDCP0_OFFSET: u32 = 0x0054; // RTI Update Compare 0 Register
pub const COMP1_OFFSET: u32 = 0x0058; // RTI Compare 1 Register
pub const UDCP1_OFFSET: u32 = 0x005c; // RTI Update Compare 1 Register
pub const COMP2_OFFSET: u32 = 0x0060; // RTI Compare 2 Register
pub const UDCP2_OFFSET: u32 = 0x0064; // RTI Update Compare 2 Register
pub const COMP3_OFFSET: u32 = 0x0068; // RTI Compare 3 Register
pub const UDCP3_OFFSET: u32 = 0x006c; // RTI Update Compare 3 Register
// 0x0070 RTITBLCOMP Reserved. Do NOT use.
// 0x0074 RTITBHCOMP Reserved. Do NOT use.
pub const SETINTENA_OFFSET: u32 = 0x0080; // RTI Set Interrupt Enable Register
pub const CLEARINTENA_OFFSET: u32 = 0x0084; // RTI Clear Interrupt Enable Register
pub const INTFLAG_OFFSET: u32 = 0x0088; // RTI Interrupt Flag Register
pub const DWDCTRL_OFFSET: u32 = 0x0090; // Digital Watchdog Control Register
pub const DWDPRLD_OFFSET: u32 = 0x0094; // Digital Watchdog Preload Register
pub const WDSTATUS_OFFSET: u32 = 0x0098; // Watchdog Status Register
pub const WDKEY_OFFSET: u32 = 0x009c; // RTI Watchdog Key Register
pub const DWDCNTR_OFFSET: u32 = 0x00a0; // RTI Digital Watchdog Down Counter Register
pub const WWDRXNCTRL_OFFSET: u32 = 0x00a4; // Digital Windowed Watchdog Reaction Control Register
pub const WWDSIZECTRL_OFFSET: u32 = 0x00a8; // Digital Windowed Watchdog Window Size Control Register
pub const INTCLRENABLE_OFFSET: u32 = 0x00ac; // RTI Compare Interrupt Clear Enable Register
pub const COMP0CLR_OFFSET: u32 = 0x00b0; // RTI Compare 0 Clear Register
pub const COMP1CLR_OFFSET: u32 = 0x00b4; // RTI Compare 1 Clear Register
pub const COMP2CLR_OFFSET: u32 = 0x00b8; // RTI Compare 2 Clear Register
pub const COMP3CLR_OFFSET: u32 = 0x00bc; // RTI Compare 3 Clear Register

/// Slots inside the block that the reference manual marks "Do NOT use".
const RESERVED_OFFSETS: [u32; 3] = [0x0004, 0x0070, 0x0074];

// Register addresses

pub const GCTRL: u32 = RTIDWWD_BASE + GCTRL_OFFSET;
pub const CAPCTRL: u32 = RTIDWWD_BASE + CAPCTRL_OFFSET;
pub const COMPCTRL: u32 = RTIDWWD_BASE + COMPCTRL_OFFSET;
pub const FRC0: u32 = RTIDWWD_BASE + FRC0_OFFSET;
pub const UC0: u32 = RTIDWWD_BASE + UC0_OFFSET;
pub const CPUC0: u32 = RTIDWWD_BASE + CPUC0_OFFSET;
pub const CAFRC0: u32 = RTIDWWD_BASE + CAFRC0_OFFSET;
pub const CAUC0: u32 = RTIDWWD_BASE + CAUC0_OFFSET;
pub const FRC1: u32 = RTIDWWD_BASE + FRC1_OFFSET;
pub const UC1: u32 = RTIDWWD_BASE + UC1_OFFSET;
pub const CPUC1: u32 = RTIDWWD_BASE + CPUC1_OFFSET;
pub const CAFRC1: u32 = RTIDWWD_BASE + CAFRC1_OFFSET;
pub const CAUC1: u32 = RTIDWWD_BASE + CAUC1_OFFSET;
pub const COMP0: u32 = RTIDWWD_BASE + COMP0_OFFSET;
pub const UDCP0: u32 = RTIDWWD_BASE + UDCP0_OFFSET;
pub const COMP1: u32 = RTIDWWD_BASE + COMP1_OFFSET;
pub const UDCP1: u32 = RTIDWWD_BASE + UDCP1_OFFSET;
pub const COMP2: u32 = RTIDWWD_BASE + COMP2_OFFSET;
pub const UDCP2: u32 = RTIDWWD_BASE + UDCP2_OFFSET;
pub const COMP3: u32 = RTIDWWD_BASE + COMP3_OFFSET;
pub const UDCP3: u32 = RTIDWWD_BASE + UDCP3_OFFSET;
pub const SETINTENA: u32 = RTIDWWD_BASE + SETINTENA_OFFSET;
pub const CLEARINTENA: u32 = RTIDWWD_BASE + CLEARINTENA_OFFSET;
pub const INTFLAG: u32 = RTIDWWD_BASE + INTFLAG_OFFSET;
pub const DWDCTRL: u32 = RTIDWWD_BASE + DWDCTRL_OFFSET;
pub const DWDPRLD: u32 = RTIDWWD_BASE + DWDPRLD_OFFSET;
pub const WDSTATUS: u32 = RTIDWWD_BASE + WDSTATUS_OFFSET;
pub const WDKEY: u32 = RTIDWWD_BASE + WDKEY_OFFSET;
pub const DWDCNTR: u32 = RTIDWWD_BASE + DWDCNTR_OFFSET;
pub const WWDRXNCTRL: u32 = RTIDWWD_BASE + WWDRXNCTRL_OFFSET;
pub const WWDSIZECTRL: u32 = RTIDWWD_BASE + WWDSIZECTRL_OFFSET;
pub const INTCLRENABLE: u32 = RTIDWWD_BASE + INTCLRENABLE_OFFSET;
pub const COMP0CLR: u32 = RTIDWWD_BASE + COMP0CLR_OFFSET;
pub const COMP1CLR: u32 = RTIDWWD_BASE + COMP1CLR_OFFSET;
pub const COMP2CLR: u32 = RTIDWWD_BASE + COMP2CLR_OFFSET;
pub const COMP3CLR: u32 = RTIDWWD_BASE + COMP3CLR_OFFSET;

register_structs! {
    pub RtiRegisters {
        /// RTI Global Control Register
        (0x000 => gctrl: ReadWrite<u32>),
        // RTITBCTRL, reserved
        (0x004 => _reserved0),
        /// RTI Capture Control Register
        (0x008 => capctrl: ReadWrite<u32>),
        /// RTI Compare Control Register
        (0x00C => compctrl: ReadWrite<u32>),
        /// RTI Free Running Counter 0 Register
        (0x010 => frc0: ReadWrite<u32>),
        /// RTI Up Counter 0 Register
        (0x014 => uc0: ReadWrite<u32>),
        /// RTI Compare Up Counter 0 Register
        (0x018 => cpuc0: ReadWrite<u32>),
        (0x01C => _reserved1),
        /// RTI Capture Free Running Counter 0 Register
        (0x020 => cafrc0: ReadOnly<u32>),
        /// RTI Capture Up Counter 0 Register
        (0x024 => cauc0: ReadOnly<u32>),
        (0x028 => _reserved2),
        /// RTI Free Running Counter 1 Register
        (0x030 => frc1: ReadWrite<u32>),
        /// RTI Up Counter 1 Register
        (0x034 => uc1: ReadWrite<u32>),
        /// RTI Compare Up Counter 1 Register
        (0x038 => cpuc1: ReadWrite<u32>),
        (0x03C => _reserved3),
        /// RTI Capture Free Running Counter 1 Register
        (0x040 => cafrc1: ReadOnly<u32>),
        /// RTI Capture Up Counter 1 Register
        (0x044 => cauc1: ReadOnly<u32>),
        (0x048 => _reserved4),
        /// RTI Compare 0 Register
        (0x050 => comp0: ReadWrite<u32>),
        /// RTI Update Compare 0 Register
        (0x054 => udcp0: ReadWrite<u32>),
        /// RTI Compare 1 Register
        (0x058 => comp1: ReadWrite<u32>),
        /// RTI Update Compare 1 Register
        (0x05C => udcp1: ReadWrite<u32>),
        /// RTI Compare 2 Register
        (0x060 => comp2: ReadWrite<u32>),
        /// RTI Update Compare 2 Register
        (0x064 => udcp2: ReadWrite<u32>),
        /// RTI Compare 3 Register
        (0x068 => comp3: ReadWrite<u32>),
        /// RTI Update Compare 3 Register
        (0x06C => udcp3: ReadWrite<u32>),
        // RTITBLCOMP and RTITBHCOMP, reserved
        (0x070 => _reserved5),
        /// RTI Set Interrupt Enable Register
        (0x080 => setintena: ReadWrite<u32>),
        /// RTI Clear Interrupt Enable Register
        (0x084 => clearintena: ReadWrite<u32>),
        /// RTI Interrupt Flag Register
        (0x088 => intflag: ReadWrite<u32>),
        (0x08C => _reserved6),
        /// Digital Watchdog Control Register
        (0x090 => dwdctrl: ReadWrite<u32>),
        /// Digital Watchdog Preload Register
        (0x094 => dwdprld: ReadWrite<u32>),
        /// Watchdog Status Register
        (0x098 => wdstatus: ReadWrite<u32>),
        /// RTI Watchdog Key Register
        (0x09C => wdkey: ReadWrite<u32>),
        /// RTI Digital Watchdog Down Counter Register
        (0x0A0 => dwdcntr: ReadOnly<u32>),
        /// Digital Windowed Watchdog Reaction Control Register
        (0x0A4 => wwdrxnctrl: ReadWrite<u32>),
        /// Digital Windowed Watchdog Window Size Control Register
        (0x0A8 => wwdsizectrl: ReadWrite<u32>),
        /// RTI Compare Interrupt Clear Enable Register
        (0x0AC => intclrenable: ReadWrite<u32>),
        /// RTI Compare 0 Clear Register
        (0x0B0 => comp0clr: ReadWrite<u32>),
        /// RTI Compare 1 Clear Register
        (0x0B4 => comp1clr: ReadWrite<u32>),
        /// RTI Compare 2 Clear Register
        (0x0B8 => comp2clr: ReadWrite<u32>),
        /// RTI Compare 3 Clear Register
        (0x0BC => comp3clr: ReadWrite<u32>),
        (0x0C0 => @END),
    }
}

pub const RTI_BASE: StaticRef<RtiRegisters> =
    unsafe { StaticRef::new(RTIDWWD_BASE as usize as *const RtiRegisters) };

const fn rti_register(
    name: &'static str,
    offset: u32,
    description: &'static str,
) -> RegisterDescriptor {
    RegisterDescriptor::new(name, RTIDWWD_BASE, offset, description)
}

/// Every usable register of the block, in ascending offset order.
pub static REGISTERS: [RegisterDescriptor; 36] = [
    rti_register("GCTRL", GCTRL_OFFSET, "RTI Global Control Register"),
    rti_register("CAPCTRL", CAPCTRL_OFFSET, "RTI Capture Control Register"),
    rti_register("COMPCTRL", COMPCTRL_OFFSET, "RTI Compare Control Register"),
    rti_register("FRC0", FRC0_OFFSET, "RTI Free Running Counter 0 Register"),
    rti_register("UC0", UC0_OFFSET, "RTI Up Counter 0 Register"),
    rti_register("CPUC0", CPUC0_OFFSET, "RTI Compare Up Counter 0 Register"),
    rti_register(
        "CAFRC0",
        CAFRC0_OFFSET,
        "RTI Capture Free Running Counter 0 Register",
    ),
    rti_register("CAUC0", CAUC0_OFFSET, "RTI Capture Up Counter 0 Register"),
    rti_register("FRC1", FRC1_OFFSET, "RTI Free Running Counter 1 Register"),
    rti_register("UC1", UC1_OFFSET, "RTI Up Counter 1 Register"),
    rti_register("CPUC1", CPUC1_OFFSET, "RTI Compare Up Counter 1 Register"),
    rti_register(
        "CAFRC1",
        CAFRC1_OFFSET,
        "RTI Capture Free Running Counter 1 Register",
    ),
    rti_register("CAUC1", CAUC1_OFFSET, "RTI Capture Up Counter 1 Register"),
    rti_register("COMP0", COMP0_OFFSET, "RTI Compare 0 Register"),
    rti_register("UDCP0", UDCP0_OFFSET, "RTI Update Compare 0 Register"),
    rti_register("COMP1", COMP1_OFFSET, "RTI Compare 1 Register"),
    rti_register("UDCP1", UDCP1_OFFSET, "RTI Update Compare 1 Register"),
    rti_register("COMP2", COMP2_OFFSET, "RTI Compare 2 Register"),
    rti_register("UDCP2", UDCP2_OFFSET, "RTI Update Compare 2 Register"),
    rti_register("COMP3", COMP3_OFFSET, "RTI Compare 3 Register"),
    rti_register("UDCP3", UDCP3_OFFSET, "RTI Update Compare 3 Register"),
    rti_register(
        "SETINTENA",
        SETINTENA_OFFSET,
        "RTI Set Interrupt Enable Register",
    ),
    rti_register(
        "CLEARINTENA",
        CLEARINTENA_OFFSET,
        "RTI Clear Interrupt Enable Register",
    ),
    rti_register("INTFLAG", INTFLAG_OFFSET, "RTI Interrupt Flag Register"),
    rti_register("DWDCTRL", DWDCTRL_OFFSET, "Digital Watchdog Control Register"),
    rti_register("DWDPRLD", DWDPRLD_OFFSET, "Digital Watchdog Preload Register"),
    rti_register("WDSTATUS", WDSTATUS_OFFSET, "Watchdog Status Register"),
    rti_register("WDKEY", WDKEY_OFFSET, "RTI Watchdog Key Register"),
    rti_register(
        "DWDCNTR",
        DWDCNTR_OFFSET,
        "RTI Digital Watchdog Down Counter Register",
    ),
    rti_register(
        "WWDRXNCTRL",
        WWDRXNCTRL_OFFSET,
        "Digital Windowed Watchdog Reaction Control Register",
    ),
    rti_register(
        "WWDSIZECTRL",
        WWDSIZECTRL_OFFSET,
        "Digital Windowed Watchdog Window Size Control Register",
    ),
    rti_register(
        "INTCLRENABLE",
        INTCLRENABLE_OFFSET,
        "RTI Compare Interrupt Clear Enable Register",
    ),
    rti_register("COMP0CLR", COMP0CLR_OFFSET, "RTI Compare 0 Clear Register"),
    rti_register("COMP1CLR", COMP1CLR_OFFSET, "RTI Compare 1 Clear Register"),
    rti_register("COMP2CLR", COMP2CLR_OFFSET, "RTI Compare 2 Clear Register"),
    rti_register("COMP3CLR", COMP3CLR_OFFSET, "RTI Compare 3 Clear Register"),
];

/// Look up a register by its reference manual mnemonic, e.g. `"WDKEY"`.
pub fn find(name: &str) -> Option<&'static RegisterDescriptor> {
    REGISTERS.iter().find(|reg| reg.name() == name)
}

/// Resolve a byte offset within the RTI frame to its register.
///
/// Checks are applied in order: frame bounds, alignment, reserved slots,
/// then unimplemented holes.
pub fn decode(offset: u32) -> Result<&'static RegisterDescriptor, AccessError> {
    if offset >= RTIDWWD_SIZE {
        return Err(AccessError::OutOfRange);
    }
    if !offset.is_multiple_of(4) {
        return Err(AccessError::Unaligned);
    }
    if RESERVED_OFFSETS.contains(&offset) {
        return Err(AccessError::Reserved);
    }
    REGISTERS
        .binary_search_by_key(&offset, |reg| reg.offset())
        .map(|index| &REGISTERS[index])
        .map_err(|_| AccessError::Unmapped)
}

/// Resolve an absolute bus address to its register.
pub fn decode_address(address: u32) -> Result<&'static RegisterDescriptor, AccessError> {
    let offset = address
        .checked_sub(RTIDWWD_BASE)
        .ok_or(AccessError::OutOfRange)?;
    decode(offset)
}

/// The RTI/DWWD peripheral.
///
/// This only inspects the block; timer and watchdog drivers program the
/// registers themselves.
pub struct Rti {
    registers: StaticRef<RtiRegisters>,
}

impl Rti {
    pub const fn new() -> Rti {
        Rti {
            registers: RTI_BASE,
        }
    }

    /// Use a register block at a different location, such as a shadow copy.
    pub const fn with_base(registers: StaticRef<RtiRegisters>) -> Rti {
        Rti { registers }
    }

    /// Read the register at `offset`.
    ///
    /// Reserved and unimplemented slots are rejected before any bus access.
    pub fn read(&self, offset: u32) -> Result<u32, AccessError> {
        let regs = self.registers;
        let value = match decode(offset)?.offset() {
            GCTRL_OFFSET => regs.gctrl.get(),
            CAPCTRL_OFFSET => regs.capctrl.get(),
            COMPCTRL_OFFSET => regs.compctrl.get(),
            FRC0_OFFSET => regs.frc0.get(),
            UC0_OFFSET => regs.uc0.get(),
            CPUC0_OFFSET => regs.cpuc0.get(),
            CAFRC0_OFFSET => regs.cafrc0.get(),
            CAUC0_OFFSET => regs.cauc0.get(),
            FRC1_OFFSET => regs.frc1.get(),
            UC1_OFFSET => regs.uc1.get(),
            CPUC1_OFFSET => regs.cpuc1.get(),
            CAFRC1_OFFSET => regs.cafrc1.get(),
            CAUC1_OFFSET => regs.cauc1.get(),
            COMP0_OFFSET => regs.comp0.get(),
            UDCP0_OFFSET => regs.udcp0.get(),
            COMP1_OFFSET => regs.comp1.get(),
            UDCP1_OFFSET => regs.udcp1.get(),
            COMP2_OFFSET => regs.comp2.get(),
            UDCP2_OFFSET => regs.udcp2.get(),
            COMP3_OFFSET => regs.comp3.get(),
            UDCP3_OFFSET => regs.udcp3.get(),
            SETINTENA_OFFSET => regs.setintena.get(),
            CLEARINTENA_OFFSET => regs.clearintena.get(),
            INTFLAG_OFFSET => regs.intflag.get(),
            DWDCTRL_OFFSET => regs.dwdctrl.get(),
            DWDPRLD_OFFSET => regs.dwdprld.get(),
            WDSTATUS_OFFSET => regs.wdstatus.get(),
            WDKEY_OFFSET => regs.wdkey.get(),
            DWDCNTR_OFFSET => regs.dwdcntr.get(),
            WWDRXNCTRL_OFFSET => regs.wwdrxnctrl.get(),
            WWDSIZECTRL_OFFSET => regs.wwdsizectrl.get(),
            INTCLRENABLE_OFFSET => regs.intclrenable.get(),
            COMP0CLR_OFFSET => regs.comp0clr.get(),
            COMP1CLR_OFFSET => regs.comp1clr.get(),
            COMP2CLR_OFFSET => regs.comp2clr.get(),
            COMP3CLR_OFFSET => regs.comp3clr.get(),
            _ => return Err(AccessError::Unmapped),
        };
        Ok(value)
    }

    /// Write the contents of every register to `writer`.
    pub fn print_state(&self, writer: &mut dyn Write) {
        let _ = writer.write_fmt(format_args!("\r\n---| RTI State |---\r\n"));
        if !CONFIG.dump_registers {
            let _ = writer.write_str("(register dump disabled)\r\n");
            return;
        }
        for reg in REGISTERS.iter() {
            if let Ok(value) = self.read(reg.offset()) {
                let _ = writer.write_fmt(format_args!(
                    "{:<12} @ {:#010x}: {:#010x}\r\n",
                    reg.name(),
                    reg.address(),
                    value
                ));
            }
        }
    }
}
