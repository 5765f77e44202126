// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2025.

use std::collections::HashSet;

use tms570::memory_map::{RTIDWWD_BASE, RTIDWWD_SIZE};
use tms570::rti::{self, Rti, RtiRegisters, REGISTERS};
use tms570::{AccessError, StaticRef};

/// Backing storage standing in for the MMIO frame.
#[repr(C, align(4))]
struct FakeFrame([u32; 0xC0 / 4]);

fn fake_rti(init: &[(u32, u32)]) -> Rti {
    let frame: &'static mut FakeFrame = Box::leak(Box::new(FakeFrame([0; 0xC0 / 4])));
    for &(offset, value) in init {
        frame.0[(offset / 4) as usize] = value;
    }
    let ptr = frame as *mut FakeFrame as *const RtiRegisters;
    Rti::with_base(unsafe { StaticRef::new(ptr) })
}

#[test]
fn addresses_are_base_plus_offset() {
    let expected: [(u32, u32, u32); 36] = [
        (rti::GCTRL, rti::GCTRL_OFFSET, 0x0000),
        (rti::CAPCTRL, rti::CAPCTRL_OFFSET, 0x0008),
        (rti::COMPCTRL, rti::COMPCTRL_OFFSET, 0x000c),
        (rti::FRC0, rti::FRC0_OFFSET, 0x0010),
        (rti::UC0, rti::UC0_OFFSET, 0x0014),
        (rti::CPUC0, rti::CPUC0_OFFSET, 0x0018),
        (rti::CAFRC0, rti::CAFRC0_OFFSET, 0x0020),
        (rti::CAUC0, rti::CAUC0_OFFSET, 0x0024),
        (rti::FRC1, rti::FRC1_OFFSET, 0x0030),
        (rti::UC1, rti::UC1_OFFSET, 0x0034),
        (rti::CPUC1, rti::CPUC1_OFFSET, 0x0038),
        (rti::CAFRC1, rti::CAFRC1_OFFSET, 0x0040),
        (rti::CAUC1, rti::CAUC1_OFFSET, 0x0044),
        (rti::COMP0, rti::COMP0_OFFSET, 0x0050),
        (rti::UDCP0, rti::UDCP0_OFFSET, 0x0054),
        (rti::COMP1, rti::COMP1_OFFSET, 0x0058),
        (rti::UDCP1, rti::UDCP1_OFFSET, 0x005c),
        (rti::COMP2, rti::COMP2_OFFSET, 0x0060),
        (rti::UDCP2, rti::UDCP2_OFFSET, 0x0064),
        (rti::COMP3, rti::COMP3_OFFSET, 0x0068),
        (rti::UDCP3, rti::UDCP3_OFFSET, 0x006c),
        (rti::SETINTENA, rti::SETINTENA_OFFSET, 0x0080),
        (rti::CLEARINTENA, rti::CLEARINTENA_OFFSET, 0x0084),
        (rti::INTFLAG, rti::INTFLAG_OFFSET, 0x0088),
        (rti::DWDCTRL, rti::DWDCTRL_OFFSET, 0x0090),
        (rti::DWDPRLD, rti::DWDPRLD_OFFSET, 0x0094),
        (rti::WDSTATUS, rti::WDSTATUS_OFFSET, 0x0098),
        (rti::WDKEY, rti::WDKEY_OFFSET, 0x009c),
        (rti::DWDCNTR, rti::DWDCNTR_OFFSET, 0x00a0),
        (rti::WWDRXNCTRL, rti::WWDRXNCTRL_OFFSET, 0x00a4),
        (rti::WWDSIZECTRL, rti::WWDSIZECTRL_OFFSET, 0x00a8),
        (rti::INTCLRENABLE, rti::INTCLRENABLE_OFFSET, 0x00ac),
        (rti::COMP0CLR, rti::COMP0CLR_OFFSET, 0x00b0),
        (rti::COMP1CLR, rti::COMP1CLR_OFFSET, 0x00b4),
        (rti::COMP2CLR, rti::COMP2CLR_OFFSET, 0x00b8),
        (rti::COMP3CLR, rti::COMP3CLR_OFFSET, 0x00bc),
    ];
    for (address, offset, documented) in expected {
        assert_eq!(offset, documented);
        assert_eq!(address, RTIDWWD_BASE + documented);
    }
    assert_eq!(rti::GCTRL, 0xFFFF_FC00);
    assert_eq!(rti::COMP3CLR, 0xFFFF_FCBC);
}

#[test]
fn table_is_total_and_ordered() {
    assert_eq!(REGISTERS.len(), 36);

    let offsets: HashSet<u32> = REGISTERS.iter().map(|reg| reg.offset()).collect();
    assert_eq!(offsets.len(), REGISTERS.len());

    let names: HashSet<&str> = REGISTERS.iter().map(|reg| reg.name()).collect();
    assert_eq!(names.len(), REGISTERS.len());

    for pair in REGISTERS.windows(2) {
        assert!(pair[0].offset() < pair[1].offset(), "{} / {}", pair[0], pair[1]);
    }
    for reg in REGISTERS.iter() {
        assert_eq!(reg.address(), RTIDWWD_BASE + reg.offset());
        assert!(reg.offset() < RTIDWWD_SIZE);
        assert!(reg.offset().is_multiple_of(4));
        assert!(!reg.description().is_empty());
        assert_eq!(rti::find(reg.name()), Some(reg));
        assert_eq!(rti::decode(reg.offset()), Ok(reg));
        assert_eq!(rti::decode_address(reg.address()), Ok(reg));
    }
}

#[test]
fn reserved_offsets_are_hidden() {
    for offset in [0x0004, 0x0070, 0x0074] {
        assert_eq!(rti::decode(offset), Err(AccessError::Reserved));
        assert_eq!(
            rti::decode_address(RTIDWWD_BASE + offset),
            Err(AccessError::Reserved)
        );
    }
    assert_eq!(rti::find("TBCTRL"), None);
    assert_eq!(rti::find("RTITBLCOMP"), None);
    assert_eq!(rti::find("RTITBHCOMP"), None);
}

#[test]
fn find_is_exact() {
    assert_eq!(rti::find("WDKEY").map(|reg| reg.offset()), Some(0x009c));
    assert_eq!(rti::find("wdkey"), None);
    assert_eq!(rti::find("COMP0CLR").map(|reg| reg.offset()), Some(0x00b0));
    assert_eq!(rti::find(""), None);
}

#[test]
fn constants_are_stable() {
    let first: Vec<u32> = REGISTERS.iter().map(|reg| reg.address()).collect();
    let second: Vec<u32> = REGISTERS.iter().map(|reg| reg.address()).collect();
    assert_eq!(first, second);
    assert_eq!(rti::find("WDKEY"), rti::find("WDKEY"));
}

#[test]
fn read_uses_typed_registers() {
    let periph = fake_rti(&[
        (rti::GCTRL_OFFSET, 0x0000_0001),
        (rti::WDKEY_OFFSET, 0x0000_E51A),
        (rti::DWDCNTR_OFFSET, 0x00FF_0000),
        (rti::COMP3CLR_OFFSET, 0xDEAD_BEEF),
    ]);

    assert_eq!(periph.read(rti::GCTRL_OFFSET), Ok(0x0000_0001));
    assert_eq!(periph.read(rti::WDKEY_OFFSET), Ok(0x0000_E51A));
    assert_eq!(periph.read(rti::DWDCNTR_OFFSET), Ok(0x00FF_0000));
    assert_eq!(periph.read(rti::COMP3CLR_OFFSET), Ok(0xDEAD_BEEF));
    assert_eq!(periph.read(rti::CAPCTRL_OFFSET), Ok(0));

    assert_eq!(periph.read(0x0004), Err(AccessError::Reserved));
    assert_eq!(periph.read(0x0028), Err(AccessError::Unmapped));
    assert_eq!(periph.read(0x0013), Err(AccessError::Unaligned));
    assert_eq!(periph.read(0x0200), Err(AccessError::OutOfRange));
}

#[test]
fn read_reaches_every_register() {
    // Tag each slot with its own offset so a read routed to the wrong field
    // returns the wrong value.
    let tags: Vec<(u32, u32)> = (0..0xC0)
        .step_by(4)
        .map(|offset| (offset, 0xA500_0000 | offset))
        .collect();
    let periph = fake_rti(&tags);

    for reg in REGISTERS.iter() {
        assert_eq!(
            periph.read(reg.offset()),
            Ok(0xA500_0000 | reg.offset()),
            "{}",
            reg
        );
    }
}

#[cfg(not(feature = "no_register_dump"))]
#[test]
fn print_state_lists_every_register() {
    let periph = fake_rti(&[(rti::INTFLAG_OFFSET, 0x0000_000F)]);
    let mut out = String::new();
    periph.print_state(&mut out);

    assert!(out.contains("---| RTI State |---"));
    assert!(!out.contains("(register dump disabled)"));
    assert_eq!(out.matches(" @ 0x").count(), REGISTERS.len());
    assert!(out.contains("INTFLAG      @ 0xfffffc88: 0x0000000f"));
    assert!(out.contains("GCTRL        @ 0xfffffc00: 0x00000000"));
}

#[cfg(feature = "no_register_dump")]
#[test]
fn print_state_without_register_dump() {
    let periph = fake_rti(&[(rti::INTFLAG_OFFSET, 0x0000_000F)]);
    let mut out = String::new();
    periph.print_state(&mut out);

    assert_eq!(out, "\r\n---| RTI State |---\r\n(register dump disabled)\r\n");
    assert_eq!(out.matches(" @ 0x").count(), 0);
}

#[test]
fn errors_and_descriptors_display() {
    assert_eq!(
        AccessError::Reserved.to_string(),
        "reserved register, do not use"
    );
    let wdkey = rti::find("WDKEY").map(|reg| reg.to_string());
    assert_eq!(wdkey.as_deref(), Some("WDKEY @ 0xfffffc9c (+0x009c)"));
}
