// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2025.

//! Register descriptors shared by the peripheral tables.

use core::fmt;

/// Errors returned when resolving an offset or address within a peripheral
/// frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AccessError {
    /// The offset is not a multiple of the 32-bit register width.
    Unaligned,
    /// The offset or address falls outside the peripheral frame.
    OutOfRange,
    /// The slot is documented as reserved and must not be accessed.
    Reserved,
    /// No register is implemented at this slot.
    Unmapped,
}

impl fmt::Display for AccessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            AccessError::Unaligned => "unaligned register offset",
            AccessError::OutOfRange => "outside peripheral frame",
            AccessError::Reserved => "reserved register, do not use",
            AccessError::Unmapped => "no register at offset",
        };
        f.write_str(msg)
    }
}

/// A named register within a peripheral frame.
///
/// Descriptors are only created by the peripheral modules of this crate, so
/// every descriptor refers to a documented, usable register.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RegisterDescriptor {
    name: &'static str,
    base: u32,
    offset: u32,
    description: &'static str,
}

impl RegisterDescriptor {
    pub(crate) const fn new(
        name: &'static str,
        base: u32,
        offset: u32,
        description: &'static str,
    ) -> RegisterDescriptor {
        RegisterDescriptor {
            name,
            base,
            offset,
            description,
        }
    }

    /// Register mnemonic as used in the reference manual, e.g. `"WDKEY"`.
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Byte offset from the peripheral base.
    pub const fn offset(&self) -> u32 {
        self.offset
    }

    /// Absolute bus address.
    pub const fn address(&self) -> u32 {
        self.base + self.offset
    }

    pub const fn description(&self) -> &'static str {
        self.description
    }
}

impl fmt::Display for RegisterDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} @ {:#010x} (+{:#06x})",
            self.name,
            self.address(),
            self.offset
        )
    }
}
