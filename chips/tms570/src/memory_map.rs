// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2025.

//! Peripheral frame base addresses.

/// RTI + Digital Windowed Watchdog frame.
pub const RTIDWWD_BASE: u32 = 0xFFFF_FC00;
/// Size of the RTI + DWWD peripheral frame in bytes.
pub const RTIDWWD_SIZE: u32 = 0x100;
