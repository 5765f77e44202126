// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2025.

//! Peripheral definitions for the TI TMS570LS04x/03x family.
//!
//! Reference: TMS570LS04x/03x 16/32-Bit RISC Flash Microcontroller,
//! Technical Reference Manual, Texas Instruments, SPNU517A, September 2013.

#![no_std]

mod config;

pub mod memory_map;
pub mod register;
pub mod rti;
pub mod static_ref;

pub use crate::register::{AccessError, RegisterDescriptor};
pub use crate::static_ref::StaticRef;
