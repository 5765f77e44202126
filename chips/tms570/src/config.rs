// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2025.

//! Compile-time configuration options for the chip crate.
//!
//! Options live in a typed `const` object rather than behind `#[cfg]` so
//! that every code path is type-checked regardless of which options are
//! enabled. Constant folding removes the disabled paths afterwards.

/// Data structure holding compile-time configuration options.
pub(crate) struct Config {
    /// Whether peripheral state dumps should include register contents.
    ///
    /// If disabled, `print_state()` implementations only emit a single line
    /// noting that the dump was compiled out.
    pub(crate) dump_registers: bool,
}

/// The unique instance of `Config`. This is the only location in the crate
/// where `#[cfg(x)]` is used to configure code based on Cargo features.
pub(crate) const CONFIG: Config = Config {
    dump_registers: !cfg!(feature = "no_register_dump"),
};
