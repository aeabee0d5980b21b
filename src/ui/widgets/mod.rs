// SPDX-License-Identifier: MPL-2.0
pub mod measured;

pub use measured::{measured, Measured};
