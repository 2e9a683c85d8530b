// SPDX-License-Identifier: MPL-2.0
//! Centralized style functions shared across screens.

pub mod button;
pub mod container;
