// SPDX-License-Identifier: MPL-2.0
//! UI components and styling.

pub mod design_tokens;
pub mod plugin_manager;
pub mod settings;
pub mod styles;
pub mod theme;
