// SPDX-License-Identifier: MPL-2.0
//! `lumen_tv` is the settings hub of the Lumen TV media frontend, built with
//! the Iced GUI framework.
//!
//! It provides a television-style two-pane settings screen (category sidebar
//! plus cross-fading content panel), remote-control focus navigation, user
//! preference persistence, and a small plugin registry.

pub mod app;
pub mod config;
pub mod error;
pub mod plugins;
pub mod ui;
