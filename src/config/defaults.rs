// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! Single source of truth for defaults used across the application.

// ==========================================================================
// Playback Defaults
// ==========================================================================

/// Default keyboard/remote seek step in seconds.
pub const DEFAULT_SEEK_STEP_SECS: u16 = 10;

/// Seek step choices offered in the Playback settings view.
pub const SEEK_STEP_CHOICES_SECS: [u16; 3] = [5, 10, 30];

/// Whether the next episode starts automatically by default.
pub const DEFAULT_AUTOPLAY_NEXT: bool = true;

/// Whether playback resumes from the last position by default.
pub const DEFAULT_RESUME_PLAYBACK: bool = true;

/// Whether subtitles are shown by default.
pub const DEFAULT_SUBTITLES_ENABLED: bool = false;

// ==========================================================================
// TMDB Enrichment Defaults
// ==========================================================================

/// Whether TMDB metadata enrichment is enabled by default.
pub const DEFAULT_TMDB_ENABLED: bool = true;

/// Default metadata language (BCP-47).
pub const DEFAULT_TMDB_LANGUAGE: &str = "en-US";

/// Metadata language choices offered in the TMDB settings view.
pub const TMDB_LANGUAGE_CHOICES: [&str; 4] = ["en-US", "fr-FR", "de-DE", "ja-JP"];

/// Whether original (untranslated) titles are preferred by default.
pub const DEFAULT_TMDB_PREFER_ORIGINAL_TITLES: bool = false;

// ==========================================================================
// Motion Defaults
// ==========================================================================

/// Whether UI transitions are reduced (disabled) by default.
pub const DEFAULT_REDUCE_MOTION: bool = false;
