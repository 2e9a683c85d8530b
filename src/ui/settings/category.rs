// SPDX-License-Identifier: MPL-2.0
//! Settings category enumeration.

/// One fixed settings section. The set is closed and the declaration order
/// is the sidebar order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Appearance,
    Plugins,
    TmdbEnrichment,
    Playback,
    About,
}

impl Category {
    /// All categories, in sidebar order.
    pub const ALL: [Category; 5] = [
        Category::Appearance,
        Category::Plugins,
        Category::TmdbEnrichment,
        Category::Playback,
        Category::About,
    ];

    /// Display label shown in the sidebar row.
    pub fn label(self) -> &'static str {
        match self {
            Category::Appearance => "Appearance",
            Category::Plugins => "Plugins",
            Category::TmdbEnrichment => "TMDB Enrichment",
            Category::Playback => "Playback",
            Category::About => "About",
        }
    }

    /// Icon glyph shown next to the label.
    pub fn glyph(self) -> &'static str {
        match self {
            Category::Appearance => "🎨",
            Category::Plugins => "🧩",
            Category::TmdbEnrichment => "🎬",
            Category::Playback => "▶",
            Category::About => "ℹ",
        }
    }

    /// The row below this one, clamped at the end of the list.
    #[must_use]
    pub fn next(self) -> Category {
        let index = Self::index_of(self);
        Self::ALL[(index + 1).min(Self::ALL.len() - 1)]
    }

    /// The row above this one, clamped at the top of the list.
    #[must_use]
    pub fn previous(self) -> Category {
        let index = Self::index_of(self);
        Self::ALL[index.saturating_sub(1)]
    }

    fn index_of(category: Category) -> usize {
        Self::ALL
            .iter()
            .position(|c| *c == category)
            .expect("category is a member of ALL")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sidebar_order_is_fixed() {
        assert_eq!(
            Category::ALL,
            [
                Category::Appearance,
                Category::Plugins,
                Category::TmdbEnrichment,
                Category::Playback,
                Category::About,
            ]
        );
    }

    #[test]
    fn labels_are_unique() {
        for (i, a) in Category::ALL.iter().enumerate() {
            for b in &Category::ALL[i + 1..] {
                assert_ne!(a.label(), b.label());
            }
        }
    }

    #[test]
    fn navigation_clamps_at_ends() {
        assert_eq!(Category::Appearance.previous(), Category::Appearance);
        assert_eq!(Category::About.next(), Category::About);
        assert_eq!(Category::Appearance.next(), Category::Plugins);
        assert_eq!(Category::Playback.previous(), Category::TmdbEnrichment);
    }
}
