//! Eligibility rules engine.
//!
//! Season, occasion, and style constraints are declarative tables bundled in
//! a [`RuleBook`] built once at startup and passed explicitly into every
//! predicate. The predicates themselves are pure: season rules decide which
//! slots are active, occasion/season rules decide which items are allowed,
//! and style preferences only nudge ranking scores.

use crate::item::{CatalogItem, Coverage, Occasion, Season, Style, Usage};
use crate::slots::Slot;
use ahash::{AHashMap, AHashSet};

/// Additive score nudge for a style-preferred fit. Never a filter.
pub const STYLE_BONUS: f32 = 0.05;

/// Whether a season admits the OUTERWEAR slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotPolicy {
    /// Slot never appears (summer).
    Disabled,
    /// Slot is legal but not auto-assembled (monsoon).
    Optional,
    /// Slot is part of every assembled outfit (winter).
    Required,
}

/// Hard constraints a season imposes.
#[derive(Debug, Clone)]
pub struct SeasonRule {
    pub outerwear: SlotPolicy,
    /// When set, an item's coverage (if tagged) must be a member.
    pub allowed_coverage: Option<AHashSet<Coverage>>,
}

/// Hard constraints an occasion imposes.
#[derive(Debug, Clone, Default)]
pub struct OccasionRule {
    pub disallowed_subcategories: AHashSet<String>,
}

/// Soft preference a style expresses. Only ever adds to a score.
#[derive(Debug, Clone, Default)]
pub struct StylePreference {
    pub preferred_fits: AHashSet<String>,
}

/// Immutable lookup tables for the rules engine.
#[derive(Debug, Clone)]
pub struct RuleBook {
    seasons: AHashMap<Season, SeasonRule>,
    occasions: AHashMap<Occasion, OccasionRule>,
    styles: AHashMap<Style, StylePreference>,
}

fn string_set(values: &[&str]) -> AHashSet<String> {
    values.iter().map(|s| s.to_string()).collect()
}

impl Default for RuleBook {
    fn default() -> Self {
        let mut seasons = AHashMap::new();
        seasons.insert(
            Season::Summer,
            SeasonRule {
                outerwear: SlotPolicy::Disabled,
                // Both lengths stay legal so formal summer wear survives.
                allowed_coverage: Some([Coverage::Short, Coverage::Long].into_iter().collect()),
            },
        );
        seasons.insert(
            Season::Winter,
            SeasonRule {
                outerwear: SlotPolicy::Required,
                allowed_coverage: Some([Coverage::Long].into_iter().collect()),
            },
        );
        seasons.insert(
            Season::Monsoon,
            SeasonRule {
                outerwear: SlotPolicy::Optional,
                allowed_coverage: Some([Coverage::Short, Coverage::Long].into_iter().collect()),
            },
        );

        let mut occasions = AHashMap::new();
        occasions.insert(
            Occasion::Casual,
            OccasionRule {
                disallowed_subcategories: string_set(&["blazer"]),
            },
        );
        occasions.insert(
            Occasion::Office,
            OccasionRule {
                disallowed_subcategories: string_set(&["shorts", "tank", "sandals"]),
            },
        );
        occasions.insert(
            Occasion::Party,
            OccasionRule {
                disallowed_subcategories: string_set(&["athletic"]),
            },
        );

        let mut styles = AHashMap::new();
        styles.insert(
            Style::Minimal,
            StylePreference {
                preferred_fits: string_set(&["regular", "slim"]),
            },
        );
        styles.insert(
            Style::Street,
            StylePreference {
                preferred_fits: string_set(&["relaxed", "oversized"]),
            },
        );
        styles.insert(
            Style::Formal,
            StylePreference {
                preferred_fits: string_set(&["structured", "tailored"]),
            },
        );

        Self {
            seasons,
            occasions,
            styles,
        }
    }
}

impl RuleBook {
    /// Whether a slot is active in a season. Slots the season table does not
    /// constrain, and any unknown season, default to enabled.
    #[must_use]
    pub fn slot_enabled(&self, slot: Slot, season: Season) -> bool {
        if slot != Slot::Outerwear {
            return true;
        }
        self.outerwear_policy(season) != SlotPolicy::Disabled
    }

    /// The season's outerwear policy; unknown seasons are treated as
    /// enabled-but-not-required.
    #[must_use]
    pub fn outerwear_policy(&self, season: Season) -> SlotPolicy {
        self.seasons
            .get(&season)
            .map(|rule| rule.outerwear)
            .unwrap_or(SlotPolicy::Optional)
    }

    /// Whether an item may occupy a slot under the given season/occasion.
    ///
    /// Three independent hard filters, applied in order: formal occasions
    /// require the "formal" usage tag; a season's coverage set, when
    /// defined, must admit the item's coverage (untagged coverage passes);
    /// the occasion's disallowed-subcategory set must not name the item.
    /// The slot itself does not constrain items under the current tables,
    /// but remains part of the contract.
    #[must_use]
    pub fn item_allowed(
        &self,
        item: &CatalogItem,
        _slot: Slot,
        season: Season,
        occasion: Occasion,
    ) -> bool {
        if occasion == Occasion::Formal && !item.usage.contains(&Usage::Formal) {
            return false;
        }

        if let Some(allowed) = self
            .seasons
            .get(&season)
            .and_then(|rule| rule.allowed_coverage.as_ref())
        {
            if let Some(coverage) = item.coverage {
                if !allowed.contains(&coverage) {
                    return false;
                }
            }
        }

        if let Some(rule) = self.occasions.get(&occasion) {
            if rule.disallowed_subcategories.contains(&item.subcategory) {
                return false;
            }
        }

        true
    }

    /// Soft bonus when the item's fit matches the style's preferred set.
    /// Returns 0.0 otherwise; never excludes an item.
    #[must_use]
    pub fn style_bonus(&self, item: &CatalogItem, style: Option<Style>) -> f32 {
        let Some(style) = style else {
            return 0.0;
        };
        let Some(preference) = self.styles.get(&style) else {
            return 0.0;
        };

        let fit = item.fit.to_lowercase();
        if !fit.is_empty() && preference.preferred_fits.contains(&fit) {
            STYLE_BONUS
        } else {
            0.0
        }
    }
}
