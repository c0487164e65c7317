//! Card-grid layout plan derived purely from the number of cards.
//!
//! Card counts are grouped into contiguous buckets (0–1, 2, 3, 4, 5–6, 7–8, 9+).
//! Every bucket maps to one fixed set of spacing and type-scale tokens. The single
//! card bucket deliberately gets a wider two-thirds card instead of a half-width
//! one; it is not the two-card layout with one slot empty.

use serde::{Deserialize, Serialize};

// ────────────────────────────────────────────────────────────────────────────
// Tokens
// ────────────────────────────────────────────────────────────────────────────

/// Grid-column width category for each card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CardWidth {
    /// Lone card spanning two thirds of the row.
    TwoThirds,
    Half,
    Third,
    Quarter,
}

impl CardWidth {
    /// Number of cards that fit on one row.
    pub fn columns(self) -> u32 {
        match self {
            CardWidth::TwoThirds => 1,
            CardWidth::Half => 2,
            CardWidth::Third => 3,
            CardWidth::Quarter => 4,
        }
    }

    /// Utility-class name used by templates that size cards through classes.
    pub fn class_name(self) -> &'static str {
        match self {
            CardWidth::TwoThirds => "w-2/3",
            CardWidth::Half => "w-[calc(50%-1rem)]",
            CardWidth::Third => "w-[calc(33.333%-1.5rem)]",
            CardWidth::Quarter => "w-[calc(25%-1.5rem)]",
        }
    }

    /// CSS width expression for a flex-wrapped row separated by `gap_rem`.
    pub fn css_width(self, gap_rem: f32) -> String {
        match self {
            CardWidth::TwoThirds => "66.6667%".to_string(),
            other => {
                let cols = other.columns();
                format!(
                    "calc((100% - {}rem) / {cols})",
                    format_rem(gap_rem * (cols - 1) as f32)
                )
            }
        }
    }
}

/// Ordered type-scale ladder. Derived `Ord` follows the visual size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum TypeScale {
    #[serde(rename = "text-sm")]
    Sm,
    #[serde(rename = "text-base")]
    Base,
    #[serde(rename = "text-lg")]
    Lg,
    #[serde(rename = "text-xl")]
    Xl,
    #[serde(rename = "text-2xl")]
    Xl2,
    #[serde(rename = "text-3xl")]
    Xl3,
    #[serde(rename = "text-4xl")]
    Xl4,
    #[serde(rename = "text-5xl")]
    Xl5,
}

impl TypeScale {
    pub fn class_name(self) -> &'static str {
        match self {
            TypeScale::Sm => "text-sm",
            TypeScale::Base => "text-base",
            TypeScale::Lg => "text-lg",
            TypeScale::Xl => "text-xl",
            TypeScale::Xl2 => "text-2xl",
            TypeScale::Xl3 => "text-3xl",
            TypeScale::Xl4 => "text-4xl",
            TypeScale::Xl5 => "text-5xl",
        }
    }

    /// Font size in rem, matching the utility framework's default scale.
    pub fn rem(self) -> f32 {
        match self {
            TypeScale::Sm => 0.875,
            TypeScale::Base => 1.0,
            TypeScale::Lg => 1.125,
            TypeScale::Xl => 1.25,
            TypeScale::Xl2 => 1.5,
            TypeScale::Xl3 => 1.875,
            TypeScale::Xl4 => 2.25,
            TypeScale::Xl5 => 3.0,
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Buckets
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LayoutBucket {
    /// 0 or 1 cards.
    Single,
    Pair,
    Triple,
    Quad,
    /// 5–6 cards.
    FiveToSix,
    /// 7–8 cards.
    SevenToEight,
    /// 9 or more cards.
    NinePlus,
}

impl LayoutBucket {
    pub fn for_count(n: usize) -> Self {
        match n {
            0 | 1 => LayoutBucket::Single,
            2 => LayoutBucket::Pair,
            3 => LayoutBucket::Triple,
            4 => LayoutBucket::Quad,
            5 | 6 => LayoutBucket::FiveToSix,
            7 | 8 => LayoutBucket::SevenToEight,
            _ => LayoutBucket::NinePlus,
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Plan
// ────────────────────────────────────────────────────────────────────────────

/// Spacing and sizing tokens for one render. All lengths are in rem.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutPlan {
    pub bucket: LayoutBucket,
    pub card_width: CardWidth,
    pub container_gap_rem: f32,
    pub wrapper_gap_rem: f32,
    pub wrapper_padding_x_rem: f32,
    pub card_padding_rem: f32,
    pub icon_size_rem: f32,
    pub title_size: TypeScale,
    pub desc_size: TypeScale,
}

impl LayoutPlan {
    pub fn card_width_css(&self) -> String {
        self.card_width.css_width(self.container_gap_rem)
    }

    pub fn container_gap(&self) -> String {
        format!("{}rem", format_rem(self.container_gap_rem))
    }

    pub fn wrapper_gap(&self) -> String {
        format!("{}rem", format_rem(self.wrapper_gap_rem))
    }

    pub fn wrapper_padding_x(&self) -> String {
        format!("{}rem", format_rem(self.wrapper_padding_x_rem))
    }

    pub fn card_padding(&self) -> String {
        format!("{}rem", format_rem(self.card_padding_rem))
    }

    pub fn icon_size(&self) -> String {
        format!("{}rem", format_rem(self.icon_size_rem))
    }
}

/// Returns the layout plan for `n` cards. Never fails; `n = 0` uses the single-card bucket.
pub fn calculate_standard_layout(n: usize) -> LayoutPlan {
    let bucket = LayoutBucket::for_count(n);
    let (card_width, container_gap, wrapper_gap, padding_x, card_padding, icon, title, desc) =
        match bucket {
            LayoutBucket::Single => (
                CardWidth::TwoThirds,
                2.0,
                3.0,
                12.0,
                3.0,
                6.0,
                TypeScale::Xl5,
                TypeScale::Xl2,
            ),
            LayoutBucket::Pair => (
                CardWidth::Half,
                2.0,
                3.0,
                8.0,
                2.5,
                5.0,
                TypeScale::Xl4,
                TypeScale::Xl,
            ),
            LayoutBucket::Triple => (
                CardWidth::Third,
                2.0,
                2.5,
                6.0,
                2.0,
                4.5,
                TypeScale::Xl3,
                TypeScale::Xl,
            ),
            LayoutBucket::Quad => (
                CardWidth::Half,
                1.5,
                2.5,
                8.0,
                2.0,
                4.0,
                TypeScale::Xl3,
                TypeScale::Lg,
            ),
            LayoutBucket::FiveToSix => (
                CardWidth::Third,
                1.5,
                2.0,
                6.0,
                1.75,
                3.5,
                TypeScale::Xl2,
                TypeScale::Lg,
            ),
            LayoutBucket::SevenToEight => (
                CardWidth::Quarter,
                1.25,
                2.0,
                4.0,
                1.5,
                3.0,
                TypeScale::Xl,
                TypeScale::Base,
            ),
            LayoutBucket::NinePlus => (
                CardWidth::Quarter,
                1.0,
                1.5,
                4.0,
                1.25,
                2.5,
                TypeScale::Lg,
                TypeScale::Sm,
            ),
        };

    LayoutPlan {
        bucket,
        card_width,
        container_gap_rem: container_gap,
        wrapper_gap_rem: wrapper_gap,
        wrapper_padding_x_rem: padding_x,
        card_padding_rem: card_padding,
        icon_size_rem: icon,
        title_size: title,
        desc_size: desc,
    }
}

/// Formats a rem value without a trailing `.0` (`2` rather than `2.0`, `1.25` as is).
pub(crate) fn format_rem(value: f32) -> String {
    let rounded = (value * 1000.0).round() / 1000.0;
    if rounded.fract() == 0.0 {
        format!("{}", rounded as i64)
    } else {
        format!("{rounded}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_is_deterministic() {
        for n in 0..30 {
            assert_eq!(calculate_standard_layout(n), calculate_standard_layout(n));
        }
    }

    #[test]
    fn test_zero_cards_uses_single_bucket() {
        let plan = calculate_standard_layout(0);
        assert_eq!(plan.bucket, LayoutBucket::Single);
        assert_eq!(plan, calculate_standard_layout(1));
    }

    #[test]
    fn test_single_card_differs_from_pair() {
        let one = calculate_standard_layout(1);
        let two = calculate_standard_layout(2);
        assert_eq!(one.card_width, CardWidth::TwoThirds);
        assert_eq!(two.card_width, CardWidth::Half);
        assert_ne!(one, two);
    }

    #[test]
    fn test_type_scale_non_increasing() {
        for n in 0..64 {
            let a = calculate_standard_layout(n);
            let b = calculate_standard_layout(n + 1);
            assert!(b.title_size <= a.title_size, "title grew at n={}", n + 1);
            assert!(b.desc_size <= a.desc_size, "desc grew at n={}", n + 1);
            assert!(b.icon_size_rem <= a.icon_size_rem, "icon grew at n={}", n + 1);
        }
    }

    #[test]
    fn test_bucket_boundaries() {
        assert_eq!(LayoutBucket::for_count(4), LayoutBucket::Quad);
        assert_eq!(LayoutBucket::for_count(5), LayoutBucket::FiveToSix);
        assert_eq!(LayoutBucket::for_count(6), LayoutBucket::FiveToSix);
        assert_eq!(LayoutBucket::for_count(8), LayoutBucket::SevenToEight);
        assert_eq!(LayoutBucket::for_count(9), LayoutBucket::NinePlus);
        assert_eq!(LayoutBucket::for_count(10_000), LayoutBucket::NinePlus);
    }

    #[test]
    fn test_css_tokens() {
        let plan = calculate_standard_layout(3);
        assert_eq!(plan.container_gap(), "2rem");
        assert_eq!(plan.card_width_css(), "calc((100% - 4rem) / 3)");
        assert_eq!(calculate_standard_layout(8).container_gap(), "1.25rem");
        assert_eq!(calculate_standard_layout(1).card_width_css(), "66.6667%");
    }

    #[test]
    fn test_type_scale_serializes_as_class() {
        let json = serde_json::to_string(&TypeScale::Xl2).unwrap();
        assert_eq!(json, "\"text-2xl\"");
        assert_eq!(TypeScale::Xl2.class_name(), "text-2xl");
    }
}
