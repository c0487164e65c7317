//! Bento grid: rounded tiles on a CSS grid, first tile oversized as the feature.

use std::fmt::Write as _;

use crate::layout::calculate_standard_layout;
use crate::templates::markup::{canvas, escape_html, icon};
use crate::templates::{Content, FeaturedCell, GridPlan, Template, TemplateMeta};

pub struct BentoGrid;

impl Template for BentoGrid {
    fn meta(&self) -> TemplateMeta {
        TemplateMeta {
            id: "bento-grid",
            name: "Bento Grid",
            description: "Apple-style tile grid with a featured first tile",
            icon: "dashboard",
        }
    }

    fn render(&self, content: &Content, scale: f32) -> anyhow::Result<String> {
        let n = content.cards.len();
        let plan = calculate_standard_layout(n);
        let grid = bento_plan(n);

        let mut cards = String::new();
        for (i, card) in content.cards.iter().enumerate() {
            let featured = i == 0 && grid.featured.is_some();
            let span = grid
                .featured
                .filter(|_| featured)
                .map(|f| {
                    format!(
                        "grid-column:span {};grid-row:span {};",
                        f.col_span, f.row_span
                    )
                })
                .unwrap_or_default();
            let (bg, fg) = if featured {
                ("#111827", "#F9FAFB")
            } else {
                ("#FFFFFF", "#111827")
            };
            write!(
                cards,
                r#"<div class="bento-tile rounded-3xl flex flex-col justify-between" data-card style="{span}background:{bg};color:{fg};box-shadow:0 10px 30px rgba(17,24,39,.08);">{icon}<div><h3 class="{title_class} font-semibold">{title}</h3><div class="{desc_class} opacity-80 mt-2">{desc}</div></div></div>"#,
                icon = icon(&card.icon, "", plan.icon_size_rem),
                title_class = plan.title_size.class_name(),
                desc_class = plan.desc_size.class_name(),
                title = escape_html(&card.title),
                desc = card.desc,
            )?;
        }

        let body = format!(
            r#"<div class="content-wrapper flex flex-col justify-center" style="gap:{wrapper_gap};padding:0 {padding_x};"><h1 class="main-title font-bold tracking-tight whitespace-nowrap" style="color:#111827;width:fit-content;">{title}</h1><div class="bento-grid" data-card-container style="display:grid;grid-template-columns:repeat({columns},minmax(0,1fr));gap:{gap}rem;">{cards}</div></div>"#,
            wrapper_gap = plan.wrapper_gap(),
            padding_x = plan.wrapper_padding_x(),
            title = escape_html(&content.main_title),
            columns = grid.columns,
            gap = grid.gap_rem,
        );

        Ok(canvas(
            "bento-grid",
            "background:#F3F4F6;font-family:'Inter',sans-serif;",
            scale,
            &body,
        ))
    }

    fn grid_plan(&self, card_count: usize) -> Option<GridPlan> {
        Some(bento_plan(card_count))
    }
}

/// Feature tile spans 2×2 once there are four cards; three cards get a tall feature.
fn bento_plan(card_count: usize) -> GridPlan {
    let (columns, featured) = match card_count {
        0 | 1 => (1, None),
        2 => (2, None),
        3 => (
            2,
            Some(FeaturedCell {
                col_span: 1,
                row_span: 2,
            }),
        ),
        4 | 5 => (
            3,
            Some(FeaturedCell {
                col_span: 2,
                row_span: 2,
            }),
        ),
        _ => (
            4,
            Some(FeaturedCell {
                col_span: 2,
                row_span: 2,
            }),
        ),
    };
    GridPlan {
        columns,
        gap_rem: if card_count > 6 { 1.0 } else { 1.5 },
        card_padding_rem: if card_count > 6 { 1.5 } else { 2.0 },
        max_width_px: None,
        featured,
    }
}
