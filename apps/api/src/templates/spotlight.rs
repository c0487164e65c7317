//! Spotlight: a lone card becomes a centered hero; more cards fall back to a row.

use std::fmt::Write as _;

use crate::layout::calculate_standard_layout;
use crate::templates::markup::{canvas, escape_html, icon};
use crate::templates::{Content, GridPlan, Template, TemplateMeta};

const HERO_MAX_WIDTH_PX: u32 = 1200;

pub struct Spotlight;

impl Template for Spotlight {
    fn meta(&self) -> TemplateMeta {
        TemplateMeta {
            id: "spotlight",
            name: "Spotlight",
            description: "Radial spotlight with a centered hero card",
            icon: "highlight",
        }
    }

    fn render(&self, content: &Content, scale: f32) -> anyhow::Result<String> {
        let n = content.cards.len();
        let plan = calculate_standard_layout(n);
        let hero = self.grid_plan(n);

        let mut cards = String::new();
        for card in &content.cards {
            let width = match &hero {
                Some(grid) => format!("max-width:{}px;width:100%", grid.max_width_px.unwrap_or(HERO_MAX_WIDTH_PX)),
                None => format!("width:{}", plan.card_width_css()),
            };
            write!(
                cards,
                r#"<div class="card text-center rounded-2xl" style="{width};background:rgba(255,255,255,.06);border:1px solid rgba(255,255,255,.15);">{icon}<h3 class="{title_class} font-semibold text-amber-200">{title}</h3><div class="{desc_class} text-zinc-300 mt-3">{desc}</div></div>"#,
                icon = icon(&card.icon, "text-amber-300", plan.icon_size_rem),
                title_class = plan.title_size.class_name(),
                desc_class = plan.desc_size.class_name(),
                title = escape_html(&card.title),
                desc = card.desc,
            )?;
        }

        let body = format!(
            r#"<div class="content-wrapper flex flex-col items-center justify-center" style="gap:{wrapper_gap};padding:0 {padding_x};"><h1 class="main-title font-light text-white whitespace-nowrap tracking-wide">{title}</h1><div class="cards-container flex flex-wrap justify-center w-full" style="gap:{gap};">{cards}</div></div>"#,
            wrapper_gap = plan.wrapper_gap(),
            padding_x = plan.wrapper_padding_x(),
            title = escape_html(&content.main_title),
            gap = plan.container_gap(),
        );

        Ok(canvas(
            "spotlight",
            "background:radial-gradient(ellipse at 50% 30%,#3f3f46 0%,#09090b 65%);font-family:'Inter',sans-serif;",
            scale,
            &body,
        ))
    }

    fn grid_plan(&self, card_count: usize) -> Option<GridPlan> {
        (card_count == 1).then_some(GridPlan {
            columns: 1,
            gap_rem: 0.0,
            card_padding_rem: 4.0,
            max_width_px: Some(HERO_MAX_WIDTH_PX),
            featured: None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::templates::tests::content_with;

    #[test]
    fn test_hero_only_for_single_card() {
        assert!(Spotlight.grid_plan(1).is_some());
        assert!(Spotlight.grid_plan(0).is_none());
        assert!(Spotlight.grid_plan(3).is_none());
    }

    #[test]
    fn test_hero_card_is_width_capped() {
        let html = Spotlight.render(&content_with(1), 1.0).unwrap();
        assert!(html.contains("max-width:1200px;width:100%"));
        let row = Spotlight.render(&content_with(3), 1.0).unwrap();
        assert!(row.contains("width:calc((100% - 4rem) / 3)"));
    }
}
