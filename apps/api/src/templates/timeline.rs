//! Timeline: cards stacked in a single column along a vertical rail.

use std::fmt::Write as _;

use crate::layout::calculate_standard_layout;
use crate::templates::markup::{canvas, escape_html, icon};
use crate::templates::{Content, GridPlan, Template, TemplateMeta};

pub struct Timeline;

impl Template for Timeline {
    fn meta(&self) -> TemplateMeta {
        TemplateMeta {
            id: "timeline",
            name: "Timeline",
            description: "Single-column milestones along a vertical rail",
            icon: "timeline",
        }
    }

    fn render(&self, content: &Content, scale: f32) -> anyhow::Result<String> {
        let n = content.cards.len();
        let plan = calculate_standard_layout(n);
        let grid = stacked(n);

        let mut cards = String::new();
        for (i, card) in content.cards.iter().enumerate() {
            write!(
                cards,
                r#"<li class="card timeline-item relative flex items-start gap-6" style="border-left:4px solid #6366F1;"><span class="absolute rounded-full" style="left:-14px;top:18px;width:24px;height:24px;background:#6366F1;"></span><span class="font-mono text-indigo-400 {desc_class}">{step:02}</span>{icon}<div><h3 class="{title_class} font-semibold text-white">{title}</h3><div class="{desc_class} text-slate-300">{desc}</div></div></li>"#,
                step = i + 1,
                icon = icon(&card.icon, "text-indigo-300", plan.icon_size_rem * 0.6),
                title_class = plan.title_size.class_name(),
                desc_class = plan.desc_size.class_name(),
                title = escape_html(&card.title),
                desc = card.desc,
            )?;
        }

        let max_width = grid.max_width_px.unwrap_or(1400);
        let body = format!(
            r#"<div class="content-wrapper flex flex-col items-center justify-center" style="gap:{wrapper_gap};"><h1 class="main-title font-bold text-white whitespace-nowrap">{title}</h1><ol class="cards-container flex flex-col w-full" style="max-width:{max_width}px;gap:{gap}rem;">{cards}</ol></div>"#,
            wrapper_gap = plan.wrapper_gap(),
            title = escape_html(&content.main_title),
            gap = grid.gap_rem,
        );

        Ok(canvas(
            "timeline",
            "background:#0F172A;font-family:'Inter',sans-serif;",
            scale,
            &body,
        ))
    }

    fn grid_plan(&self, card_count: usize) -> Option<GridPlan> {
        Some(stacked(card_count))
    }
}

/// One column; spacing tightens as the stack grows so it stays on the canvas.
fn stacked(card_count: usize) -> GridPlan {
    let (gap_rem, card_padding_rem) = match card_count {
        0..=3 => (1.5, 1.5),
        4..=5 => (1.0, 1.25),
        _ => (0.5, 0.75),
    };
    GridPlan {
        columns: 1,
        gap_rem,
        card_padding_rem,
        max_width_px: Some(1400),
        featured: None,
    }
}
