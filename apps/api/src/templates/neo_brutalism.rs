//! Neo-brutalism: flat saturated blocks, thick black borders, hard offset shadows.

use std::fmt::Write as _;

use crate::layout::calculate_standard_layout;
use crate::templates::markup::{canvas, cycle, escape_html, icon};
use crate::templates::{Content, Template, TemplateMeta};

const CARD_COLORS: &[&str] = &["#FFD23F", "#3BCEAC", "#FF6B6B", "#A28BFE", "#5EB1FF"];

pub struct NeoBrutalism;

impl Template for NeoBrutalism {
    fn meta(&self) -> TemplateMeta {
        TemplateMeta {
            id: "neo-brutalism",
            name: "Neo Brutalism",
            description: "Bold flat colors with chunky borders and hard shadows",
            icon: "crop_square",
        }
    }

    fn render(&self, content: &Content, scale: f32) -> anyhow::Result<String> {
        let plan = calculate_standard_layout(content.cards.len());

        let mut cards = String::new();
        for (i, card) in content.cards.iter().enumerate() {
            write!(
                cards,
                r#"<div class="card border-4 border-black" style="width:{width};padding:{padding};background:{bg};box-shadow:8px 8px 0 #000;">{icon}<h3 class="font-black {title_class} mt-3">{title}</h3><p class="{desc_class} mt-2">{desc}</p></div>"#,
                title_class = plan.title_size.class_name(),
                desc_class = plan.desc_size.class_name(),
                width = plan.card_width_css(),
                padding = plan.card_padding(),
                bg = cycle(CARD_COLORS, i),
                icon = icon(&card.icon, "text-black", plan.icon_size_rem),
                title = escape_html(&card.title),
                desc = card.desc,
            )?;
        }

        let body = format!(
            r#"<div class="content-wrapper flex flex-col items-center justify-center" style="gap:{wrapper_gap};padding:0 {padding_x};"><h1 class="main-title font-black text-black whitespace-nowrap" style="font-family:'Space Grotesk',sans-serif;">{title}</h1><div class="cards-container flex flex-wrap justify-center w-full" style="gap:{gap};">{cards}</div></div>"#,
            wrapper_gap = plan.wrapper_gap(),
            padding_x = plan.wrapper_padding_x(),
            title = escape_html(&content.main_title),
            gap = plan.container_gap(),
        );

        Ok(canvas(
            "neo-brutalism",
            "background:#FFFBEB;font-family:'Space Grotesk',sans-serif;",
            scale,
            &body,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::templates::tests::{content_with, roadmap};

    #[test]
    fn test_render_uses_standard_markers() {
        let html = NeoBrutalism.render(&roadmap(), 1.0).unwrap();
        assert!(html.contains(r#"class="main-title"#));
        assert!(html.contains("cards-container"));
        assert_eq!(html.matches(r#"class="card "#).count(), 2);
    }

    #[test]
    fn test_colors_cycle_in_card_order() {
        let html = NeoBrutalism.render(&content_with(6), 1.0).unwrap();
        assert_eq!(html.matches("#FFD23F").count(), 2);
    }

    #[test]
    fn test_title_is_escaped() {
        let mut content = roadmap();
        content.main_title = "R&D <2025>".to_string();
        let html = NeoBrutalism.render(&content, 1.0).unwrap();
        assert!(html.contains("R&amp;D &lt;2025&gt;"));
    }
}
