//! Pixel art: 8-bit palette, stepped borders, bitmap font.

use std::fmt::Write as _;

use crate::layout::{calculate_standard_layout, PartialTitleFit, TitleBucket, TitleOverrides};
use crate::templates::markup::{canvas, cycle, escape_html, icon};
use crate::templates::{Content, Template, TemplateMeta};

const CARD_COLORS: &[&str] = &["#E43B44", "#63C74D", "#0099DB", "#FEAE34", "#B55088"];

pub struct PixelArt;

impl Template for PixelArt {
    fn meta(&self) -> TemplateMeta {
        TemplateMeta {
            id: "pixel-art",
            name: "Pixel Art",
            description: "Retro 8-bit cards with a bitmap font",
            icon: "videogame_asset",
        }
    }

    fn render(&self, content: &Content, scale: f32) -> anyhow::Result<String> {
        let plan = calculate_standard_layout(content.cards.len());

        let mut cards = String::new();
        for (i, card) in content.cards.iter().enumerate() {
            write!(
                cards,
                r#"<section data-card style="width:{width};background:#1a1c2c;border:6px solid {accent};box-shadow:0 0 0 6px #000;image-rendering:pixelated;">{icon}<h3 class="{title_class}" style="color:{accent};line-height:1.4;">{title}</h3><div class="{desc_class}" style="color:#f4f4f4;">{desc}</div></section>"#,
                width = plan.card_width_css(),
                accent = cycle(CARD_COLORS, i),
                icon = icon(&card.icon, "", plan.icon_size_rem),
                title_class = plan.title_size.class_name(),
                desc_class = plan.desc_size.class_name(),
                title = escape_html(&card.title),
                desc = card.desc,
            )?;
        }

        let body = format!(
            r#"<main data-fit-viewport class="flex flex-col items-center justify-center" style="gap:{wrapper_gap};padding:0 {padding_x};"><h1 style="color:#ffcd75;text-shadow:6px 6px 0 #000;white-space:nowrap;">{title}</h1><div data-card-container class="flex flex-wrap justify-center w-full" style="gap:{gap};">{cards}</div></main>"#,
            wrapper_gap = plan.wrapper_gap(),
            padding_x = plan.wrapper_padding_x(),
            title = escape_html(&content.main_title),
            gap = plan.container_gap(),
        );

        Ok(canvas(
            "pixel-art",
            "background:#333c57;font-family:'Press Start 2P',monospace;",
            scale,
            &body,
        ))
    }

    // The bitmap font runs much wider than proportional fonts.
    fn title_overrides(&self) -> Option<TitleOverrides> {
        Some(TitleOverrides::from([
            (
                TitleBucket::Few,
                PartialTitleFit {
                    initial_font_size: Some(72),
                    min_font_size: Some(36),
                },
            ),
            (
                TitleBucket::Several,
                PartialTitleFit {
                    initial_font_size: Some(60),
                    min_font_size: Some(32),
                },
            ),
        ]))
    }
}
