//! Synthwave: neon gradients over a perspective grid horizon.

use std::fmt::Write as _;

use crate::layout::calculate_standard_layout;
use crate::templates::markup::{canvas, cycle, escape_html, icon};
use crate::templates::{Content, Template, TemplateMeta};

const NEON: &[&str] = &["#ff2a6d", "#05d9e8", "#d300c5", "#f9c80e"];

pub struct Synthwave;

impl Template for Synthwave {
    fn meta(&self) -> TemplateMeta {
        TemplateMeta {
            id: "synthwave",
            name: "Synthwave",
            description: "Neon glow on a retro sunset grid",
            icon: "wb_twilight",
        }
    }

    fn render(&self, content: &Content, scale: f32) -> anyhow::Result<String> {
        let plan = calculate_standard_layout(content.cards.len());

        // Cards carry no container marker; the exporter falls back to their parent.
        let mut cards = String::new();
        for (i, card) in content.cards.iter().enumerate() {
            let neon = cycle(NEON, i);
            write!(
                cards,
                r#"<article class="card rounded-2xl backdrop-blur" style="width:{width};background:rgba(20,8,40,.7);border:2px solid {neon};box-shadow:0 0 24px {neon};">{icon}<h3 class="{title_class} font-bold" style="color:{neon};">{title}</h3><p class="{desc_class}" style="color:#e6e0ff;">{desc}</p></article>"#,
                width = plan.card_width_css(),
                icon = icon(&card.icon, "", plan.icon_size_rem),
                title_class = plan.title_size.class_name(),
                desc_class = plan.desc_size.class_name(),
                title = escape_html(&card.title),
                desc = card.desc,
            )?;
        }

        let body = format!(
            r#"<div style="position:absolute;inset:55% 0 0 0;background:repeating-linear-gradient(90deg,rgba(255,42,109,.35) 0 2px,transparent 2px 80px),repeating-linear-gradient(0deg,rgba(255,42,109,.35) 0 2px,transparent 2px 60px);transform:perspective(600px) rotateX(60deg);transform-origin:top;"></div><div class="content-wrapper relative flex flex-col items-center justify-center" style="gap:{wrapper_gap};padding:0 {padding_x};"><h1 class="main-title font-extrabold whitespace-nowrap" style="background:linear-gradient(180deg,#f9c80e,#ff2a6d);-webkit-background-clip:text;color:transparent;">{title}</h1><div class="flex flex-wrap justify-center w-full" style="gap:{gap};">{cards}</div></div>"#,
            wrapper_gap = plan.wrapper_gap(),
            padding_x = plan.wrapper_padding_x(),
            title = escape_html(&content.main_title),
            gap = plan.container_gap(),
        );

        Ok(canvas(
            "synthwave",
            "background:linear-gradient(180deg,#0d0221 0%,#261447 55%,#2e2157 100%);font-family:'Inter',sans-serif;",
            scale,
            &body,
        ))
    }
}
