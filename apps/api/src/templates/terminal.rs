//! Terminal: green-on-black shell session. Ships its own stylesheet.

use std::fmt::Write as _;

use crate::layout::calculate_standard_layout;
use crate::templates::markup::{canvas, escape_html};
use crate::templates::{Content, Template, TemplateMeta};

const STYLE: &str = r#"<style>
.terminal-window{border:2px solid #33ff66;border-radius:10px;background:#050805;box-shadow:0 0 40px rgba(51,255,102,.25);}
.terminal-bar{display:flex;gap:10px;padding:14px 20px;border-bottom:1px solid #1f6b33;}
.terminal-bar span{width:14px;height:14px;border-radius:50%;background:#1f6b33;}
.cards-container{display:flex;flex-wrap:wrap;justify-content:center;}
.template-card{border:1px dashed #33ff66;padding:1.5rem 2rem;color:#b7ffc9;}
.template-card h3{color:#33ff66;margin:0 0 .5rem;}
.template-card h3::before{content:'$ ';color:#1f6b33;}
.prompt-icon{color:#1f6b33;font-size:.8em;}
.cursor{display:inline-block;width:.6em;height:1em;background:#33ff66;margin-left:.2em;vertical-align:-.1em;}
</style>"#;

pub struct Terminal;

impl Template for Terminal {
    fn meta(&self) -> TemplateMeta {
        TemplateMeta {
            id: "terminal",
            name: "Terminal",
            description: "Monospace shell session with phosphor glow",
            icon: "terminal",
        }
    }

    fn render(&self, content: &Content, scale: f32) -> anyhow::Result<String> {
        let plan = calculate_standard_layout(content.cards.len());

        let mut cards = String::new();
        for card in &content.cards {
            write!(
                cards,
                r#"<div class="template-card" style="width:{width};font-size:{desc_rem}rem;"><div class="prompt-icon">[{icon}]</div><h3 style="font-size:{title_rem}rem;">{title}</h3><div>{desc}</div></div>"#,
                width = plan.card_width_css(),
                desc_rem = plan.desc_size.rem(),
                title_rem = plan.title_size.rem(),
                icon = escape_html(&card.icon),
                title = escape_html(&card.title),
                desc = card.desc,
            )?;
        }

        let body = format!(
            r#"{STYLE}<div class="content-wrapper" style="padding:60px {padding_x};"><div class="terminal-window"><div class="terminal-bar"><span></span><span></span><span></span></div><div style="padding:40px;display:flex;flex-direction:column;gap:{wrapper_gap};"><div data-fit-title style="color:#33ff66;white-space:nowrap;font-weight:700;width:fit-content;">&gt; {title}<span class="cursor"></span></div><div class="cards-container" style="gap:{gap};">{cards}</div></div></div></div>"#,
            padding_x = plan.wrapper_padding_x(),
            wrapper_gap = plan.wrapper_gap(),
            title = escape_html(&content.main_title),
            gap = plan.container_gap(),
        );

        Ok(canvas(
            "terminal",
            "background:#000;font-family:'JetBrains Mono',monospace;",
            scale,
            &body,
        ))
    }

    fn self_contained_css(&self) -> bool {
        true
    }

    fn explicit_padding(&self) -> bool {
        true
    }

    fn viewport_floor_scale(&self) -> f32 {
        0.6
    }
}
