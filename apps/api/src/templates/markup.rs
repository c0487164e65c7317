//! Markup helpers shared by the built-in templates.

use crate::layout::plan::format_rem;

pub const CANVAS_WIDTH_PX: u32 = 1920;
pub const CANVAS_HEIGHT_PX: u32 = 1080;

/// Escapes text content and attribute values.
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Wraps a template body in the fixed 1920×1080 canvas, scaled for live preview.
///
/// The canvas centers its content vertically, so wrappers keep their natural height.
/// `style` is the template's canvas style (background, font). At scale 1.0 no transform
/// is emitted.
pub fn canvas(class: &str, style: &str, scale: f32, body: &str) -> String {
    let transform = if (scale - 1.0).abs() > f32::EPSILON {
        format!("transform:scale({});transform-origin:top left;", format_rem(scale))
    } else {
        String::new()
    };
    format!(
        r#"<div class="{class}" style="width:{CANVAS_WIDTH_PX}px;height:{CANVAS_HEIGHT_PX}px;overflow:hidden;position:relative;display:flex;flex-direction:column;justify-content:center;{transform}{style}">{body}</div>"#
    )
}

/// Material icon glyph. The icon name is escaped; unknown names simply render as text.
pub fn icon(name: &str, class: &str, size_rem: f32) -> String {
    format!(
        r#"<span class="material-icons {class}" style="font-size:{}rem">{}</span>"#,
        format_rem(size_rem),
        escape_html(name)
    )
}

/// Picks `palette[index % len]`; an empty palette yields an empty string.
pub fn cycle<'a>(palette: &[&'a str], index: usize) -> &'a str {
    if palette.is_empty() {
        ""
    } else {
        palette[index % palette.len()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html(r#"<a href="x">R&D's</a>"#),
            "&lt;a href=&quot;x&quot;&gt;R&amp;D&#39;s&lt;/a&gt;"
        );
        assert_eq!(escape_html("plain"), "plain");
    }

    #[test]
    fn test_canvas_scale_transform() {
        let full = canvas("c", "", 1.0, "x");
        assert!(!full.contains("transform"));
        let half = canvas("c", "", 0.5, "x");
        assert!(half.contains("transform:scale(0.5)"));
    }

    #[test]
    fn test_canvas_centers_content() {
        let html = canvas("c", "", 1.0, "<div>x</div>");
        assert!(html.contains("display:flex;flex-direction:column;justify-content:center;"));
    }

    #[test]
    fn test_cycle_wraps_and_handles_empty() {
        assert_eq!(cycle(&["a", "b"], 3), "b");
        assert_eq!(cycle(&[], 3), "");
    }
}
