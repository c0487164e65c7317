//! Standalone HTML document shell.

use crate::config::AssetUrls;
use crate::templates::markup::{escape_html, CANVAS_HEIGHT_PX, CANVAS_WIDTH_PX};

const RESET_CSS: &str = r#"*,*::before,*::after{box-sizing:border-box;}
html,body{margin:0;padding:0;width:1920px;height:1080px;overflow:hidden;background:#000;}
body{-webkit-font-smoothing:antialiased;text-rendering:optimizeLegibility;}
h1,h2,h3,h4,p,ol,ul{margin:0;}
ol,ul{list-style:none;padding:0;}
img,svg{display:block;max-width:100%;}
#export-root{width:1920px;height:1080px;position:relative;overflow:hidden;}"#;

/// Everything needed to wrap one rendered template into a document.
pub struct DocumentParts<'a> {
    pub title: &'a str,
    pub markup: &'a str,
    pub script: &'a str,
    pub include_utility_css: bool,
}

/// Assembles the final document. Only the listed stylesheets (and the utility-CSS
/// script when requested) are referenced externally.
pub fn assemble_document(parts: &DocumentParts<'_>, assets: &AssetUrls) -> String {
    let utility_css = if parts.include_utility_css {
        format!(
            "<script src=\"{}\"></script>\n",
            escape_html(&assets.tailwind_script)
        )
    } else {
        String::new()
    };

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="UTF-8">
<meta name="viewport" content="width={CANVAS_WIDTH_PX}, height={CANVAS_HEIGHT_PX}, initial-scale=1">
<title>{title}</title>
{utility_css}<link rel="stylesheet" href="{icons}">
<link rel="stylesheet" href="{symbols}">
<link rel="preconnect" href="https://fonts.googleapis.com">
<link rel="preconnect" href="https://fonts.gstatic.com" crossorigin>
<link rel="stylesheet" href="{fonts}">
<style>
{RESET_CSS}
</style>
</head>
<body>
<div id="export-root">{markup}</div>
{script}
</body>
</html>
"#,
        title = escape_html(parts.title),
        icons = escape_html(&assets.material_icons),
        symbols = escape_html(&assets.material_symbols),
        fonts = escape_html(&assets.web_fonts),
        markup = parts.markup,
        script = parts.script,
    )
}
