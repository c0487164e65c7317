//! Client-side fit scripts embedded into rendered documents.
//!
//! Each routine is a fixed function body. Per-render values travel as a JSON
//! descriptor passed to that function, so no script text is derived from content.

use serde::{Deserialize, Serialize};

use crate::layout::title::TitleFitConfig;

pub const TITLE_THRESHOLD_PX: u32 = 1650;
pub const TITLE_STEP_PX: u32 = 2;
pub const TITLE_MAX_ITERATIONS: u32 = 100;

/// Canvas height minus a 40px safety margin.
pub const VIEWPORT_MAX_HEIGHT_PX: u32 = 1040;
pub const DEFAULT_FLOOR_SCALE: f32 = 0.65;

/// Selectors tried in order to find the title element.
pub const TITLE_SELECTORS: &[&str] = &["[data-fit-title]", ".main-title", "h1"];

/// Selectors tried in order to find the content wrapper that gets scaled.
pub const VIEWPORT_SELECTORS: &[&str] = &[
    "[data-fit-viewport]",
    ".content-wrapper",
    "#export-root > *",
];

// ────────────────────────────────────────────────────────────────────────────
// Descriptors
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TitleFitParams {
    pub initial_font_size: u32,
    pub min_font_size: u32,
    pub threshold_px: u32,
    pub step_px: u32,
    pub max_iterations: u32,
    pub selectors: Vec<String>,
}

pub fn title_fit_params(config: &TitleFitConfig) -> TitleFitParams {
    TitleFitParams {
        initial_font_size: config.initial_font_size,
        min_font_size: config.min_font_size,
        threshold_px: TITLE_THRESHOLD_PX,
        step_px: TITLE_STEP_PX,
        max_iterations: TITLE_MAX_ITERATIONS,
        selectors: TITLE_SELECTORS.iter().map(|s| s.to_string()).collect(),
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewportFitParams {
    pub max_height_px: u32,
    pub floor_scale: f32,
    pub selectors: Vec<String>,
}

impl ViewportFitParams {
    pub fn with_floor(floor_scale: f32) -> Self {
        ViewportFitParams {
            floor_scale: floor_scale.clamp(0.1, 1.0),
            ..Self::default()
        }
    }
}

impl Default for ViewportFitParams {
    fn default() -> Self {
        ViewportFitParams {
            max_height_px: VIEWPORT_MAX_HEIGHT_PX,
            floor_scale: DEFAULT_FLOOR_SCALE,
            selectors: VIEWPORT_SELECTORS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Static routine bodies
// ────────────────────────────────────────────────────────────────────────────

pub(crate) const FIND_FIRST_JS: &str = r#"function __galleryFindFirst(selectors) {
  for (var i = 0; i < selectors.length; i++) {
    var el = document.querySelector(selectors[i]);
    if (el) return el;
  }
  return null;
}"#;

/// Measures at `max-content` width so a stretched title box does not read as overflow.
pub(crate) const TITLE_FIT_JS: &str = r#"function __galleryFitTitle(p) {
  var el = __galleryFindFirst(p.selectors);
  if (!el) return;
  var min = Math.min(p.minFontSize, p.initialFontSize);
  var step = Math.max(1, p.stepPx);
  var size = p.initialFontSize;
  var width = el.style.width;
  el.style.width = 'max-content';
  el.style.fontSize = size + 'px';
  var i = 0;
  while (el.scrollWidth > p.thresholdPx && size > min && i < p.maxIterations) {
    size = Math.max(min, size - step);
    el.style.fontSize = size + 'px';
    i++;
  }
  if (el.scrollWidth > p.thresholdPx && size > min) {
    el.style.fontSize = min + 'px';
  }
  el.style.width = width;
}"#;

/// Measures with `height:auto` so only the natural content height counts, never a
/// box stretched to the canvas.
pub(crate) const VIEWPORT_FIT_JS: &str = r#"function __galleryFitViewport(p) {
  var el = __galleryFindFirst(p.selectors);
  if (!el) return;
  el.style.transform = '';
  var height = el.style.height;
  el.style.height = 'auto';
  var h = el.scrollHeight;
  el.style.height = height;
  if (h > p.maxHeightPx) {
    var s = Math.max(p.floorScale, p.maxHeightPx / h);
    el.style.transformOrigin = 'center center';
    el.style.transform = 'scale(' + s + ')';
  }
}"#;

// ────────────────────────────────────────────────────────────────────────────
// Generators
// ────────────────────────────────────────────────────────────────────────────

/// Self-invoking script that shrinks the title to fit. Safe to run repeatedly; no-op without a title.
pub fn generate_title_fit_script(config: &TitleFitConfig) -> String {
    title_fit_script_for(&title_fit_params(config))
}

pub fn title_fit_script_for(params: &TitleFitParams) -> String {
    format!(
        "(function () {{\n{FIND_FIRST_JS}\n{TITLE_FIT_JS}\n__galleryFitTitle({});\n}})();",
        embed_json(params)
    )
}

/// Script text that scales the content wrapper down when it overflows the canvas.
pub fn generate_viewport_fit_script() -> String {
    viewport_fit_script_for(&ViewportFitParams::default())
}

pub fn viewport_fit_script_for(params: &ViewportFitParams) -> String {
    format!(
        "(function () {{\n{FIND_FIRST_JS}\n{VIEWPORT_FIT_JS}\n__galleryFitViewport({});\n}})();",
        embed_json(params)
    )
}

/// Serializes `value` for inclusion inside a `<script>` element.
///
/// `<`, `>` and `&` are written as unicode escapes so the payload can never close the
/// element or open a comment. Serialization of these descriptor types cannot fail, so
/// a failure yields `null` and the routine becomes a no-op.
pub fn embed_json<T: Serialize>(value: &T) -> String {
    serde_json::to_string(value)
        .map(|json| escape_script_json(&json))
        .unwrap_or_else(|_| "null".to_string())
}

pub(crate) fn escape_script_json(json: &str) -> String {
    json.replace('<', "\\u003c")
        .replace('>', "\\u003e")
        .replace('&', "\\u0026")
}
