//! Inline script assembled into every standalone export.
//!
//! Re-applies the layout plan (or the template's bespoke grid) to whatever card
//! markup the template produced, reserves bottom space, then runs the title and
//! viewport fit routines. Fit runs once immediately and again shortly after load,
//! once web fonts have settled.

use serde::Serialize;

use crate::layout::scripts::{embed_json, viewport_fit_script_for};
use crate::layout::{generate_title_fit_script, LayoutPlan, TitleFitConfig, ViewportFitParams};
use crate::templates::GridPlan;

/// Recognized card markers, tried in order.
pub const CARD_SELECTORS: &[&str] = &["[data-card]", ".template-card", ".card"];

/// Recognized container markers; the first card's parent is the fallback.
pub const CONTAINER_SELECTORS: &[&str] = &["[data-card-container]", ".cards-container"];

/// Delay before the post-load fit pass.
pub const FIT_DELAY_MS: u32 = 100;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutScriptData<'a> {
    pub card_selectors: &'static [&'static str],
    pub container_selectors: &'static [&'static str],
    pub card_width: String,
    pub plan: &'a LayoutPlan,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grid: Option<&'a GridPlan>,
    pub explicit_padding: bool,
}

impl<'a> LayoutScriptData<'a> {
    pub fn new(plan: &'a LayoutPlan, grid: Option<&'a GridPlan>, explicit_padding: bool) -> Self {
        LayoutScriptData {
            card_selectors: CARD_SELECTORS,
            container_selectors: CONTAINER_SELECTORS,
            card_width: plan.card_width_css(),
            plan,
            grid,
            explicit_padding,
        }
    }
}

const APPLY_LAYOUT_JS: &str = r#"function __galleryApplyLayout(c) {
  var cards = [];
  for (var i = 0; i < c.cardSelectors.length && cards.length === 0; i++) {
    cards = Array.prototype.slice.call(document.querySelectorAll(c.cardSelectors[i]));
  }
  if (cards.length === 0) return;
  var container = null;
  for (var j = 0; j < c.containerSelectors.length && !container; j++) {
    container = document.querySelector(c.containerSelectors[j]);
  }
  if (!container) container = cards[0].parentElement;
  if (!container) return;
  function pad(card, rem) {
    if (c.explicitPadding || card.style.padding) return;
    card.style.padding = rem + 'rem';
  }
  var g = c.grid;
  if (g) {
    container.style.display = 'grid';
    container.style.gridTemplateColumns = 'repeat(' + g.columns + ', minmax(0, 1fr))';
    container.style.gap = g.gapRem + 'rem';
    if (g.maxWidthPx) {
      container.style.width = '100%';
      container.style.maxWidth = g.maxWidthPx + 'px';
      container.style.marginLeft = 'auto';
      container.style.marginRight = 'auto';
    }
    cards.forEach(function (card, idx) {
      card.style.width = 'auto';
      pad(card, g.cardPaddingRem);
      if (idx === 0 && g.featured) {
        card.style.gridColumn = 'span ' + g.featured.colSpan;
        card.style.gridRow = 'span ' + g.featured.rowSpan;
      }
    });
    return;
  }
  var p = c.plan;
  container.style.display = 'flex';
  container.style.flexWrap = 'wrap';
  container.style.justifyContent = 'center';
  container.style.gap = p.containerGapRem + 'rem';
  cards.forEach(function (card) {
    card.style.width = c.cardWidth;
    card.style.flex = '0 0 auto';
    pad(card, p.cardPaddingRem);
    var icons = card.querySelectorAll('.material-icons, .material-symbols-outlined');
    for (var k = 0; k < icons.length; k++) {
      icons[k].style.fontSize = p.iconSizeRem + 'rem';
    }
  });
}"#;

const RESERVE_BOTTOM_JS: &str = r#"function __galleryReserveBottom(px, selectors) {
  if (!px) return;
  for (var i = 0; i < selectors.length; i++) {
    var el = document.querySelector(selectors[i]);
    if (el) {
      el.style.boxSizing = 'border-box';
      el.style.paddingBottom = px + 'px';
      return;
    }
  }
}"#;

pub fn layout_script(data: &LayoutScriptData<'_>) -> String {
    format!(
        "(function () {{\n{APPLY_LAYOUT_JS}\n__galleryApplyLayout({});\n}})();",
        embed_json(data)
    )
}

/// Empty when nothing is reserved.
pub fn bottom_space_script(bottom_reserved_px: Option<u32>, selectors: &[String]) -> String {
    match bottom_reserved_px.filter(|px| *px > 0) {
        Some(px) => format!(
            "(function () {{\n{RESERVE_BOTTOM_JS}\n__galleryReserveBottom({px}, {});\n}})();",
            embed_json(&selectors)
        ),
        None => String::new(),
    }
}

/// Builds the single inline script block for an export.
pub fn build_export_script(
    layout: &LayoutScriptData<'_>,
    bottom_reserved_px: Option<u32>,
    title: &TitleFitConfig,
    viewport: &ViewportFitParams,
) -> String {
    let layout_js = layout_script(layout);
    let bottom_js = bottom_space_script(bottom_reserved_px, &viewport.selectors);
    let title_js = generate_title_fit_script(title);
    let viewport_js = viewport_fit_script_for(viewport);

    format!(
        r#"<script>
(function () {{
function runLayout() {{
{layout_js}
{bottom_js}
}}
function runFit() {{
{title_js}
{viewport_js}
}}
runLayout();
runFit();
window.addEventListener('load', function () {{ setTimeout(runFit, {FIT_DELAY_MS}); }});
}})();
</script>"#
    )
}
