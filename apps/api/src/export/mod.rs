//! Standalone export: renders one template instance into a self-contained document.
//!
//! # Flow
//! resolve template → render at scale 1 → layout plan + title bounds for the card
//! count → one inline script (layout, bottom reservation, title fit, viewport fit)
//! → document shell with stylesheet links.
//!
//! The resolver is registered once on the `Exporter` and read-only afterwards.
//! Unknown ids are errors; there is no silent fallback to the default template.

pub mod document;
pub mod handlers;
pub mod script;

use std::sync::{Arc, OnceLock};

use serde::{Deserialize, Serialize};
use tracing::{debug, error, info};

use crate::config::AssetUrls;
use crate::errors::ExportError;
use crate::export::document::{assemble_document, DocumentParts};
use crate::export::script::{build_export_script, LayoutScriptData};
use crate::layout::{calculate_standard_layout, get_standard_title_config, ViewportFitParams};
use crate::templates::{Content, Template, TemplateResolver};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportOptions {
    /// Pixels kept free at the bottom of the canvas (e.g. for an overlaid footer).
    #[serde(default)]
    pub bottom_reserved_px: Option<u32>,
}

pub struct Exporter {
    assets: AssetUrls,
    resolver: OnceLock<Arc<dyn TemplateResolver>>,
}

impl Exporter {
    pub fn new(assets: AssetUrls) -> Self {
        Exporter {
            assets,
            resolver: OnceLock::new(),
        }
    }

    /// Registers the template resolver. Allowed exactly once.
    pub fn register_template_resolver(
        &self,
        resolver: Arc<dyn TemplateResolver>,
    ) -> Result<(), ExportError> {
        let default_id = resolver.default_template_id().to_string();
        self.resolver
            .set(resolver)
            .map_err(|_| ExportError::ResolverAlreadyRegistered)?;
        info!(default_template = %default_id, "Template resolver registered");
        Ok(())
    }

    pub fn assets(&self) -> &AssetUrls {
        &self.assets
    }

    pub fn default_template_id(&self) -> Option<&str> {
        self.resolver.get().map(|r| r.default_template_id())
    }

    fn resolve(&self, template_id: &str) -> Result<Arc<dyn Template>, ExportError> {
        let resolver = self
            .resolver
            .get()
            .ok_or_else(|| ExportError::ResolverNotRegistered {
                template_id: template_id.to_string(),
            })?;
        resolver
            .resolve(template_id)
            .ok_or_else(|| ExportError::UnknownTemplate {
                template_id: template_id.to_string(),
            })
    }

    fn render(
        template: &dyn Template,
        template_id: &str,
        content: &Content,
        scale: f32,
    ) -> Result<String, ExportError> {
        template.render(content, scale).map_err(|e| {
            error!(template_id, error = %e, "Template render failed");
            ExportError::Render {
                template_id: template_id.to_string(),
                source: e,
            }
        })
    }

    /// Renders the bare template fragment for live preview.
    pub fn generate_preview_markup(
        &self,
        content: &Content,
        template_id: &str,
        scale: f32,
    ) -> Result<String, ExportError> {
        let template = self.resolve(template_id)?;
        Self::render(template.as_ref(), template_id, content, scale)
    }

    /// Produces a complete standalone 1920×1080 HTML document.
    pub fn generate_downloadable_html(
        &self,
        content: &Content,
        template_id: &str,
        options: &ExportOptions,
    ) -> Result<String, ExportError> {
        let template = self.resolve(template_id)?;
        let card_count = content.cards.len();
        debug!(template_id, card_count, "Generating standalone export");

        let markup = Self::render(template.as_ref(), template_id, content, 1.0)?;

        let plan = calculate_standard_layout(card_count);
        let grid = template.grid_plan(card_count);
        let overrides = template.title_overrides();
        let title_config = get_standard_title_config(card_count, overrides.as_ref());

        let layout_data = LayoutScriptData::new(&plan, grid.as_ref(), template.explicit_padding());
        let viewport = ViewportFitParams::with_floor(template.viewport_floor_scale());
        let script = build_export_script(
            &layout_data,
            options.bottom_reserved_px,
            &title_config,
            &viewport,
        );

        Ok(assemble_document(
            &DocumentParts {
                title: &content.main_title,
                markup: &markup,
                script: &script,
                include_utility_css: !template.self_contained_css(),
            },
            &self.assets,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::script_harness;
    use crate::templates::tests::{content_with, roadmap};
    use crate::templates::{TemplateMeta, TemplateRegistry};
    use std::error::Error as _;

    struct Broken;

    impl Template for Broken {
        fn meta(&self) -> TemplateMeta {
            TemplateMeta {
                id: "broken",
                name: "Broken",
                description: "Always fails",
                icon: "error",
            }
        }

        fn render(&self, _content: &Content, _scale: f32) -> anyhow::Result<String> {
            anyhow::bail!("palette table missing")
        }
    }

    fn exporter() -> Exporter {
        let mut registry = TemplateRegistry::with_builtin("neo-brutalism");
        registry.register(Broken);
        let exporter = Exporter::new(AssetUrls::default());
        exporter
            .register_template_resolver(Arc::new(registry))
            .unwrap();
        exporter
    }

    #[test]
    fn test_round_trip_document() {
        let html = exporter()
            .generate_downloadable_html(&roadmap(), "neo-brutalism", &ExportOptions::default())
            .unwrap();
        assert!(html.contains("<!DOCTYPE html>"));
        assert!(html.contains("Q1 Roadmap"));
        assert!(html.contains("Launch"));
        assert!(html.contains("<b>Ship it</b>"));
        assert_eq!(html.matches("<script>").count(), 1);
        let block = &html[html.find("<script>").unwrap()..];
        assert!(block.contains("__galleryFitTitle({"));
        assert!(block.contains("__galleryFitViewport({"));
    }

    #[test]
    fn test_unknown_template_is_configuration_error() {
        let err = exporter()
            .generate_downloadable_html(&roadmap(), "does-not-exist", &ExportOptions::default())
            .unwrap_err();
        assert!(matches!(err, ExportError::UnknownTemplate { .. }));
        assert!(err.to_string().contains("does-not-exist"));
    }

    #[test]
    fn test_export_before_registration_fails() {
        let exporter = Exporter::new(AssetUrls::default());
        let err = exporter
            .generate_downloadable_html(&roadmap(), "neo-brutalism", &ExportOptions::default())
            .unwrap_err();
        assert!(matches!(err, ExportError::ResolverNotRegistered { .. }));
        assert!(err.to_string().contains("neo-brutalism"));
    }

    #[test]
    fn test_register_once() {
        let exporter = Exporter::new(AssetUrls::default());
        let registry: Arc<dyn TemplateResolver> =
            Arc::new(TemplateRegistry::with_builtin("terminal"));
        exporter.register_template_resolver(registry.clone()).unwrap();
        assert_eq!(exporter.default_template_id(), Some("terminal"));
        assert!(matches!(
            exporter.register_template_resolver(registry),
            Err(ExportError::ResolverAlreadyRegistered)
        ));
    }

    #[test]
    fn test_render_failure_wrapped_with_cause() {
        let err = exporter()
            .generate_downloadable_html(&roadmap(), "broken", &ExportOptions::default())
            .unwrap_err();
        assert!(!err.is_configuration());
        assert!(err.to_string().contains("broken"));
        let cause = err.source().unwrap();
        assert!(cause.to_string().contains("palette table missing"));
    }

    #[test]
    fn test_self_contained_css_skips_utility_script() {
        let exporter = exporter();
        let tag = format!("<script src=\"{}\"", exporter.assets().tailwind_script);
        let terminal = exporter
            .generate_downloadable_html(&roadmap(), "terminal", &ExportOptions::default())
            .unwrap();
        assert!(!terminal.contains(&tag));
        let neo = exporter
            .generate_downloadable_html(&roadmap(), "neo-brutalism", &ExportOptions::default())
            .unwrap();
        assert!(neo.contains(&tag));
    }

    #[test]
    fn test_bespoke_grid_and_explicit_padding_forwarded() {
        let exporter = exporter();
        let bento = exporter
            .generate_downloadable_html(&content_with(5), "bento-grid", &ExportOptions::default())
            .unwrap();
        assert!(bento.contains("\"featured\":{\"colSpan\":2,\"rowSpan\":2}"));

        let terminal = exporter
            .generate_downloadable_html(&content_with(5), "terminal", &ExportOptions::default())
            .unwrap();
        assert!(terminal.contains("\"explicitPadding\":true"));
        assert!(terminal.contains("\"floorScale\":0.6"));
        assert!(!terminal.contains("\"grid\""));
    }

    #[test]
    fn test_template_title_overrides_applied() {
        let html = exporter()
            .generate_downloadable_html(&roadmap(), "pixel-art", &ExportOptions::default())
            .unwrap();
        assert!(html.contains("\"initialFontSize\":72"));
        assert!(html.contains("\"minFontSize\":36"));
    }

    #[test]
    fn test_bottom_reservation_option() {
        let html = exporter()
            .generate_downloadable_html(
                &roadmap(),
                "synthwave",
                &ExportOptions {
                    bottom_reserved_px: Some(96),
                },
            )
            .unwrap();
        assert!(html.contains("__galleryReserveBottom(96, "));
    }

    #[test]
    fn test_zero_cards_export() {
        let html = exporter()
            .generate_downloadable_html(&content_with(0), "spotlight", &ExportOptions::default())
            .unwrap();
        assert!(html.contains("Quarterly Objectives"));
    }

    #[test]
    fn test_preview_is_fragment_only() {
        let markup = exporter()
            .generate_preview_markup(&roadmap(), "synthwave", 0.5)
            .unwrap();
        assert!(!markup.contains("<!DOCTYPE html>"));
        assert!(markup.contains("transform:scale(0.5)"));
    }

    #[test]
    fn test_export_is_deterministic() {
        let exporter = exporter();
        let a = exporter
            .generate_downloadable_html(&content_with(7), "timeline", &ExportOptions::default())
            .unwrap();
        let b = exporter
            .generate_downloadable_html(&content_with(7), "timeline", &ExportOptions::default())
            .unwrap();
        assert_eq!(a, b);
    }

    fn run_export_script(html: &str, setup: &str) -> serde_json::Value {
        script_harness::run(
            setup,
            script_harness::inline_script(html),
            "fireLoad(); JSON.stringify({ font: t.style.fontSize, transform: v.style.transform })",
        )
    }

    #[test]
    fn test_short_content_is_not_scaled() {
        let html = exporter()
            .generate_downloadable_html(&roadmap(), "neo-brutalism", &ExportOptions::default())
            .unwrap();
        assert!(!html.contains("h-full"));
        // Wrapper box as tall as the canvas, content about half of it.
        let out = run_export_script(
            &html,
            "var t = mockTitle('.main-title', 1664, 10); var v = mockBlock('.content-wrapper', 1080, 620);",
        );
        assert_eq!(out["transform"], "");
        assert_eq!(out["font"], "96px");
    }

    #[test]
    fn test_tall_content_is_scaled_once() {
        let html = exporter()
            .generate_downloadable_html(&content_with(9), "pixel-art", &ExportOptions::default())
            .unwrap();
        let out = run_export_script(
            &html,
            "var t = mockTitle('h1', 0, 10); var v = mockBlock('[data-fit-viewport]', 1080, 1300);",
        );
        assert_eq!(out["transform"], "scale(0.8)");
    }

    #[test]
    fn test_stretched_titles_keep_initial_size() {
        let exporter = exporter();
        let bento = exporter
            .generate_downloadable_html(&content_with(2), "bento-grid", &ExportOptions::default())
            .unwrap();
        assert!(bento.contains("width:fit-content;"));
        let out = run_export_script(
            &bento,
            "var t = mockTitle('.main-title', 1664, 10); var v = mockBlock('.content-wrapper', 0, 600);",
        );
        assert_eq!(out["font"], "96px");

        let terminal = exporter
            .generate_downloadable_html(&content_with(9), "terminal", &ExportOptions::default())
            .unwrap();
        let out = run_export_script(
            &terminal,
            "var t = mockTitle('[data-fit-title]', 1708, 10); var v = mockBlock('.content-wrapper', 0, 900);",
        );
        assert_eq!(out["font"], "72px");
        assert_eq!(out["transform"], "");
    }
}
