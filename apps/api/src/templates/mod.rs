// Visual templates: each renders the same `Content` into a distinct style.
// Templates are registered once at startup and never mutated afterwards.

pub mod bento_grid;
pub mod markup;
pub mod neo_brutalism;
pub mod pixel_art;
pub mod spotlight;
pub mod synthwave;
pub mod terminal;
pub mod timeline;

use std::collections::BTreeMap;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::layout::scripts::DEFAULT_FLOOR_SCALE;
use crate::layout::TitleOverrides;

// ────────────────────────────────────────────────────────────────────────────
// Content
// ────────────────────────────────────────────────────────────────────────────

/// One icon/title/description card. `desc` is an HTML fragment inserted as-is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    pub icon: String,
    pub title: String,
    pub desc: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Content {
    pub main_title: String,
    #[serde(default)]
    pub cards: Vec<Card>,
}

// ────────────────────────────────────────────────────────────────────────────
// Template contract
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TemplateMeta {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
}

/// Spans for an oversized first card in a bespoke grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeaturedCell {
    pub col_span: u32,
    pub row_span: u32,
}

/// Bespoke grid sizing a template supplies instead of the standard layout plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GridPlan {
    pub columns: u32,
    pub gap_rem: f32,
    pub card_padding_rem: f32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_width_px: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub featured: Option<FeaturedCell>,
}

/// A visual style. Implementations are stateless and shared across threads.
pub trait Template: Send + Sync {
    fn meta(&self) -> TemplateMeta;

    /// Renders the markup fragment at a uniform `scale` (1.0 for export).
    fn render(&self, content: &Content, scale: f32) -> anyhow::Result<String>;

    /// True when the template ships all of its own CSS and needs no utility framework.
    fn self_contained_css(&self) -> bool {
        false
    }

    /// True when card padding is hand-tuned and must not be overwritten on export.
    fn explicit_padding(&self) -> bool {
        false
    }

    /// Bespoke grid for `card_count` cards; `None` uses the standard layout plan.
    fn grid_plan(&self, _card_count: usize) -> Option<GridPlan> {
        None
    }

    fn viewport_floor_scale(&self) -> f32 {
        DEFAULT_FLOOR_SCALE
    }

    fn title_overrides(&self) -> Option<TitleOverrides> {
        None
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Resolution
// ────────────────────────────────────────────────────────────────────────────

/// Lookup seam between the exporter and the set of templates.
pub trait TemplateResolver: Send + Sync {
    fn default_template_id(&self) -> &str;
    fn resolve(&self, id: &str) -> Option<Arc<dyn Template>>;
}

/// Template registry, keyed by template id.
pub struct TemplateRegistry {
    default_template_id: String,
    templates: BTreeMap<&'static str, Arc<dyn Template>>,
}

impl TemplateRegistry {
    pub fn new(default_template_id: impl Into<String>) -> Self {
        Self {
            default_template_id: default_template_id.into(),
            templates: BTreeMap::new(),
        }
    }

    /// Registry holding every built-in template.
    pub fn with_builtin(default_template_id: impl Into<String>) -> Self {
        let mut registry = Self::new(default_template_id);
        registry.register(neo_brutalism::NeoBrutalism);
        registry.register(pixel_art::PixelArt);
        registry.register(terminal::Terminal);
        registry.register(synthwave::Synthwave);
        registry.register(bento_grid::BentoGrid);
        registry.register(timeline::Timeline);
        registry.register(spotlight::Spotlight);
        info!(
            count = registry.len(),
            default = %registry.default_template_id,
            "Built-in templates registered"
        );
        registry
    }

    pub fn register<T: Template + 'static>(&mut self, template: T) {
        let id = template.meta().id;
        self.templates.insert(id, Arc::new(template));
    }

    pub fn list(&self) -> Vec<TemplateMeta> {
        self.templates.values().map(|t| t.meta()).collect()
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }
}

impl TemplateResolver for TemplateRegistry {
    fn default_template_id(&self) -> &str {
        &self.default_template_id
    }

    fn resolve(&self, id: &str) -> Option<Arc<dyn Template>> {
        self.templates.get(id).cloned()
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) fn roadmap() -> Content {
        Content {
            main_title: "Q1 Roadmap".to_string(),
            cards: vec![
                Card {
                    icon: "rocket_launch".to_string(),
                    title: "Launch".to_string(),
                    desc: "<b>Ship it</b>".to_string(),
                },
                Card {
                    icon: "bug_report".to_string(),
                    title: "Fix".to_string(),
                    desc: "Stabilize".to_string(),
                },
            ],
        }
    }

    pub(crate) fn content_with(n: usize) -> Content {
        Content {
            main_title: "Quarterly Objectives".to_string(),
            cards: (0..n)
                .map(|i| Card {
                    icon: "star".to_string(),
                    title: format!("Goal {i}"),
                    desc: format!("Detail <i>{i}</i>"),
                })
                .collect(),
        }
    }

    #[test]
    fn test_builtin_registry_resolves_every_listed_id() {
        let registry = TemplateRegistry::with_builtin("neo-brutalism");
        assert_eq!(registry.len(), 7);
        for meta in registry.list() {
            let template = registry.resolve(meta.id).expect("listed id must resolve");
            assert_eq!(template.meta().id, meta.id);
        }
        assert_eq!(registry.default_template_id(), "neo-brutalism");
    }

    #[test]
    fn test_unknown_id_resolves_to_none() {
        let registry = TemplateRegistry::with_builtin("neo-brutalism");
        assert!(registry.resolve("does-not-exist").is_none());
    }

    #[test]
    fn test_every_builtin_renders_all_cards() {
        let registry = TemplateRegistry::with_builtin("neo-brutalism");
        for n in [0, 1, 2, 5, 9] {
            let content = content_with(n);
            for meta in registry.list() {
                let template = registry.resolve(meta.id).unwrap();
                let html = template.render(&content, 1.0).unwrap();
                assert!(html.contains("Quarterly Objectives"), "{} title", meta.id);
                for card in &content.cards {
                    assert!(html.contains(&card.title), "{} missing {}", meta.id, card.title);
                    assert!(html.contains(&card.desc), "{} desc not raw", meta.id);
                }
            }
        }
    }

    #[test]
    fn test_content_json_field_names() {
        let content: Content = serde_json::from_str(
            r#"{"mainTitle":"T","cards":[{"icon":"i","title":"a","desc":"<b>d</b>"}]}"#,
        )
        .unwrap();
        assert_eq!(content.main_title, "T");
        assert_eq!(content.cards[0].desc, "<b>d</b>");
    }
}
