// Layout engine: card-count driven grid tokens, title-fit bounds and the
// client-side fit routines embedded into exported documents.
// Everything here is pure and synchronous.

pub mod plan;
pub mod scripts;
pub mod title;

#[cfg(test)]
pub(crate) mod script_harness;

// Re-export the public API consumed by templates, the exporter and handlers.
pub use plan::{calculate_standard_layout, LayoutPlan};
pub use scripts::{generate_title_fit_script, generate_viewport_fit_script, ViewportFitParams};
pub use title::{
    get_standard_title_config, PartialTitleFit, TitleBucket, TitleFitConfig, TitleOverrides,
};
