// Content Generation Engine
// Implements: request validation, template selection, tone and audience calibration,
// variation generation, analysis. All phrasing comes from the static template library.

pub mod analyzer;
pub mod audience;
pub mod content_selector;
pub mod generator;
pub mod seo;
pub mod templates;
pub mod tone;
pub mod validation;
