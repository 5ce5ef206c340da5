//! # Knowledge Module
//!
//! Topic explanation pipeline: external lookup with tiered fallback, curated
//! resource recommendation, and final composition.
//!
//! ## Components
//! - `lookup`: Abstract lookup capability and its outcome variants
//! - `wikipedia`: HTTP implementation of the lookup against Wikipedia
//! - `resolver`: Disambiguation handling and the offline fallback path
//! - `resources`: Keyword-matched study resource catalog
//! - `composer`: Assembly of the final explanation result

pub mod composer;
pub mod lookup;
pub mod resolver;
pub mod resources;
pub mod wikipedia;

pub use composer::ExplanationComposer;
pub use lookup::{KnowledgeLookup, LookupOutcome};
pub use resolver::{KnowledgeResolver, ResolvedContent, Source};
pub use resources::{Resource, ResourceRecommender};
pub use wikipedia::WikipediaLookup;
