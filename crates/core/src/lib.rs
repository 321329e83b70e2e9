pub mod advisor;
pub mod batch;
pub mod catalog;
pub mod config;
pub mod domain;
pub mod errors;
pub mod harmony;
pub mod lexicon;
pub mod prompt;
pub mod ranking;

pub use advisor::{
    Advisor, Interpretation, Recommendation, RecommendationRequest, RecommendedItem,
};
pub use catalog::{Catalog, CatalogCache, CatalogKey, CatalogOrigin, SynthesisSettings};
pub use domain::listing::{
    CatalogRow, Color, ColorFilter, ProductListing, RankedRow, Room, Source, Style, StyleFilter,
};
pub use domain::profile::RoomProfile;
pub use errors::{ApplicationError, DomainError, InterfaceError};
pub use harmony::{suggest_palettes, Suggestion, WallTone};
pub use prompt::interpret_prompt;
pub use ranking::{rank_and_select, FilterCriteria, Notice, RankingOutcome, SelectionPolicy};
