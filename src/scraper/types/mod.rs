mod media;

pub use media::{CatalogRecord, MediaType, SeasonRecord};
