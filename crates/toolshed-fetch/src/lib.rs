//! Source resolution: HTTP retrieval of the directory CSV with an embedded
//! fallback dataset.

mod load;

pub use load::{
    DEFAULT_SOURCE_URL, FALLBACK_CSV, FetchError, LoadError, LoadReport, Loader, Source, resolve,
};
