//! # gdoc-unmarshal
//!
//! Populate annotated Rust records from Go documentation comments.
//!
//! Each destination field carries an annotation naming the declaration whose
//! doc comment it receives:
//!
//! - a leaf (`String`) annotated `Fetcher.FetchOrders` receives the comment of
//!   method `FetchOrders` on type `Fetcher`;
//! - a nested record annotated `module1` receives everything declared in the
//!   `module1/` directory, resolved against its own fields;
//! - a map of records annotated `*` grows one entry per directory name.
//!
//! Paths that match no field are dropped silently.
//!
//! ```no_run
//! use gdoc_unmarshal::{Documented, Schema, unmarshal_package};
//!
//! #[derive(Debug, Default)]
//! struct FetcherDocs {
//!     fetcher: String,
//!     fetch_orders: String,
//! }
//!
//! impl Documented for FetcherDocs {
//!     fn schema() -> Schema<Self> {
//!         Schema::<Self>::new()
//!             .text("Fetcher", |d| &mut d.fetcher)
//!             .text("Fetcher.FetchOrders", |d| &mut d.fetch_orders)
//!     }
//! }
//!
//! let mut docs = FetcherDocs::default();
//! unmarshal_package("./fetcher", &mut docs).expect("unmarshal");
//! println!("{}", docs.fetch_orders);
//! ```

mod destination;
mod error;
pub mod path;
mod schema;
mod value;
pub mod walk;

use std::path::Path;

use gdoc_config::GdocConfig;
use gdoc_parser::{DocPair, PackageOptions, visit_package};
use tracing::{debug, trace};

pub use destination::{Destination, Shape, check_destination};
pub use error::UnmarshalError;
pub use schema::{Bound, Documented, EntryMap, Schema};
pub use value::{DocField, DocMap, DocRecord, DocValue, FieldKind, FieldSpec, SchemaSpec};

/// Populate `target` from the Go package in `path`, with default settings.
///
/// # Errors
/// Propagates I/O and Go syntax errors.
pub fn unmarshal_package<T: Documented>(
    path: impl AsRef<Path>,
    target: &mut T,
) -> Result<(), UnmarshalError> {
    let schema = T::schema();
    unmarshal_package_into(path, &mut Bound::new(&schema, target), &GdocConfig::default())
}

/// Populate `target` from every package under `root`, with default settings.
///
/// # Errors
/// Propagates directory walk, I/O and Go syntax errors.
pub fn unmarshal_module<T: Documented>(
    root: impl AsRef<Path>,
    target: &mut T,
) -> Result<(), UnmarshalError> {
    let schema = T::schema();
    unmarshal_module_into(root, &mut Bound::new(&schema, target), &GdocConfig::default())
}

/// Populate any destination from the package in `path`. Every name path is
/// used as declared, without a directory prefix.
///
/// # Errors
/// `InvalidTarget` / `UnsupportedShape` for unusable destinations, then any
/// error raised while extracting or resolving. Fields assigned before an
/// error keep their values.
pub fn unmarshal_package_into<D: Destination + ?Sized>(
    path: impl AsRef<Path>,
    destination: &mut D,
    config: &GdocConfig,
) -> Result<(), UnmarshalError> {
    check_destination(&*destination)?;
    let options = package_options(config);
    visit_package(path.as_ref(), "", &options, |pair| {
        feed(destination, &pair).map(|_| ())
    })?;
    Ok(())
}

/// Populate any destination from every directory under `root`.
///
/// Each directory is extracted as a package whose name paths are prefixed
/// with the directory's root-relative path and a trailing `/`; the root's own
/// package gets no prefix. Map entries accumulate across directories.
///
/// # Errors
/// As [`unmarshal_package_into`], plus directory walk errors.
pub fn unmarshal_module_into<D: Destination + ?Sized>(
    root: impl AsRef<Path>,
    destination: &mut D,
    config: &GdocConfig,
) -> Result<(), UnmarshalError> {
    check_destination(&*destination)?;
    let options = package_options(config);
    let root = root.as_ref();
    let visited = walk::for_each_directory(root, &config.walk, |dir, prefix| {
        visit_package(dir, prefix, &options, |pair| {
            feed(destination, &pair).map(|_| ())
        })?;
        Ok(())
    })?;
    debug!(root = %root.display(), visited, "module unmarshaled");
    Ok(())
}

/// Resolve in-memory pairs, returning how many were assigned.
///
/// # Errors
/// `InvalidTarget` / `UnsupportedShape` for unusable destinations.
pub fn resolve_pairs<D, I>(destination: &mut D, pairs: I) -> Result<usize, UnmarshalError>
where
    D: Destination + ?Sized,
    I: IntoIterator<Item = DocPair>,
{
    check_destination(&*destination)?;
    let mut assigned = 0;
    for pair in pairs {
        if feed(destination, &pair)? {
            assigned += 1;
        }
    }
    Ok(assigned)
}

fn feed<D: Destination + ?Sized>(destination: &mut D, pair: &DocPair) -> Result<bool, UnmarshalError> {
    let matched = destination.resolve(&pair.path, &pair.text)?;
    if matched {
        trace!(pair = %pair, "assigned");
    } else {
        trace!(pair = %pair, "no matching field, dropped");
    }
    Ok(matched)
}

const fn package_options(config: &GdocConfig) -> PackageOptions {
    PackageOptions {
        include_test_files: config.walk.include_test_files,
        strict: config.parse.strict,
    }
}
