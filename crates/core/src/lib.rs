//! Domain model for the VegCity vendor directory.
//!
//! The search engine reads point-in-time snapshots of these records and never
//! mutates them; persistence lives behind the [`VendorStore`] boundary.
//!
//! # Example
//!
//! ```
//! use vegcity_core::{InMemoryVendorStore, Tag, Vendor, VendorStore};
//! use vegcity_geo::Coordinate;
//!
//! let mut store = InMemoryVendorStore::new();
//! store.insert(
//!     Vendor::new("Veggie Grill")
//!         .with_address("500 Market St")
//!         .with_location(Coordinate::new(39.9509, -75.1500))
//!         .with_cuisine_tag(Tag::cuisine("sandwiches", "Hoagies and grinders"))
//!         .approved(),
//! );
//!
//! assert_eq!(store.approved().len(), 1);
//! assert!(store.pending().is_empty());
//! ```

mod model;
mod store;

pub use model::{
    Neighborhood, NeighborhoodId, Record, Tag, TagId, TagKind, Vendor, VendorId,
};
pub use store::{InMemoryVendorStore, VendorStore};
