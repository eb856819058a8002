//! Read-snapshot access to the vendor collection.
//!
//! Pool selection happens here: callers pick the approved, pending, or full
//! set *before* invoking search, and search itself never writes back.

use crate::model::Vendor;

/// Supplies point-in-time vendor snapshots for searching.
pub trait VendorStore {
    /// Vendors visible in the public directory.
    fn approved(&self) -> Vec<Vendor>;

    /// Vendors awaiting review.
    fn pending(&self) -> Vec<Vendor>;

    /// Every vendor regardless of approval.
    fn all(&self) -> Vec<Vendor>;
}

/// Insertion-ordered in-memory store; the reference implementation and test
/// double for the persistence boundary.
#[derive(Debug, Default, Clone)]
pub struct InMemoryVendorStore {
    vendors: Vec<Vendor>,
}

impl InMemoryVendorStore {
    /// An empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a vendor to the collection.
    pub fn insert(&mut self, vendor: Vendor) {
        self.vendors.push(vendor);
    }

    /// Number of vendors held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.vendors.len()
    }

    /// Whether the store holds no vendors.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vendors.is_empty()
    }
}

impl VendorStore for InMemoryVendorStore {
    fn approved(&self) -> Vec<Vendor> {
        self.vendors.iter().filter(|v| v.approved).cloned().collect()
    }

    fn pending(&self) -> Vec<Vendor> {
        self.vendors.iter().filter(|v| !v.approved).cloned().collect()
    }

    fn all(&self) -> Vec<Vendor> {
        self.vendors.clone()
    }
}
