//! Directory records: vendors, tags, neighborhoods.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use vegcity_geo::Coordinate;

macro_rules! id_type {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(pub Uuid);

        impl $name {
            /// Fresh random identifier.
            #[must_use]
            pub fn new() -> Self {
                Self(Uuid::new_v4())
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                self.0.fmt(f)
            }
        }
    };
}

id_type!(
    /// Identity of a [`Vendor`].
    VendorId
);
id_type!(
    /// Identity of a [`Tag`].
    TagId
);
id_type!(
    /// Identity of a [`Neighborhood`].
    NeighborhoodId
);

/// Fields shared by every directory record, embedded by composition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    /// Unique display name
    pub name: String,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
}

impl Record {
    /// New record stamped with the current time.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            created_at: Utc::now(),
        }
    }
}

/// The two tag vocabularies vendors are classified with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TagKind {
    /// Cuisine styles: "mexican", "pizza", "comfort"
    Cuisine,
    /// Amenities and traits: "open late", "offers delivery"
    Feature,
}

/// A short classification label with a human-readable description.
///
/// Searching matches against the tag *name* only; the description is
/// presentation text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tag {
    /// Identity
    pub id: TagId,
    /// Shared name/created fields
    pub record: Record,
    /// Which vocabulary this tag belongs to
    pub kind: TagKind,
    /// Human-readable description
    pub description: String,
}

impl Tag {
    /// A cuisine tag.
    pub fn cuisine(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self::with_kind(TagKind::Cuisine, name, description)
    }

    /// A feature tag.
    pub fn feature(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self::with_kind(TagKind::Feature, name, description)
    }

    fn with_kind(kind: TagKind, name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id: TagId::new(),
            record: Record::new(name),
            kind,
            description: description.into(),
        }
    }

    /// The unique short name search matches against.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.record.name
    }
}

/// Neighborhood a vendor sits in, attached as a side effect of geocoding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Neighborhood {
    /// Identity
    pub id: NeighborhoodId,
    /// Shared name/created fields
    pub record: Record,
}

impl Neighborhood {
    /// Neighborhood with the given unique name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: NeighborhoodId::new(),
            record: Record::new(name),
        }
    }
}

/// A vendor listing.
///
/// `location` is `Some` only when geocoding succeeded, so latitude and
/// longitude are either both present or both absent by construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vendor {
    /// Identity
    pub id: VendorId,
    /// Shared name/created fields
    pub record: Record,
    /// Free-text street address, when the submitter provided one
    pub address: Option<String>,
    /// Geocoded position
    pub location: Option<Coordinate>,
    /// Neighborhood name reported by the geocoder
    pub neighborhood: Option<String>,
    /// Approved listings are the public directory; the rest await review
    pub approved: bool,
    /// Cuisine classifications
    pub cuisine_tags: Vec<Tag>,
    /// Feature classifications
    pub feature_tags: Vec<Tag>,
}

impl Vendor {
    /// A new, unapproved vendor with no address or tags.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: VendorId::new(),
            record: Record::new(name),
            address: None,
            location: None,
            neighborhood: None,
            approved: false,
            cuisine_tags: Vec::new(),
            feature_tags: Vec::new(),
        }
    }

    /// The unique display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.record.name
    }

    /// Every tag on this vendor, cuisine first.
    pub fn tags(&self) -> impl Iterator<Item = &Tag> {
        self.cuisine_tags.iter().chain(self.feature_tags.iter())
    }

    /// Builder-style method to set the street address.
    #[must_use]
    pub fn with_address(mut self, address: impl Into<String>) -> Self {
        self.address = Some(address.into());
        self
    }

    /// Builder-style method to set the geocoded position.
    #[must_use]
    pub fn with_location(mut self, location: Coordinate) -> Self {
        self.location = Some(location);
        self
    }

    /// Builder-style method to set the neighborhood name.
    #[must_use]
    pub fn with_neighborhood(mut self, neighborhood: impl Into<String>) -> Self {
        self.neighborhood = Some(neighborhood.into());
        self
    }

    /// Builder-style method to add a cuisine tag.
    #[must_use]
    pub fn with_cuisine_tag(mut self, tag: Tag) -> Self {
        self.cuisine_tags.push(tag);
        self
    }

    /// Builder-style method to add a feature tag.
    #[must_use]
    pub fn with_feature_tag(mut self, tag: Tag) -> Self {
        self.feature_tags.push(tag);
        self
    }

    /// Builder-style method to mark the listing approved.
    #[must_use]
    pub fn approved(mut self) -> Self {
        self.approved = true;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_vendor_is_pending_and_unlocated() {
        let vendor = Vendor::new("Blackbird Pizzeria");
        assert!(!vendor.approved);
        assert!(vendor.location.is_none());
        assert!(vendor.address.is_none());
        assert_eq!(vendor.name(), "Blackbird Pizzeria");
    }

    #[test]
    fn location_carries_both_components_or_neither() {
        let located = Vendor::new("A").with_location(Coordinate::new(39.95, -75.16));
        let unlocated = Vendor::new("B");

        assert!(located.location.is_some());
        assert!(unlocated.location.is_none());
    }

    #[test]
    fn tags_iterates_cuisine_then_feature() {
        let vendor = Vendor::new("Taco Bell")
            .with_cuisine_tag(Tag::cuisine("mexican", "Mexican cuisine"))
            .with_feature_tag(Tag::feature("open late", "Open past midnight"));

        let names: Vec<&str> = vendor.tags().map(Tag::name).collect();
        assert_eq!(names, vec!["mexican", "open late"]);
    }

    #[test]
    fn vendor_ids_are_unique() {
        assert_ne!(Vendor::new("A").id, Vendor::new("A").id);
    }

    #[test]
    fn vendor_round_trips_through_json() {
        let vendor = Vendor::new("Vedge")
            .with_address("1221 Locust St")
            .with_location(Coordinate::new(39.9479, -75.1625))
            .with_neighborhood("Washington Square West")
            .approved();

        let json = serde_json::to_string(&vendor).unwrap();
        let back: Vendor = serde_json::from_str(&json).unwrap();
        assert_eq!(back, vendor);
    }

    #[test]
    fn tag_kinds_serialize_lowercase() {
        let tag = Tag::feature("vegan", "Fully vegan menu");
        let json = serde_json::to_string(&tag).unwrap();
        assert!(json.contains("\"kind\":\"feature\""));
    }
}
