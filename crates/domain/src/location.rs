//! Locations offered by the location selector.

/// Every location offered by the location selector, in display order.
pub const KNOWN_LOCATIONS: [&str; 38] = [
    "San Francisco",
    "New York",
    "Berlin",
    "Singapore",
    "Dubai",
    "Vienna",
    "London",
    "Tokyo",
    "Sydney",
    "Paris",
    "Seoul",
    "Geneva",
    "New Orleans",
    "Rome",
    "Houston",
    "Rishikesh",
    "Hong Kong",
    "Copenhagen",
    "Los Angeles",
    "Melbourne",
    "Toronto",
    "Cannes",
    "Amsterdam",
    "Nairobi",
    "Stockholm",
    "Prague",
    "Brussels",
    "Istanbul",
    "Chicago",
    "Zurich",
    "Bordeaux",
    "Helsinki",
    "Venice",
    "Bangalore",
    "Montreal",
    "Las Vegas",
    "Boston",
    "Bangkok",
];

/// Whether `name` is one of the [`KNOWN_LOCATIONS`].
#[must_use]
pub fn is_known_location(name: &str) -> bool {
    KNOWN_LOCATIONS.contains(&name)
}
