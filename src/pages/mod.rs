//! Page components for the Ecosystem Directory.

mod listing;

pub use listing::ListingPage;
