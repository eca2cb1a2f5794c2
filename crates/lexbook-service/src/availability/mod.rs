pub mod client;
pub mod draft;
pub mod types;

pub use client::AvailabilityClient;
pub use draft::{AvailabilityDraft, SlotPreview, preview};
pub use types::{AvailabilityException, Branch, NewException, WeeklySlotRequest};
