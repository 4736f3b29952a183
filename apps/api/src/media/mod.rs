// Image upload and center-crop.
// The upload directory holds exactly two fixed-name slots; see `slots`.

pub mod crop;
pub mod handlers;
pub mod slots;

pub use slots::{ImageSlots, CROPPED_SLOT, ORIGINAL_SLOT};
