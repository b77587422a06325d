//! Entity type definitions

pub mod frame;

pub use frame::{AssignmentFailure, FrameDocument, FRAME_FILE_SUFFIX};
