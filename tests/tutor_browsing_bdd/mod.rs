//! Support modules for the tutor browsing BDD tests.

pub(crate) mod directory;
pub(crate) mod state;

pub(crate) use directory::{StatusCode, TutorCount, TutorDirectory};
pub(crate) use state::{BrowseState, load_directory};
