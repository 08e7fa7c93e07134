//! Rule implementations for lingo.
//!
//! Pure functions that turn compilation results into user-facing issues.
//! Each function takes only the inputs it needs and returns a specific
//! issue type.
//!
//! ## Module Structure
//!
//! - `catalog`: Decode and entry errors of each locale
//! - `consistency`: Differences between each locale and the base locale
//! - `ignored_file`: Files in the input directory that are not catalogs

pub mod catalog;
pub mod consistency;
pub mod ignored_file;
