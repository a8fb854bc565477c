/*!
# Core Module

Core functionality shared by the header pipeline and the batch run:
error handling, exit codes and file system helpers.
*/

pub mod errors;
pub mod fs_utils;

pub use errors::{ExemplarRole, LicenseSwapError, Result, EXIT_FAILURE, EXIT_OK, EXIT_SETUP};
pub use fs_utils::{read_text_file, trim_trailing_whitespace, write_text_file};
