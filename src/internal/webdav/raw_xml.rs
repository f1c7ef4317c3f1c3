pub mod de_helpers;
pub mod impl_multi_status;
pub mod raw_file;
