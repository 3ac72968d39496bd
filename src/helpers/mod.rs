pub mod record_helpers;
pub mod thing_helpers;
