pub mod mw_admin;
pub mod mw_auth;
pub mod mw_rate_limit;
