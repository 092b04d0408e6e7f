mod adm_user;
mod error_log;
mod serial;
