pub use super::adm_error_log::Entity as AdmErrorLog;
pub use super::adm_user::Entity as AdmUser;
pub use super::serial_no::Entity as SerialNo;
