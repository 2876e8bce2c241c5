//! Small helpers shared by the service layer.

pub mod confirmation_code;
pub mod password;
