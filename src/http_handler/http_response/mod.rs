pub mod response_common;

pub mod dashboard;
pub mod login;
pub mod ordem;
pub mod usuario;
