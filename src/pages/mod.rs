//! Pages

mod dashboard;
mod home;
mod login;
mod register;

pub use dashboard::Dashboard;
pub use home::Home;
pub use login::Login;
pub use register::Register;
