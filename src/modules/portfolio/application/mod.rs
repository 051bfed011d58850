// Drives the admin flows in-process; the server binary has no caller for it.
#[cfg(test)]
pub mod admin_page;
pub mod domain;
pub mod portfolio_use_cases;
pub mod ports;
pub mod services;
