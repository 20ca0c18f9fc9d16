//! Backend API calls

mod account;

pub use account::AccountApi;
pub use account::EmailResponse;
pub use account::UpdatePasswordRequest;
