pub mod auth_token;
pub mod current_business;

pub use auth_token::AuthToken;
pub use current_business::CurrentBusiness;
