pub mod claims;
pub mod company_id;
pub mod inspect;
pub mod jwt;

pub use claims::{BusinessClaims, TokenClaims};
pub use jwt::{mint_access_token, mint_demo_token, verify_access_token, verify_claims};
