//! Greip API response models.

mod asn;
mod country;
mod lookup;
mod payment;
mod profanity;
mod threats;
mod validation;

pub use asn::*;
pub use country::*;
pub use lookup::*;
pub use payment::*;
pub use profanity::*;
pub use threats::*;
pub use validation::*;
