pub mod rental_rate;
pub mod standard_replies;
pub mod tokens;
pub mod user;
