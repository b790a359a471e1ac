//! Pewn API model types.

mod account;
mod content;
mod hashtag;
mod media;
mod project;
mod rating;
mod release;
mod team;
mod user;

pub use account::*;
pub use content::*;
pub use hashtag::*;
pub use media::*;
pub use project::*;
pub use rating::*;
pub use release::*;
pub use team::*;
pub use user::*;
