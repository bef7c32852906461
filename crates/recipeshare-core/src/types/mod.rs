//! Domain types shared by the client crates.

pub mod recipe;
pub mod session;
pub mod user;

pub use recipe::Recipe;
pub use session::{Credentials, Session};
pub use user::{NewUser, User, UserUpdate, UserWithRecipes};
