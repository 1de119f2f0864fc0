//! Domain types for blogs, users, and phonebook entries

mod blog;
mod ids;
mod person;
mod user;

pub use blog::{Blog, CreateBlog, UpdateBlog};
pub use ids::{BlogId, PersonId, UserId};
pub use person::{is_phone_number, CreatePerson, Person, UpdatePerson, MIN_NAME_LEN, MIN_NUMBER_LEN};
pub use user::{CreateUser, User, UserPatch, MIN_USERNAME_LEN};
