pub mod prelude {
    pub use super::category::Entity as Category;
    pub use super::refresh_token::Entity as RefreshToken;
    pub use super::todo::Entity as Todo;
    pub use super::user::Entity as User;
}

pub mod category;
pub mod refresh_token;
pub mod todo;
pub mod user;
