pub use super::cart::Entity as Cart;
pub use super::cart_item::Entity as CartItem;
pub use super::category::Entity as Category;
pub use super::food::Entity as Food;
pub use super::revoked_token::Entity as RevokedToken;
pub use super::user::Entity as User;
