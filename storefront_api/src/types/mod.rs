mod meta;
pub use self::meta::{Meta, PaginatedResponse, Response};

mod order;
pub use self::order::{Order, OrderID, OrderStatus};

mod user;
pub use self::user::{User, UserID, UserRole};

mod cart;
pub use self::cart::{Cart, CartID, CartItem};

mod wishlist;
pub use self::wishlist::{Wishlist, WishlistID, WishlistItem};
