mod common;
pub use self::common::{ListParams, Query, SortDirection};

mod order;
pub use self::order::{OrderQuery, OrderSortBy};

mod user;
pub use self::user::{UserQuery, UserSortBy};

mod cart;
pub use self::cart::CartQuery;

mod wishlist;
pub use self::wishlist::WishlistQuery;
