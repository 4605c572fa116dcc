//! Domain entities - Objects with identity and lifecycle

mod favorite;
mod restaurant;

pub use favorite::FavoriteItem;
pub use restaurant::Restaurant;
