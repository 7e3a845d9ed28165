pub mod billboards;
pub mod categories;
pub mod colors;
pub mod products;
pub mod sizes;
pub mod stores;
