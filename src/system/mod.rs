// System Layer (권한 있는 쪽)
pub mod favorites;
pub mod filesystem;
pub mod service;

pub use favorites::FavoritesStore;
pub use filesystem::FileSystem;
pub use service::FsService;
