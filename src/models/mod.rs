// Data Models
pub mod dir_entry;
pub mod landing;
pub mod lazy_list;
pub mod rubber_band;
pub mod selection;
pub mod tab_state;
pub mod tab_store;

pub use dir_entry::{DirEntry, EntryMetadata, NewItem};
pub use landing::{Drive, Favorite, FavoritesPager};
pub use lazy_list::{LoadWindow, ScrollMetrics};
pub use rubber_band::{DragSelection, GridMetrics, Point, Rect};
pub use selection::{Modifiers, Selection};
pub use tab_state::{Tab, TabId};
pub use tab_store::{GoUp, TabStore};
