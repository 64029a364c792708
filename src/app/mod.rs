pub mod folder;
pub mod interactive;
pub mod scan_once;
pub mod sessions;

pub use sessions::SessionStore;
