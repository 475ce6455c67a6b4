pub mod navbar;
pub mod toast;

pub use navbar::Navbar;
pub use toast::ToastBanner;
