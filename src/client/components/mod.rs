pub mod layout;
pub mod navbar;
pub mod notice;
pub mod page;
pub mod protected;
pub mod redirect;
pub mod text_field;

pub use layout::{AdminLayout, CustomerLayout, DonorLayout};
pub use navbar::Navbar;
pub use notice::NoticeBanner;
pub use page::Page;
pub use protected::Protected;
pub use redirect::Redirect;
pub use text_field::TextField;
