//! Shared UI components

pub mod book_card;
pub mod book_detail;
pub mod book_grid;
pub mod button;
pub mod cover_image;
pub mod cover_lightbox;
pub mod icons;
pub mod notice;
pub mod site_header;

pub use book_card::BookCard;
pub use book_detail::{BookDetailView, BuySection, RetailerList};
pub use book_grid::BookGrid;
pub use button::{Button, ButtonSize, ButtonVariant};
pub use cover_image::{resolved_cover_src, CoverImage, COVER_PLACEHOLDER};
pub use cover_lightbox::CoverLightbox;
pub use icons::{ArrowLeftIcon, BookOpenIcon, ExternalLinkIcon, PackageIcon, XIcon};
pub use notice::NoticeView;
pub use site_header::{NavItem, SiteHeader};
