mod thumbnails;
mod titles;

pub use thumbnails::ThumbnailService;
pub use titles::TitleService;
