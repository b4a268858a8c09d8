mod thumbnails_api;
mod titles_api;
