pub mod load_image;
