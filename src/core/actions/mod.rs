pub mod generate_mipmaps;
pub mod plan_texture_slices;
