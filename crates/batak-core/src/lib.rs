pub mod glyph;
pub mod normalize;
pub mod translit;
pub mod unicode;
