pub mod idna;
pub mod percent_encode;
pub mod text_encoding;
