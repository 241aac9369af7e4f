pub mod plot;
pub mod score;
pub mod train;
