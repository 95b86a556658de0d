pub mod anim;
pub mod canvas;
pub mod draw;
pub mod math;
