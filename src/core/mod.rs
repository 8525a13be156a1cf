pub mod actions;
pub mod data;
pub mod filtering;
pub mod ports;
pub mod redraw;
pub mod scheduling;
