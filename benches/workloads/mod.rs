pub mod micro;
pub mod threadtest;
