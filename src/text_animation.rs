pub mod marquee;
