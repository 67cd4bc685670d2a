pub mod maropitant;
pub mod metoclopramide;
