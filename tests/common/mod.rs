#![allow(dead_code)]

pub mod fields;
pub mod synthetic_image;
