pub mod f8;
pub mod params;
pub mod rep;

pub use f8::*;
pub use rep::Fields;


// Macros
#[macro_export]
macro_rules! f8_e3 {
    ($lit:literal) => {
        $crate::core::f8::F8E3M4::from($lit as f32)
    };
}

#[macro_export]
macro_rules! f8_e4 {
    ($lit:literal) => {
        $crate::core::f8::F8E4M3::from($lit as f32)
    };
}

#[macro_export]
macro_rules! f8_e5 {
    ($lit:literal) => {
        $crate::core::f8::F8E5M2::from($lit as f32)
    };
}
