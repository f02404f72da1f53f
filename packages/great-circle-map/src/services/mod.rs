pub mod geocoder;
pub mod geodesy;
