pub(crate) mod ease;
pub(crate) mod interpolate;
pub(crate) mod random;
pub(crate) mod spring;
