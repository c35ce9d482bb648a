pub(crate) mod observer;
pub(crate) mod style;
