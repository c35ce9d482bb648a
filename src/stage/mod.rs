pub(crate) mod event;
pub(crate) mod scenario;
pub(crate) mod session;
pub(crate) mod snapshot;
