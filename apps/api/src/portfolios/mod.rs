// Saved portfolios: persistence by opaque id, server-side rendering, and
// publishing rendered documents to object storage.

pub mod handlers;
pub mod publish;
pub mod store;
