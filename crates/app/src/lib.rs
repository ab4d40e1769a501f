//! Cart persistence, services and view-model for the cinema storefront.

pub mod context;
pub mod domain;
pub mod storage;

#[cfg(test)]
mod test;
