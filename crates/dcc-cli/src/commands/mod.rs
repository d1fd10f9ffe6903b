pub mod analytics;
pub mod companies;
pub mod dashboard;
pub mod dispatch;
pub mod schema;
pub mod shared;
#[cfg(test)]
pub(crate) mod testing;
