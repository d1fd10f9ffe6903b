mod companies;

pub use companies::{CompanyCommands, ListArgs, ShowArgs};
