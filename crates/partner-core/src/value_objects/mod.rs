//! Value objects - immutable types that represent domain concepts

mod role;
mod snowflake;

pub use role::{Actor, Role, RoleParseError};
pub use snowflake::{Snowflake, SnowflakeGenerator, SnowflakeParseError};
