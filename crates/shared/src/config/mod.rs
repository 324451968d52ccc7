mod database;
mod jwt;
mod myconfig;

pub use self::database::{ConnectionManager, ConnectionPool};
pub use self::jwt::{Claims, DEFAULT_TOKEN_VALIDITY_SECONDS, JwtConfig};
pub use self::myconfig::{Config, DEFAULT_APP_NAME};
