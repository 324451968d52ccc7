mod header;
mod logs;
mod metrics;
mod pagination;
mod shutdown;

pub use self::header::HeaderUtil;
pub use self::logs::init_logger;
pub use self::metrics::{Labels, Method, Metrics, Status};
pub use self::pagination::{HEADER_X_TOTAL_COUNT, generate_pagination_http_headers};
pub use self::shutdown::shutdown_signal;
