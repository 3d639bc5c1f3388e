//! Adapters — concrete implementations of the hexagonal port traits, plus
//! the inbound HTTP surface.
//!
//! | Adapter       | Implements     | Connects to                 |
//! |---------------|----------------|-----------------------------|
//! | `config_file` | ConfigPort     | JSON file ($LEDBRIDGE_CONFIG) |
//! | `hardware`    | IndicatorPort  | GPIO cdev lines / sim pins  |
//! | `http`        | (inbound)      | axum `POST /set_led`        |
//! | `log_sink`    | EventSink      | `log` facade                |

pub mod config_file;
pub mod hardware;
pub mod http;
pub mod log_sink;
