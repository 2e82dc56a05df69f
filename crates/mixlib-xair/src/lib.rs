//! mixlib-xair: Behringer X-Air / X32 OSC driver.
//!
//! The X-Air family (XR12/XR16/XR18) and the X32 speak the same OSC-over-UDP
//! control protocol: parameters are addressed by hierarchical path strings
//! (`/ch/07/mix/fader`), a message with no arguments queries the parameter,
//! and a message with one argument sets it. Replies reuse the request's
//! address -- there is no request ticket, no delivery guarantee, and no
//! ordering guarantee, so the driver correlates replies purely by address
//! pattern and arrival order.
//!
//! The driver is deliberately synchronous in shape: one request is
//! outstanding at a time, and "waiting for a reply" is a fixed settling
//! delay followed by a drain of every datagram that arrived in the window.
//! This mirrors how the consoles actually behave on a LAN and avoids the
//! ambiguous-reply problem that overlapping identical requests would cause.
//!
//! # Example
//!
//! ```no_run
//! use mixlib_xair::builder::XAirBuilder;
//! use mixlib_xair::models::xair_18;
//!
//! # async fn example() -> mixlib_core::Result<()> {
//! let mut console = XAirBuilder::new(xair_18())
//!     .remote_ip("192.168.1.40".parse().unwrap())
//!     .build()
//!     .await?;
//!
//! console.initialize().await;
//! println!("ch 1 is {:?}", console.channel_name(1));
//! println!("ch 1 fader at {}", console.get_fader(1).await);
//! # Ok(())
//! # }
//! ```

pub mod address;
pub mod builder;
pub mod console;
pub mod dispatch;
pub mod models;
pub mod protocol;
pub mod state;

pub use builder::XAirBuilder;
pub use console::XAirConsole;
pub use models::XAirModel;
pub use state::TapeStatus;
