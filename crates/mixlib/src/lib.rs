//! # mixlib -- OSC Control for X-Air / X32 Digital Mixers
//!
//! `mixlib` is an asynchronous Rust library for controlling Behringer X-Air
//! rack mixers (XR12/XR16/XR18) and the X32 console over their OSC-on-UDP
//! control protocol. It is designed for show controllers, stream decks, and
//! installation automation that need to read and set console parameters
//! without running the vendor editor.
//!
//! ## Quick Start
//!
//! Add `mixlib` to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! mixlib = "0.1"
//! tokio = { version = "1", features = ["full"] }
//! ```
//!
//! Connect to a console and read a fader:
//!
//! ```no_run
//! use mixlib::xair::builder::XAirBuilder;
//! use mixlib::xair::models::xair_18;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let mut console = XAirBuilder::new(xair_18())
//!         .remote_ip("192.168.1.40".parse()?)
//!         .build()
//!         .await?;
//!
//!     console.initialize().await;
//!     let fader = console.get_fader(1).await;
//!     println!("ch 1 ({:?}) fader: {}",
//!         console.channel_name(1),
//!         fader);
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! The library is organized as a workspace of focused crates:
//!
//! | Crate                 | Purpose                                      |
//! |-----------------------|----------------------------------------------|
//! | `mixlib-core`         | `DatagramTransport` trait, `Message`, errors |
//! | `mixlib-transport`    | UDP transport implementation                 |
//! | `mixlib-xair`         | X-Air/X32 OSC driver                         |
//! | `mixlib-test-harness` | Mock transport for deterministic tests       |
//! | **`mixlib`**          | This facade crate -- re-exports everything   |
//!
//! ## Protocol model
//!
//! The consoles answer an argument-less OSC message with the parameter's
//! current value at the same address, and apply a one-argument message as a
//! write without acknowledgement. There are no delivery guarantees and no
//! request identifiers, so the driver issues one request at a time and
//! correlates replies by address pattern. Reads return the last cached
//! value when a reply is lost; writes are fire-and-forget.

pub use mixlib_core::*;

/// X-Air / X32 OSC driver.
///
/// Provides [`XAirConsole`](xair::XAirConsole) and
/// [`XAirBuilder`](xair::XAirBuilder) plus the console model table.
pub mod xair {
    pub use mixlib_xair::*;
}

/// Returns the list of all supported console models.
///
/// This is the entry point for applications that need to enumerate
/// supported consoles (e.g. for a model picker dropdown).
///
/// # Example
///
/// ```
/// for model in mixlib::supported_consoles() {
///     println!("{} ({} channels)", model.name, model.channel_count);
/// }
/// ```
pub fn supported_consoles() -> Vec<xair::models::XAirModel> {
    xair::models::all_models()
}

#[cfg(test)]
mod tests {
    #[test]
    fn supported_consoles_covers_all_models() {
        let models = super::supported_consoles();
        let names: Vec<&str> = models.iter().map(|m| m.name).collect();
        assert_eq!(names, vec!["XR12", "XR16", "XR18", "X32"]);
    }
}
