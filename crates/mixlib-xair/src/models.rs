//! X-Air / X32 model definitions.
//!
//! Each supported console is described by an [`XAirModel`] struct capturing
//! its channel complement and the UDP port its OSC server listens on. The
//! set of models is closed: every console running the X-Air or X32 firmware
//! is one of these four configurations, so there is no unknown-model runtime
//! condition.
//!
//! Models are defined as factory functions (e.g. [`xair_16()`]) that return
//! a fully populated [`XAirModel`]:
//!
//! | Model | Channels | Aux buses | Mute groups | OSC port |
//! |-------|----------|-----------|-------------|----------|
//! | XR12  | 12       | 2         | 4           | 10024    |
//! | XR16  | 16       | 4         | 4           | 10024    |
//! | XR18  | 18       | 6         | 4           | 10024    |
//! | X32   | 32       | 14        | 6           | 10023    |
//!
//! The X-Air rack mixers share port 10024; the full-size X32 listens on
//! 10023.

/// Static model definition for an X-Air or X32 console.
///
/// Immutable; one model is selected at construction time and describes the
/// console for the lifetime of the controller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XAirModel {
    /// Human-readable model name (e.g. "XR18").
    pub name: &'static str,
    /// Number of input channels (`/ch/01` .. `/ch/NN`).
    pub channel_count: u16,
    /// Number of auxiliary bus outputs.
    pub aux_bus_count: u16,
    /// Number of mute groups (`/config/mute/1` .. `/config/mute/N`).
    pub mute_group_count: u16,
    /// UDP port the console's OSC server listens on.
    pub remote_port: u16,
}

/// XR12 model definition.
///
/// The smallest X-Air rack mixer: 12 input channels, 2 aux buses.
pub fn xair_12() -> XAirModel {
    XAirModel {
        name: "XR12",
        channel_count: 12,
        aux_bus_count: 2,
        mute_group_count: 4,
        remote_port: 10024,
    }
}

/// XR16 model definition.
pub fn xair_16() -> XAirModel {
    XAirModel {
        name: "XR16",
        channel_count: 16,
        aux_bus_count: 4,
        mute_group_count: 4,
        remote_port: 10024,
    }
}

/// XR18 model definition.
///
/// The most common X-Air variant: 18 input channels (16 mic/line plus the
/// stereo USB return), 6 aux buses.
pub fn xair_18() -> XAirModel {
    XAirModel {
        name: "XR18",
        channel_count: 18,
        aux_bus_count: 6,
        mute_group_count: 4,
        remote_port: 10024,
    }
}

/// X32 model definition.
///
/// The full-size console: 32 input channels, 14 mix buses, and a different
/// OSC port (10023) than the X-Air family.
pub fn x32() -> XAirModel {
    XAirModel {
        name: "X32",
        channel_count: 32,
        aux_bus_count: 14,
        mute_group_count: 6,
        remote_port: 10023,
    }
}

/// All supported console models.
pub fn all_models() -> Vec<XAirModel> {
    vec![xair_12(), xair_16(), xair_18(), x32()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn xair_family_shares_port() {
        assert_eq!(xair_12().remote_port, 10024);
        assert_eq!(xair_16().remote_port, 10024);
        assert_eq!(xair_18().remote_port, 10024);
    }

    #[test]
    fn x32_uses_own_port() {
        assert_eq!(x32().remote_port, 10023);
    }

    #[test]
    fn channel_counts() {
        assert_eq!(xair_12().channel_count, 12);
        assert_eq!(xair_16().channel_count, 16);
        assert_eq!(xair_18().channel_count, 18);
        assert_eq!(x32().channel_count, 32);
    }

    #[test]
    fn aux_bus_counts() {
        assert_eq!(xair_12().aux_bus_count, 2);
        assert_eq!(xair_16().aux_bus_count, 4);
        assert_eq!(xair_18().aux_bus_count, 6);
        assert_eq!(x32().aux_bus_count, 14);
    }

    #[test]
    fn all_models_nonzero_channels() {
        let models = all_models();
        assert_eq!(models.len(), 4);
        for model in &models {
            assert!(model.channel_count > 0, "{} has no channels", model.name);
            assert!(model.mute_group_count > 0);
        }
    }
}
