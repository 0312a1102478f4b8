pub mod command;
pub mod registry;

/// Name of the method channel the embedding side talks to.
pub const CHANNEL_NAME: &str = "usdz_channel";

/// View type key the model viewer factory is registered under.
pub const VIEW_TYPE: &str = "USDZView";
