use kernel::id::Id;

/// Marker for consuming-application identifiers
pub struct AppMarker;

pub type AppId = Id<AppMarker>;
