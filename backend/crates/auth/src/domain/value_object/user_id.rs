use kernel::id::Id;

/// Marker for user identifiers
pub struct UserMarker;

pub type UserId = Id<UserMarker>;
