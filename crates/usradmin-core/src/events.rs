use crate::error::ServiceError;
use crate::handshake::HandshakeState;
use crate::models::UserProfile;

/// Why a profile fetch was issued; decides how a failure is surfaced
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchReason {
    /// First load after the handshake
    Initial,
    /// Operator asked for a reload
    Manual,
    /// Refresh following a successful deletion
    AfterDelete,
}

/// Results of background work, delivered to the UI task in order of completion
#[derive(Debug)]
pub enum CoreEvent {
    Handshake(HandshakeState),
    ProfilesFetched {
        reason: FetchReason,
        result: Result<Vec<UserProfile>, ServiceError>,
    },
    ProfileDeleted {
        profile: UserProfile,
        result: Result<(), ServiceError>,
    },
}
