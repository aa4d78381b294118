//! Session layer around the field computer.
//!
//! Holds the current exploration parameters as immutable [`Session`] values,
//! recomputes the field on request and hands it to a [`FieldSink`]. Drawing,
//! input handling and color mapping belong to whoever implements the sink.

pub mod error;
pub mod exploration;
pub mod generation;
pub mod persistence;
pub mod point_cloud;
pub mod session;

pub use error::{PersistenceError, SessionError};
pub use exploration::{ExplorationSession, FieldSink, PendingField};
pub use generation::{Generation, GenerationCounter};
pub use persistence::{
    decode_share_token, encode_share_token, load_session, save_session, PersistedSession,
};
pub use point_cloud::{PointCloud, PointCloudSink};
pub use session::{ParamDelta, Session, SessionConfig};
