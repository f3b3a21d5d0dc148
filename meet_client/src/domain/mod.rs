// Domain layer: client-side meeting types and the port to the scheduling API.

pub mod api;
pub mod clock;
pub mod meeting;

pub use api::{
    ApiError, InstantMeetingReply, MeetingApi, MeetingDetails, ScheduleMeetingForm,
    ScheduleMeetingReply, SessionInfo,
};
pub use clock::{Clock, SystemClock};
pub use meeting::{Meeting, UserProfile};
