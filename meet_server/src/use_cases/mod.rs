// Use cases layer: session and meeting scheduling workflows.

pub mod instant_meeting;
pub mod schedule_meeting;
pub mod session_gate;
pub mod sign_in;
pub mod sign_out;
pub mod time_format;

#[cfg(test)]
pub(crate) mod test_support;

pub use instant_meeting::{INSTANT_MEETING_MINUTES, InstantMeeting, InstantMeetingUseCase};
pub use schedule_meeting::{MeetingRequest, ScheduleMeetingUseCase, ScheduledMeeting};
pub use session_gate::ResolveSessionUseCase;
pub use sign_in::{SignInResponse, SignInUseCase};
pub use sign_out::{SignOutResponse, SignOutUseCase};
