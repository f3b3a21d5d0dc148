// Domain layer: meeting scheduling types, errors and ports.

pub mod entities;
pub mod errors;
pub mod ports;

pub use entities::{
    CreatedEvent, EventTime, EventWindow, MeetingDetails, NewCalendarEvent, Session, UserProfile,
};
pub use errors::{AuthError, ScheduleError};
pub use ports::{CalendarProvider, Clock, IdentityProvider, ProviderError, SessionStore};
