use crate::domain::{Meeting, UserProfile};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthState {
    pub is_authenticated: bool,
    pub user: Option<UserProfile>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MeetingState {
    // The most recently created meeting; superseded, never merged.
    pub current_meeting: Option<Meeting>,
    // Newest first. Lives only as long as the store.
    pub meetings: Vec<Meeting>,
    pub loading: bool,
    pub error: Option<String>,
}

// Application state owned by the UI root.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AppState {
    pub auth: AuthState,
    pub meeting: MeetingState,
}

// Lifecycle of an asynchronous request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AsyncPhase<T> {
    Pending,
    Fulfilled(T),
    Rejected(String),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Action {
    SetUser(UserProfile),
    ClearUser,
    CreateMeeting(Meeting),
    ClearCurrentMeeting,
    CreateInstantMeeting(AsyncPhase<Meeting>),
    ScheduleMeeting(AsyncPhase<Meeting>),
}

pub fn reduce(state: AppState, action: Action) -> AppState {
    match action {
        Action::SetUser(_) | Action::ClearUser => AppState {
            auth: auth_reducer(state.auth, action),
            meeting: state.meeting,
        },
        _ => AppState {
            auth: state.auth,
            meeting: meeting_reducer(state.meeting, action),
        },
    }
}

pub fn auth_reducer(state: AuthState, action: Action) -> AuthState {
    match action {
        Action::SetUser(user) => AuthState {
            is_authenticated: true,
            user: Some(user),
        },
        Action::ClearUser => AuthState::default(),
        _ => state,
    }
}

pub fn meeting_reducer(mut state: MeetingState, action: Action) -> MeetingState {
    match action {
        Action::CreateMeeting(meeting) => set_current(&mut state, meeting),
        Action::ClearCurrentMeeting => state.current_meeting = None,
        Action::CreateInstantMeeting(phase) | Action::ScheduleMeeting(phase) => match phase {
            AsyncPhase::Pending => {
                state.loading = true;
                state.error = None;
            }
            AsyncPhase::Fulfilled(meeting) => {
                state.loading = false;
                set_current(&mut state, meeting);
            }
            // The previous current meeting stays on screen.
            AsyncPhase::Rejected(message) => {
                state.loading = false;
                state.error = Some(message);
            }
        },
        Action::SetUser(_) | Action::ClearUser => {}
    }
    state
}

fn set_current(state: &mut MeetingState, meeting: Meeting) {
    state.meetings.insert(0, meeting.clone());
    state.current_meeting = Some(meeting);
}

/// Owns the application state and applies actions through [`reduce`].
///
/// There is no guard against a second request while one is loading; the
/// last phase to arrive wins.
#[derive(Debug, Default)]
pub struct Store {
    state: AppState,
}

impl Store {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_state(state: AppState) -> Self {
        Self { state }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn dispatch(&mut self, action: Action) {
        tracing::debug!(?action, "dispatch");
        let state = std::mem::take(&mut self.state);
        self.state = reduce(state, action);
    }
}
