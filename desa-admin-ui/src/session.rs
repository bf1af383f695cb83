use desa::Session;
use dioxus::prelude::*;

/// The signed-in demo session, shared through context.
#[derive(Clone, Copy)]
pub struct CurrentSession(pub Signal<Option<Session>>);

pub fn use_current_session() -> Signal<Option<Session>> {
    use_context::<CurrentSession>().0
}
