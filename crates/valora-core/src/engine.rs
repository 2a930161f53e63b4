//! Chat session engine — owns the conversation log and request lifecycle.
//!
//! The engine is a clone-cheap handle over the live session. Exactly one
//! request may be outstanding; submissions while one is in flight are
//! rejected at this boundary, which keeps assistant replies in the order
//! their requests were accepted. The session epoch guards against late
//! results: `reset` bumps it, and an outcome tagged with an older epoch
//! is dropped instead of applied to the new session.

use std::cell::RefCell;
use std::rc::Rc;

use valora_types::{
    config::ChatConfig,
    event::ChatEvent,
    message::Message,
    session::{Session, SessionStatus},
    suggestion::Suggestion,
    ChatError,
};

use crate::classify::classify;
use crate::event_bus::EventBus;
use crate::ports::{AnalysisPort, AnalysisRequest, SuggestionPort};

/// Notice appended when the service cannot be reached
pub const UNREACHABLE_NOTICE: &str = "Error: Could not reach backend.";
/// Notice appended when the service answers with something unusable
pub const MALFORMED_NOTICE: &str = "Error: Backend returned an empty or invalid reply.";

/// The chat session engine. Cloning shares the same live session.
#[derive(Clone)]
pub struct ChatEngine {
    session: Rc<RefCell<Session>>,
    event_bus: EventBus,
    config: ChatConfig,
    request_counter: Rc<RefCell<u64>>,
}

impl ChatEngine {
    pub fn new(config: ChatConfig, event_bus: EventBus) -> Self {
        Self {
            session: Rc::new(RefCell::new(Session::new(0))),
            event_bus,
            config,
            request_counter: Rc::new(RefCell::new(0)),
        }
    }

    /// Submit user text.
    ///
    /// Returns `false` without touching anything when the text trims to
    /// empty or a request is already in flight. Otherwise appends the
    /// user message, dispatches one classified request, and applies the
    /// outcome — unless a reset replaced the session while the request
    /// was out, in which case the outcome is discarded.
    ///
    /// Async and non-blocking; a UI thread drives it via a local task.
    pub async fn submit(&self, text: &str, analysis: &dyn AnalysisPort) -> bool {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return false;
        }

        let (epoch, request_id, request) = {
            let mut session = self.session.borrow_mut();
            if session.status == SessionStatus::AwaitingResponse {
                log::debug!("submit ignored: a request is already in flight");
                return false;
            }

            let id = session.next_id();
            session.messages.push(Message::user(id, trimmed));
            session.draft.clear();
            session.suggestions_visible = false;
            session.status = SessionStatus::AwaitingResponse;

            let category = classify(trimmed);
            let request_id = self.next_request_id();
            log::debug!(
                "request {} classified as {}",
                request_id,
                category.as_token()
            );
            self.event_bus.emit(ChatEvent::SubmissionAccepted {
                request_id,
                category,
            });

            (
                session.epoch,
                request_id,
                AnalysisRequest {
                    category,
                    ticker: trimmed.to_string(),
                    persona: self.config.persona.clone(),
                    question: trimmed.to_string(),
                },
            )
        };

        // Borrow released before suspending at the network boundary; a
        // reset may replace the session while the request is out.
        let outcome = analysis.send(request).await;

        let mut session = self.session.borrow_mut();
        if session.epoch != epoch {
            log::debug!("request {} resolved after reset; dropped", request_id);
            return true;
        }

        let id = session.next_id();
        match outcome {
            Ok(reply) => {
                session.messages.push(Message::assistant(id, reply));
                self.event_bus
                    .emit(ChatEvent::ReplyReceived { request_id });
            }
            Err(err) => {
                log::warn!("request {} failed: {}", request_id, err);
                session.messages.push(Message::notice(id, failure_notice(&err)));
                self.event_bus.emit(ChatEvent::ReplyFailed {
                    request_id,
                    reason: err.to_string(),
                });
            }
        }
        session.status = SessionStatus::Idle;
        true
    }

    /// Discard the session and start a fresh one. Valid in any state; an
    /// in-flight request keeps the old epoch and its result is dropped.
    /// The caller re-triggers `load_suggestions` afterwards.
    pub fn reset(&self) {
        let mut session = self.session.borrow_mut();
        let fresh = Session::new(session.epoch + 1);
        let session_id = fresh.id.clone();
        *session = fresh;
        drop(session);
        self.event_bus.emit(ChatEvent::SessionReset { session_id });
    }

    /// Fetch the example-prompt set. Failures degrade to an empty list —
    /// suggestions are optional and never block the chat.
    pub async fn load_suggestions(&self, provider: &dyn SuggestionPort) {
        let epoch = self.session.borrow().epoch;

        let suggestions = match provider.fetch_suggestions().await {
            Ok(list) => list,
            Err(err) => {
                log::warn!("suggestion fetch failed: {}", err);
                Vec::new()
            }
        };

        let mut session = self.session.borrow_mut();
        if session.epoch != epoch {
            return;
        }
        let count = suggestions.len();
        session.suggestions = suggestions;
        self.event_bus
            .emit(ChatEvent::SuggestionsUpdated { count });
    }

    /// Update the unsent input. A non-empty draft hides the suggestion
    /// panel.
    pub fn set_draft(&self, text: impl Into<String>) {
        let mut session = self.session.borrow_mut();
        session.draft = text.into();
        if !session.draft.is_empty() {
            session.suggestions_visible = false;
        }
    }

    /// Copy a suggestion's example into the draft and hide the panel.
    /// Does not submit. Returns `false` when the index is out of range.
    pub fn apply_suggestion(&self, index: usize) -> bool {
        let mut session = self.session.borrow_mut();
        let example = match session.suggestions.get(index) {
            Some(suggestion) => suggestion.example.clone(),
            None => return false,
        };
        session.draft = example;
        session.suggestions_visible = false;
        true
    }

    // ─── Read accessors ──────────────────────────────────────

    pub fn messages(&self) -> Vec<Message> {
        self.session.borrow().messages.clone()
    }

    pub fn message_count(&self) -> usize {
        self.session.borrow().messages.len()
    }

    pub fn status(&self) -> SessionStatus {
        self.session.borrow().status
    }

    pub fn draft(&self) -> String {
        self.session.borrow().draft.clone()
    }

    pub fn suggestions(&self) -> Vec<Suggestion> {
        self.session.borrow().suggestions.clone()
    }

    pub fn suggestions_visible(&self) -> bool {
        self.session.borrow().suggestions_visible
    }

    pub fn session_id(&self) -> String {
        self.session.borrow().id.clone()
    }

    /// Full copy of the live session, for UI layers that render a frame
    /// at a time.
    pub fn snapshot(&self) -> Session {
        self.session.borrow().clone()
    }

    fn next_request_id(&self) -> u64 {
        let mut counter = self.request_counter.borrow_mut();
        *counter += 1;
        *counter
    }
}

fn failure_notice(err: &ChatError) -> &'static str {
    match err {
        ChatError::MalformedResponse(_) => MALFORMED_NOTICE,
        _ => UNREACHABLE_NOTICE,
    }
}
