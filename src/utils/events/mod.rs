pub mod errors;
pub mod models;
pub mod pagination;
pub mod roster;

use crate::api::errors::ApiError;
use crate::api::events::models::{AddParticipant, CreateEvent, Event};
use crate::api::events::EventsApi;
use crate::api::users::models::User;
use crate::api::users::UsersApi;
use crate::validation::ValidateContent;
use futures::future::{join_all, BoxFuture};
use futures::FutureExt;
use std::collections::HashSet;
use tracing::{debug, warn};
use uuid::Uuid;

use self::errors::EventError;
use self::models::{format_schedule, EditSession, EventForm, PendingUpdate, SubmitOutcome};
use self::pagination::Pager;
use self::roster::RosterDiff;

const CREATE_FAILED: &str = "Could not create the event. Check the data.";
const UPDATE_FAILED: &str = "Could not update the event.";
const DELETE_FAILED: &str = "Could not delete the event.";

/// Owns the in-memory event and user lists, the edit form, and the
/// confirmation-gated update/delete flows. All mutation happens on one
/// task; the only concurrency is the participant sync batch, which is
/// fired in one go and settled before anything else proceeds.
pub struct EventManager {
    events_api: EventsApi,
    users_api: UsersApi,

    pub events: Vec<Event>,
    pub users: Vec<User>,
    pub available_users: Vec<User>,
    pub selected_users: Vec<User>,

    pub form: EventForm,
    pub error_message: Option<String>,

    editing: Option<EditSession>,
    pending_update: Option<PendingUpdate>,
    pending_delete: Option<usize>,

    pub available_pager: Pager,
    pub selected_pager: Pager,
}

impl EventManager {
    pub fn new(events_api: EventsApi, users_api: UsersApi, page_size: usize) -> Self {
        Self {
            events_api,
            users_api,
            events: vec![],
            users: vec![],
            available_users: vec![],
            selected_users: vec![],
            form: EventForm::default(),
            error_message: None,
            editing: None,
            pending_update: None,
            pending_delete: None,
            available_pager: Pager::new(page_size),
            selected_pager: Pager::new(page_size),
        }
    }

    /// Initial load: two independent fetches. A failed fetch leaves its
    /// list empty and is only logged.
    pub async fn load(&mut self) {
        let (users, events) = tokio::join!(self.users_api.get_users(), self.events_api.get_events());

        match users {
            Ok(users) => {
                self.users = users;
                self.available_users = self.users.clone();
                self.clamp_pages();
            }
            Err(e) => warn!("Failed to load users: {e}"),
        }

        match events {
            Ok(events) => self.events = events,
            Err(e) => warn!("Failed to load events: {e}"),
        }
    }

    pub fn is_editing(&self) -> bool {
        self.editing.is_some()
    }

    pub fn update_modal_open(&self) -> bool {
        self.pending_update.is_some()
    }

    pub fn delete_modal_open(&self) -> bool {
        self.pending_delete.is_some()
    }

    // ---- participant selection ----

    pub fn add_participant(&mut self, user_id: Uuid) {
        let Some(pos) = self.available_users.iter().position(|u| u.id == user_id) else {
            return;
        };
        let user = self.available_users.remove(pos);
        if !self.selected_users.iter().any(|u| u.id == user_id) {
            self.selected_users.push(user);
        }
        self.clamp_pages();
    }

    pub fn remove_participant(&mut self, user_id: Uuid) {
        let Some(pos) = self.selected_users.iter().position(|u| u.id == user_id) else {
            return;
        };
        let user = self.selected_users.remove(pos);
        if !self.available_users.iter().any(|u| u.id == user_id) {
            self.available_users.push(user);
            self.available_users
                .sort_by(|a, b| a.username.cmp(&b.username));
        }
        self.clamp_pages();
    }

    fn selected_ids(&self) -> HashSet<Uuid> {
        self.selected_users.iter().map(|u| u.id).collect()
    }

    // ---- schedule ----

    pub fn set_schedule(&mut self, date: &str, time: &str) -> Result<(), EventError> {
        self.error_message = None;
        if date.is_empty() || time.is_empty() {
            return Err(self.fail(EventError::InvalidInput(
                "Pick a date and a time.".to_string(),
            )));
        }
        self.form.date = date.to_string();
        self.form.time = time.to_string();
        self.form.compose_schedule();
        Ok(())
    }

    pub fn clear_schedule(&mut self) {
        self.form.clear_schedule();
    }

    // ---- create / edit ----

    /// Validation gate plus the fork between the create path (fires
    /// immediately) and the edit path (stops for confirmation). On the
    /// edit path the roster diff is computed here, once, and stored for
    /// the confirm step.
    pub async fn submit(&mut self) -> Result<SubmitOutcome, EventError> {
        self.error_message = None;

        if let Err(e) = self.form.validate_content() {
            return Err(self.fail(e.into()));
        }

        let Some(session) = &self.editing else {
            let body = CreateEvent {
                name: self.form.name.clone(),
                schedule: self.form.schedule.clone(),
                address: self.form.address.clone(),
                participants: self.selected_users.iter().map(|u| u.id).collect(),
            };
            let created = match self.events_api.create_event(body).await {
                Ok(created) => created,
                Err(e) => {
                    self.error_message = Some(CREATE_FAILED.to_string());
                    return Err(e.into());
                }
            };
            debug!("Created event {:?}", created.id);
            self.events.push(created);
            self.reset_form();
            return Ok(SubmitOutcome::Created);
        };

        let diff = RosterDiff::compute(&session.original, &self.selected_ids());
        debug!(
            "Roster diff for {}: {} to add, {} to remove",
            session.event_id,
            diff.to_add.len(),
            diff.to_remove.len()
        );
        self.pending_update = Some(PendingUpdate {
            event_id: session.event_id,
            data: self.form.as_update(),
            diff,
        });
        Ok(SubmitOutcome::ConfirmationPending)
    }

    pub fn start_edit(&mut self, index: usize) {
        let Some(event) = self.events.get(index) else {
            return;
        };
        let Some(event_id) = event.id else {
            return;
        };

        self.error_message = None;
        self.form.name = event.name.clone();
        self.form.address = event.address.clone().unwrap_or_default();
        if event.schedule.is_empty() {
            self.form.clear_schedule();
        } else {
            self.form.load_schedule(&event.schedule);
        }

        self.editing = Some(EditSession {
            event_id,
            original: roster::RosterSnapshot::of(&event.participants),
        });

        let roster_ids: HashSet<Uuid> =
            event.participants.iter().map(|p| p.user_id).collect();
        self.selected_users = self
            .users
            .iter()
            .filter(|u| roster_ids.contains(&u.id))
            .cloned()
            .collect();
        self.available_users = self
            .users
            .iter()
            .filter(|u| !roster_ids.contains(&u.id))
            .cloned()
            .collect();
        self.clamp_pages();
    }

    pub fn cancel_edit(&mut self) {
        self.editing = None;
        self.reset_form();
    }

    // ---- update confirmation ----

    pub fn close_update_modal(&mut self) {
        self.pending_update = None;
    }

    /// Replays the pending update captured at submit time: base fields
    /// first, then the participant batch fired concurrently and settled as
    /// a whole, then a list refetch. A partially failed batch leaves the
    /// base update in place and collapses into one composite message.
    pub async fn confirm_update(&mut self) -> Result<(), EventError> {
        let Some(pending) = self.pending_update.take() else {
            return Ok(());
        };

        if let Err(e) = self
            .events_api
            .update_event(pending.event_id, pending.data.clone())
            .await
        {
            self.error_message = Some(UPDATE_FAILED.to_string());
            return Err(e.into());
        }

        let api = self.events_api.clone();
        let event_id = pending.event_id;
        let mut ops: Vec<BoxFuture<'static, Result<Event, ApiError>>> = vec![];
        for &user_id in &pending.diff.to_add {
            let api = api.clone();
            ops.push(
                async move { api.add_participant(event_id, AddParticipant::new(user_id)).await }
                    .boxed(),
            );
        }
        for removal in &pending.diff.to_remove {
            let api = api.clone();
            let participant_id = removal.participant_id;
            ops.push(
                async move { api.delete_participant(event_id, participant_id).await }.boxed(),
            );
        }

        let settled = join_all(ops).await;
        let failed = settled.iter().filter(|r| r.is_err()).count();
        for e in settled.iter().filter_map(|r| r.as_ref().err()) {
            warn!("Participant sync call failed for {event_id}: {e}");
        }
        if failed > 0 {
            let err = EventError::RosterSync;
            self.error_message = Some(err.to_string());
            return Err(err);
        }

        match self.events_api.get_events().await {
            Ok(events) => self.events = events,
            Err(e) => warn!("Failed to refetch events after update: {e}"),
        }
        self.cancel_edit();
        Ok(())
    }

    // ---- delete ----

    pub fn open_delete_modal(&mut self, index: usize) {
        self.pending_delete = Some(index);
    }

    pub fn close_delete_modal(&mut self) {
        self.pending_delete = None;
    }

    /// The local entry goes away only after the server confirms. An event
    /// that never got a server id has nothing to delete; the modal just
    /// closes.
    pub async fn confirm_delete(&mut self) -> Result<(), EventError> {
        let Some(index) = self.pending_delete.take() else {
            return Ok(());
        };
        let Some(id) = self.events.get(index).and_then(|e| e.id) else {
            return Ok(());
        };

        if let Err(e) = self.events_api.delete_event(id).await {
            self.error_message = Some(DELETE_FAILED.to_string());
            return Err(e.into());
        }
        self.events.remove(index);
        Ok(())
    }

    // ---- pagination ----

    pub fn available_page_items(&self) -> &[User] {
        self.available_pager.slice(&self.available_users)
    }

    pub fn selected_page_items(&self) -> &[User] {
        self.selected_pager.slice(&self.selected_users)
    }

    pub fn available_next_page(&mut self) {
        self.available_pager.next(self.available_users.len());
    }

    pub fn available_prev_page(&mut self) {
        self.available_pager.prev();
    }

    pub fn set_available_page_size(&mut self, size: usize) {
        self.available_pager
            .set_page_size(size, self.available_users.len());
    }

    pub fn selected_next_page(&mut self) {
        self.selected_pager.next(self.selected_users.len());
    }

    pub fn selected_prev_page(&mut self) {
        self.selected_pager.prev();
    }

    pub fn set_selected_page_size(&mut self, size: usize) {
        self.selected_pager
            .set_page_size(size, self.selected_users.len());
    }

    fn clamp_pages(&mut self) {
        self.available_pager.clamp(self.available_users.len());
        self.selected_pager.clamp(self.selected_users.len());
    }

    // ---- display helpers ----

    pub fn schedule_text(&self, event: &Event) -> String {
        format_schedule(Some(&event.schedule))
    }

    pub fn participant_names(&self, event: &Event) -> String {
        let names: Vec<String> = event
            .participants
            .iter()
            .map(|p| self.user_name_by_id(p.user_id))
            .collect();
        if names.is_empty() {
            "-".to_string()
        } else {
            names.join(", ")
        }
    }

    pub fn user_name_by_id(&self, user_id: Uuid) -> String {
        self.users
            .iter()
            .find(|u| u.id == user_id)
            .map(|u| u.username.clone())
            .unwrap_or_else(|| user_id.to_string())
    }

    fn reset_form(&mut self) {
        self.form.reset();
        self.available_users = self.users.clone();
        self.selected_users.clear();
        self.error_message = None;
        self.editing = None;
        self.available_pager.reset();
        self.selected_pager.reset();
        self.clamp_pages();
    }

    fn fail(&mut self, e: EventError) -> EventError {
        self.error_message = Some(e.to_string());
        e
    }
}
