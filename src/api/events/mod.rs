pub mod models;

use crate::api::errors::ApiError;
use crate::api::{decode_json, expect_success, request_failed};
use reqwest::Client;
use uuid::Uuid;

use self::models::{AddParticipant, CreateEvent, Event, UpdateEvent, UpdateParticipant};

/// Client for the `/event` collection.
#[derive(Clone)]
pub struct EventsApi {
    client: Client,
    base_url: String,
}

impl EventsApi {
    pub fn new(client: Client, base_url: &str) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, suffix: &str) -> String {
        format!("{}/event{suffix}", self.base_url)
    }

    pub async fn get_events(&self) -> Result<Vec<Event>, ApiError> {
        let res = self
            .client
            .get(self.url(""))
            .send()
            .await
            .map_err(request_failed)?;
        decode_json(res).await
    }

    pub async fn get_event(&self, id: Uuid) -> Result<Event, ApiError> {
        let res = self
            .client
            .get(self.url(&format!("/{id}")))
            .send()
            .await
            .map_err(request_failed)?;
        decode_json(res).await
    }

    pub async fn create_event(&self, body: CreateEvent) -> Result<Event, ApiError> {
        let res = self
            .client
            .post(self.url(""))
            .json(&body)
            .send()
            .await
            .map_err(request_failed)?;
        decode_json(res).await
    }

    pub async fn update_event(&self, id: Uuid, body: UpdateEvent) -> Result<Event, ApiError> {
        let res = self
            .client
            .patch(self.url(&format!("/{id}")))
            .json(&body)
            .send()
            .await
            .map_err(request_failed)?;
        decode_json(res).await
    }

    pub async fn delete_event(&self, id: Uuid) -> Result<(), ApiError> {
        let res = self
            .client
            .delete(self.url(&format!("/{id}")))
            .send()
            .await
            .map_err(request_failed)?;
        expect_success(res).await
    }

    pub async fn add_participant(
        &self,
        event_id: Uuid,
        body: AddParticipant,
    ) -> Result<Event, ApiError> {
        let res = self
            .client
            .post(self.url(&format!("/{event_id}/participantes")))
            .json(&body)
            .send()
            .await
            .map_err(request_failed)?;
        decode_json(res).await
    }

    pub async fn update_participant(
        &self,
        event_id: Uuid,
        participant_id: Uuid,
        body: UpdateParticipant,
    ) -> Result<Event, ApiError> {
        let res = self
            .client
            .patch(self.url(&format!("/{event_id}/participantes/{participant_id}")))
            .json(&body)
            .send()
            .await
            .map_err(request_failed)?;
        decode_json(res).await
    }

    pub async fn delete_participant(
        &self,
        event_id: Uuid,
        participant_id: Uuid,
    ) -> Result<Event, ApiError> {
        let res = self
            .client
            .delete(self.url(&format!("/{event_id}/participantes/{participant_id}")))
            .send()
            .await
            .map_err(request_failed)?;
        decode_json(res).await
    }
}
