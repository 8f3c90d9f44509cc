use eventos::modules::Modules;
use nanoid::nanoid;
use serde_json::{json, Value};
use uuid::Uuid;
use wiremock::MockServer;

pub struct AppData {
    pub server: MockServer,
    pub modules: Modules,
}

impl AppData {
    pub async fn new() -> Self {
        let server = MockServer::start().await;
        let session_file =
            std::env::temp_dir().join(format!("eventos-test-session-{}.json", nanoid!()));
        let modules = Modules::use_custom(&server.uri(), session_file, 5);
        Self { server, modules }
    }

    pub async fn request_count(&self) -> usize {
        self.server
            .received_requests()
            .await
            .map(|reqs| reqs.len())
            .unwrap_or(0)
    }
}

pub fn user_json(id: Uuid, username: &str) -> Value {
    json!({
        "_id": id.to_string(),
        "username": username,
        "gmail": format!("{}@example.com", username.to_lowercase()),
        "eventos": [],
    })
}

pub fn subdoc_json(participant_id: Uuid, user_id: Uuid) -> Value {
    json!({
        "_id": participant_id.to_string(),
        "usuario": user_id.to_string(),
    })
}

pub fn event_json(id: Uuid, name: &str, participants: Vec<Value>) -> Value {
    json!({
        "_id": id.to_string(),
        "name": name,
        "schedule": "2023-03-07 19:00",
        "address": "Calle Mayor 1",
        "participantes": participants,
    })
}
