use serde::{Deserialize, Serialize};
use uuid::Uuid;

// Core data models

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Guest,
    Organizer,
    Speaker,
}

/// One roster entry of an event. The subdocument id (`id`) identifies the
/// entry itself and is required for removal; `user_id` references the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "ParticipantWire")]
pub struct Participant {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<Uuid>,
    #[serde(rename = "usuario")]
    pub user_id: Uuid,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,
    #[serde(rename = "nombreSnapshot", skip_serializing_if = "Option::is_none")]
    pub name_snapshot: Option<String>,
    #[serde(rename = "emailSnapshot", skip_serializing_if = "Option::is_none")]
    pub email_snapshot: Option<String>,
}

impl Participant {
    pub fn new(user_id: Uuid) -> Self {
        Self {
            id: None,
            user_id,
            role: None,
            name_snapshot: None,
            email_snapshot: None,
        }
    }
}

/// The wire tolerates three roster entry shapes: a bare user id, a full
/// subdocument, and a subdocument carrying only its own id. All of them
/// fold into [`Participant`] here so nothing downstream branches on shape.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ParticipantWire {
    UserId(Uuid),
    Subdoc {
        #[serde(rename = "_id")]
        id: Option<Uuid>,
        usuario: Option<Uuid>,
        role: Option<Role>,
        #[serde(rename = "nombreSnapshot")]
        name_snapshot: Option<String>,
        #[serde(rename = "emailSnapshot")]
        email_snapshot: Option<String>,
    },
}

impl TryFrom<ParticipantWire> for Participant {
    type Error = String;

    fn try_from(wire: ParticipantWire) -> Result<Self, Self::Error> {
        match wire {
            ParticipantWire::UserId(user_id) => Ok(Participant::new(user_id)),
            ParticipantWire::Subdoc {
                id,
                usuario,
                role,
                name_snapshot,
                email_snapshot,
            } => {
                // An id-only subdocument stands in for its own user.
                let user_id = usuario
                    .or(id)
                    .ok_or_else(|| "roster entry carries neither a user id nor an id".to_string())?;
                Ok(Participant {
                    id,
                    user_id,
                    role,
                    name_snapshot,
                    email_snapshot,
                })
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<Uuid>,
    pub name: String,
    pub schedule: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(rename = "participantes", default)]
    pub participants: Vec<Participant>,
}

// Send payloads

#[derive(Debug, Clone, Serialize)]
pub struct CreateEvent {
    pub name: String,
    pub schedule: String,
    pub address: String,
    #[serde(rename = "participantes")]
    pub participants: Vec<Uuid>,
}

#[derive(Debug, Clone, Serialize)]
pub struct UpdateEvent {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schedule: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct AddParticipant {
    #[serde(rename = "usuario")]
    pub user_id: Uuid,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,
}

impl AddParticipant {
    pub fn new(user_id: Uuid) -> Self {
        Self {
            user_id,
            role: None,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateParticipant {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,
    #[serde(rename = "nombreSnapshot", skip_serializing_if = "Option::is_none")]
    pub name_snapshot: Option<String>,
    #[serde(rename = "emailSnapshot", skip_serializing_if = "Option::is_none")]
    pub email_snapshot: Option<String>,
}

#[cfg(test)]
mod wire_tests {
    use super::*;
    use serde_json::json;
    use uuid::uuid;

    const USER: Uuid = uuid!("910e81a9-56df-4c24-965a-13eff739f469");
    const SUBDOC: Uuid = uuid!("29e40c2a-7595-42d3-98e8-9fe93ce99972");

    #[test]
    fn bare_user_id_normalizes() {
        let p: Participant = serde_json::from_value(json!(USER.to_string())).unwrap();
        assert_eq!(p, Participant::new(USER));
    }

    #[test]
    fn full_subdocument_normalizes() {
        let p: Participant = serde_json::from_value(json!({
            "_id": SUBDOC.to_string(),
            "usuario": USER.to_string(),
            "role": "speaker",
            "nombreSnapshot": "Chad",
        }))
        .unwrap();

        assert_eq!(p.id, Some(SUBDOC));
        assert_eq!(p.user_id, USER);
        assert_eq!(p.role, Some(Role::Speaker));
        assert_eq!(p.name_snapshot.as_deref(), Some("Chad"));
    }

    #[test]
    fn id_only_subdocument_stands_in_for_its_user() {
        let p: Participant =
            serde_json::from_value(json!({ "_id": SUBDOC.to_string() })).unwrap();
        assert_eq!(p.id, Some(SUBDOC));
        assert_eq!(p.user_id, SUBDOC);
    }

    #[test]
    fn empty_subdocument_is_rejected() {
        let res: Result<Participant, _> = serde_json::from_value(json!({ "role": "guest" }));
        assert!(res.is_err());
    }

    #[test]
    fn event_without_roster_defaults_to_empty() {
        let e: Event = serde_json::from_value(json!({
            "_id": SUBDOC.to_string(),
            "name": "Rustfest",
            "schedule": "2023-03-07 19:00",
        }))
        .unwrap();
        assert!(e.participants.is_empty());
        assert_eq!(e.address, None);
    }
}
