use serde::{Deserialize, Deserializer, Serialize};

use crate::domain::UserId;

/// User record as returned by the collection endpoint.
///
/// Every field is optional on the wire; missing or `null` strings decode as empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<UserId>,
    #[serde(
        default,
        deserialize_with = "null_as_empty",
        skip_serializing_if = "String::is_empty"
    )]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub first_name: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub last_name: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub email: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub department: String,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

impl User {
    /// `name` when the server sends one, otherwise first and last name joined.
    pub fn display_name(&self) -> String {
        if !self.name.is_empty() {
            return self.name.clone();
        }
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }
}

/// Body for `POST /users` and `PUT /users/{id}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserPayload {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<UserId>,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub department: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_placeholder_style_record() {
        let user: User =
            serde_json::from_str(r#"{"id":1,"name":"Ann Lee","email":"ann@x.com","phone":"1"}"#)
                .expect("decode");
        assert_eq!(user.id, Some(UserId::new("1")));
        assert_eq!(user.display_name(), "Ann Lee");
        assert_eq!(user.department, "");
    }

    #[test]
    fn null_string_fields_decode_as_empty() {
        let users: Vec<User> = serde_json::from_str(
            r#"[{"id":1,"name":"Ann Lee","email":"ann@x.com","department":null,"firstName":null},
               {"id":2,"name":"Bo Ray","email":"bo@x.com"}]"#,
        )
        .expect("decode");
        assert_eq!(users.len(), 2);
        assert_eq!(users[0].department, "");
        assert_eq!(users[0].first_name, "");
        assert_eq!(users[0].display_name(), "Ann Lee");
    }

    #[test]
    fn display_name_falls_back_to_first_and_last() {
        let user = User {
            first_name: "Bo".into(),
            last_name: "Ray".into(),
            ..User::default()
        };
        assert_eq!(user.display_name(), "Bo Ray");
    }

    #[test]
    fn create_payload_omits_id() {
        let payload = UserPayload {
            id: None,
            first_name: "Ann".into(),
            last_name: "Lee".into(),
            email: "ann@x.com".into(),
            department: "HR".into(),
        };
        let value = serde_json::to_value(&payload).expect("encode");
        assert!(value.get("id").is_none());
        assert_eq!(value["firstName"], "Ann");
    }
}
