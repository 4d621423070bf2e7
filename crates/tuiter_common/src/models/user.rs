use bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AccountType {
    Personal,
    Academic,
    Professional,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MaritalStatus {
    Married,
    Single,
    Widowed,
}

// All fields optional so the same struct serves projections, create bodies,
// and partial-update bodies
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_photo: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub header_image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub biography: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_of_birth: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_type: Option<AccountType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub marital_status: Option<MaritalStatus>,
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn unset_fields_are_skipped() {
        let user = User {
            username: Some(String::from("alice")),
            email: Some(String::from("alice@tuiter.com")),
            ..Default::default()
        };
        let value = serde_json::to_value(&user).unwrap();
        let map = value.as_object().unwrap();
        assert_eq!(map.len(), 2);
        assert_eq!(map["username"], "alice");
        assert_eq!(map["email"], "alice@tuiter.com");
    }

    #[test]
    fn account_type_uses_wire_names() {
        let value = serde_json::to_value(AccountType::Personal).unwrap();
        assert_eq!(value, "PERSONAL");
        let status: MaritalStatus = serde_json::from_value("SINGLE".into()).unwrap();
        assert_eq!(status, MaritalStatus::Single);
    }
}
