use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::{null_as_empty, Identified};

/* -------------------------------------------------------------------------- */
/*                                 structures                                 */
/* -------------------------------------------------------------------------- */

/// The nine attributes of an operator. Serialised as-is it is the body of
/// `POST /api/operators`; it is also the draft behind the register form.
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug, Default)]
pub struct OperatorDetails {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub firstname: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub middlename: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub lastname: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub license_no: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub contact: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub region: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub city: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub brgy: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub street: String,
}

/// An operator as listed by `GET /api/operators` and sent back whole by
/// `PUT /api/operators/{id}`. Attributes beyond the nine form fields ride
/// along in `extra`.
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug, Default)]
pub struct Operator {
    pub id: i64,
    #[serde(flatten)]
    pub details: OperatorDetails,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Identified for Operator {
    fn id(&self) -> i64 {
        self.id
    }
}

impl Operator {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.details.firstname, self.details.lastname)
    }

    pub fn archive_prompt(&self) -> String {
        format!("Are you sure you want to archive {}?", self.full_name())
    }
}

/* -------------------------------------------------------------------------- */
/*                          form layout (field table)                         */
/* -------------------------------------------------------------------------- */

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum OperatorField {
    FirstName,
    MiddleName,
    LastName,
    LicenseNo,
    Contact,
    Region,
    City,
    Brgy,
    Street,
}

/// Form order of the operator fields, shared by the register and edit forms.
pub const OPERATOR_FIELDS: [OperatorField; 9] = [
    OperatorField::FirstName,
    OperatorField::MiddleName,
    OperatorField::LastName,
    OperatorField::LicenseNo,
    OperatorField::Contact,
    OperatorField::Region,
    OperatorField::City,
    OperatorField::Brgy,
    OperatorField::Street,
];

impl OperatorField {
    pub fn label(self) -> &'static str {
        match self {
            Self::FirstName => "First Name",
            Self::MiddleName => "Middle Name",
            Self::LastName => "Last Name",
            Self::LicenseNo => "License No",
            Self::Contact => "Contact",
            Self::Region => "Region",
            Self::City => "City",
            Self::Brgy => "Brgy",
            Self::Street => "Street",
        }
    }

    /// JSON attribute name, also used as the input `name`.
    pub fn key(self) -> &'static str {
        match self {
            Self::FirstName => "firstname",
            Self::MiddleName => "middlename",
            Self::LastName => "lastname",
            Self::LicenseNo => "license_no",
            Self::Contact => "contact",
            Self::Region => "region",
            Self::City => "city",
            Self::Brgy => "brgy",
            Self::Street => "street",
        }
    }

    /// Middle name is the only optional input.
    pub fn required(self) -> bool {
        self != Self::MiddleName
    }
}

impl OperatorDetails {
    pub fn get(&self, field: OperatorField) -> &str {
        match field {
            OperatorField::FirstName => &self.firstname,
            OperatorField::MiddleName => &self.middlename,
            OperatorField::LastName => &self.lastname,
            OperatorField::LicenseNo => &self.license_no,
            OperatorField::Contact => &self.contact,
            OperatorField::Region => &self.region,
            OperatorField::City => &self.city,
            OperatorField::Brgy => &self.brgy,
            OperatorField::Street => &self.street,
        }
    }

    pub fn set(&mut self, field: OperatorField, value: String) {
        let slot = match field {
            OperatorField::FirstName => &mut self.firstname,
            OperatorField::MiddleName => &mut self.middlename,
            OperatorField::LastName => &mut self.lastname,
            OperatorField::LicenseNo => &mut self.license_no,
            OperatorField::Contact => &mut self.contact,
            OperatorField::Region => &mut self.region,
            OperatorField::City => &mut self.city,
            OperatorField::Brgy => &mut self.brgy,
            OperatorField::Street => &mut self.street,
        };
        *slot = value;
    }

    /// Copy of `self` with one field replaced, for `UseStateHandle::set`.
    pub fn with(&self, field: OperatorField, value: String) -> Self {
        let mut next = self.clone();
        next.set(field, value);
        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn filled_draft() -> OperatorDetails {
        let mut draft = OperatorDetails::default();
        for (i, field) in OPERATOR_FIELDS.iter().enumerate() {
            draft.set(*field, format!("value-{i}"));
        }
        draft
    }

    #[test]
    fn test_payload_follows_form_order() {
        let body = serde_json::to_value(filled_draft()).unwrap();
        let object = body.as_object().unwrap();

        assert_eq!(object.len(), 9);
        for (i, field) in OPERATOR_FIELDS.iter().enumerate() {
            assert_eq!(object[field.key()], json!(format!("value-{i}")));
        }
        let keys: Vec<_> = object.keys().map(String::as_str).collect();
        assert_eq!(
            keys,
            ["firstname", "middlename", "lastname", "license_no", "contact", "region", "city", "brgy", "street"]
        );
    }

    #[test]
    fn test_update_body_is_full_record() {
        let operator = Operator { id: 7, details: filled_draft(), ..Default::default() };
        let body = serde_json::to_value(&operator).unwrap();

        assert_eq!(body["id"], json!(7));
        assert_eq!(body["license_no"], json!("value-3"));
        assert_eq!(body.as_object().unwrap().len(), 10);
    }

    #[test]
    fn test_decode_list_with_null_middlename() {
        let list: Vec<Operator> = serde_json::from_value(json!([{
            "id": 3,
            "firstname": "Juan",
            "middlename": null,
            "lastname": "Dela Cruz",
            "license_no": "N01-23-456789",
            "contact": "09171234567",
            "region": "NCR",
            "city": "Quezon City",
            "brgy": "Bagong Silangan",
            "street": "Mabini St."
        }]))
        .unwrap();

        assert_eq!(list[0].id, 3);
        assert_eq!(list[0].details.middlename, "");
        assert_eq!(list[0].full_name(), "Juan Dela Cruz");
    }

    #[test]
    fn test_edit_by_attribute_name() {
        let operator = Operator { id: 1, details: filled_draft(), ..Default::default() };
        let edited = operator.details.with(OperatorField::City, "Pasig".into());

        assert_eq!(edited.city, "Pasig");
        assert_eq!(edited.firstname, "value-0");
        assert_eq!(operator.details.city, "value-6");
    }

    #[test]
    fn test_archive_prompt_names_operator() {
        let mut operator = Operator::default();
        operator.details.firstname = "Ana".into();
        operator.details.lastname = "Reyes".into();

        assert_eq!(operator.archive_prompt(), "Are you sure you want to archive Ana Reyes?");
    }

    #[test]
    fn test_only_middlename_optional() {
        let optional: Vec<_> = OPERATOR_FIELDS.iter().filter(|f| !f.required()).collect();
        assert_eq!(optional, vec![&OperatorField::MiddleName]);
    }

    #[test]
    fn test_unknown_attributes_reach_update_body() {
        let operator: Operator = serde_json::from_value(json!({
            "id": 9,
            "firstname": "Ana",
            "lastname": "Reyes",
            "status": "active",
            "created_at": "2024-05-01"
        }))
        .unwrap();

        assert_eq!(operator.details.firstname, "Ana");
        assert!(!operator.extra.contains_key("firstname"));

        let edited = Operator { details: operator.details.with(OperatorField::City, "Pasig".into()), ..operator };
        let body = serde_json::to_value(&edited).unwrap();
        assert_eq!(body["status"], json!("active"));
        assert_eq!(body["created_at"], json!("2024-05-01"));
        assert_eq!(body["city"], json!("Pasig"));
        assert_eq!(body["id"], json!(9));
    }
}
