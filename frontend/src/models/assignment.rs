use serde::Serialize;

use super::{Operator, Van, VanField};

/// Body of `POST /api/assignments`. `0` means "nothing selected yet".
#[derive(Clone, Copy, PartialEq, Eq, Serialize, Debug, Default)]
pub struct AssignmentDraft {
    pub van_id: i64,
    pub operator_id: i64,
}

impl AssignmentDraft {
    pub fn is_complete(&self) -> bool {
        self.van_id != 0 && self.operator_id != 0
    }
}

/// One `<option>` of an assignment select list.
#[derive(Clone, PartialEq, Debug)]
pub struct AssignmentOption {
    pub id: i64,
    pub label: String,
}

impl From<&Operator> for AssignmentOption {
    fn from(op: &Operator) -> Self {
        Self { id: op.id, label: op.full_name() }
    }
}

impl From<&Van> for AssignmentOption {
    fn from(van: &Van) -> Self {
        Self { id: van.id, label: van.text(VanField::PlateNumber) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_default_is_unselected() {
        let draft = AssignmentDraft::default();
        assert_eq!(serde_json::to_value(draft).unwrap(), json!({ "van_id": 0, "operator_id": 0 }));
        assert!(!draft.is_complete());
    }

    #[test]
    fn test_complete_only_with_both_ids() {
        assert!(!AssignmentDraft { van_id: 3, operator_id: 0 }.is_complete());
        assert!(AssignmentDraft { van_id: 3, operator_id: 9 }.is_complete());
    }

    #[test]
    fn test_option_labels() {
        let mut op = Operator { id: 4, ..Default::default() };
        op.details.firstname = "Ana".into();
        op.details.lastname = "Reyes".into();
        let van: Van = serde_json::from_value(json!({ "id": 8, "plate_number": "NBC 1234" })).unwrap();

        assert_eq!(AssignmentOption::from(&op), AssignmentOption { id: 4, label: "Ana Reyes".into() });
        assert_eq!(AssignmentOption::from(&van).label, "NBC 1234");
    }
}
