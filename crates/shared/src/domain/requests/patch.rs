use serde::{Deserialize, Deserializer, Serialize, Serializer};
use validator::ValidationError;

/// Field of a partial update.
///
/// A key missing from the request body deserialises as [`Patch::Absent`]
/// (leave the column unchanged), an explicit `null` as [`Patch::Null`]
/// (clear the column) and anything else as [`Patch::Value`]. Fields must be
/// annotated with `#[serde(default)]` for the missing-key case to work.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Patch<T> {
    #[default]
    Absent,
    Null,
    Value(T),
}

impl<T> Patch<T> {
    pub fn is_absent(&self) -> bool {
        matches!(self, Patch::Absent)
    }

    pub fn as_ref(&self) -> Patch<&T> {
        match self {
            Patch::Absent => Patch::Absent,
            Patch::Null => Patch::Null,
            Patch::Value(v) => Patch::Value(v),
        }
    }

    /// `None` when absent, `Some(None)` to clear, `Some(Some(v))` to set.
    pub fn into_change(self) -> Option<Option<T>> {
        match self {
            Patch::Absent => None,
            Patch::Null => Some(None),
            Patch::Value(v) => Some(Some(v)),
        }
    }

    /// The new value for a NOT NULL column; `Null` is treated as absent.
    pub fn into_value(self) -> Option<T> {
        match self {
            Patch::Value(v) => Some(v),
            Patch::Absent | Patch::Null => None,
        }
    }

    pub fn apply_to(self, target: &mut Option<T>) {
        if let Some(change) = self.into_change() {
            *target = change;
        }
    }
}

impl<T> From<Option<T>> for Patch<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(v) => Patch::Value(v),
            None => Patch::Null,
        }
    }
}

impl<'de, T> Deserialize<'de> for Patch<T>
where
    T: Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Option::<T>::deserialize(deserializer).map(Patch::from)
    }
}

impl<T> Serialize for Patch<T>
where
    T: Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Patch::Value(v) => serializer.serialize_some(v),
            Patch::Absent | Patch::Null => serializer.serialize_none(),
        }
    }
}

pub fn not_null<T>(value: &Patch<T>) -> Result<(), ValidationError> {
    match value {
        Patch::Null => {
            Err(ValidationError::new("not_null").with_message("Field cannot be null".into()))
        }
        _ => Ok(()),
    }
}

pub fn required_text(value: &Patch<String>) -> Result<(), ValidationError> {
    not_null(value)?;

    match value {
        Patch::Value(v) if v.trim().is_empty() => {
            Err(ValidationError::new("length").with_message("Field cannot be empty".into()))
        }
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Debug, Deserialize)]
    struct Body {
        #[serde(default)]
        bio: Patch<String>,
    }

    fn parse(value: serde_json::Value) -> Patch<String> {
        serde_json::from_value::<Body>(value).unwrap().bio
    }

    #[test]
    fn distinguishes_missing_null_and_value() {
        assert_eq!(parse(json!({})), Patch::Absent);
        assert_eq!(parse(json!({ "bio": null })), Patch::Null);
        assert_eq!(parse(json!({ "bio": "hi" })), Patch::Value("hi".to_string()));
    }

    #[test]
    fn apply_leaves_absent_fields_alone() {
        let mut column = Some("old".to_string());

        Patch::Absent.apply_to(&mut column);
        assert_eq!(column.as_deref(), Some("old"));

        Patch::Value("new".to_string()).apply_to(&mut column);
        assert_eq!(column.as_deref(), Some("new"));

        Patch::Null.apply_to(&mut column);
        assert_eq!(column, None);
    }

    #[test]
    fn required_text_rejects_null_and_blank() {
        assert!(required_text(&Patch::Absent).is_ok());
        assert!(required_text(&Patch::Value("Intern".into())).is_ok());
        assert!(required_text(&Patch::Null).is_err());
        assert!(required_text(&Patch::Value("  ".into())).is_err());
    }
}
