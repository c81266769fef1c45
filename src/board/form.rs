use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FormError {
    #[error("{0} must not be empty")]
    MissingField(&'static str),
    #[error("people must be a positive whole number, got {0:?}")]
    InvalidPeople(String),
}

/// Validated form input, ready for `ProjectStore::add_project`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewProject {
    pub title: String,
    pub description: String,
    pub people: u32,
}

pub fn validate_submission(
    title: &str,
    description: &str,
    people: &str,
) -> Result<NewProject, FormError> {
    for (field, value) in [("title", title), ("description", description), ("people", people)] {
        if value.trim().is_empty() {
            return Err(FormError::MissingField(field));
        }
    }

    let people = match people.trim().parse::<u32>() {
        Ok(count) if count > 0 => count,
        _ => return Err(FormError::InvalidPeople(people.to_string())),
    };

    Ok(NewProject {
        title: title.to_string(),
        description: description.to_string(),
        people,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_complete_input() {
        let input = validate_submission("A", "d", " 3 ").unwrap();
        assert_eq!(
            input,
            NewProject {
                title: "A".into(),
                description: "d".into(),
                people: 3,
            }
        );
    }

    #[test]
    fn rejects_blank_fields() {
        assert_eq!(validate_submission("  ", "d", "1"), Err(FormError::MissingField("title")));
        assert_eq!(
            validate_submission("A", "", "1"),
            Err(FormError::MissingField("description"))
        );
        assert_eq!(validate_submission("A", "d", "\t"), Err(FormError::MissingField("people")));
    }

    #[test]
    fn rejects_non_positive_people() {
        assert_eq!(validate_submission("A", "d", "0"), Err(FormError::InvalidPeople("0".into())));
        assert_eq!(
            validate_submission("A", "d", "two"),
            Err(FormError::InvalidPeople("two".into()))
        );
        assert!(matches!(
            validate_submission("A", "d", "-1"),
            Err(FormError::InvalidPeople(_))
        ));
    }
}
